//! Platform profile selection.

use serde::{Deserialize, Serialize};

use crate::path::PlatformProfile;

/// Which platform's path rules to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileSetting {
    /// Follow the platform this binary was built for (default).
    #[default]
    Native,
    /// `/` only; `\` is an ordinary character.
    Posix,
    /// Drive letters, UNC shares and long paths; both `\` and `/` separate.
    Windows,
}

impl ProfileSetting {
    /// The concrete profile this setting selects.
    pub fn resolve(self) -> PlatformProfile {
        match self {
            ProfileSetting::Native => PlatformProfile::native(),
            ProfileSetting::Posix => PlatformProfile::Posix,
            ProfileSetting::Windows => PlatformProfile::Windows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve() {
        assert_eq!(ProfileSetting::Posix.resolve(), PlatformProfile::Posix);
        assert_eq!(ProfileSetting::Windows.resolve(), PlatformProfile::Windows);
        assert_eq!(ProfileSetting::Native.resolve(), PlatformProfile::native());
    }

    #[test]
    fn test_deserialize_lowercase() {
        let config: crate::config::PathConfig = toml::from_str("profile = \"windows\"").unwrap();
        assert_eq!(config.profile, ProfileSetting::Windows);
        assert!(toml::from_str::<crate::config::PathConfig>("profile = \"Windows\"").is_err());
    }
}
