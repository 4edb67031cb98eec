//! Well-known locations: home, temp and the running executable.

use directories::BaseDirs;

use crate::encoding::from_path;
use crate::error::{Error, Result};
use crate::path::{append, find_parent, PlatformProfile};

/// A directory the host can always name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// The user's home directory (`%USERPROFILE%`, `$HOME`).
    Home,
    /// The temporary directory (`%TEMP%`, `$TMPDIR`, `/tmp`).
    Temp,
    /// Directory holding the running executable.
    ExeDir,
}

impl Location {
    /// Resolve this location.
    pub fn resolve(self) -> Result<String> {
        match self {
            Location::Home => home_dir(),
            Location::Temp => temp_dir(),
            Location::ExeDir => module_dir(),
        }
    }

    /// Resolve this location and append `stem`.
    pub fn resolve_with(self, stem: &str) -> Result<String> {
        Ok(append(&self.resolve()?, stem, PlatformProfile::native()))
    }
}

/// The current user's home directory.
pub fn home_dir() -> Result<String> {
    let dirs =
        BaseDirs::new().ok_or_else(|| Error::LocationNotFound("home directory".to_string()))?;
    from_path(dirs.home_dir())
}

/// The system temporary directory.
pub fn temp_dir() -> Result<String> {
    from_path(&std::env::temp_dir())
}

/// Full path of the running executable.
pub fn module_path() -> Result<String> {
    let exe = std::env::current_exe()?;
    from_path(&exe)
}

/// Directory holding the running executable.
pub fn module_dir() -> Result<String> {
    let exe = module_path()?;
    let dir = find_parent(&exe, PlatformProfile::native());
    if dir.is_empty() {
        return Err(Error::LocationNotFound(format!(
            "no directory in executable path '{}'",
            exe
        )));
    }
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_dir() {
        let temp = temp_dir().unwrap();
        assert!(!temp.is_empty());
        assert!(std::path::Path::new(&temp).exists());

        let config = Location::Temp.resolve_with("config").unwrap();
        assert!(config.starts_with(temp.trim_end_matches(['/', '\\'])));
        assert!(config.ends_with("config"));
        assert!(config.len() > temp.len());
    }

    #[test]
    fn test_module_dir_contains_module_path() {
        let exe = module_path().unwrap();
        let dir = module_dir().unwrap();
        assert!(exe.starts_with(&dir));
        assert!(exe.len() > dir.len());
    }
}
