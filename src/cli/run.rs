//! Dispatch of parsed commands.

use crate::cli::args::Command;
use crate::config::Config;
use crate::error::Result;
use crate::fs::{filename_trim, Location};
use crate::output::Report;
use crate::path::{
    append, append2, filename_increment, find_basename, find_extension, find_filename,
    find_parent, find_root, is_root, split, Classification,
};

/// Run `command` under the settings in `config`.
pub fn execute(command: &Command, config: &Config) -> Result<Report> {
    let profile = config.profile();
    tracing::debug!("Running {:?} with {} profile", command, profile);

    let report = match command {
        Command::Classify { path } => Report::Classification(Classification::of(path, profile)),
        Command::IsRoot { path } => Report::Flag(is_root(path, profile)),
        Command::Root { path } => Report::Text(find_root(path, profile)),
        Command::Parent { path } => Report::Text(find_parent(path, profile)),
        Command::Filename { path } => Report::Text(find_filename(path, profile)),
        Command::Basename { path } => Report::Text(find_basename(path, profile)),
        Command::Extension {
            path,
            complete,
            upper,
            with_dot,
        } => {
            let flags = Command::extension_flags(*complete, *upper, *with_dot);
            Report::Text(find_extension(path, flags, profile))
        }
        Command::Split { path } => Report::Segments(split(path, profile)),
        Command::Append { base, stem, second } => Report::Text(match second {
            Some(second) => append2(base, stem, second, profile),
            None => append(base, stem, profile),
        }),
        Command::Trim {
            filename,
            substitute,
        } => {
            let substitute = substitute.as_deref().unwrap_or(&config.naming.substitute);
            Report::Text(filename_trim(filename, substitute))
        }
        Command::Increment { path } => Report::Text(filename_increment(path, profile)),
        Command::Locate { location, stem } => {
            let location = Location::from(*location);
            Report::Text(match stem {
                Some(stem) => location.resolve_with(stem)?,
                None => location.resolve()?,
            })
        }
    };

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProfileSetting;

    fn windows_config() -> Config {
        let mut config = Config::default();
        config.path.profile = ProfileSetting::Windows;
        config
    }

    #[test]
    fn test_execute_root_and_parent() {
        let config = windows_config();
        let root = Command::Root {
            path: r"\\?\UNC\server\share\folder".to_string(),
        };
        assert_eq!(
            execute(&root, &config).unwrap(),
            Report::Text(r"\\?\UNC\server\share".to_string())
        );

        let parent = Command::Parent {
            path: r"C:\Program Files\windows".to_string(),
        };
        assert_eq!(
            execute(&parent, &config).unwrap(),
            Report::Text(r"C:\Program Files".to_string())
        );
    }

    #[test]
    fn test_execute_trim_uses_configured_substitute() {
        let mut config = windows_config();
        config.naming.substitute = "_".to_string();

        let trim = Command::Trim {
            filename: "a:b".to_string(),
            substitute: None,
        };
        assert_eq!(execute(&trim, &config).unwrap(), Report::Text("a_b".to_string()));

        let trim = Command::Trim {
            filename: "a:b".to_string(),
            substitute: Some("-".to_string()),
        };
        assert_eq!(execute(&trim, &config).unwrap(), Report::Text("a-b".to_string()));
    }

    #[test]
    fn test_execute_append_two_stems() {
        let command = Command::Append {
            base: r"C:\".to_string(),
            stem: "data".to_string(),
            second: Some("logs".to_string()),
        };
        assert_eq!(
            execute(&command, &windows_config()).unwrap(),
            Report::Text(r"C:\data\logs".to_string())
        );
    }

    #[test]
    fn test_execute_is_root() {
        let command = Command::IsRoot {
            path: r"E:\folder".to_string(),
        };
        assert_eq!(execute(&command, &windows_config()).unwrap(), Report::Flag(false));
    }
}
