//! Configuration validation logic.

use crate::config::loader::Config;
use crate::error::{Error, Result};
use crate::fs::is_illegal_char;

/// Maximum length for the filename substitute.
const MAX_SUBSTITUTE_LENGTH: usize = 16;

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_substitute(&config.naming.substitute)?;

    Ok(())
}

/// Validate the replacement used for illegal filename characters.
pub fn validate_substitute(substitute: &str) -> Result<()> {
    if substitute.chars().count() > MAX_SUBSTITUTE_LENGTH {
        return Err(Error::ConfigValidation {
            field: "naming.substitute".to_string(),
            message: format!(
                "Substitute must be at most {} characters (got {})",
                MAX_SUBSTITUTE_LENGTH,
                substitute.chars().count()
            ),
        });
    }

    if let Some(c) = substitute.chars().find(|&c| is_illegal_char(c)) {
        return Err(Error::ConfigValidation {
            field: "naming.substitute".to_string(),
            message: format!(
                "Substitute contains {:?}, which is not allowed in filenames",
                c
            ),
        });
    }

    Ok(())
}
