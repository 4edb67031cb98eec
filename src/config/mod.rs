//! Configuration module for pathkit.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Platform profile selection
//! - Configuration validation

pub mod loader;
pub mod profile;
pub mod validation;

pub use loader::{Config, NamingConfig, OutputConfig, PathConfig};
pub use profile::ProfileSetting;
pub use validation::{validate_config, validate_substitute};
