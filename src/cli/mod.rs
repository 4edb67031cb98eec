//! Command-line interface.
//!
//! Provides:
//! - Argument definitions
//! - Dispatch of a parsed command to the library

pub mod args;
pub mod run;

pub use args::{Args, Command, LocationArg, ProfileArg};
pub use run::execute;
