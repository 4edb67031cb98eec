//! Output module for console output.
//!
//! Provides:
//! - Coloured console messages
//! - Text and JSON rendering of command results

pub mod console;
pub mod report;

pub use self::console::{print_error, print_result, print_warning, set_color};
pub use report::Report;
