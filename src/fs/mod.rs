//! Filesystem-facing helpers.
//!
//! Provides:
//! - Filename legalization
//! - Well-known directory lookup

pub mod locate;
pub mod naming;

pub use locate::{home_dir, module_dir, module_path, temp_dir, Location};
pub use naming::{filename_trim, filename_trim_default, is_illegal_char, is_reserved_name};
