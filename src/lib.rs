//! pathkit - path classification, decomposition and filename synthesis
//!
//! This library reconciles five overlapping path grammars: POSIX, Windows
//! drive-letter, Windows long-path (`\\?\`), UNC and URL.
//!
//! # Features
//!
//! - Classify a path and answer `is_root`, `is_unc`, `is_url`, ...
//! - Split a path into root, parent, filename, basename and extension
//! - Join stems with the separator the base path already uses
//! - Legalize filenames for the strictest platform
//! - Bump `(n)` counters: `log.txt` -> `log(1).txt` -> `log(2).txt`
//!
//! The platform rules are an explicit [`PlatformProfile`] rather than a
//! compile-time switch, so Windows paths can be handled on Linux and the
//! other way round.
//!
//! # Example
//!
//! ```
//! use pathkit::{append, filename_increment, find_parent, is_root, PlatformProfile};
//!
//! let win = PlatformProfile::Windows;
//! assert!(is_root(r"\\server\share", win));
//! assert_eq!(find_parent(r"C:\Program Files\app", win), r"C:\Program Files");
//! assert_eq!(append(r"C:\Program Files", r"\\app", win), r"C:\Program Files\app");
//! assert_eq!(filename_increment("./logs/run(1).txt", win), "./logs/run(2).txt");
//! ```

pub mod cli;
pub mod config;
pub mod encoding;
pub mod error;
pub mod fs;
pub mod output;
pub mod path;

// Re-exports for convenience
pub use config::Config;
pub use error::{Error, Result};
pub use fs::{filename_trim, filename_trim_default};
pub use path::{
    append, append2, classify, filename_increment, find_basename, find_extension, find_filename,
    find_parent, find_root, is_root, is_unc, is_unc_style, is_unix_style, is_url,
    is_win_long_path, is_win_style, split, ExtensionFlags, PathStyle, PlatformProfile, Segments,
};
