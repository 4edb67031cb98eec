//! Path classification, decomposition and filename synthesis.
//!
//! Provides:
//! - Style classification and predicates (`classify`, `is_root`, `is_unc`, ...)
//! - Segmenting into root, parent, filename, basename and extension
//! - Style-aware joining
//! - Filename counters (`log.txt` -> `log(1).txt`)
//!
//! Every function here is pure and total: malformed input yields a
//! deterministic string, and "not found" is an empty string.

pub mod counter;
pub mod join;
pub mod segment;
pub mod style;

pub use counter::{filename_increment, parse_counter, CounterToken};
pub use join::{append, append2};
pub use segment::{
    find_basename, find_extension, find_filename, find_parent, find_root, split, ExtensionFlags,
    Segments,
};
pub use style::{
    classify, is_root, is_unc, is_unc_style, is_unix_style, is_url, is_win_long_path,
    is_win_style, Classification, PathStyle, PlatformProfile,
};
