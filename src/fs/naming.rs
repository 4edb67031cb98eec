//! Filename legalization.

/// Characters no filename may contain on the strictest platform.
const ILLEGAL_CHARS: &[char] = &['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

/// Device names Windows reserves regardless of extension.
const RESERVED_NAMES: &[&str] = &[
    "con", "prn", "aux", "nul", "com1", "com2", "com3", "com4", "com5", "com6", "com7", "com8",
    "com9", "lpt1", "lpt2", "lpt3", "lpt4", "lpt5", "lpt6", "lpt7", "lpt8", "lpt9",
];

/// Whether `c` may not appear in a filename.
pub fn is_illegal_char(c: char) -> bool {
    ILLEGAL_CHARS.contains(&c) || c.is_ascii_control()
}

/// Whether the part of `filename` before its first dot is a reserved device
/// name, compared case-insensitively.
pub fn is_reserved_name(filename: &str) -> bool {
    let stem = filename.split_once('.').map_or(filename, |(stem, _)| stem);
    RESERVED_NAMES
        .iter()
        .any(|reserved| stem.eq_ignore_ascii_case(reserved))
}

/// Make a bare filename legal on every platform.
///
/// Illegal characters are replaced with `substitute` (itself stripped of
/// illegal characters), then a reserved device name gets a `_` prefix:
///
/// - `nul` -> `_nul`
/// - `read/me.txt` -> `readme.txt`
/// - `readme.?txt` with `"."` -> `readme..txt`
///
/// `filename` must not be a path; separators are treated as illegal
/// characters. Applying this twice gives the same result as applying it once.
pub fn filename_trim(filename: &str, substitute: &str) -> String {
    let substitute: String = substitute.chars().filter(|&c| !is_illegal_char(c)).collect();

    let mut trimmed = String::with_capacity(filename.len() + 1);
    for c in filename.chars() {
        if is_illegal_char(c) {
            trimmed.push_str(&substitute);
        } else {
            trimmed.push(c);
        }
    }

    if is_reserved_name(&trimmed) {
        trimmed.insert(0, '_');
    }

    if trimmed != filename {
        tracing::trace!("Legalized filename '{}' -> '{}'", filename, trimmed);
    }

    trimmed
}

/// [`filename_trim`] with illegal characters deleted.
pub fn filename_trim_default(filename: &str) -> String {
    filename_trim(filename, "")
}
