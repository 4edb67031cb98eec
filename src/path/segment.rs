//! Path decomposition into root, parent, filename, basename and extension.

use serde::Serialize;

use super::style::{anchor, classify, is_root, PathStyle, PlatformProfile};

bitflags::bitflags! {
    /// How [`find_extension`] reports an extension. Flags combine freely.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ExtensionFlags: u8 {
        /// `"archive.tar.gz"` -> `"tar.gz"` instead of `"gz"`.
        const COMPLETE = 1 << 0;
        /// `"archive.txt"` -> `"TXT"`.
        const UPPER_CASE = 1 << 1;
        /// `"archive.tar.gz"` -> `".gz"`.
        const WITH_DOT = 1 << 2;
    }
}

impl ExtensionFlags {
    /// Last extension, as written, without the dot.
    pub const DEFAULT: Self = Self::empty();
}

impl Default for ExtensionFlags {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Every part of a path at once.
///
/// `extension` is the complete extension, so `basename`, a dot and
/// `extension` spell out `filename` whenever the filename has a dot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Segments {
    pub root: String,
    pub parent: String,
    pub filename: String,
    pub basename: String,
    pub extension: String,
}

/// Decompose `path` into all of its segments.
pub fn split(path: &str, profile: PlatformProfile) -> Segments {
    let filename = find_filename(path, profile);
    let (basename, extension) = split_complete(&filename);

    Segments {
        root: find_root(path, profile),
        parent: find_parent(path, profile),
        basename: basename.to_string(),
        extension: extension.unwrap_or_default().to_string(),
        filename,
    }
}

/// Root of `path`: `C:\`, `\\?\C:\`, `\\server\share`,
/// `\\?\UNC\server\share` or `/`. Relative paths and URLs have no root and
/// yield an empty string.
pub fn find_root(path: &str, profile: PlatformProfile) -> String {
    let style = classify(path, profile);
    path[..anchor(path, style).root].to_string()
}

/// `path` without its last component.
///
/// A root is its own parent. The separator run in front of the last
/// component is dropped, but never the root or a leading separator. A bare
/// relative name has no parent and yields an empty string.
pub fn find_parent(path: &str, profile: PlatformProfile) -> String {
    if is_root(path, profile) {
        return path.to_string();
    }

    let style = classify(path, profile);
    let anchor = anchor(path, style);
    let is_sep = |c: char| style.is_separator(c);

    let last = match path[anchor.len..].rfind(is_sep) {
        Some(i) => anchor.len + i,
        None => return path[..anchor.len].to_string(),
    };

    let end = path[anchor.len..last].trim_end_matches(is_sep).len() + anchor.len;
    path[..end].to_string()
}

/// Last component of `path`, empty when the path ends in a separator or is
/// a root.
pub fn find_filename(path: &str, profile: PlatformProfile) -> String {
    filename_of(path, classify(path, profile)).to_string()
}

/// Filename of `path` without its complete extension:
/// `"/tmp/archive.tar.gz"` yields `"archive"`.
///
/// A leading-dot name with no other dot is all extension, so
/// `"/tmp/.archive"` yields `""`.
pub fn find_basename(path: &str, profile: PlatformProfile) -> String {
    let filename = find_filename(path, profile);
    split_complete(&filename).0.to_string()
}

/// Extension of the filename of `path`, shaped by `flags`.
///
/// An absent extension is an empty string whatever the flags.
pub fn find_extension(path: &str, flags: ExtensionFlags, profile: PlatformProfile) -> String {
    let filename = find_filename(path, profile);

    let (_, extension) = if flags.contains(ExtensionFlags::COMPLETE) {
        split_complete(&filename)
    } else {
        split_extension(&filename)
    };
    let extension = extension.unwrap_or_default();

    if extension.is_empty() {
        return String::new();
    }

    let mut result = String::with_capacity(extension.len() + 1);
    if flags.contains(ExtensionFlags::WITH_DOT) {
        result.push('.');
    }
    if flags.contains(ExtensionFlags::UPPER_CASE) {
        result.push_str(&extension.to_uppercase());
    } else {
        result.push_str(extension);
    }
    result
}

pub(crate) fn filename_of(path: &str, style: PathStyle) -> &str {
    let tail = &path[anchor(path, style).len..];
    match tail.rfind(|c: char| style.is_separator(c)) {
        Some(i) => &tail[i + 1..],
        None => tail,
    }
}

/// Split a filename at its last dot. `None` means there is no dot.
pub(crate) fn split_extension(filename: &str) -> (&str, Option<&str>) {
    if filename == "." || filename == ".." {
        return (filename, None);
    }

    match filename.rfind('.') {
        Some(i) => (&filename[..i], Some(&filename[i + 1..])),
        None => (filename, None),
    }
}

/// Split a filename at its first dot that is not the leading character. A
/// lone leading dot makes the whole remainder the extension.
pub(crate) fn split_complete(filename: &str) -> (&str, Option<&str>) {
    if filename == "." || filename == ".." {
        return (filename, None);
    }

    let skip = usize::from(filename.starts_with('.'));
    match filename[skip..].find('.') {
        Some(i) => (&filename[..skip + i], Some(&filename[skip + i + 1..])),
        None if skip == 1 => ("", Some(&filename[1..])),
        None => (filename, None),
    }
}
