//! Style-aware path concatenation.

use super::style::{anchor, classify, PlatformProfile};

/// Join `stem` onto `base` with the separator of `base`'s style.
///
/// | base                  | stem              | result                           |
/// |-----------------------|-------------------|----------------------------------|
/// | `C:\`                 | `\`               | `C:\`                            |
/// | `C:\Program Files`    | `\\Folder`        | `C:\Program Files\Folder`        |
/// | `C:\Program Files`    | `Folder\\File`    | `C:\Program Files\Folder\\File`  |
/// | (empty)               | `\Folder`         | `\Folder`                        |
/// | `\\server\share`      | `folder`          | `\\server\share\folder`          |
/// | `/etc`                | `passwd`          | `/etc/passwd`                    |
/// | `https://example.com` | `index.html`      | `https://example.com/index.html` |
///
/// Leading separators of `stem` are dropped; separator runs inside `stem`
/// are kept as written. An empty stem leaves `base` unchanged, while a stem
/// made only of separators trims the trailing separators of `base` down to
/// its root.
pub fn append(base: &str, stem: &str, profile: PlatformProfile) -> String {
    if base.is_empty() {
        return stem.to_string();
    }
    if stem.is_empty() {
        return base.to_string();
    }

    let style = classify(base, profile);
    let is_sep = |c: char| style.is_separator(c);
    let stem = stem.trim_start_matches(is_sep);
    if stem.is_empty() {
        let keep = anchor(base, style).len;
        let trimmed = base[keep..].trim_end_matches(is_sep);
        return base[..keep + trimmed.len()].to_string();
    }

    let mut joined = String::with_capacity(base.len() + stem.len() + 1);
    joined.push_str(base);
    if !base.ends_with(is_sep) {
        joined.push(style.separator());
    }
    joined.push_str(stem);
    joined
}

/// Join two stems onto `base`, one after the other.
pub fn append2(base: &str, first: &str, second: &str, profile: PlatformProfile) -> String {
    append(&append(base, first, profile), second, profile)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIN: PlatformProfile = PlatformProfile::Windows;
    const POSIX: PlatformProfile = PlatformProfile::Posix;

    #[test]
    fn test_append_windows() {
        assert_eq!(append(r"C:\", r"\", WIN), r"C:\");
        assert_eq!(append(r"C:\", "Program Files", WIN), r"C:\Program Files");
        assert_eq!(append(r"C:\Program Files", "Folder", WIN), r"C:\Program Files\Folder");
        assert_eq!(append(r"C:\Program Files", r"\\Folder", WIN), r"C:\Program Files\Folder");
        assert_eq!(
            append(r"C:\Program Files", r"\\Folder\\filename", WIN),
            r"C:\Program Files\Folder\\filename"
        );
        assert_eq!(append("", r"\Folder", WIN), r"\Folder");
        assert_eq!(append(r"\\server\share", "folder", WIN), r"\\server\share\folder");
    }

    #[test]
    fn test_append_posix() {
        for profile in [POSIX, WIN] {
            assert_eq!(append("", "/etc", profile), "/etc");
            assert_eq!(append("/etc", "/", profile), "/etc");
            assert_eq!(append("/etc", "//", profile), "/etc");
            assert_eq!(append("/etc/", "//", profile), "/etc");
            assert_eq!(append("/", "/", profile), "/");
            assert_eq!(append("/etc/", "/passwd", profile), "/etc/passwd");
            assert_eq!(append("/etc/", "/config//init", profile), "/etc/config//init");
            assert_eq!(append("/etc", "passwd", profile), "/etc/passwd");
        }
    }

    #[test]
    fn test_append_empty_stem_keeps_base() {
        assert_eq!(append("/etc/", "", POSIX), "/etc/");
        assert_eq!(append("/etc", "", POSIX), "/etc");
        assert_eq!(append(r"C:\dir\", "", WIN), r"C:\dir\");
        assert_eq!(append(r"\\server\share\", "", WIN), r"\\server\share\");
        assert_eq!(append("", "", WIN), "");
    }

    #[test]
    fn test_append_url_uses_slash() {
        for profile in [POSIX, WIN] {
            assert_eq!(
                append("https://example.com", "index.html", profile),
                "https://example.com/index.html"
            );
            assert_eq!(append("https://example.com/", "/", profile), "https://example.com");
            assert_eq!(append("https://example.com/a/", "//", profile), "https://example.com/a");
            assert_eq!(append("https://example.com", "/", profile), "https://example.com");
            assert_eq!(append("https://example.com/", "", profile), "https://example.com/");
        }
    }

    #[test]
    fn test_append_posix_keeps_backslash_stems() {
        assert_eq!(append("/srv", r"\odd", POSIX), r"/srv/\odd");
    }

    #[test]
    fn test_append2() {
        assert_eq!(append2("/usr", "local", "bin", POSIX), "/usr/local/bin");
        assert_eq!(append2(r"D:\", "data", r"\logs", WIN), r"D:\data\logs");
    }
}
