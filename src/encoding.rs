//! Boundary conversion between external encodings and `str`.
//!
//! Path operations work on `str` only. Bytes, UTF-16 units and native OS
//! strings are converted here, at the edge.

use std::ffi::{OsStr, OsString};
use std::path::Path;

use crate::error::{Error, Result};

/// Decode UTF-8 bytes.
pub fn from_utf8(bytes: &[u8]) -> Result<String> {
    std::str::from_utf8(bytes)
        .map(str::to_owned)
        .map_err(|e| Error::Encoding(format!("Invalid UTF-8: {}", e)))
}

/// Decode UTF-8 bytes, replacing invalid sequences with U+FFFD.
pub fn from_utf8_lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Decode UTF-16 code units (a Windows wide string).
pub fn from_utf16(units: &[u16]) -> Result<String> {
    String::from_utf16(units).map_err(|e| Error::Encoding(format!("Invalid UTF-16: {}", e)))
}

/// Encode as UTF-16 code units, without a terminating nul.
pub fn to_utf16(s: &str) -> Vec<u16> {
    s.encode_utf16().collect()
}

/// Convert a native OS string.
pub fn from_native(s: &OsStr) -> Result<String> {
    s.to_str()
        .map(str::to_owned)
        .ok_or_else(|| Error::Encoding(format!("Not valid Unicode: {}", s.to_string_lossy())))
}

/// Convert to a native OS string.
pub fn to_native(s: &str) -> OsString {
    OsString::from(s)
}

/// Convert a filesystem path.
pub fn from_path(path: &Path) -> Result<String> {
    from_native(path.as_os_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_utf8() {
        assert_eq!(from_utf8("file(中文).log".as_bytes()).unwrap(), "file(中文).log");
        assert!(matches!(from_utf8(&[0x66, 0xff]), Err(Error::Encoding(_))));
    }

    #[test]
    fn test_from_utf8_lossy() {
        assert_eq!(from_utf8_lossy(&[0x61, 0xff, 0x62]), "a\u{fffd}b");
    }

    #[test]
    fn test_utf16() {
        let units = to_utf16(r"C:\文件.txt");
        assert_eq!(from_utf16(&units).unwrap(), r"C:\文件.txt");
        assert!(from_utf16(&[0xd800]).is_err());
    }

    #[test]
    fn test_native() {
        let native = to_native("/tmp/log.txt");
        assert_eq!(from_native(&native).unwrap(), "/tmp/log.txt");
        assert_eq!(from_path(Path::new("/tmp/log.txt")).unwrap(), "/tmp/log.txt");
    }

    #[cfg(unix)]
    #[test]
    fn test_from_native_rejects_invalid_unicode() {
        use std::os::unix::ffi::OsStrExt;

        let raw = OsStr::from_bytes(&[0x2f, 0x80]);
        assert!(from_native(raw).is_err());
    }
}
