//! Trailing `(n)` counters in filenames.
//!
//! `log.txt` becomes `log(1).txt`, which becomes `log(2).txt`, and so on.
//! Only the filename is ever inspected, so `folder(3)/log` gains its own
//! counter rather than bumping the directory's.

use std::sync::LazyLock;

use regex::Regex;

use super::join::append;
use super::segment::{filename_of, split_extension};
use super::style::{classify, PlatformProfile};

/// `(`, optional spaces, ASCII digits, optional spaces, `)` at the very end.
static COUNTER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\( *([0-9]+) *\)$").expect("counter pattern is valid"));

/// A numeric counter found at the end of a basename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterToken {
    /// Byte offset of the opening parenthesis.
    pub start: usize,
    /// Parsed counter value.
    pub value: u64,
    /// Byte length of the space run after the closing parenthesis.
    pub trailing_spaces: usize,
}

/// Find the counter at the end of `basename`, ignoring trailing spaces.
///
/// Parentheticals that are not purely digits, and values that do not fit in
/// a `u64`, are not counters.
pub fn parse_counter(basename: &str) -> Option<CounterToken> {
    let content = basename.trim_end_matches(' ');
    let captures = COUNTER_PATTERN.captures(content)?;
    let token = captures.get(0)?;
    let value = captures.get(1)?.as_str().parse::<u64>().ok()?;

    Some(CounterToken {
        start: token.start(),
        value,
        trailing_spaces: basename.len() - content.len(),
    })
}

/// Return `path` with the counter in its filename bumped, or `(1)` added.
///
/// | path                        | result                       |
/// |-----------------------------|------------------------------|
/// | `log.txt`                   | `log(1).txt`                 |
/// | `log( 1036 ).txt`           | `log(1037).txt`              |
/// | `log(a).txt`                | `log(a)(1).txt`              |
/// | `./folder/filename.(4)`     | `./folder/filename(1).(4)`   |
/// | `./folder(1)/filename`      | `./folder(1)/filename(1)`    |
/// | `./folder/filename(1) .txt` | `./folder/filename(2) .txt`  |
pub fn filename_increment(path: &str, profile: PlatformProfile) -> String {
    let style = classify(path, profile);
    let filename = filename_of(path, style);
    let directory = &path[..path.len() - filename.len()];

    append(directory, &increment_filename(filename), profile)
}

fn increment_filename(filename: &str) -> String {
    let (basename, extension) = split_extension(filename);
    let content = basename.trim_end_matches(' ');
    let trailing = &basename[content.len()..];

    let mut incremented = String::with_capacity(filename.len() + 3);
    let next = parse_counter(basename)
        .and_then(|token| token.value.checked_add(1).map(|next| (token.start, next)));

    match next {
        Some((start, next)) => {
            tracing::trace!("Bumping counter in '{}' to {}", filename, next);
            incremented.push_str(&content[..start]);
            incremented.push_str(&format!("({})", next));
        }
        None => {
            incremented.push_str(content);
            incremented.push_str("(1)");
        }
    }

    incremented.push_str(trailing);
    if let Some(extension) = extension {
        incremented.push('.');
        incremented.push_str(extension);
    }
    incremented
}
