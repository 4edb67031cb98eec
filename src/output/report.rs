//! Rendering command results as text or JSON.

use console::style;
use serde_json::json;

use crate::error::Result;
use crate::path::{Classification, Segments};

/// The result of one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// A single string (possibly empty, meaning "absent").
    Text(String),
    /// A yes/no answer.
    Flag(bool),
    /// Every segment of a path.
    Segments(Segments),
    /// Style and predicates of a path.
    Classification(Classification),
}

impl Report {
    /// Render for the console or, with `json`, as pretty JSON.
    pub fn render(&self, json: bool) -> Result<String> {
        if json {
            let value = match self {
                Report::Text(text) => json!({ "result": text }),
                Report::Flag(flag) => json!({ "result": flag }),
                Report::Segments(segments) => serde_json::to_value(segments)?,
                Report::Classification(classification) => serde_json::to_value(classification)?,
            };
            return Ok(serde_json::to_string_pretty(&value)?);
        }

        Ok(match self {
            Report::Text(text) => text.clone(),
            Report::Flag(flag) => flag.to_string(),
            Report::Segments(segments) => [
                ("root", &segments.root),
                ("parent", &segments.parent),
                ("filename", &segments.filename),
                ("basename", &segments.basename),
                ("extension", &segments.extension),
            ]
            .iter()
            .map(|(label, value)| format!("{:<10} {}", style(format!("{}:", label)).bold(), value))
            .collect::<Vec<_>>()
            .join("\n"),
            Report::Classification(c) => {
                let mut lines = vec![format!("{:<17} {}", style("style:").bold(), c.style)];
                for (label, value) in [
                    ("is_root", c.is_root),
                    ("is_url", c.is_url),
                    ("is_unc", c.is_unc),
                    ("is_unc_style", c.is_unc_style),
                    ("is_win_style", c.is_win_style),
                    ("is_win_long_path", c.is_win_long_path),
                    ("is_unix_style", c.is_unix_style),
                ] {
                    let value = if value {
                        style("yes").green()
                    } else {
                        style("no").dim()
                    };
                    lines.push(format!("{:<17} {}", style(format!("{}:", label)).bold(), value));
                }
                lines.join("\n")
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::{split, PlatformProfile};

    #[test]
    fn test_render_text() {
        let report = Report::Text("/etc/passwd".to_string());
        assert_eq!(report.render(false).unwrap(), "/etc/passwd");
        assert_eq!(
            report.render(true).unwrap(),
            "{\n  \"result\": \"/etc/passwd\"\n}"
        );
    }

    #[test]
    fn test_render_segments_json() {
        let report = Report::Segments(split("/tmp/archive.tar.gz", PlatformProfile::Posix));
        let value: serde_json::Value = serde_json::from_str(&report.render(true).unwrap()).unwrap();

        assert_eq!(value["root"], "/");
        assert_eq!(value["parent"], "/tmp");
        assert_eq!(value["basename"], "archive");
        assert_eq!(value["extension"], "tar.gz");
    }

    #[test]
    fn test_render_classification_json() {
        let report = Report::Classification(Classification::of(r"\\?\C:\", PlatformProfile::Windows));
        let value: serde_json::Value = serde_json::from_str(&report.render(true).unwrap()).unwrap();

        assert_eq!(value["style"], "windows-long-path");
        assert_eq!(value["is_root"], true);
        assert_eq!(value["is_unc"], false);
    }

    #[test]
    fn test_render_flag() {
        assert_eq!(Report::Flag(false).render(false).unwrap(), "false");
    }
}
