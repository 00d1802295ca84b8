//! JSON rendering to the standard streams.
//!
//! Compact single-line JSON by default; `--pretty` switches to two-space
//! indentation on stdout and a colored human-readable line on stderr.

use colored::Colorize;
use serde_json::{json, Value};

use crate::error::Result;

/// Render a value as newline-terminated JSON.
pub fn render(value: &Value, pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(format!("{rendered}\n"))
}

/// Render an error message: a colored line in pretty mode, an
/// `{"error": message}` object otherwise.
pub fn render_error(message: &str, pretty: bool) -> String {
    if pretty {
        format!("{}\n", format!("Error: {message}").red())
    } else {
        format!("{}\n", json!({ "error": message }))
    }
}

/// Write a value to stdout.
pub fn format_output(value: &Value, pretty: bool) -> Result<()> {
    print!("{}", render(value, pretty)?);
    Ok(())
}

/// Write an error to stderr.
pub fn format_error(message: &str, pretty: bool) {
    eprint!("{}", render_error(message, pretty));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_output_is_single_line() {
        let out = render(&json!({"a": 1}), false).unwrap();
        assert_eq!(out, "{\"a\":1}\n");
        assert!(!out.contains("\n  "));
    }

    #[test]
    fn test_pretty_output_is_indented() {
        let out = render(&json!({"a": 1}), true).unwrap();
        assert!(out.contains("\n  \"a\": 1"));
        assert!(out.ends_with('\n'));
    }

    #[test]
    fn test_plain_error_is_json_object() {
        let out = render_error("boom", false);
        assert_eq!(out, "{\"error\":\"boom\"}\n");
    }

    #[test]
    fn test_pretty_error_is_human_readable() {
        let out = render_error("boom", true);
        assert!(out.contains("Error: boom"));
        assert!(out.ends_with('\n'));
    }
}
