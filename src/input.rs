//! Loading candidate boards from files or stdin.
//!
//! Text grids are converted to the same JSON shape as JSON input, so every
//! shape problem is classified by the verifier rather than rejected here.

use derive_more::{Display, Error};
use serde_json::Value;
use std::io::Read;
use std::path::Path;
use tracing::{debug, instrument};

/// Format of a board document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum InputFormat {
    /// JSON when the document looks like JSON, text grid otherwise.
    #[default]
    Auto,
    /// A JSON value, usually an array of arrays of strings.
    Json,
    /// One row per line; cells separated by whitespace or one character each.
    Text,
}

/// Error reading or decoding a board document.
#[derive(Debug, Clone, Display, Error)]
#[display("Input error: {} at {}:{}", message, file, line)]
pub struct InputError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl InputError {
    /// Creates a new input error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Reads a board document from a file.
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn read_board_file(path: impl AsRef<Path>, format: InputFormat) -> Result<Value, InputError> {
    let content = std::fs::read_to_string(path.as_ref())
        .map_err(|e| InputError::new(format!("Failed to read board file: {}", e)))?;
    parse_board(&content, format)
}

/// Reads a board document from any reader (stdin in the CLI).
#[instrument(skip(reader))]
pub fn read_board<R: Read>(mut reader: R, format: InputFormat) -> Result<Value, InputError> {
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .map_err(|e| InputError::new(format!("Failed to read board: {}", e)))?;
    parse_board(&content, format)
}

/// Decodes a board document.
#[instrument(skip(content))]
pub fn parse_board(content: &str, format: InputFormat) -> Result<Value, InputError> {
    let format = match format {
        InputFormat::Auto => detect_format(content),
        other => other,
    };
    debug!(?format, "Decoding board document");

    match format {
        InputFormat::Json => serde_json::from_str(content)
            .map_err(|e| InputError::new(format!("Failed to parse board JSON: {}", e))),
        InputFormat::Text | InputFormat::Auto => Ok(parse_text_grid(content)),
    }
}

/// Converts a text grid into rows of symbol strings.
///
/// Blank lines are skipped. A line containing whitespace is split on it;
/// otherwise each character is one cell.
#[instrument(skip(content))]
pub fn parse_text_grid(content: &str) -> Value {
    let rows = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            let cells: Vec<Value> = if line.contains(char::is_whitespace) {
                line.split_whitespace()
                    .map(|cell| Value::String(cell.to_string()))
                    .collect()
            } else {
                line.chars().map(|c| Value::String(c.to_string())).collect()
            };
            Value::Array(cells)
        })
        .collect();
    Value::Array(rows)
}

fn detect_format(content: &str) -> InputFormat {
    match content.trim_start().chars().next() {
        Some('[' | '{' | '"') => InputFormat::Json,
        _ => InputFormat::Text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_compact_text_grid() {
        assert_eq!(
            parse_text_grid("XO-\n-X-\n--O\n"),
            json!([["X", "O", "-"], ["-", "X", "-"], ["-", "-", "O"]])
        );
    }

    #[test]
    fn test_spaced_text_grid_skips_blank_lines() {
        assert_eq!(
            parse_text_grid("\n  X O \n\n O X\n"),
            json!([["X", "O"], ["O", "X"]])
        );
    }

    #[test]
    fn test_empty_text_is_empty_board() {
        assert_eq!(parse_text_grid("   \n"), json!([]));
    }

    #[test]
    fn test_auto_detects_json() {
        let value = parse_board(" [[\"X\"]]", InputFormat::Auto).unwrap();
        assert_eq!(value, json!([["X"]]));
        let value = parse_board("\"X\"", InputFormat::Auto).unwrap();
        assert_eq!(value, json!("X"));
    }

    #[test]
    fn test_auto_falls_back_to_text() {
        let value = parse_board("X-\n-O", InputFormat::Auto).unwrap();
        assert_eq!(value, json!([["X", "-"], ["-", "O"]]));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let err = parse_board("[[\"X\"", InputFormat::Json).unwrap_err();
        assert!(err.message.contains("Failed to parse board JSON"));
    }

    #[test]
    fn test_forced_text_keeps_brackets_as_cells() {
        let value = parse_board("[]", InputFormat::Text).unwrap();
        assert_eq!(value, json!([["[", "]"]]));
    }

    #[test]
    fn test_read_board_from_reader() {
        let value = read_board("X O\nO X\n".as_bytes(), InputFormat::Auto).unwrap();
        assert_eq!(value, json!([["X", "O"], ["O", "X"]]));
    }
}
