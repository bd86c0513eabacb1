//! Structural errors raised while reading templates and catalogue files.

use thiserror::Error;

/// A fatal structural error found while parsing a single text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A block was opened but none of its closing tags appear before the end of input.
    #[error("block opened on line {line} is never closed (expected {})", format_tags(.expected))]
    UnterminatedBlock { line: usize, expected: Vec<String> },

    /// An inline translatable literal contains a raw template delimiter.
    #[error("line {line}: translatable literal contains a template delimiter: {text:?}")]
    UnexpectedLiteralDelimiter { line: usize, text: String },

    /// An inline `trans` literal appears between catalogue entries.
    #[error("line {line}: unexpected inline translation outside of a catalogue entry")]
    UnexpectedOutput { line: usize },

    /// A `{%`, `{{` or `{#` in a catalogue file has no closer.
    #[error("line {line}: `{opener}` is never closed")]
    UnterminatedUnit { line: usize, opener: String },
}

/// A [`ParseError`] tied to the file it came from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{path}: {error}")]
pub struct FileError {
    pub path: String,
    pub error: ParseError,
}

impl FileError {
    pub fn new(path: impl Into<String>, error: ParseError) -> Self {
        Self {
            path: path.into(),
            error,
        }
    }
}

fn format_tags(names: &[String]) -> String {
    names
        .iter()
        .map(|name| format!("{{% {} %}}", name))
        .collect::<Vec<_>>()
        .join(" or ")
}
