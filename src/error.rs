//! Error types for tipcheck

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for tipcheck
#[derive(Debug, Error)]
pub enum TipcheckError {
    #[error("Malformed front matter{}: {reason}", line_suffix(.line))]
    MalformedFrontMatter {
        line: Option<usize>,
        reason: String,
    },

    #[error("Missing required field: {0}")]
    MissingRequiredField(String),

    #[error("Type mismatch on field '{field}': expected {expected}, found '{value}'")]
    TypeMismatch {
        field: String,
        value: String,
        expected: String,
    },

    #[error("{}: Duplicate {key} '{value}' (first seen in {})", .second.display(), .first.display())]
    DuplicateKey {
        key: String,
        value: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("{}: {source}", .path.display())]
    InFile {
        path: PathBuf,
        #[source]
        source: Box<TipcheckError>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Logging error: {0}")]
    Logging(String),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

fn line_suffix(line: &Option<usize>) -> String {
    match line {
        Some(n) => format!(" at line {}", n),
        None => String::new(),
    }
}

impl TipcheckError {
    /// Shorthand for a malformed-front-matter error at a known line
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        TipcheckError::MalformedFrontMatter {
            line: Some(line),
            reason: reason.into(),
        }
    }

    /// Shorthand for a type mismatch
    pub fn mismatch(field: &str, value: &str, expected: &str) -> Self {
        TipcheckError::TypeMismatch {
            field: field.to_string(),
            value: value.to_string(),
            expected: expected.to_string(),
        }
    }

    /// Attach the source file to a per-document error
    pub fn in_file(self, path: impl Into<PathBuf>) -> Self {
        match self {
            // Already attributed; duplicates carry their own paths
            e @ TipcheckError::InFile { .. } => e,
            e @ TipcheckError::DuplicateKey { .. } => e,
            other => TipcheckError::InFile {
                path: path.into(),
                source: Box::new(other),
            },
        }
    }

    /// The error with any file attribution stripped
    pub fn root_cause(&self) -> &TipcheckError {
        match self {
            TipcheckError::InFile { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self.root_cause() {
            TipcheckError::MalformedFrontMatter { .. } => 2,
            TipcheckError::MissingRequiredField(_) => 3,
            TipcheckError::TypeMismatch { .. } => 4,
            TipcheckError::DuplicateKey { .. } => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self.root_cause() {
            TipcheckError::MalformedFrontMatter { .. } => {
                format!(
                    "{}\n\n\
                    Expected layout:\n\
                    ---\n\
                    title: \"Tip of the Week #1: ...\"\n\
                    layout: tips\n\
                    published: true\n\
                    permalink: tips/1\n\
                    type: markdown\n\
                    order: \"001\"\n\
                    ---\n\
                    <markdown body>",
                    self
                )
            }
            TipcheckError::MissingRequiredField(_) => {
                format!(
                    "{}\n\n\
                    Required fields: title, layout, permalink, published, type, order",
                    self
                )
            }
            TipcheckError::TypeMismatch { field, .. } if field == "published" => {
                format!(
                    "{}\n\n\
                    Use an unquoted boolean: published: true or published: false",
                    self
                )
            }
            TipcheckError::TypeMismatch { field, .. } if field == "order" => {
                format!(
                    "{}\n\n\
                    Use a number, quoted or not: order: \"142\"",
                    self
                )
            }
            TipcheckError::DuplicateKey { key, .. } => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Every article needs its own {}\n\
                    • Run 'tipcheck list --all' to see which values are taken",
                    self, key
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using TipcheckError
pub type Result<T> = std::result::Result<T, TipcheckError>;
