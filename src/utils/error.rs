//! Error handling for texinfo conversions
//!
//! Only one condition in the input aborts a conversion: a balanced
//! argument whose delimiters never close. The other failure is the output
//! sink refusing a write. Everything else (unknown commands, missing
//! includes) is reported through [`crate::diagnostics::Diagnostics`] and
//! conversion continues.

use std::fmt;

use super::diagnostics::Diagnostic;

/// Conversion error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// A `[...]`, `|...|` or `{...}` argument reached end of input
    /// before its closing delimiter
    MalformedDelimiters {
        open: char,
        close: char,
        /// Line on which the argument started (1-indexed)
        line: usize,
        /// Source file, when known
        path: Option<String>,
    },
    /// Writing converted output failed
    IoError { message: String },
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::MalformedDelimiters {
                open,
                close,
                line,
                path,
            } => {
                if let Some(path) = path {
                    write!(f, "{}:{}: ", path, line)?;
                } else {
                    write!(f, "line {}: ", line)?;
                }
                write!(
                    f,
                    "malformed delimiters: argument opened with '{}' is never closed by '{}'",
                    open, close
                )
            }
            ConversionError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
        }
    }
}

impl std::error::Error for ConversionError {}

impl From<std::io::Error> for ConversionError {
    fn from(err: std::io::Error) -> Self {
        ConversionError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Conversion output with the diagnostics produced along the way
#[derive(Debug, Clone)]
pub struct ConversionOutput {
    /// The converted Texinfo
    pub content: String,
    /// Warnings and recoverable errors, in the order they were reported
    pub warnings: Vec<Diagnostic>,
}

impl ConversionOutput {
    pub fn with_warnings(content: String, warnings: Vec<Diagnostic>) -> Self {
        Self { content, warnings }
    }
}

// Convenience constructors for errors
impl ConversionError {
    pub fn malformed(open: char, close: char, line: usize) -> Self {
        ConversionError::MalformedDelimiters {
            open,
            close,
            line,
            path: None,
        }
    }

    /// Attach the source path to an error that does not carry one yet.
    ///
    /// Errors raised inside an included file keep the innermost path.
    pub fn in_file(self, source: &str) -> Self {
        match self {
            ConversionError::MalformedDelimiters {
                open,
                close,
                line,
                path: None,
            } if !source.is_empty() => ConversionError::MalformedDelimiters {
                open,
                close,
                line,
                path: Some(source.to_string()),
            },
            other => other,
        }
    }
}
