//! Error types for the row parser
//!
//! Errors fall into three groups that callers are expected to branch on:
//!
//! - **Stream errors**: the input source could not be read (I/O fault,
//!   invalid UTF-8, missing file). Content never causes these.
//! - **Conversion errors**: a row factory rejected a row. The error carries
//!   the row index and the offending fields.
//! - **Misuse errors**: the parser API was driven in the wrong order
//!   (binding twice, parsing twice, parsing without a source).
//!
//! Output and task errors only come from the surrounding loaders and writers.

use crate::types::Row;
use std::path::Path;
use thiserror::Error;

/// Failure reported by a [`RowFactory`](crate::core::RowFactory)
///
/// Factories build this when a row does not match the shape or content they
/// expect. The parser attaches the row index when it turns the failure into
/// a [`ParseError::Conversion`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{cause}")]
pub struct FactoryFailure {
    /// Human-readable reason the row was rejected
    pub cause: String,
    /// Fields of the rejected row
    pub fields: Vec<String>,
}

impl FactoryFailure {
    /// Create a failure for `row`
    pub fn new(cause: impl Into<String>, row: &Row) -> Self {
        FactoryFailure {
            cause: cause.into(),
            fields: row.fields().to_vec(),
        }
    }
}

/// Main error type for the parser
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// The input source failed while being read
    ///
    /// `line` is the 1-based line being read when the fault happened.
    #[error("Stream error{}: {message}", .line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    Stream {
        /// Line number where the error occurred (if known)
        line: Option<usize>,
        /// Description of the underlying fault
        message: String,
    },

    /// A row factory rejected a row
    ///
    /// `row` is 0-based and counts only rows handed to the factory, so a
    /// discarded header row is not included.
    #[error("Row {row} could not be converted: {cause}")]
    Conversion {
        /// Index of the rejected row
        row: usize,
        /// Reason given by the factory
        cause: String,
        /// Fields of the rejected row
        fields: Vec<String>,
    },

    /// A source was bound to a parser that already has one
    #[error("A source is already bound to this parser")]
    SourceAlreadyBound,

    /// Parse was requested before any source was bound
    #[error("No source is bound to this parser")]
    NoSource,

    /// The parser has not been run yet, so there is no result to read
    #[error("Parser has not been run")]
    NotParsed,

    /// The parser already reached a terminal state
    #[error("Parser has already run to completion")]
    AlreadyParsed,

    /// Writing a dataset failed
    #[error("Output error: {message}")]
    Output {
        /// Description of the write failure
        message: String,
    },

    /// A background load task could not complete
    #[error("Load task failed: {message}")]
    Task {
        /// Description of the task failure
        message: String,
    },
}

// Conversion from io::Error to ParseError
impl From<std::io::Error> for ParseError {
    fn from(error: std::io::Error) -> Self {
        ParseError::Stream {
            line: None,
            message: error.to_string(),
        }
    }
}

// csv::Error only reaches us from the output writer
impl From<csv::Error> for ParseError {
    fn from(error: csv::Error) -> Self {
        ParseError::Output {
            message: error.to_string(),
        }
    }
}

impl ParseError {
    /// Create a Stream error for a fault while reading `line`
    pub fn stream(line: Option<usize>, error: &std::io::Error) -> Self {
        ParseError::Stream {
            line,
            message: error.to_string(),
        }
    }

    /// Create a Conversion error from a factory failure at `row`
    pub fn conversion(row: usize, failure: FactoryFailure) -> Self {
        ParseError::Conversion {
            row,
            cause: failure.cause,
            fields: failure.fields,
        }
    }

    /// Map a failure to open `path` to FileNotFound or Stream
    pub fn open_failed(path: &Path, error: &std::io::Error) -> Self {
        match error.kind() {
            std::io::ErrorKind::NotFound => ParseError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => ParseError::Stream {
                line: None,
                message: format!("Failed to open file '{}': {}", path.display(), error),
            },
        }
    }

    /// Create an Output error
    pub fn output(message: impl Into<String>) -> Self {
        ParseError::Output {
            message: message.into(),
        }
    }

    /// True for errors caused by driving the parser API incorrectly
    pub fn is_misuse(&self) -> bool {
        matches!(
            self,
            ParseError::SourceAlreadyBound
                | ParseError::NoSource
                | ParseError::NotParsed
                | ParseError::AlreadyParsed
        )
    }

    /// True when a row factory rejected the data
    pub fn is_conversion(&self) -> bool {
        matches!(self, ParseError::Conversion { .. })
    }

    /// True when the input could not be read
    pub fn is_stream(&self) -> bool {
        matches!(
            self,
            ParseError::Stream { .. } | ParseError::FileNotFound { .. }
        )
    }
}
