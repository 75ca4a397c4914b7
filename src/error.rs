//! Error types for matrix parsing and serving.
//!
//! All validation failures are expected, client-visible conditions: the
//! caller fixes the CSV and retries. Only [`MatrixError::Io`] is treated as
//! an internal failure by the HTTP layer.

use thiserror::Error;

/// Errors produced while parsing a CSV matrix.
#[derive(Debug, Error)]
pub enum MatrixError {
    /// The input stream contained no lines at all.
    #[error("csv file is empty")]
    EmptyInput,

    /// A cell failed to parse as a base-10 32-bit integer.
    #[error("csv matrix file contains non-numeric values (line {line}: '{value}')")]
    NonNumericValue { line: usize, value: String },

    /// A row's cell count differs from the first row's.
    #[error("csv matrix file has inconsistent row lengths (line {line}: expected {expected} values, found {actual})")]
    InconsistentRowLength {
        line: usize,
        expected: usize,
        actual: usize,
    },

    /// Total row count differs from the row width.
    #[error("csv matrix file must have equal row and column lengths ({rows} rows, {width} columns)")]
    NonSquare { rows: usize, width: usize },

    /// Failed to read the input stream. Internal, never shown to API callers.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

impl MatrixError {
    /// Whether this error is the caller's fault (bad CSV) rather than ours.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, MatrixError::Io(_))
    }
}

/// Result type for parsing and matrix operations.
pub type MatrixResult<T> = Result<T, MatrixError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_client_displayable() {
        let err = MatrixError::NonNumericValue {
            line: 2,
            value: "abc".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("non-numeric"));
        assert!(msg.contains("line 2"));
        assert!(msg.contains("'abc'"));
    }

    #[test]
    fn test_io_is_internal() {
        let err = MatrixError::Io(std::io::Error::new(std::io::ErrorKind::Other, "boom"));
        assert!(!err.is_client_error());
        assert!(MatrixError::EmptyInput.is_client_error());
    }

    #[test]
    fn test_non_square_message() {
        let err = MatrixError::NonSquare { rows: 3, width: 2 };
        let msg = err.to_string();
        assert!(msg.contains("equal row and column lengths"));
        assert!(msg.contains("3 rows"));
    }
}
