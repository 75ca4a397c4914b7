//! CSV to matrix parser with shape and content validation.
//!
//! The format is deliberately narrow: one or more lines, each a
//! comma-separated list of base-10 integers. No header row, no quoting, no
//! escaping. Parsing is a single deterministic pass that aborts on the first
//! error; there is no partial result and no error aggregation.

use std::io::Read;
use std::path::Path;

use crate::error::{MatrixError, MatrixResult};
use crate::matrix::Matrix;

/// Parse a CSV matrix from raw upload bytes.
///
/// Bytes that are not valid UTF-8 decode to U+FFFD replacement characters,
/// which then fail integer parsing like any other bad cell. An upload is
/// only ever rejected with a client-visible validation error, never an
/// internal one.
///
/// # Example
/// ```
/// use matrixd::parser::parse_bytes;
///
/// let matrix = parse_bytes(b"1,2\n3,4").unwrap();
/// assert_eq!(matrix.width(), 2);
/// assert_eq!(matrix.height(), 2);
/// ```
pub fn parse_bytes(bytes: &[u8]) -> MatrixResult<Matrix> {
    parse_content(&String::from_utf8_lossy(bytes))
}

/// Parse a CSV matrix from a string.
pub fn parse_str(csv: &str) -> MatrixResult<Matrix> {
    parse_content(csv)
}

/// Parse a CSV matrix file from disk (CLI path).
pub fn parse_file<P: AsRef<Path>>(path: P) -> MatrixResult<Matrix> {
    let bytes = std::fs::read(path)?;
    parse_bytes(&bytes)
}

/// Parse a CSV matrix from any reader.
pub fn parse_reader<R: Read>(mut reader: R) -> MatrixResult<Matrix> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    parse_bytes(&bytes)
}

/// Validation order matches the error taxonomy:
/// 1. no lines at all is `EmptyInput`;
/// 2. every token must parse as `i32` (`NonNumericValue`), the first row
///    fixing the expected width;
/// 3. later rows must match that width (`InconsistentRowLength`);
/// 4. finally the row count must equal the width (`NonSquare`).
///
/// A trailing newline is end-of-input, not an empty row. Tokens are trimmed
/// before parsing, so `\r` line endings and padded cells are accepted.
fn parse_content(content: &str) -> MatrixResult<Matrix> {
    let mut lines: Vec<&str> = content.lines().collect();

    // Trailing blank lines terminate the input.
    while lines.last().is_some_and(|line| line.trim().is_empty()) {
        lines.pop();
    }

    let mut lines = lines.iter().enumerate();

    let (_, first) = lines.next().ok_or(MatrixError::EmptyInput)?;
    let first_row = parse_row(first, 1)?;
    let width = first_row.len();

    let mut rows = vec![first_row];

    for (idx, line) in lines {
        let line_num = idx + 1;
        let row = parse_row(line, line_num)?;

        if row.len() != width {
            return Err(MatrixError::InconsistentRowLength {
                line: line_num,
                expected: width,
                actual: row.len(),
            });
        }

        rows.push(row);
    }

    // Square-only: the service has always rejected height != width.
    if rows.len() != width {
        return Err(MatrixError::NonSquare {
            rows: rows.len(),
            width,
        });
    }

    Ok(Matrix::from_rows(rows))
}

/// Split one line on commas and parse every token as `i32`.
fn parse_row(line: &str, line_num: usize) -> MatrixResult<Vec<i32>> {
    line.split(',')
        .map(|token| {
            token
                .trim()
                .parse::<i32>()
                .map_err(|_| MatrixError::NonNumericValue {
                    line: line_num,
                    value: token.trim().to_string(),
                })
        })
        .collect()
}
