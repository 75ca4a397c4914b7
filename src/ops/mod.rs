//! Pure operations over a parsed [`Matrix`].
//!
//! Every function here is a single stateless pass: no validation (the parser
//! already guaranteed shape), no side effects, deterministic output.
//!
//! Text output joins cells with `,` and rows with `\n`, with no trailing
//! newline, so `echo` reproduces the uploaded CSV modulo whitespace.

use crate::matrix::Matrix;

/// Render the matrix back in its original textual form.
pub fn echo(matrix: &Matrix) -> String {
    render(matrix.rows().iter().map(|row| row.as_slice()))
}

/// Render the transpose: output row `i` holds `input[j][i]` for all `j`.
///
/// The square invariant means the transpose always has the same dimensions
/// as the input, and `invert(invert(m)) == m`.
pub fn invert(matrix: &Matrix) -> String {
    let transposed: Vec<Vec<i32>> = (0..matrix.width())
        .map(|i| matrix.rows().iter().map(|row| row[i]).collect())
        .collect();

    render(transposed.iter().map(|row| row.as_slice()))
}

/// All cells on one comma-joined line, row-major.
pub fn flatten(matrix: &Matrix) -> String {
    matrix
        .cells()
        .map(|cell| cell.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Arithmetic total of all cells.
///
/// Accumulates in f64 so totals beyond the i32 range are representable.
pub fn sum(matrix: &Matrix) -> f64 {
    matrix.cells().map(f64::from).sum()
}

/// Product of all cells, row-major, starting from 1.0.
///
/// f64 on purpose: products overflow i32 almost immediately, and rounding on
/// very large products is accepted.
pub fn multiply(matrix: &Matrix) -> f64 {
    matrix.cells().map(f64::from).product()
}

/// The five operations the service exposes, for dispatch from the HTTP
/// routes and the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Echo,
    Invert,
    Flatten,
    Sum,
    Multiply,
}

impl Operation {
    /// Route / subcommand name.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Echo => "echo",
            Operation::Invert => "invert",
            Operation::Flatten => "flatten",
            Operation::Sum => "sum",
            Operation::Multiply => "multiply",
        }
    }

    /// Run the operation and render its result as the response body.
    ///
    /// Numeric results use f64 display form, so integral values render
    /// without a decimal point ("45", not "45.0").
    pub fn apply(&self, matrix: &Matrix) -> String {
        match self {
            Operation::Echo => echo(matrix),
            Operation::Invert => invert(matrix),
            Operation::Flatten => flatten(matrix),
            Operation::Sum => sum(matrix).to_string(),
            Operation::Multiply => multiply(matrix).to_string(),
        }
    }
}

fn render<'a>(rows: impl Iterator<Item = &'a [i32]>) -> String {
    rows.map(|row| {
        row.iter()
            .map(|cell| cell.to_string())
            .collect::<Vec<_>>()
            .join(",")
    })
    .collect::<Vec<_>>()
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_str;

    fn sample() -> Matrix {
        parse_str("1,2,3\n4,5,6\n7,8,9").unwrap()
    }

    #[test]
    fn test_echo_round_trips() {
        let m = sample();
        assert_eq!(echo(&m), "1,2,3\n4,5,6\n7,8,9");
        assert_eq!(parse_str(&echo(&m)).unwrap(), m);
    }

    #[test]
    fn test_echo_normalizes_whitespace() {
        let m = parse_str(" 1 ,2\n3, 4 ").unwrap();
        assert_eq!(echo(&m), "1,2\n3,4");
    }

    #[test]
    fn test_invert() {
        assert_eq!(invert(&sample()), "1,4,7\n2,5,8\n3,6,9");
    }

    #[test]
    fn test_invert_example_from_readme() {
        let m = parse_str("1,4\n16,256").unwrap();
        assert_eq!(invert(&m), "1,16\n4,256");
    }

    #[test]
    fn test_invert_is_self_inverse() {
        let m = sample();
        let twice = parse_str(&invert(&parse_str(&invert(&m)).unwrap())).unwrap();
        assert_eq!(twice, m);
    }

    #[test]
    fn test_flatten() {
        assert_eq!(flatten(&sample()), "1,2,3,4,5,6,7,8,9");
    }

    #[test]
    fn test_flatten_cell_count() {
        let n = sample().width();
        assert_eq!(flatten(&sample()).split(',').count(), n * n);
    }

    #[test]
    fn test_sum() {
        assert_eq!(sum(&sample()), 45.0);
    }

    #[test]
    fn test_sum_negative() {
        let m = parse_str("-1,-2\n-3,-4").unwrap();
        assert_eq!(sum(&m), -10.0);
    }

    #[test]
    fn test_multiply() {
        assert_eq!(multiply(&sample()), 362880.0);
    }

    #[test]
    fn test_multiply_with_zero() {
        let m = parse_str("1,0\n3,4").unwrap();
        assert_eq!(multiply(&m), 0.0);
    }

    #[test]
    fn test_multiply_exceeds_i32() {
        // 100000^4 is far past i32::MAX; the f64 accumulator keeps going.
        let m = parse_str("100000,100000\n100000,100000").unwrap();
        assert_eq!(multiply(&m), 1e20);
    }

    #[test]
    fn test_operation_dispatch() {
        let m = sample();
        assert_eq!(Operation::Echo.apply(&m), echo(&m));
        assert_eq!(Operation::Invert.apply(&m), "1,4,7\n2,5,8\n3,6,9");
        assert_eq!(Operation::Sum.apply(&m), "45");
        assert_eq!(Operation::Multiply.apply(&m), "362880");
    }

    #[test]
    fn test_operation_names() {
        assert_eq!(Operation::Flatten.name(), "flatten");
        assert_eq!(Operation::Multiply.name(), "multiply");
    }

    #[test]
    fn test_single_cell_ops() {
        let m = parse_str("7").unwrap();
        assert_eq!(echo(&m), "7");
        assert_eq!(invert(&m), "7");
        assert_eq!(flatten(&m), "7");
        assert_eq!(sum(&m), 7.0);
        assert_eq!(multiply(&m), 7.0);
    }
}
