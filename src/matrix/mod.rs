//! The in-memory matrix model.
//!
//! A [`Matrix`] is built exactly once per request by [`crate::parser`] and
//! carries its invariants from there: non-empty, rectangular, and square
//! (height equals width). Operations in [`crate::ops`] rely on those
//! invariants and never re-validate.

/// A validated grid of signed 32-bit integers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    rows: Vec<Vec<i32>>,
}

impl Matrix {
    /// Wrap already-validated rows. The parser is the only validation path;
    /// callers constructing a `Matrix` directly (tests, mostly) are trusted
    /// to hand over a square grid.
    pub fn from_rows(rows: Vec<Vec<i32>>) -> Self {
        Self { rows }
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of cells per row (the first row's length; all rows match).
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, |row| row.len())
    }

    /// The rows, in order.
    pub fn rows(&self) -> &[Vec<i32>] {
        &self.rows
    }

    /// All cells in row-major order (row 0 fully, then row 1, ...).
    pub fn cells(&self) -> impl Iterator<Item = i32> + '_ {
        self.rows.iter().flatten().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Matrix {
        Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]])
    }

    #[test]
    fn test_dimensions() {
        let m = sample();
        assert_eq!(m.height(), 3);
        assert_eq!(m.width(), 3);
    }

    #[test]
    fn test_cells_row_major() {
        let cells: Vec<i32> = sample().cells().collect();
        assert_eq!(cells, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }
}
