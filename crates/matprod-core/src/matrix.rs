//! Rectangular integer matrix owned by the caller.
//!
//! Strategies treat input matrices as read-only and allocate a fresh output
//! matrix they exclusively own until the multiply call returns.

use crate::strategy::ProductError;

/// A dense rectangular matrix of `i64` values, indexed `[row][col]`.
///
/// Invariant: every row has the same length, and there is at least one row
/// and one column. Both are enforced by [`Matrix::from_rows`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    rows: Vec<Vec<i64>>,
}

impl Matrix {
    /// Build a matrix from rows, validating the shape.
    pub fn from_rows(rows: Vec<Vec<i64>>) -> Result<Self, ProductError> {
        let Some(first) = rows.first() else {
            return Err(ProductError::Shape("matrix has no rows".into()));
        };
        let width = first.len();
        if width == 0 {
            return Err(ProductError::Shape("matrix has no columns".into()));
        }
        if let Some(bad) = rows.iter().position(|r| r.len() != width) {
            return Err(ProductError::Shape(format!(
                "row {bad} has length {}, expected {width}",
                rows[bad].len()
            )));
        }
        Ok(Self { rows })
    }

    /// Create a `rows x cols` matrix of zeros.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        debug_assert!(rows > 0 && cols > 0);
        Self {
            rows: vec![vec![0; cols]; rows],
        }
    }

    /// Create the `n x n` identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.rows[i][i] = 1;
        }
        m
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.rows[0].len()
    }

    /// Value at `(row, col)`. Panics on out-of-range indices.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> i64 {
        self.rows[row][col]
    }

    /// Overwrite the value at `(row, col)`. Panics on out-of-range indices.
    pub fn set(&mut self, row: usize, col: usize, value: i64) {
        self.rows[row][col] = value;
    }

    /// Borrow one row as a slice.
    #[must_use]
    pub fn row(&self, row: usize) -> &[i64] {
        &self.rows[row]
    }

    /// Gather one column into an owned vector.
    #[must_use]
    pub fn column(&self, col: usize) -> Vec<i64> {
        self.rows.iter().map(|r| r[col]).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_accepts_rectangular() {
        let m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4], vec![5, 6]]).unwrap();
        assert_eq!(m.rows(), 3);
        assert_eq!(m.cols(), 2);
        assert_eq!(m.get(2, 1), 6);
    }

    #[test]
    fn from_rows_rejects_empty() {
        assert!(matches!(
            Matrix::from_rows(vec![]),
            Err(ProductError::Shape(_))
        ));
        assert!(matches!(
            Matrix::from_rows(vec![vec![]]),
            Err(ProductError::Shape(_))
        ));
    }

    #[test]
    fn from_rows_rejects_ragged() {
        let err = Matrix::from_rows(vec![vec![1, 2], vec![3]]).unwrap_err();
        assert!(matches!(err, ProductError::Shape(_)));
        assert!(err.to_string().contains("row 1"));
    }

    #[test]
    fn identity_diagonal() {
        let id = Matrix::identity(3);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(id.get(i, j), i64::from(i == j));
            }
        }
    }

    #[test]
    fn zeros_all_zero() {
        let z = Matrix::zeros(2, 4);
        assert_eq!(z.rows(), 2);
        assert_eq!(z.cols(), 4);
        for i in 0..2 {
            for j in 0..4 {
                assert_eq!(z.get(i, j), 0);
            }
        }
    }

    #[test]
    fn set_then_get() {
        let mut m = Matrix::zeros(2, 2);
        m.set(1, 0, 42);
        assert_eq!(m.get(1, 0), 42);
    }

    #[test]
    fn row_and_column_views() {
        let m = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(m.row(1), &[4, 5, 6]);
        assert_eq!(m.column(2), vec![3, 6]);
    }
}
