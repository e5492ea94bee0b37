//! Dot-product evaluation for a single output cell.
//!
//! Two forms: full-matrix indexing (used by Coordinator-Pull and
//! Fan-Distribute workers) and pre-sliced row/column pairs (used by the
//! Pure strategy's packaged units). Both produce identical results for the
//! same logical inputs. Mismatched operand lengths are a caller error and
//! panic via an out-of-range index.

use crate::matrix::Matrix;
use crate::model::{Cell, CellPointer, ProductUnit};

/// Compute output cell `pointer` of `a * b` by indexing into both matrices.
#[must_use]
pub fn compute_cell(a: &Matrix, b: &Matrix, pointer: CellPointer) -> Cell {
    let mut sum = 0;
    for k in 0..a.cols() {
        sum += a.get(pointer.row, k) * b.get(k, pointer.col);
    }
    Cell {
        pointer,
        value: sum,
    }
}

/// Compute the cell carried by a packaged work unit from its own row and
/// column slices, without touching the input matrices.
#[must_use]
pub fn compute_unit(unit: &ProductUnit) -> Cell {
    Cell {
        pointer: unit.pointer,
        value: dot(&unit.row, &unit.col),
    }
}

fn dot(row: &[i64], col: &[i64]) -> i64 {
    row.iter().zip(col).map(|(x, y)| x * y).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixtures() -> (Matrix, Matrix) {
        let a = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        let b = Matrix::from_rows(vec![vec![10, 11], vec![20, 21], vec![30, 31]]).unwrap();
        (a, b)
    }

    #[test]
    fn computes_known_cells() {
        let (a, b) = fixtures();
        assert_eq!(compute_cell(&a, &b, CellPointer::new(0, 0)).value, 140);
        assert_eq!(compute_cell(&a, &b, CellPointer::new(0, 1)).value, 146);
        assert_eq!(compute_cell(&a, &b, CellPointer::new(1, 0)).value, 320);
        assert_eq!(compute_cell(&a, &b, CellPointer::new(1, 1)).value, 335);
    }

    #[test]
    fn indexed_and_sliced_forms_agree() {
        let (a, b) = fixtures();
        for row in 0..a.rows() {
            for col in 0..b.cols() {
                let pointer = CellPointer::new(row, col);
                let via_matrix = compute_cell(&a, &b, pointer);
                let via_unit = compute_unit(&ProductUnit::package(&a, &b, pointer));
                assert_eq!(via_matrix, via_unit, "divergence at ({row},{col})");
            }
        }
    }

    #[test]
    fn cell_carries_its_pointer() {
        let (a, b) = fixtures();
        let cell = compute_cell(&a, &b, CellPointer::new(1, 1));
        assert_eq!(cell.pointer, CellPointer::new(1, 1));
    }

    #[test]
    fn dot_of_unit_vectors() {
        assert_eq!(dot(&[1, 0, 0], &[0, 1, 0]), 0);
        assert_eq!(dot(&[2, 3], &[4, 5]), 23);
    }
}
