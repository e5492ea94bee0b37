//! Cell addressing and work-unit types shared by the strategies.

use crate::matrix::Matrix;

/// Identifier of one of the N concurrently running workers. Used to index
/// the per-worker task channels in the pull strategies.
pub type WorkerId = usize;

/// Coordinate of one output cell.
///
/// `CellPointer::EMPTY` is the reserved "no more work" coordinate carried by
/// the Pure strategy's termination unit; regular work never addresses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellPointer {
    pub row: usize,
    pub col: usize,
}

impl CellPointer {
    /// Sentinel coordinate signalling "no more work".
    pub const EMPTY: CellPointer = CellPointer {
        row: usize::MAX,
        col: usize::MAX,
    };

    #[must_use]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A completed computation: one output coordinate and its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub pointer: CellPointer,
    pub value: i64,
}

/// Work unit for the Pure strategy: the operand row and column are sliced
/// out by the coordinator at assignment time, so workers never index the
/// shared input matrices.
///
/// The termination sentinel [`ProductUnit::empty`] is detected by value
/// equality; units are constructed fresh per assignment, so identity
/// comparison would never match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductUnit {
    pub row: Vec<i64>,
    pub col: Vec<i64>,
    pub pointer: CellPointer,
}

impl ProductUnit {
    /// The "no more work" sentinel: empty slices, sentinel coordinate.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            row: Vec::new(),
            col: Vec::new(),
            pointer: CellPointer::EMPTY,
        }
    }

    /// Package the work unit for output cell `pointer`: a copy of the
    /// relevant row of `a` and the gathered column of `b`.
    #[must_use]
    pub fn package(a: &Matrix, b: &Matrix, pointer: CellPointer) -> Self {
        Self {
            row: a.row(pointer.row).to_vec(),
            col: b.column(pointer.col),
            pointer,
        }
    }
}

/// Row-major cursor over the output cell space `(0,0) .. (rows-1, cols-1)`.
///
/// The column advances first and rolls over to the next row at the column
/// boundary. Shared by all three distributors.
#[derive(Debug)]
pub struct CellCursor {
    rows: usize,
    cols: usize,
    current_row: usize,
    current_col: usize,
}

impl CellCursor {
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            current_row: 0,
            current_col: 0,
        }
    }

    /// Whether any unassigned cell remains.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.current_row < self.rows
    }
}

impl Iterator for CellCursor {
    type Item = CellPointer;

    fn next(&mut self) -> Option<CellPointer> {
        if !self.has_next() {
            return None;
        }
        let pointer = CellPointer::new(self.current_row, self.current_col);
        self.current_col += 1;
        if self.current_col == self.cols {
            self.current_col = 0;
            self.current_row += 1;
        }
        Some(pointer)
    }
}
