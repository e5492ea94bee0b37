//! Fan-Distribute strategy.
//!
//! The simplest of the three protocols: a single task channel buffered to
//! the full cell count is filled row-major up front and then closed. The
//! workers drain it, each sending one result per cell to a result channel
//! of the same capacity. The collector receives exactly rows x cols results,
//! so no termination signal is needed. Idle workers (worker count beyond
//! the cell count) simply observe an already-drained closed channel.

use crossbeam_channel::{bounded, Receiver, Sender};
use tracing::debug;

use crate::evaluator;
use crate::matrix::Matrix;
use crate::model::{Cell, CellCursor, CellPointer};
use crate::strategy::{validate, MatrixProduct, ProductError};

/// Fan-Distribute: one shared task channel, known-count collection.
pub struct FanProduct;

impl FanProduct {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for FanProduct {
    fn default() -> Self {
        Self::new()
    }
}

impl MatrixProduct for FanProduct {
    fn multiply(&self, a: &Matrix, b: &Matrix, workers: usize) -> Result<Matrix, ProductError> {
        validate(a, b, workers)?;

        let rows = a.rows();
        let cols = b.cols();
        let cells = rows * cols;
        let mut result = Matrix::zeros(rows, cols);

        // Both channels hold the whole cell space, so distribution and
        // computation never block on capacity.
        let (task_tx, task_rx) = bounded::<CellPointer>(cells);
        let (result_tx, result_rx) = bounded::<Cell>(cells);

        std::thread::scope(|scope| {
            for _ in 0..workers {
                let task_rx = task_rx.clone();
                let result_tx = result_tx.clone();
                scope.spawn(move || worker(a, b, &task_rx, &result_tx));
            }
            drop(task_rx);
            drop(result_tx);

            distribute(task_tx, rows, cols)?;
            collect(&mut result, cells, &result_rx)
        })?;

        debug!(strategy = "fan", rows, cols, workers, "product complete");
        Ok(result)
    }

    fn name(&self) -> &str {
        "FanDistribute"
    }
}

/// Fill the task channel with every output coordinate, then close it by
/// consuming the sender.
fn distribute(task_tx: Sender<CellPointer>, rows: usize, cols: usize) -> Result<(), ProductError> {
    for pointer in CellCursor::new(rows, cols) {
        task_tx
            .send(pointer)
            .map_err(|_| ProductError::Disconnected("work distribution"))?;
    }
    Ok(())
}

/// Receive exactly `cells` results and write them into the output matrix.
fn collect(result: &mut Matrix, cells: usize, result_rx: &Receiver<Cell>) -> Result<(), ProductError> {
    for _ in 0..cells {
        let cell = result_rx
            .recv()
            .map_err(|_| ProductError::Disconnected("result collection"))?;
        result.set(cell.pointer.row, cell.pointer.col, cell.value);
    }
    Ok(())
}

fn worker(a: &Matrix, b: &Matrix, task_rx: &Receiver<CellPointer>, result_tx: &Sender<Cell>) {
    // Ends when the task channel is closed and drained.
    while let Ok(pointer) = task_rx.recv() {
        let cell = evaluator::compute_cell(a, b, pointer);
        if result_tx.send(cell).is_err() {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixtures() -> (Matrix, Matrix) {
        let a = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        let b = Matrix::from_rows(vec![vec![10, 11], vec![20, 21], vec![30, 31]]).unwrap();
        (a, b)
    }

    fn expected() -> Matrix {
        Matrix::from_rows(vec![vec![140, 146], vec![320, 335]]).unwrap()
    }

    #[test]
    fn multiplies_known_product() {
        let (a, b) = fixtures();
        for workers in [1, 2, 4] {
            let c = FanProduct::new().multiply(&a, &b, workers).unwrap();
            assert_eq!(c, expected(), "workers={workers}");
        }
    }

    #[test]
    fn tolerates_workers_beyond_cell_count() {
        let (a, b) = fixtures();
        // 4 cells, 32 workers: the extras find an empty closed channel.
        let c = FanProduct::new().multiply(&a, &b, 32).unwrap();
        assert_eq!(c, expected());
    }

    #[test]
    fn rejects_zero_workers() {
        let (a, b) = fixtures();
        let err = FanProduct::new().multiply(&a, &b, 0).unwrap_err();
        assert!(matches!(err, ProductError::Config(_)));
    }

    #[test]
    fn rejects_dimension_mismatch() {
        let a = Matrix::zeros(3, 2);
        let b = Matrix::zeros(3, 3);
        let err = FanProduct::new().multiply(&a, &b, 2).unwrap_err();
        assert!(matches!(err, ProductError::Dimension { .. }));
    }

    #[test]
    fn non_square_shapes() {
        let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4], vec![5, 6]]).unwrap();
        let b = Matrix::from_rows(vec![vec![7], vec![8]]).unwrap();
        let c = FanProduct::new().multiply(&a, &b, 2).unwrap();
        assert_eq!(
            c,
            Matrix::from_rows(vec![vec![23], vec![53], vec![83]]).unwrap()
        );
    }

    #[test]
    fn name() {
        assert_eq!(FanProduct::new().name(), "FanDistribute");
    }
}
