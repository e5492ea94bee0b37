//! Coordinator-Pull strategy.
//!
//! Workers announce themselves on a shared ready channel and block on their
//! own dedicated task channel. A single coordinator walks the output cell
//! space row-major and races two events: a worker asking for work (offered
//! only while unassigned cells remain) and a finished cell arriving on the
//! shared result channel. The coordinator is the only writer of the output
//! matrix, so no lock guards it.
//!
//! Termination convention: the coordinator closes the dedicated task
//! channels by dropping their senders; each worker observes the close,
//! exits its loop, and acknowledges shutdown. The acknowledgment drain runs
//! on every exit path so no worker is left running when the call returns.

use crossbeam_channel::{bounded, Receiver, Select, Sender};
use tracing::debug;

use crate::evaluator;
use crate::matrix::Matrix;
use crate::model::{Cell, CellCursor, CellPointer, WorkerId};
use crate::strategy::{validate, MatrixProduct, ProductError};

/// Coordinator-Pull: ready-channel handshake, per-worker task channels,
/// close-to-terminate.
pub struct CoordinatorProduct;

impl CoordinatorProduct {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for CoordinatorProduct {
    fn default() -> Self {
        Self::new()
    }
}

impl MatrixProduct for CoordinatorProduct {
    fn multiply(&self, a: &Matrix, b: &Matrix, workers: usize) -> Result<Matrix, ProductError> {
        validate(a, b, workers)?;

        let rows = a.rows();
        let cols = b.cols();
        let cells = rows * cols;
        let mut result = Matrix::zeros(rows, cols);

        // Each worker has at most one outstanding ready signal and one
        // outstanding result, so these capacities make every send
        // non-blocking.
        let (ready_tx, ready_rx) = bounded::<WorkerId>(workers);
        let (ack_tx, ack_rx) = bounded::<WorkerId>(workers);
        let (result_tx, result_rx) = bounded::<Cell>(cells);

        let outcome = std::thread::scope(|scope| {
            let mut task_txs: Vec<Sender<CellPointer>> = Vec::with_capacity(workers);
            for id in 0..workers {
                let (task_tx, task_rx) = bounded::<CellPointer>(1);
                task_txs.push(task_tx);
                let ready_tx = ready_tx.clone();
                let ack_tx = ack_tx.clone();
                let result_tx = result_tx.clone();
                scope.spawn(move || worker(id, a, b, &ready_tx, &task_rx, &result_tx, &ack_tx));
            }
            // The coordinator keeps only the receiving ends.
            drop(ready_tx);
            drop(ack_tx);
            drop(result_tx);

            let outcome = coordinate(&mut result, cells, rows, cols, &ready_rx, &task_txs, &result_rx);

            // Structured exit path: close every task channel, then wait for
            // each worker to acknowledge shutdown, even if the loop failed.
            drop(task_txs);
            for _ in 0..workers {
                if ack_rx.recv().is_err() {
                    break;
                }
            }
            outcome
        });

        outcome?;
        debug!(strategy = "coordinator", rows, cols, workers, "product complete");
        Ok(result)
    }

    fn name(&self) -> &str {
        "CoordinatorPull"
    }
}

/// Assign cells to ready workers and collect results until every cell of
/// the output matrix has been written.
fn coordinate(
    result: &mut Matrix,
    cells: usize,
    rows: usize,
    cols: usize,
    ready_rx: &Receiver<WorkerId>,
    task_txs: &[Sender<CellPointer>],
    result_rx: &Receiver<Cell>,
) -> Result<(), ProductError> {
    let mut cursor = CellCursor::new(rows, cols);
    let mut completed = 0;

    while completed < cells {
        let mut sel = Select::new();
        let result_op = sel.recv(result_rx);
        // Once the cell space is exhausted, stop offering assignment so the
        // race degenerates to result collection only.
        let ready_op = if cursor.has_next() {
            Some(sel.recv(ready_rx))
        } else {
            None
        };

        let oper = sel.select();
        let index = oper.index();
        if index == result_op {
            let cell = oper
                .recv(result_rx)
                .map_err(|_| ProductError::Disconnected("result collection"))?;
            result.set(cell.pointer.row, cell.pointer.col, cell.value);
            completed += 1;
        } else if Some(index) == ready_op {
            let id = oper
                .recv(ready_rx)
                .map_err(|_| ProductError::Disconnected("work request"))?;
            if let Some(pointer) = cursor.next() {
                task_txs[id]
                    .send(pointer)
                    .map_err(|_| ProductError::Disconnected("work assignment"))?;
            }
        }
    }
    Ok(())
}

fn worker(
    id: WorkerId,
    a: &Matrix,
    b: &Matrix,
    ready_tx: &Sender<WorkerId>,
    task_rx: &Receiver<CellPointer>,
    result_tx: &Sender<Cell>,
    ack_tx: &Sender<WorkerId>,
) {
    if ready_tx.send(id).is_ok() {
        // The loop ends when the coordinator drops our task sender.
        while let Ok(pointer) = task_rx.recv() {
            let cell = evaluator::compute_cell(a, b, pointer);
            if result_tx.send(cell).is_err() || ready_tx.send(id).is_err() {
                break;
            }
        }
    }
    let _ = ack_tx.send(id);
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
            let c = CoordinatorProduct::new().multiply(&a, &b, workers).unwrap();
            assert_eq!(c, expected(), "workers={workers}");
        }
    }

    #[test]
    fn more_workers_than_cells() {
        let (a, b) = fixtures();
        let c = CoordinatorProduct::new().multiply(&a, &b, 16).unwrap();
        assert_eq!(c, expected());
    }

    #[test]
    fn rejects_zero_workers() {
        let (a, b) = fixtures();
        let err = CoordinatorProduct::new().multiply(&a, &b, 0).unwrap_err();
        assert!(matches!(err, ProductError::Config(_)));
    }

    #[test]
    fn rejects_dimension_mismatch() {
        let a = Matrix::zeros(2, 3);
        let b = Matrix::zeros(4, 2);
        let err = CoordinatorProduct::new().multiply(&a, &b, 2).unwrap_err();
        assert!(matches!(err, ProductError::Dimension { .. }));
    }

    #[test]
    fn single_cell_output() {
        let a = Matrix::from_rows(vec![vec![2, 3]]).unwrap();
        let b = Matrix::from_rows(vec![vec![5], vec![7]]).unwrap();
        let c = CoordinatorProduct::new().multiply(&a, &b, 3).unwrap();
        assert_eq!(c, Matrix::from_rows(vec![vec![31]]).unwrap());
    }

    #[test]
    fn name() {
        assert_eq!(CoordinatorProduct::new().name(), "CoordinatorPull");
    }
}
