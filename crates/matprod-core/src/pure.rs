//! Pure-Pull strategy with unit packaging.
//!
//! Structurally the Coordinator-Pull protocol (ready handshake, per-worker
//! task channels, select race, acknowledgment-gated shutdown), but the
//! coordinator slices the operand row and column out of the inputs at
//! assignment time and ships them inside the work unit. Workers therefore
//! hold no reference to the input matrices at all, at the cost of one
//! row/column copy per assignment.
//!
//! Termination convention: an in-band sentinel. On exit the coordinator
//! sends `ProductUnit::empty()` to every worker channel; workers detect it
//! by value equality, since units are built fresh per assignment and
//! identity comparison would never match.

use crossbeam_channel::{bounded, Receiver, Select, Sender};
use tracing::debug;

use crate::evaluator;
use crate::matrix::Matrix;
use crate::model::{Cell, CellCursor, ProductUnit, WorkerId};
use crate::strategy::{validate, MatrixProduct, ProductError};

/// Pure-Pull: packaged work units, sentinel termination.
pub struct PureProduct;

impl PureProduct {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for PureProduct {
    fn default() -> Self {
        Self::new()
    }
}

impl MatrixProduct for PureProduct {
    fn multiply(&self, a: &Matrix, b: &Matrix, workers: usize) -> Result<Matrix, ProductError> {
        validate(a, b, workers)?;

        let rows = a.rows();
        let cols = b.cols();
        let cells = rows * cols;
        let mut result = Matrix::zeros(rows, cols);

        let (ready_tx, ready_rx) = bounded::<WorkerId>(workers);
        let (ack_tx, ack_rx) = bounded::<WorkerId>(workers);
        let (result_tx, result_rx) = bounded::<Cell>(cells);

        let outcome = std::thread::scope(|scope| {
            let mut task_txs: Vec<Sender<ProductUnit>> = Vec::with_capacity(workers);
            for id in 0..workers {
                let (task_tx, task_rx) = bounded::<ProductUnit>(1);
                task_txs.push(task_tx);
                let ready_tx = ready_tx.clone();
                let ack_tx = ack_tx.clone();
                let result_tx = result_tx.clone();
                // No matrix references cross into the workers here.
                scope.spawn(move || worker(id, &ready_tx, &task_rx, &result_tx, &ack_tx));
            }
            drop(ready_tx);
            drop(ack_tx);
            drop(result_tx);

            let outcome = coordinate(&mut result, cells, a, b, &ready_rx, &task_txs, &result_rx);

            // Structured exit path: deliver the sentinel to every worker,
            // then wait for each acknowledgment, even if the loop failed.
            for task_tx in &task_txs {
                let _ = task_tx.send(ProductUnit::empty());
            }
            for _ in 0..workers {
                if ack_rx.recv().is_err() {
                    break;
                }
            }
            outcome
        });

        outcome?;
        debug!(strategy = "pure", rows, cols, workers, "product complete");
        Ok(result)
    }

    fn name(&self) -> &str {
        "PurePull"
    }
}

fn coordinate(
    result: &mut Matrix,
    cells: usize,
    a: &Matrix,
    b: &Matrix,
    ready_rx: &Receiver<WorkerId>,
    task_txs: &[Sender<ProductUnit>],
    result_rx: &Receiver<Cell>,
) -> Result<(), ProductError> {
    let mut cursor = CellCursor::new(a.rows(), b.cols());
    let mut completed = 0;

    while completed < cells {
        let mut sel = Select::new();
        let result_op = sel.recv(result_rx);
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
                    .send(ProductUnit::package(a, b, pointer))
                    .map_err(|_| ProductError::Disconnected("work assignment"))?;
            }
        }
    }
    Ok(())
}

fn worker(
    id: WorkerId,
    ready_tx: &Sender<WorkerId>,
    task_rx: &Receiver<ProductUnit>,
    result_tx: &Sender<Cell>,
    ack_tx: &Sender<WorkerId>,
) {
    if ready_tx.send(id).is_ok() {
        while let Ok(unit) = task_rx.recv() {
            // Sentinel check is by value, not identity.
            if unit == ProductUnit::empty() {
                break;
            }
            let cell = evaluator::compute_unit(&unit);
            if result_tx.send(cell).is_err() || ready_tx.send(id).is_err() {
                break;
            }
        }
    }
    let _ = ack_tx.send(id);
}
