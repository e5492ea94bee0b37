//! # matprod-core
//!
//! Concurrent dense matrix multiplication over a shared task space.
//! Implements three channel-based worker-coordination strategies:
//! Coordinator-Pull, Fan-Distribute, and Pure-Pull with unit packaging.

pub mod constants;
pub mod coordinator;
pub mod evaluator;
pub mod fan;
pub mod generator;
pub mod matrix;
pub mod model;
pub mod pure;
pub mod registry;
pub mod strategy;

// Re-exports
pub use constants::exit_codes;
pub use matrix::Matrix;
pub use model::{Cell, CellCursor, CellPointer, ProductUnit, WorkerId};
pub use registry::{DefaultFactory, StrategyFactory};
pub use strategy::{MatrixProduct, ProductError};

/// Multiply two matrices with `workers` concurrent workers using the named
/// strategy.
///
/// This is a convenience function for simple use cases. For repeated runs
/// with a cached strategy instance, use a [`StrategyFactory`] directly.
///
/// # Example
/// ```
/// use matprod_core::Matrix;
///
/// let a = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
/// let b = Matrix::from_rows(vec![vec![10, 11], vec![20, 21], vec![30, 31]]).unwrap();
/// let c = matprod_core::multiply(&a, &b, 2, "fan").unwrap();
/// assert_eq!(c, Matrix::from_rows(vec![vec![140, 146], vec![320, 335]]).unwrap());
/// ```
pub fn multiply(
    a: &Matrix,
    b: &Matrix,
    workers: usize,
    strategy: &str,
) -> Result<Matrix, ProductError> {
    let factory = DefaultFactory::new();
    let product = factory.get(strategy)?;
    product.multiply(a, b, workers)
}
