//! The strategy contract and its error type.
//!
//! All three concurrency strategies implement `MatrixProduct`; the registry
//! hands them out behind `Arc<dyn MatrixProduct>`.

use crate::matrix::Matrix;

/// Error type for matrix product configuration and execution.
#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    /// Configuration error (unknown strategy name, zero workers, ...).
    #[error("configuration error: {0}")]
    Config(String),

    /// A matrix was empty or ragged.
    #[error("invalid matrix shape: {0}")]
    Shape(String),

    /// The operand dimensions do not conform.
    #[error("dimension mismatch: left matrix has {a_cols} columns, right matrix has {b_rows} rows")]
    Dimension { a_cols: usize, b_rows: usize },

    /// A channel endpoint vanished mid-protocol. Only reachable if a worker
    /// thread panicked.
    #[error("worker channel disconnected during {0}")]
    Disconnected(&'static str),

    /// Strategies disagreed on the product.
    #[error("result mismatch between strategies")]
    Mismatch,
}

/// A concurrent matrix multiplication strategy.
///
/// Implementations spawn `workers` concurrent workers, distribute the
/// output cell space among them, and assemble the collected results into a
/// fresh output matrix. Every implementation must join all of its workers
/// before returning, on success and on error alike.
pub trait MatrixProduct: Send + Sync {
    /// Multiply `a * b` using `workers` concurrent workers.
    fn multiply(&self, a: &Matrix, b: &Matrix, workers: usize) -> Result<Matrix, ProductError>;

    /// Get the name of this strategy.
    fn name(&self) -> &str;
}

impl std::fmt::Debug for dyn MatrixProduct {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatrixProduct")
            .field("name", &self.name())
            .finish()
    }
}

/// Shared precondition checks: at least one worker, conformant dimensions.
pub(crate) fn validate(a: &Matrix, b: &Matrix, workers: usize) -> Result<(), ProductError> {
    if workers == 0 {
        return Err(ProductError::Config(
            "worker count must be at least 1".into(),
        ));
    }
    if a.cols() != b.rows() {
        return Err(ProductError::Dimension {
            a_cols: a.cols(),
            b_rows: b.rows(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_zero_workers() {
        let a = Matrix::identity(2);
        let err = validate(&a, &a, 0).unwrap_err();
        assert!(matches!(err, ProductError::Config(_)));
        assert!(err.to_string().contains("worker count"));
    }

    #[test]
    fn validate_rejects_nonconformant() {
        let a = Matrix::zeros(2, 3);
        let b = Matrix::zeros(2, 2);
        let err = validate(&a, &b, 1).unwrap_err();
        assert!(matches!(
            err,
            ProductError::Dimension {
                a_cols: 3,
                b_rows: 2
            }
        ));
    }

    #[test]
    fn validate_accepts_conformant() {
        let a = Matrix::zeros(2, 3);
        let b = Matrix::zeros(3, 4);
        assert!(validate(&a, &b, 1).is_ok());
    }

    #[test]
    fn error_display() {
        let err = ProductError::Config("unknown strategy: nope".into());
        assert_eq!(err.to_string(), "configuration error: unknown strategy: nope");

        let err = ProductError::Mismatch;
        assert_eq!(err.to_string(), "result mismatch between strategies");
    }
}
