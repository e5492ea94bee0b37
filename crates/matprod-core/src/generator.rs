//! Random matrix generation for the driver and tests.
//!
//! The strategies themselves never generate data; this is a collaborator
//! consumed at the driver boundary.

use rand::Rng;

use crate::constants::{RANDOM_VALUE_MAX, RANDOM_VALUE_MIN};
use crate::matrix::Matrix;

/// Generate a `rows x cols` matrix with values drawn uniformly from
/// `RANDOM_VALUE_MIN..=RANDOM_VALUE_MAX`.
pub fn random_matrix<R: Rng + ?Sized>(rng: &mut R, rows: usize, cols: usize) -> Matrix {
    let mut m = Matrix::zeros(rows, cols);
    for i in 0..rows {
        for j in 0..cols {
            m.set(i, j, rng.gen_range(RANDOM_VALUE_MIN..=RANDOM_VALUE_MAX));
        }
    }
    m
}
