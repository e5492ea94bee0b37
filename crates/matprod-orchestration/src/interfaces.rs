//! Orchestration interfaces.

use std::time::Duration;

use matprod_core::{Matrix, ProductError};

/// Trait for presenting results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present one completed run.
    fn present_run(&self, run: &RunResult, matrix_size: usize, workers: usize);

    /// Present timing statistics over a batch of runs.
    fn present_statistics(&self, strategy: &str, stats: &RunStatistics);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Result of a single timed multiplication run.
#[derive(Debug)]
pub struct RunResult {
    /// Strategy name.
    pub strategy: String,
    /// Zero-based repetition index.
    pub iteration: usize,
    /// The computed matrix or a structured error.
    pub outcome: Result<Matrix, ProductError>,
    /// Wall-clock duration of the multiply call.
    pub duration: Duration,
}

/// Timing statistics over the successful runs of one strategy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunStatistics {
    /// Number of successful runs.
    pub runs: usize,
    /// Mean duration.
    pub average: Duration,
    /// Fastest run.
    pub min: Duration,
    /// Slowest run.
    pub max: Duration,
}
