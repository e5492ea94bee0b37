//! Timed run execution and result analysis.

use std::time::{Duration, Instant};

use tracing::{debug, info_span};

use matprod_core::{Matrix, MatrixProduct, ProductError};

use crate::interfaces::{RunResult, RunStatistics};

/// Execute `repetitions` timed multiplications with the given strategy.
///
/// Each run executes under a tracing span carrying a random per-call token,
/// so concurrent or repeated invocations can be told apart in logs without
/// any process-wide counter.
pub fn execute_runs(
    product: &dyn MatrixProduct,
    a: &Matrix,
    b: &Matrix,
    workers: usize,
    repetitions: usize,
) -> Vec<RunResult> {
    let mut results = Vec::with_capacity(repetitions);
    for iteration in 0..repetitions {
        let token: u32 = rand::random();
        let span = info_span!("run", strategy = product.name(), token, iteration);
        let _guard = span.enter();

        let start = Instant::now();
        let outcome = product.multiply(a, b, workers);
        let duration = start.elapsed();

        debug!(?duration, ok = outcome.is_ok(), "run finished");
        results.push(RunResult {
            strategy: product.name().to_string(),
            iteration,
            outcome,
            duration,
        });
    }
    results
}

/// Summarize the successful runs. Returns `None` when every run failed.
#[must_use]
pub fn summarize(results: &[RunResult]) -> Option<RunStatistics> {
    let durations: Vec<Duration> = results
        .iter()
        .filter(|r| r.outcome.is_ok())
        .map(|r| r.duration)
        .collect();
    if durations.is_empty() {
        return None;
    }

    let total: Duration = durations.iter().sum();
    Some(RunStatistics {
        runs: durations.len(),
        average: total / u32::try_from(durations.len()).unwrap_or(u32::MAX),
        min: durations.iter().min().copied()?,
        max: durations.iter().max().copied()?,
    })
}

/// Check that all successful runs produced the same matrix.
///
/// Used when several strategies (or repetitions) are run over the same
/// inputs: any disagreement is a `Mismatch` error, no valid result at all
/// is a `Config` error.
pub fn analyze_agreement(results: &[RunResult]) -> Result<(), ProductError> {
    let valid: Vec<&Matrix> = results
        .iter()
        .filter_map(|r| r.outcome.as_ref().ok())
        .collect();

    let Some(first) = valid.first() else {
        return Err(ProductError::Config("no valid results".into()));
    };
    if valid.iter().any(|m| m != first) {
        return Err(ProductError::Mismatch);
    }
    Ok(())
}
