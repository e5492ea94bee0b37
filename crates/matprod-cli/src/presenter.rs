//! CLI result presenter.

use matprod_orchestration::interfaces::{ResultPresenter, RunResult, RunStatistics};

use crate::output::{format_duration, format_matrix};

/// Terminal presenter for multiplication runs.
pub struct CliResultPresenter {
    verbose: bool,
    quiet: bool,
}

impl CliResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }
}

impl ResultPresenter for CliResultPresenter {
    fn present_run(&self, run: &RunResult, matrix_size: usize, workers: usize) {
        if self.quiet {
            return;
        }
        match &run.outcome {
            Ok(matrix) => {
                println!(
                    "{} run {}: {}x{} matrices, {} workers, {}",
                    run.strategy,
                    run.iteration + 1,
                    matrix_size,
                    matrix_size,
                    workers,
                    format_duration(run.duration),
                );
                if self.verbose {
                    print!("{}", format_matrix(matrix, 8));
                }
            }
            Err(error) => self.present_error(&error.to_string()),
        }
    }

    fn present_statistics(&self, strategy: &str, stats: &RunStatistics) {
        if self.quiet {
            return;
        }
        println!(
            "{strategy}: {} runs, average {}, min {}, max {}",
            stats.runs,
            format_duration(stats.average),
            format_duration(stats.min),
            format_duration(stats.max),
        );
    }

    fn present_error(&self, error: &str) {
        eprintln!("Error: {error}");
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use matprod_core::Matrix;

    use super::*;

    fn ok_run() -> RunResult {
        RunResult {
            strategy: "FanDistribute".into(),
            iteration: 0,
            outcome: Ok(Matrix::identity(2)),
            duration: Duration::from_millis(5),
        }
    }

    #[test]
    fn presenter_modes() {
        let presenter = CliResultPresenter::new(true, false);
        assert!(presenter.verbose);
        assert!(!presenter.quiet);
    }

    #[test]
    fn present_run_does_not_panic() {
        let presenter = CliResultPresenter::new(false, false);
        presenter.present_run(&ok_run(), 2, 4);

        let verbose = CliResultPresenter::new(true, false);
        verbose.present_run(&ok_run(), 2, 4);
    }

    #[test]
    fn present_run_quiet_is_silent() {
        let presenter = CliResultPresenter::new(false, true);
        presenter.present_run(&ok_run(), 2, 4);
    }

    #[test]
    fn present_statistics_does_not_panic() {
        let presenter = CliResultPresenter::new(false, false);
        let stats = RunStatistics {
            runs: 3,
            average: Duration::from_millis(20),
            min: Duration::from_millis(10),
            max: Duration::from_millis(30),
        };
        presenter.present_statistics("PurePull", &stats);
    }

    #[test]
    fn present_error_does_not_panic() {
        let presenter = CliResultPresenter::new(false, false);
        presenter.present_error("test error message");
    }
}
