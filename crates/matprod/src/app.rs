//! Application entry point and dispatch.

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};

use matprod_cli::output::CsvEntry;
use matprod_cli::presenter::CliResultPresenter;
use matprod_core::{generator, DefaultFactory};
use matprod_orchestration::interfaces::{ResultPresenter, RunResult};
use matprod_orchestration::runner::{analyze_agreement, execute_runs, summarize};
use matprod_orchestration::strategy_selection::get_strategies_to_run;

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    if config.size == 0 {
        anyhow::bail!("matrix size must be at least 1");
    }

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let a = generator::random_matrix(&mut rng, config.size, config.size);
    let b = generator::random_matrix(&mut rng, config.size, config.size);

    let factory = DefaultFactory::new();
    let strategies = get_strategies_to_run(&config.strategy, &factory)?;
    let presenter = CliResultPresenter::new(config.verbose, config.quiet);

    info!(
        size = config.size,
        workers = config.workers,
        strategy = %config.strategy,
        repeat = config.repeat,
        "starting multiplication runs"
    );

    let mut all_results: Vec<RunResult> = Vec::new();
    for strategy in &strategies {
        let results = execute_runs(strategy.as_ref(), &a, &b, config.workers, config.repeat);
        for run in &results {
            presenter.present_run(run, config.size, config.workers);
        }
        if let Some(stats) = summarize(&results) {
            info!(
                strategy = strategy.name(),
                runs = stats.runs,
                average_ms = stats.average.as_millis(),
                min_ms = stats.min.as_millis(),
                max_ms = stats.max.as_millis(),
                "execution statistics"
            );
            presenter.present_statistics(strategy.name(), &stats);
        }
        all_results.extend(results);
    }

    // Every strategy and repetition ran over the same inputs, so all
    // successful outputs must be identical.
    analyze_agreement(&all_results)?;

    if let Some(path) = &config.csv {
        let entries: Vec<CsvEntry> = all_results
            .iter()
            .filter(|r| r.outcome.is_ok())
            .map(|r| CsvEntry {
                method: r.strategy.clone(),
                workers: config.workers,
                dimension: config.size,
                elapsed_millis: r.duration.as_millis(),
            })
            .collect();
        matprod_cli::output::write_csv(path, &entries)
            .with_context(|| format!("writing results to {}", path.display()))?;
        info!(path = %path.display(), entries = entries.len(), "results exported");
    }

    let failures = all_results.iter().filter(|r| r.outcome.is_err()).count();
    if failures > 0 {
        warn!(failures, "some runs failed");
    }

    Ok(())
}
