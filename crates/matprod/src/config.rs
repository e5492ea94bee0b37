//! Application configuration from CLI flags and environment.

use clap::Parser;

use matprod_core::constants::DEFAULT_WORKERS;

/// MatProd-rs — concurrent matrix multiplication benchmark driver.
#[derive(Parser, Debug)]
#[command(name = "matprod", version, about)]
pub struct AppConfig {
    /// Size of the square input matrices (NxN).
    #[arg(short, long, default_value = "3", env = "MATPROD_SIZE")]
    pub size: usize,

    /// Number of concurrent workers.
    #[arg(short, long, default_value_t = DEFAULT_WORKERS, env = "MATPROD_WORKERS")]
    pub workers: usize,

    /// Strategy to use: coordinator, fan, pure, or all.
    #[arg(short = 'm', long, default_value = "coordinator")]
    pub strategy: String,

    /// Number of times to repeat the timed multiplication.
    #[arg(short, long, default_value = "1")]
    pub repeat: usize,

    /// Append timing results to this CSV file.
    #[arg(short = 'f', long)]
    pub csv: Option<std::path::PathBuf>,

    /// Seed for the random matrix generator (random when omitted).
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the computed matrices.
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode (log output only).
    #[arg(short, long)]
    pub quiet: bool,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = AppConfig::try_parse_from(["matprod"]).unwrap();
        assert_eq!(config.size, 3);
        assert_eq!(config.workers, DEFAULT_WORKERS);
        assert_eq!(config.strategy, "coordinator");
        assert_eq!(config.repeat, 1);
        assert!(config.csv.is_none());
        assert!(config.seed.is_none());
    }

    #[test]
    fn parses_flags() {
        let config = AppConfig::try_parse_from([
            "matprod", "-s", "64", "-w", "8", "-m", "all", "-r", "5", "--seed", "42",
        ])
        .unwrap();
        assert_eq!(config.size, 64);
        assert_eq!(config.workers, 8);
        assert_eq!(config.strategy, "all");
        assert_eq!(config.repeat, 5);
        assert_eq!(config.seed, Some(42));
    }
}
