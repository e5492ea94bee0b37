//! Shared constants.

/// Process exit codes used by the CLI binary.
pub mod exit_codes {
    /// Generic failure.
    pub const ERROR_GENERIC: i32 = 1;
    /// Strategies disagreed on the product.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration (unknown strategy, zero workers, ...).
    pub const ERROR_CONFIG: i32 = 4;
}

/// Smallest value produced by the random matrix generator (inclusive).
pub const RANDOM_VALUE_MIN: i64 = 1;

/// Largest value produced by the random matrix generator (inclusive).
pub const RANDOM_VALUE_MAX: i64 = 9;

/// Default worker count for the CLI driver.
pub const DEFAULT_WORKERS: usize = 4;
