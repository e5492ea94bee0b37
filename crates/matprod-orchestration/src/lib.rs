//! # matprod-orchestration
//!
//! Timed run execution, strategy selection, and result analysis.

pub mod interfaces;
pub mod runner;
pub mod strategy_selection;

pub use interfaces::{ResultPresenter, RunResult, RunStatistics};
pub use runner::{analyze_agreement, execute_runs, summarize};
pub use strategy_selection::get_strategies_to_run;
