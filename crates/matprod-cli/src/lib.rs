//! # matprod-cli
//!
//! Terminal presentation and CSV export for multiplication runs.

pub mod output;
pub mod presenter;

pub use output::{format_duration, format_matrix, write_csv, CsvEntry};
pub use presenter::CliResultPresenter;
