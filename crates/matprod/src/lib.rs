//! Application library for the `matprod` binary.

pub mod app;
pub mod config;
pub mod errors;
