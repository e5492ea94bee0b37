//! Workspace-level integration test package.
//!
//! The cross-strategy golden and leak tests live in `tests/`.
