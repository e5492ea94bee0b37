//! Error handling and exit codes.

use matprod_core::exit_codes;
use matprod_core::ProductError;

/// Map an application error to its process exit code.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<ProductError>() {
        Some(ProductError::Config(_)) => exit_codes::ERROR_CONFIG,
        Some(ProductError::Mismatch) => exit_codes::ERROR_MISMATCH,
        _ => exit_codes::ERROR_GENERIC,
    }
}
