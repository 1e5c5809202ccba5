//! Shared error types for the services crate.

use thiserror::Error;

use assignment_core::CompletionError;

/// Errors emitted while recording completion.
///
/// Validation failures are not errors; they are reported through notices.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ServiceError {
    #[error(transparent)]
    Completion(#[from] CompletionError),
}
