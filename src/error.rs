//! Error types for the jobflow system.

use thiserror::Error;

use crate::execution::ExecutionError;

/// Broad error type surfaced at the crate boundary.
///
/// Variants carry stringified detail so the type stays `Clone` and cheap to
/// move across task boundaries; the execution layer keeps the structured,
/// source-preserving form in [`ExecutionError`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum JobflowError {
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
    #[error("Execution error: {0}")]
    ExecutionError(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl From<ExecutionError> for JobflowError {
    fn from(error: ExecutionError) -> Self {
        JobflowError::ExecutionError(error.to_string())
    }
}

pub type Result<T> = anyhow::Result<T, JobflowError>;
