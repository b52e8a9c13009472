//! Error types for the execution core.

use thiserror::Error;

/// Error raised by a collaborator implementation.
///
/// Sources, processors, and probes fail for causes this layer cannot
/// distinguish (network, storage, registry state), so their errors cross the
/// trait boundary boxed and are re-surfaced unchanged as the `source` of an
/// [`ExecutionError`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub type ExecutionResult<T> = anyhow::Result<T, ExecutionError>;

/// Execution failure tagged with the cycle it occurred in.
///
/// The tag tells the invoking framework whether data may have been partially
/// processed: a `FetchFailure` means the failed batch never reached the
/// processor, a `ProcessFailure` means it did, an `EligibilityQueryFailure`
/// means the batch in hand was already processed before the probe failed.
#[derive(Debug, Error)]
pub enum ExecutionError {
    /// The batch source could not produce a batch
    #[error("Fetch failed for shard {sharding_item} of job {job_name}")]
    FetchFailure {
        job_name: String,
        sharding_item: u32,
        #[source]
        source: BoxError,
    },

    /// The batch processor failed on a non-empty batch
    #[error("Processing failed for shard {sharding_item} of job {job_name} on a batch of {batch_size} items")]
    ProcessFailure {
        job_name: String,
        sharding_item: u32,
        batch_size: usize,
        #[source]
        source: BoxError,
    },

    /// The eligibility probe could not answer.
    ///
    /// Treated as a hard failure: defaulting to eligible risks an infinite
    /// loop against a wedged scheduler, defaulting to ineligible masks the
    /// probe outage as a routine cancellation.
    #[error("Eligibility query failed for job {job_name}")]
    EligibilityQueryFailure {
        job_name: String,
        #[source]
        source: BoxError,
    },
}

impl ExecutionError {
    /// Job the failed invocation belonged to.
    pub fn job_name(&self) -> &str {
        match self {
            ExecutionError::FetchFailure { job_name, .. }
            | ExecutionError::ProcessFailure { job_name, .. }
            | ExecutionError::EligibilityQueryFailure { job_name, .. } => job_name,
        }
    }
}
