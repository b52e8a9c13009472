//! Ready-made eligibility probes.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::errors::BoxError;
use super::traits::EligibilityProbe;

/// Probe that always sanctions continuation.
///
/// For one-off jobs (which never consult the probe) and for streaming jobs
/// whose scheduler has no pause/disable surface.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysEligible;

#[async_trait]
impl EligibilityProbe for AlwaysEligible {
    async fn is_eligible_for_job_running(&self) -> Result<bool, BoxError> {
        Ok(true)
    }
}

/// Cooperative stop flag shared between the scheduler and the executor.
///
/// The scheduler holds a clone and flips it when the job is paused, disabled,
/// or the shard is reassigned; the invocation observes the flip at its next
/// eligibility checkpoint.
#[derive(Debug, Clone)]
pub struct SharedRunFlag {
    running: Arc<AtomicBool>,
}

impl SharedRunFlag {
    /// Create a flag in the running state.
    pub fn new() -> Self {
        Self {
            running: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Request a cooperative stop; honored at the next checkpoint.
    pub fn request_stop(&self) {
        self.running.store(false, Ordering::Release);
    }

    /// Whether the flag still sanctions running.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }
}

impl Default for SharedRunFlag {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EligibilityProbe for SharedRunFlag {
    async fn is_eligible_for_job_running(&self) -> Result<bool, BoxError> {
        Ok(self.is_running())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn always_eligible_sanctions_continuation() {
        assert!(AlwaysEligible.is_eligible_for_job_running().await.unwrap());
    }

    #[tokio::test]
    async fn shared_run_flag_observes_stop_requests() {
        let flag = SharedRunFlag::new();
        assert!(flag.is_eligible_for_job_running().await.unwrap());

        let scheduler_handle = flag.clone();
        scheduler_handle.request_stop();

        assert!(!flag.is_eligible_for_job_running().await.unwrap());
        assert!(!flag.is_running());
    }
}
