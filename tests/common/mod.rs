//! Shared test doubles for execution-core integration tests.
//!
//! Every double appends to a shared call log so tests can assert the exact
//! interleaving of fetches, processing, and eligibility checks. The doubles
//! are cheaply cloneable handles over shared state, so a test can keep a
//! clone for inspection after moving one into the executor.

#![allow(dead_code)] // not every test binary uses every double

use async_trait::async_trait;
use jobflow_core::execution::{
    BatchProcessor, BatchSource, BoxError, EligibilityProbe, ShardingContext, SharedRunFlag,
};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;
use uuid::Uuid;

/// One collaborator call observed during an invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Fetch,
    /// Batch size handed to the processor
    Process(usize),
    EligibilityCheck,
}

pub type CallLog = Arc<Mutex<Vec<Call>>>;

pub fn call_log() -> CallLog {
    Arc::new(Mutex::new(Vec::new()))
}

/// Source that replays scripted batches, then reports exhaustion forever.
#[derive(Clone)]
pub struct QueueSource {
    batches: Arc<Mutex<VecDeque<Vec<i64>>>>,
    contexts: Arc<Mutex<Vec<Uuid>>>,
    log: CallLog,
}

impl QueueSource {
    pub fn new(batches: Vec<Vec<i64>>, log: CallLog) -> Self {
        Self {
            batches: Arc::new(Mutex::new(batches.into())),
            contexts: Arc::new(Mutex::new(Vec::new())),
            log,
        }
    }

    /// Number of fetch calls made so far.
    pub fn fetch_calls(&self) -> usize {
        self.contexts.lock().len()
    }

    /// Invocation ids seen on each fetch call, in order.
    pub fn observed_invocations(&self) -> Vec<Uuid> {
        self.contexts.lock().clone()
    }
}

#[async_trait]
impl BatchSource for QueueSource {
    type Item = i64;

    async fn fetch_data(&self, context: &ShardingContext) -> Result<Vec<i64>, BoxError> {
        self.contexts.lock().push(context.invocation_id);
        self.log.lock().push(Call::Fetch);
        Ok(self.batches.lock().pop_front().unwrap_or_default())
    }
}

/// Processor that collects every batch it is handed.
///
/// Optionally requests a cooperative stop on a [`SharedRunFlag`] after a
/// given number of batches, mimicking a scheduler pausing the job mid-run.
#[derive(Clone)]
pub struct CollectingProcessor {
    received: Arc<Mutex<Vec<Vec<i64>>>>,
    contexts: Arc<Mutex<Vec<Uuid>>>,
    stop_after: Option<(usize, SharedRunFlag)>,
    log: CallLog,
}

impl CollectingProcessor {
    pub fn new(log: CallLog) -> Self {
        Self {
            received: Arc::new(Mutex::new(Vec::new())),
            contexts: Arc::new(Mutex::new(Vec::new())),
            stop_after: None,
            log,
        }
    }

    pub fn stopping_after(batches: usize, flag: SharedRunFlag, log: CallLog) -> Self {
        Self {
            stop_after: Some((batches, flag)),
            ..Self::new(log)
        }
    }

    pub fn received(&self) -> Vec<Vec<i64>> {
        self.received.lock().clone()
    }

    /// Invocation ids seen on each process call, in order.
    pub fn observed_invocations(&self) -> Vec<Uuid> {
        self.contexts.lock().clone()
    }
}

#[async_trait]
impl BatchProcessor for CollectingProcessor {
    type Item = i64;

    async fn process_data(
        &self,
        context: &ShardingContext,
        batch: Vec<i64>,
    ) -> Result<(), BoxError> {
        assert!(!batch.is_empty(), "executor must never pass empty batches");
        self.contexts.lock().push(context.invocation_id);
        self.log.lock().push(Call::Process(batch.len()));

        let mut received = self.received.lock();
        received.push(batch);

        if let Some((limit, flag)) = &self.stop_after {
            if received.len() == *limit {
                flag.request_stop();
            }
        }
        Ok(())
    }
}

/// Probe adapter that appends checks to the call log before delegating.
pub struct LoggingProbe<E> {
    inner: E,
    log: CallLog,
}

impl<E> LoggingProbe<E> {
    pub fn new(inner: E, log: CallLog) -> Self {
        Self { inner, log }
    }
}

#[async_trait]
impl<E: EligibilityProbe> EligibilityProbe for LoggingProbe<E> {
    async fn is_eligible_for_job_running(&self) -> Result<bool, BoxError> {
        self.log.lock().push(Call::EligibilityCheck);
        self.inner.is_eligible_for_job_running().await
    }
}

/// Probe that stays eligible for a fixed number of checks, then refuses.
pub struct CountdownProbe {
    remaining: Mutex<usize>,
}

impl CountdownProbe {
    pub fn eligible_for(checks: usize) -> Self {
        Self {
            remaining: Mutex::new(checks),
        }
    }
}

#[async_trait]
impl EligibilityProbe for CountdownProbe {
    async fn is_eligible_for_job_running(&self) -> Result<bool, BoxError> {
        let mut remaining = self.remaining.lock();
        if *remaining == 0 {
            return Ok(false);
        }
        *remaining -= 1;
        Ok(true)
    }
}
