//! # Dataflow Executor
//!
//! ## Architecture: Mode-Dispatched Fetch/Process Loop
//!
//! The `DataflowExecutor` drives the whole of one scheduled invocation for one
//! shard. It is handed the three collaborator capabilities plus the processing
//! mode resolved from job configuration, and runs exactly one of two loop
//! shapes:
//!
//! - **Streaming**: fetch, process, check eligibility, repeat - until the
//!   source is drained or eligibility is lost
//! - **One-off**: fetch once, process if non-empty, terminate
//!
//! ## Cancellation Checkpoint Placement
//!
//! The streaming loop checks eligibility **after** a batch is processed and
//! **before** the next fetch. A batch pulled off the source is therefore
//! always given its one chance to be processed; cancellation only ever
//! discards future fetches. Moving the check before processing would drop
//! fetched data on cancellation, and checking only at loop entry would make
//! an unbounded source uninterruptible. The placement is a correctness
//! constraint, not a stylistic one.
//!
//! ## Failure Semantics
//!
//! Fail-fast. Any collaborator error aborts the invocation at the point of
//! failure and propagates unchanged, tagged with the cycle it occurred in.
//! Retry and backoff across invocations belong to the invoking framework.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use jobflow_core::config::JobConfig;
//! use jobflow_core::execution::{DataflowExecutor, ShardingContext, SharedRunFlag};
//! # use jobflow_core::execution::{BatchProcessor, BatchSource, BoxError};
//! # use async_trait::async_trait;
//! # struct LedgerSource;
//! # #[async_trait]
//! # impl BatchSource for LedgerSource {
//! #     type Item = String;
//! #     async fn fetch_data(&self, _: &ShardingContext) -> Result<Vec<String>, BoxError> {
//! #         Ok(vec![])
//! #     }
//! # }
//! # struct LedgerProcessor;
//! # #[async_trait]
//! # impl BatchProcessor for LedgerProcessor {
//! #     type Item = String;
//! #     async fn process_data(&self, _: &ShardingContext, _: Vec<String>) -> Result<(), BoxError> {
//! #         Ok(())
//! #     }
//! # }
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = JobConfig::new("ledger_sync", 2).streaming(true);
//! let run_flag = SharedRunFlag::new();
//!
//! let executor =
//!     DataflowExecutor::from_config(&config, LedgerSource, LedgerProcessor, run_flag.clone());
//!
//! // The scheduler can request a cooperative stop from elsewhere:
//! // run_flag.request_stop();
//!
//! let context = ShardingContext::new("ledger_sync", 0, 2);
//! let report = executor.process(&context).await?;
//! # Ok(())
//! # }
//! ```

use chrono::Utc;
use tracing::{debug, instrument};

use crate::config::{JobConfig, ProcessingMode};

use super::errors::{ExecutionError, ExecutionResult};
use super::report::{ExecutionReport, Termination};
use super::sharding_context::ShardingContext;
use super::traits::{BatchProcessor, BatchSource, EligibilityProbe};

/// Running totals for one invocation.
#[derive(Debug, Default)]
struct CycleTotals {
    batches: usize,
    items: usize,
}

/// Drives the fetch/process cycle for one shard invocation.
///
/// One executor serves one invocation: the scheduler constructs it together
/// with the [`ShardingContext`], calls [`process`](Self::process) once, and
/// discards both. It holds no state that outlives the call.
pub struct DataflowExecutor<S, P, E>
where
    S: BatchSource,
    P: BatchProcessor<Item = S::Item>,
    E: EligibilityProbe,
{
    source: S,
    processor: P,
    probe: E,
    mode: ProcessingMode,
}

impl<S, P, E> DataflowExecutor<S, P, E>
where
    S: BatchSource,
    P: BatchProcessor<Item = S::Item>,
    E: EligibilityProbe,
{
    /// Create an executor running under an explicit processing mode.
    pub fn new(mode: ProcessingMode, source: S, processor: P, probe: E) -> Self {
        Self {
            source,
            processor,
            probe,
            mode,
        }
    }

    /// Create an executor, resolving the processing mode from job
    /// configuration.
    ///
    /// The mode is captured here, once, before the first fetch; the
    /// configuration is not consulted again for the rest of the invocation.
    pub fn from_config(config: &JobConfig, source: S, processor: P, probe: E) -> Self {
        Self::new(config.processing_mode(), source, processor, probe)
    }

    /// The mode this executor's invocation runs under.
    pub fn mode(&self) -> ProcessingMode {
        self.mode
    }

    /// Run the invocation for the given shard.
    ///
    /// Returns when the selected loop terminates; propagates the first
    /// collaborator error unchanged. Never retries a batch and never resumes
    /// a partially consumed stream.
    #[instrument(
        skip(self, context),
        fields(
            invocation_id = %context.invocation_id,
            job_name = %context.job_name,
            sharding_item = context.sharding_item,
            mode = ?self.mode,
        )
    )]
    pub async fn process(&self, context: &ShardingContext) -> ExecutionResult<ExecutionReport> {
        let started_at = Utc::now();

        let (termination, totals) = match self.mode {
            ProcessingMode::Streaming => self.streaming_execute(context).await?,
            ProcessingMode::OneOff => self.one_off_execute(context).await?,
        };

        debug!(
            termination = ?termination,
            batches_processed = totals.batches,
            items_processed = totals.items,
            "Invocation finished"
        );

        Ok(ExecutionReport {
            invocation_id: context.invocation_id,
            job_name: context.job_name.clone(),
            sharding_item: context.sharding_item,
            mode: self.mode,
            termination,
            batches_processed: totals.batches,
            items_processed: totals.items,
            started_at,
            completed_at: Utc::now(),
        })
    }

    /// Streaming loop: fetch, process, check eligibility, repeat.
    ///
    /// The eligibility check sits between processing and the next fetch.
    /// A batch already in hand is always processed before cancellation is
    /// honored; only future fetches are discarded.
    async fn streaming_execute(
        &self,
        context: &ShardingContext,
    ) -> ExecutionResult<(Termination, CycleTotals)> {
        let mut totals = CycleTotals::default();

        let mut batch = self.fetch_data(context).await?;
        while !batch.is_empty() {
            totals.batches += 1;
            totals.items += batch.len();
            self.process_data(context, batch).await?;

            if !self.check_eligibility(context).await? {
                debug!(
                    batches_processed = totals.batches,
                    "Eligibility lost, stopping before next fetch"
                );
                return Ok((Termination::Cancelled, totals));
            }

            batch = self.fetch_data(context).await?;
        }

        Ok((Termination::Drained, totals))
    }

    /// One-off cycle: fetch once, process if non-empty, terminate.
    ///
    /// No eligibility check and no re-fetch, regardless of batch size or
    /// processing outcome.
    async fn one_off_execute(
        &self,
        context: &ShardingContext,
    ) -> ExecutionResult<(Termination, CycleTotals)> {
        let mut totals = CycleTotals::default();

        let batch = self.fetch_data(context).await?;
        if !batch.is_empty() {
            totals.batches = 1;
            totals.items = batch.len();
            self.process_data(context, batch).await?;
        }

        Ok((Termination::Completed, totals))
    }

    async fn fetch_data(&self, context: &ShardingContext) -> ExecutionResult<Vec<S::Item>> {
        self.source
            .fetch_data(context)
            .await
            .map_err(|source| ExecutionError::FetchFailure {
                job_name: context.job_name.clone(),
                sharding_item: context.sharding_item,
                source,
            })
    }

    async fn process_data(
        &self,
        context: &ShardingContext,
        batch: Vec<S::Item>,
    ) -> ExecutionResult<()> {
        let batch_size = batch.len();
        self.processor
            .process_data(context, batch)
            .await
            .map_err(|source| ExecutionError::ProcessFailure {
                job_name: context.job_name.clone(),
                sharding_item: context.sharding_item,
                batch_size,
                source,
            })
    }

    async fn check_eligibility(&self, context: &ShardingContext) -> ExecutionResult<bool> {
        self.probe
            .is_eligible_for_job_running()
            .await
            .map_err(|source| ExecutionError::EligibilityQueryFailure {
                job_name: context.job_name.clone(),
                source,
            })
    }
}
