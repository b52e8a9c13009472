#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Jobflow Core Rust
//!
//! High-performance Rust implementation of the dataflow execution core for a
//! sharded, distributed job scheduler.
//!
//! ## Overview
//!
//! Jobflow Core owns exactly one decision: given a shard assignment, *how many
//! times* and *under what stopping conditions* is a batch of work fetched and
//! processed during a single scheduled invocation. The surrounding scheduler
//! resolves configuration, assigns shards, and fires invocations; this crate
//! drives the fetch/process/cancel loop and nothing else.
//!
//! ## Architecture
//!
//! The core follows a **capability injection** design: the executor is handed a
//! batch source, a batch processor, and an eligibility probe, and selects one
//! of two loop shapes per invocation:
//!
//! - **Streaming**: repeated fetch/process cycles until the source is drained
//!   or eligibility is lost at the checkpoint between cycles
//! - **One-off**: a single fetch/process cycle regardless of data size or
//!   eligibility
//!
//! ## Key Features
//!
//! - **Cooperative cancellation**: eligibility is polled at a single
//!   well-defined safe point, after a batch is processed and before the next
//!   fetch, so fetched data is never silently discarded
//! - **Fail-fast propagation**: collaborator errors abort the invocation
//!   unchanged, tagged with the cycle that failed
//! - **No cross-invocation state**: one executor, one sharding context, one
//!   invocation
//!
//! ## Module Organization
//!
//! - [`execution`] - The dataflow executor, collaborator traits, and outcome reporting
//! - [`config`] - Job configuration model and processing-mode resolution
//! - [`error`] - Structured error handling
//! - [`logging`] - Environment-aware structured logging setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use jobflow_core::config::JobConfig;
//! use jobflow_core::execution::{
//!     AlwaysEligible, BatchProcessor, BatchSource, DataflowExecutor, ShardingContext,
//! };
//! # use jobflow_core::execution::BoxError;
//! # use async_trait::async_trait;
//! # struct OrderSource;
//! # #[async_trait]
//! # impl BatchSource for OrderSource {
//! #     type Item = u64;
//! #     async fn fetch_data(&self, _: &ShardingContext) -> Result<Vec<u64>, BoxError> {
//! #         Ok(vec![])
//! #     }
//! # }
//! # struct OrderProcessor;
//! # #[async_trait]
//! # impl BatchProcessor for OrderProcessor {
//! #     type Item = u64;
//! #     async fn process_data(&self, _: &ShardingContext, _: Vec<u64>) -> Result<(), BoxError> {
//! #         Ok(())
//! #     }
//! # }
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = JobConfig::new("order_sync", 4).streaming(true);
//! let context = ShardingContext::new("order_sync", 0, 4);
//!
//! let executor = DataflowExecutor::from_config(&config, OrderSource, OrderProcessor, AlwaysEligible);
//! let report = executor.process(&context).await?;
//!
//! println!(
//!     "invocation {} finished: {:?} after {} batches",
//!     report.invocation_id, report.termination, report.batches_processed
//! );
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod execution;
pub mod logging;

pub use config::{JobConfig, ProcessingMode};
pub use error::{JobflowError, Result};
pub use execution::{
    AlwaysEligible, BatchProcessor, BatchSource, DataflowExecutor, EligibilityProbe,
    ExecutionError, ExecutionReport, ShardingContext, SharedRunFlag, Termination,
};
