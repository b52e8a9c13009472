//! Collaborator contracts consumed by the execution core.
//!
//! These three capabilities are the extension points a job implementation
//! provides. The executor makes no assumption about their latency - fetches
//! and processing may block on network or storage I/O, and timeout policy
//! belongs to the implementations or an outer supervisory layer, never to the
//! loop itself.

use async_trait::async_trait;

use super::errors::BoxError;
use super::sharding_context::ShardingContext;

/// Supplies batches of work items for a shard.
#[async_trait]
pub trait BatchSource: Send + Sync {
    type Item: Send + 'static;

    /// Fetch the next batch for the shard.
    ///
    /// An empty batch signals the source is exhausted for this invocation.
    async fn fetch_data(&self, context: &ShardingContext) -> Result<Vec<Self::Item>, BoxError>;
}

/// Consumes one batch of work items for a shard.
#[async_trait]
pub trait BatchProcessor: Send + Sync {
    type Item: Send + 'static;

    /// Process one batch. The executor only ever passes non-empty batches,
    /// each exactly once per invocation, in fetch order.
    async fn process_data(
        &self,
        context: &ShardingContext,
        batch: Vec<Self::Item>,
    ) -> Result<(), BoxError>;
}

/// Reports whether the current invocation may keep consuming batches.
///
/// Implementations typically consult external run state: the job was disabled
/// or paused, or the shard was reassigned to another node mid-run.
#[async_trait]
pub trait EligibilityProbe: Send + Sync {
    /// Queried at the checkpoint between processing a batch and the next
    /// fetch. The answer reflects run state at the instant of the call; a
    /// query failure is a hard error, never a default in either direction.
    async fn is_eligible_for_job_running(&self) -> Result<bool, BoxError>;
}
