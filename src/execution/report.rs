//! Invocation outcome reporting.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::ProcessingMode;

/// How an invocation came to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// The source reported no more data
    Drained,
    /// Eligibility was lost at the checkpoint between cycles
    Cancelled,
    /// The one-off cycle finished
    Completed,
}

/// Summary of one invocation, returned to the invoking framework.
///
/// Purely observational; callers that only care about success can drop it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionReport {
    /// Invocation this report describes
    pub invocation_id: Uuid,
    /// Job name
    pub job_name: String,
    /// Shard the invocation processed
    pub sharding_item: u32,
    /// Mode the invocation ran under
    pub mode: ProcessingMode,
    /// Why the loop stopped
    pub termination: Termination,
    /// Number of non-empty batches handed to the processor
    pub batches_processed: usize,
    /// Total work items across those batches
    pub items_processed: usize,
    /// When the invocation began
    pub started_at: DateTime<Utc>,
    /// When the loop terminated
    pub completed_at: DateTime<Utc>,
}
