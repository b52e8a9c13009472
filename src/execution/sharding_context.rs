//! Sharding context for a single invocation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Immutable description of the shard one invocation must process.
///
/// Built by the surrounding scheduler from the resolved job configuration and
/// this node's shard assignment, then passed by reference through every
/// collaborator call of the invocation. The execution core never mutates it
/// and never re-resolves it mid-run; when shards run concurrently, each
/// invocation owns its own context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShardingContext {
    /// Unique id for this invocation
    pub invocation_id: Uuid,
    /// Job name
    pub job_name: String,
    /// Total number of shards the job's workload is divided into
    pub sharding_total_count: u32,
    /// Ordinal of the shard assigned to this invocation
    pub sharding_item: u32,
    /// Human-readable parameter mapped to this shard item, if configured
    pub sharding_parameter: Option<String>,
    /// Job-level custom parameter, if configured
    pub job_parameter: Option<String>,
    /// Job-level custom key/value parameters
    pub job_parameters: HashMap<String, String>,
}

impl ShardingContext {
    /// Create a context for one shard of a job, with a fresh invocation id.
    pub fn new(job_name: impl Into<String>, sharding_item: u32, sharding_total_count: u32) -> Self {
        Self {
            invocation_id: Uuid::new_v4(),
            job_name: job_name.into(),
            sharding_total_count,
            sharding_item,
            sharding_parameter: None,
            job_parameter: None,
            job_parameters: HashMap::new(),
        }
    }

    /// Attach the human-readable parameter mapped to this shard item.
    pub fn with_sharding_parameter(mut self, parameter: impl Into<String>) -> Self {
        self.sharding_parameter = Some(parameter.into());
        self
    }

    /// Attach the job-level custom parameter.
    pub fn with_job_parameter(mut self, parameter: impl Into<String>) -> Self {
        self.job_parameter = Some(parameter.into());
        self
    }

    /// Attach job-level custom key/value parameters.
    pub fn with_job_parameters(mut self, parameters: HashMap<String, String>) -> Self {
        self.job_parameters = parameters;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_carries_shard_identity() {
        let context = ShardingContext::new("order_sync", 2, 8)
            .with_sharding_parameter("shanghai")
            .with_job_parameter("full-refresh");

        assert_eq!(context.job_name, "order_sync");
        assert_eq!(context.sharding_item, 2);
        assert_eq!(context.sharding_total_count, 8);
        assert_eq!(context.sharding_parameter.as_deref(), Some("shanghai"));
        assert_eq!(context.job_parameter.as_deref(), Some("full-refresh"));
        assert!(context.job_parameters.is_empty());
    }

    #[test]
    fn invocation_ids_are_unique_per_context() {
        let a = ShardingContext::new("order_sync", 0, 1);
        let b = ShardingContext::new("order_sync", 0, 1);
        assert_ne!(a.invocation_id, b.invocation_id);
    }

    #[test]
    fn context_round_trips_through_serde() {
        let mut parameters = HashMap::new();
        parameters.insert("region".to_string(), "eu-west-1".to_string());

        let context = ShardingContext::new("inventory_sync", 1, 4).with_job_parameters(parameters);

        let json = serde_json::to_string(&context).unwrap();
        let restored: ShardingContext = serde_json::from_str(&json).unwrap();
        assert_eq!(context, restored);
    }
}
