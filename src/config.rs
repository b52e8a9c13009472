//! Job configuration model.
//!
//! The in-memory shape of a resolved dataflow job configuration. The
//! surrounding scheduler owns parsing (registry lookups, YAML, whatever the
//! deployment uses) and trigger interpretation; this crate only reads the
//! fields that decide how a single invocation consumes data.

use crate::error::{JobflowError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How batches are consumed within a single invocation.
///
/// Resolved exactly once per invocation, before the first fetch, and never
/// re-read mid-run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessingMode {
    /// Repeated fetch/process cycles until exhaustion or loss of eligibility
    Streaming,
    /// A single fetch/process cycle regardless of data size or eligibility
    OneOff,
}

/// Resolved configuration for one dataflow job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobConfig {
    /// Job name, unique within the scheduler
    pub job_name: String,
    /// Trigger expression, held for the scheduler but never interpreted here
    pub cron: Option<String>,
    /// Total number of shards the job's workload is divided into
    pub sharding_total_count: u32,
    /// Raw shard-to-parameter mapping, e.g. `"0=beijing,1=shanghai"`
    pub sharding_item_parameters: Option<String>,
    /// Job-level custom parameter
    pub job_parameter: Option<String>,
    /// Human-readable description
    pub description: Option<String>,
    /// Whether invocations consume batches continuously or one-shot
    pub streaming_process: bool,
    /// Job-level custom key/value properties
    pub job_properties: HashMap<String, String>,
}

impl Default for JobConfig {
    fn default() -> Self {
        Self {
            job_name: String::new(),
            cron: None,
            sharding_total_count: 1,
            sharding_item_parameters: None,
            job_parameter: None,
            description: None,
            streaming_process: false,
            job_properties: HashMap::new(),
        }
    }
}

impl JobConfig {
    /// Create a configuration with the required fields and defaults elsewhere.
    pub fn new(job_name: impl Into<String>, sharding_total_count: u32) -> Self {
        Self {
            job_name: job_name.into(),
            sharding_total_count,
            ..Self::default()
        }
    }

    /// Set the streaming flag, consuming and returning the config.
    pub fn streaming(mut self, streaming_process: bool) -> Self {
        self.streaming_process = streaming_process;
        self
    }

    /// Build a configuration from environment variables, starting from defaults.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(job_name) = std::env::var("JOBFLOW_JOB_NAME") {
            config.job_name = job_name;
        }

        if let Ok(total_count) = std::env::var("JOBFLOW_SHARDING_TOTAL_COUNT") {
            config.sharding_total_count = total_count.parse().map_err(|e| {
                JobflowError::ConfigurationError(format!("Invalid sharding_total_count: {e}"))
            })?;
        }

        if let Ok(streaming) = std::env::var("JOBFLOW_STREAMING_PROCESS") {
            config.streaming_process = streaming.parse().map_err(|e| {
                JobflowError::ConfigurationError(format!("Invalid streaming_process: {e}"))
            })?;
        }

        if let Ok(cron) = std::env::var("JOBFLOW_CRON") {
            config.cron = Some(cron);
        }

        if let Ok(job_parameter) = std::env::var("JOBFLOW_JOB_PARAMETER") {
            config.job_parameter = Some(job_parameter);
        }

        Ok(config)
    }

    /// Create a configuration suitable for tests: one streaming shard.
    pub fn for_testing(job_name: impl Into<String>) -> Self {
        Self {
            job_name: job_name.into(),
            sharding_total_count: 1,
            streaming_process: true,
            ..Self::default()
        }
    }

    /// The processing mode a new invocation of this job runs under.
    pub fn processing_mode(&self) -> ProcessingMode {
        if self.streaming_process {
            ProcessingMode::Streaming
        } else {
            ProcessingMode::OneOff
        }
    }

    /// Check the structural constraints the scheduler relies on.
    pub fn validate(&self) -> Result<()> {
        if self.job_name.is_empty() {
            return Err(JobflowError::ValidationError(
                "job_name must not be empty".to_string(),
            ));
        }
        if self.sharding_total_count == 0 {
            return Err(JobflowError::ValidationError(
                "sharding_total_count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
