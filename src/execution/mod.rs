//! # Execution Core
//!
//! The fetch/process/cancel loop for a single scheduled job invocation.
//!
//! ## Core Components
//!
//! - **DataflowExecutor**: mode dispatch plus the streaming and one-off loop shapes
//! - **BatchSource / BatchProcessor**: the injected capabilities that supply and
//!   consume batches of work items
//! - **EligibilityProbe**: cooperative cancellation checkpoint between cycles
//! - **ShardingContext**: immutable description of the shard this invocation owns
//! - **ExecutionReport**: per-invocation outcome summary for the caller

pub mod errors;
pub mod executor;
pub mod probes;
pub mod report;
pub mod sharding_context;
pub mod traits;

pub use errors::{BoxError, ExecutionError, ExecutionResult};
pub use executor::DataflowExecutor;
pub use probes::{AlwaysEligible, SharedRunFlag};
pub use report::{ExecutionReport, Termination};
pub use sharding_context::ShardingContext;
pub use traits::{BatchProcessor, BatchSource, EligibilityProbe};
