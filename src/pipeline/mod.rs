//! Request execution pipeline
//!
//! - [`PipelineContext`] bundles the stores and config every stage reads
//! - [`task`] runs one request through prepare, load, generate, process
//! - [`dispatcher`] serializes tasks on a single worker and hands out
//!   cancellation handles
//!
//! Stages never lock against each other: the dispatcher runs one task at a
//! time, so exclusive access to the stores is positional, not lock-based.

pub mod dispatcher;
pub mod task;

pub use dispatcher::LoadHandle;
pub use task::TaskOutcome;

pub(crate) use dispatcher::Dispatcher;

use crate::config::IconEngineConfig;
use crate::storage::Stores;

/// Shared collaborators handed to every pipeline stage
pub(crate) struct PipelineContext {
    pub stores: Stores,
    pub config: IconEngineConfig,
}
