//! Engine configuration
//!
//! Built once through the typestate builder in [`builder`] and then
//! immutable for the engine's lifetime.

pub mod builder;

pub use builder::{IconEngineConfigBuilder, WithStorageDir};

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::storage::ExternalIndex;

/// Default number of icons held in the memory cache
pub const DEFAULT_MEMORY_CACHE_CAPACITY: usize = 64;

/// Default window during which a failed icon URL is not retried
pub const DEFAULT_FAILURE_TTL: Duration = Duration::from_secs(30 * 60);

/// Default per-request network timeout
pub const DEFAULT_NETWORK_TIMEOUT: Duration = Duration::from_secs(20);

/// Default cap on fetched icon body size
pub const DEFAULT_MAX_ICON_BYTES: usize = 1024 * 1024;

/// Default edge length of resolved icons
pub const DEFAULT_TARGET_SIZE: u32 = 32;

/// Default floor below which icons are not upscaled
pub const DEFAULT_MINIMUM_SIZE_AFTER_SCALING: u32 = 16;

const DEFAULT_USER_AGENT: &str = concat!("siteicons/", env!("CARGO_PKG_VERSION"));

/// Immutable engine configuration
#[derive(Clone)]
pub struct IconEngineConfig {
    /// Root directory for the disk cache, URL index, and legacy store
    pub storage_dir: PathBuf,
    /// Maximum number of icons in the in-process cache
    pub memory_cache_capacity: usize,
    /// How long a failed icon URL is skipped before being retried
    pub failure_ttl: Duration,
    /// Per-request network timeout
    pub network_timeout: Duration,
    /// Hard cap on fetched icon body size
    pub max_icon_bytes: usize,
    /// Edge length requests resolve to unless overridden per request
    pub default_target_size: u32,
    /// Upscaling floor applied unless overridden per request
    pub minimum_size_after_scaling: u32,
    /// User agent sent by the network loader
    pub user_agent: String,
    /// Optional application-provided icon blob source
    pub(crate) external_index: Option<Arc<dyn ExternalIndex>>,
}

impl IconEngineConfig {
    /// Create a builder for configuring an engine with a fluent interface
    #[must_use]
    pub fn builder() -> IconEngineConfigBuilder<()> {
        IconEngineConfigBuilder::default()
    }
}

impl std::fmt::Debug for IconEngineConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IconEngineConfig")
            .field("storage_dir", &self.storage_dir)
            .field("memory_cache_capacity", &self.memory_cache_capacity)
            .field("failure_ttl", &self.failure_ttl)
            .field("network_timeout", &self.network_timeout)
            .field("max_icon_bytes", &self.max_icon_bytes)
            .field("default_target_size", &self.default_target_size)
            .field("minimum_size_after_scaling", &self.minimum_size_after_scaling)
            .field("user_agent", &self.user_agent)
            .field("external_index", &self.external_index.is_some())
            .finish()
    }
}

pub(crate) fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}
