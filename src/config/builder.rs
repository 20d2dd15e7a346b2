//! Type-safe builder for `IconEngineConfig` using the typestate pattern
//!
//! The storage directory is the one required field; `build()` only exists
//! once it has been provided, so a misconfigured engine fails to compile
//! rather than at runtime.

use std::marker::PhantomData;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::storage::ExternalIndex;

use super::{
    DEFAULT_FAILURE_TTL, DEFAULT_MAX_ICON_BYTES, DEFAULT_MEMORY_CACHE_CAPACITY,
    DEFAULT_MINIMUM_SIZE_AFTER_SCALING, DEFAULT_NETWORK_TIMEOUT, DEFAULT_TARGET_SIZE,
    IconEngineConfig, default_user_agent,
};

/// Type state marking that the storage directory has been set
pub struct WithStorageDir;

pub struct IconEngineConfigBuilder<State = ()> {
    storage_dir: Option<PathBuf>,
    memory_cache_capacity: usize,
    failure_ttl: Duration,
    network_timeout: Duration,
    max_icon_bytes: usize,
    default_target_size: u32,
    minimum_size_after_scaling: u32,
    user_agent: String,
    external_index: Option<Arc<dyn ExternalIndex>>,
    _phantom: PhantomData<State>,
}

impl Default for IconEngineConfigBuilder<()> {
    fn default() -> Self {
        Self {
            storage_dir: None,
            memory_cache_capacity: DEFAULT_MEMORY_CACHE_CAPACITY,
            failure_ttl: DEFAULT_FAILURE_TTL,
            network_timeout: DEFAULT_NETWORK_TIMEOUT,
            max_icon_bytes: DEFAULT_MAX_ICON_BYTES,
            default_target_size: DEFAULT_TARGET_SIZE,
            minimum_size_after_scaling: DEFAULT_MINIMUM_SIZE_AFTER_SCALING,
            user_agent: default_user_agent(),
            external_index: None,
            _phantom: PhantomData,
        }
    }
}

impl IconEngineConfigBuilder<()> {
    /// Set the root directory for all persistent state
    pub fn storage_dir(self, dir: impl Into<PathBuf>) -> IconEngineConfigBuilder<WithStorageDir> {
        IconEngineConfigBuilder {
            storage_dir: Some(dir.into()),
            memory_cache_capacity: self.memory_cache_capacity,
            failure_ttl: self.failure_ttl,
            network_timeout: self.network_timeout,
            max_icon_bytes: self.max_icon_bytes,
            default_target_size: self.default_target_size,
            minimum_size_after_scaling: self.minimum_size_after_scaling,
            user_agent: self.user_agent,
            external_index: self.external_index,
            _phantom: PhantomData,
        }
    }
}

impl<State> IconEngineConfigBuilder<State> {
    /// Maximum number of icons kept in the in-process cache
    #[must_use]
    pub fn memory_cache_capacity(mut self, capacity: usize) -> Self {
        self.memory_cache_capacity = capacity;
        self
    }

    /// Window during which a failed icon URL is not retried
    #[must_use]
    pub fn failure_ttl(mut self, ttl: Duration) -> Self {
        self.failure_ttl = ttl;
        self
    }

    /// Per-request network timeout for the network loader
    #[must_use]
    pub fn network_timeout(mut self, timeout: Duration) -> Self {
        self.network_timeout = timeout;
        self
    }

    /// Hard cap on fetched icon body size
    #[must_use]
    pub fn max_icon_bytes(mut self, bytes: usize) -> Self {
        self.max_icon_bytes = bytes;
        self
    }

    /// Edge length requests resolve to unless overridden per request
    #[must_use]
    pub fn default_target_size(mut self, size: u32) -> Self {
        self.default_target_size = size;
        self
    }

    /// Floor below which icons are left at native size instead of upscaled
    #[must_use]
    pub fn minimum_size_after_scaling(mut self, size: u32) -> Self {
        self.minimum_size_after_scaling = size;
        self
    }

    /// User agent sent by the network loader
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Plug in an application-provided icon blob source
    #[must_use]
    pub fn external_index(mut self, index: Arc<dyn ExternalIndex>) -> Self {
        self.external_index = Some(index);
        self
    }
}

impl IconEngineConfigBuilder<WithStorageDir> {
    /// Produce the immutable engine configuration
    #[must_use]
    pub fn build(self) -> IconEngineConfig {
        IconEngineConfig {
            // Invariant of the type state: storage_dir was set.
            storage_dir: self.storage_dir.unwrap_or_default(),
            memory_cache_capacity: self.memory_cache_capacity.max(1),
            failure_ttl: self.failure_ttl,
            network_timeout: self.network_timeout,
            max_icon_bytes: self.max_icon_bytes,
            default_target_size: self.default_target_size.max(1),
            minimum_size_after_scaling: self.minimum_size_after_scaling,
            user_agent: self.user_agent,
            external_index: self.external_index,
        }
    }
}
