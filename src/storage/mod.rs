//! Storage collaborators shared by the pipeline
//!
//! Every cache and index the loaders and processors touch lives behind the
//! types in this module; pipeline stages never reach into files or maps
//! directly. Combined with the dispatcher's one-task-at-a-time execution
//! this keeps concurrent requests from racing on the same key.

pub mod disk_cache;
pub mod external;
pub mod failure_tracker;
pub mod legacy_store;
pub mod memory_cache;
pub mod packaged;
pub mod url_index;

pub use disk_cache::DiskCache;
pub use external::ExternalIndex;
pub use failure_tracker::FailureTracker;
pub use legacy_store::LegacyStore;
pub use memory_cache::{CachedIcon, MemoryCache};
pub use packaged::{DEFAULT_PAGE_ICON_URL, PackagedIcons};
pub use url_index::UrlIndex;

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::config::IconEngineConfig;
use crate::fetch::HttpFetcher;

/// All storage tiers and fetch backends, opened once per engine
pub(crate) struct Stores {
    pub memory: MemoryCache,
    pub disk: DiskCache,
    pub url_index: UrlIndex,
    pub failures: FailureTracker,
    pub legacy: LegacyStore,
    pub packaged: PackagedIcons,
    pub external: Option<Arc<dyn ExternalIndex>>,
    pub http: HttpFetcher,
}

impl Stores {
    /// Open every tier under the configured storage directory
    pub(crate) async fn open(config: &IconEngineConfig) -> Result<Self> {
        tokio::fs::create_dir_all(&config.storage_dir)
            .await
            .context("Failed to create icon storage directory")?;

        Ok(Self {
            memory: MemoryCache::new(config.memory_cache_capacity),
            disk: DiskCache::open(config.storage_dir.join("icons")).await?,
            url_index: UrlIndex::open(&config.storage_dir).await?,
            failures: FailureTracker::new(config.failure_ttl),
            legacy: LegacyStore::new(config.storage_dir.join("legacy")),
            packaged: PackagedIcons::new(),
            external: config.external_index.clone(),
            http: HttpFetcher::new(
                config.network_timeout,
                config.max_icon_bytes,
                &config.user_agent,
            )?,
        })
    }
}
