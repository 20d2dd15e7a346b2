//! The engine facade
//!
//! `IconEngine` owns the storage tiers and the serializing dispatcher and
//! hands out request builders bound to itself. Cloning the engine is cheap;
//! all clones feed the same worker and share the same caches.

use std::sync::Arc;

use anyhow::Result;
use log::info;

use crate::config::IconEngineConfig;
use crate::pipeline::{Dispatcher, LoadHandle, PipelineContext};
use crate::request::{IconRequest, IconRequestBuilder};
use crate::storage::Stores;

/// Shared engine state behind the facade
pub(crate) struct EngineInner {
    pub(crate) config: IconEngineConfig,
    dispatcher: Dispatcher,
}

impl EngineInner {
    pub(crate) fn submit(&self, request: IconRequest) -> LoadHandle {
        self.dispatcher.submit(request)
    }
}

/// Resolves and caches website icons
///
/// One engine per storage directory; concurrent engines over the same
/// directory are not supported.
#[derive(Clone)]
pub struct IconEngine {
    inner: Arc<EngineInner>,
}

impl IconEngine {
    /// Open the storage tiers and start the pipeline worker
    ///
    /// # Errors
    ///
    /// Fails when the storage directory cannot be created or the HTTP
    /// client cannot be built.
    pub async fn new(config: IconEngineConfig) -> Result<Self> {
        let stores = Stores::open(&config).await?;
        let ctx = Arc::new(PipelineContext {
            stores,
            config: config.clone(),
        });
        let dispatcher = Dispatcher::spawn(ctx);

        info!("Icon engine started over {}", config.storage_dir.display());
        Ok(Self {
            inner: Arc::new(EngineInner { config, dispatcher }),
        })
    }

    /// Start a request for the icon of a page
    ///
    /// The URL is validated when the builder's `build()`, `execute()`, or
    /// `dispatch()` runs.
    #[must_use]
    pub fn for_page(&self, page_url: impl Into<String>) -> IconRequestBuilder {
        IconRequestBuilder::bound(Arc::clone(&self.inner), page_url)
    }

    /// Submit an already built request
    pub fn submit(&self, request: IconRequest) -> LoadHandle {
        self.inner.submit(request)
    }

    /// The configuration this engine runs with
    #[must_use]
    pub fn config(&self) -> &IconEngineConfig {
        &self.inner.config
    }
}
