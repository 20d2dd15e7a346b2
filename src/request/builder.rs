//! Fluent construction of icon requests
//!
//! A builder obtained from [`crate::IconEngine::for_page`] is bound to its
//! engine and can submit directly with `execute` or `dispatch`. A standalone
//! builder made with [`IconRequestBuilder::new`] can only `build()`; the
//! resulting request goes through [`crate::IconEngine::submit`].

use std::sync::Arc;

use url::Url;

use crate::config::{DEFAULT_MINIMUM_SIZE_AFTER_SCALING, DEFAULT_TARGET_SIZE};
use crate::descriptor::{CandidateSet, IconDescriptor};
use crate::engine::EngineInner;
use crate::pipeline::LoadHandle;
use crate::response::IconResponse;

use super::{IconRequest, RequestError};

/// Builder for [`IconRequest`]
pub struct IconRequestBuilder {
    pub(crate) engine: Option<Arc<EngineInner>>,
    page_url: Option<String>,
    privileged: bool,
    private_mode: bool,
    candidates: Vec<IconDescriptor>,
    skip_network: bool,
    skip_disk: bool,
    skip_memory: bool,
    target_size: u32,
    minimum_size_after_scaling: u32,
    prepare_only: bool,
    run_callback_on_worker: bool,
}

impl IconRequestBuilder {
    /// Start an unbound builder for the given page URL
    #[must_use]
    pub fn new(page_url: impl Into<String>) -> Self {
        Self {
            engine: None,
            page_url: Some(page_url.into()),
            privileged: false,
            private_mode: false,
            candidates: Vec::new(),
            skip_network: false,
            skip_disk: false,
            skip_memory: false,
            target_size: DEFAULT_TARGET_SIZE,
            minimum_size_after_scaling: DEFAULT_MINIMUM_SIZE_AFTER_SCALING,
            prepare_only: false,
            run_callback_on_worker: false,
        }
    }

    pub(crate) fn bound(engine: Arc<EngineInner>, page_url: impl Into<String>) -> Self {
        let mut builder = Self::new(page_url);
        builder.target_size = engine.config.default_target_size;
        builder.minimum_size_after_scaling = engine.config.minimum_size_after_scaling;
        builder.engine = Some(engine);
        builder
    }

    /// Add a candidate icon location advertised by the page
    #[must_use]
    pub fn with_candidate(mut self, descriptor: IconDescriptor) -> Self {
        self.candidates.push(descriptor);
        self
    }

    /// Mark the request as coming from a privileged (internal) context
    #[must_use]
    pub fn privileged(mut self, privileged: bool) -> Self {
        self.privileged = privileged;
        self
    }

    /// Resolve without leaving persistent traces (no disk writes)
    #[must_use]
    pub fn private_mode(mut self, private_mode: bool) -> Self {
        self.private_mode = private_mode;
        self
    }

    /// Never touch the network for this request
    #[must_use]
    pub fn skip_network(mut self, skip: bool) -> Self {
        self.skip_network = skip;
        self
    }

    /// Never read from the disk cache for this request
    #[must_use]
    pub fn skip_disk(mut self, skip: bool) -> Self {
        self.skip_disk = skip;
        self
    }

    /// Never read from the memory cache for this request
    #[must_use]
    pub fn skip_memory(mut self, skip: bool) -> Self {
        self.skip_memory = skip;
        self
    }

    /// Desired output edge length in pixels
    #[must_use]
    pub fn target_size(mut self, size: u32) -> Self {
        self.target_size = size.max(1);
        self
    }

    /// Floor below which icons stay at native size instead of upscaling
    #[must_use]
    pub fn minimum_size_after_scaling(mut self, size: u32) -> Self {
        self.minimum_size_after_scaling = size;
        self
    }

    /// Only run the preparer chain to warm the URL index, skip loading
    #[must_use]
    pub fn prepare_only(mut self, prepare_only: bool) -> Self {
        self.prepare_only = prepare_only;
        self
    }

    /// Invoke the callback directly on the pipeline worker
    ///
    /// The default hands the callback to a blocking-friendly task so a slow
    /// callback cannot stall the serialized pipeline.
    #[must_use]
    pub fn run_callback_on_worker(mut self, on_worker: bool) -> Self {
        self.run_callback_on_worker = on_worker;
        self
    }

    /// Snapshot the builder into an immutable request
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::MissingPageUrl`] when no page URL was given
    /// and [`RequestError::InvalidPageUrl`] when it does not parse.
    pub fn build(&self) -> Result<IconRequest, RequestError> {
        let raw = self
            .page_url
            .as_deref()
            .filter(|raw| !raw.trim().is_empty())
            .ok_or(RequestError::MissingPageUrl)?;
        let page_url = Url::parse(raw).map_err(|source| RequestError::InvalidPageUrl {
            url: raw.to_string(),
            source,
        })?;

        Ok(IconRequest {
            page_url,
            privileged: self.privileged,
            private_mode: self.private_mode,
            candidates: self.candidates.iter().cloned().collect::<CandidateSet>(),
            skip_network: self.skip_network,
            skip_disk: self.skip_disk,
            skip_memory: self.skip_memory,
            target_size: self.target_size,
            minimum_size_after_scaling: self.minimum_size_after_scaling,
            prepare_only: self.prepare_only,
            run_callback_on_worker: self.run_callback_on_worker,
            callback: None,
        })
    }

    /// Build, attach a callback, and submit to the bound engine
    ///
    /// # Errors
    ///
    /// Fails like [`Self::build`], or with [`RequestError::NotBound`] when
    /// the builder was not created through an engine.
    pub fn execute(
        self,
        callback: impl FnOnce(IconResponse) + Send + Sync + 'static,
    ) -> Result<LoadHandle, RequestError> {
        let mut request = self.build()?;
        request.set_callback(callback);
        let engine = self.engine.ok_or(RequestError::NotBound)?;
        Ok(engine.submit(request))
    }

    /// Build and submit without a callback
    ///
    /// Useful with `prepare_only` requests, where the work is the side
    /// effect of warming the URL index.
    ///
    /// # Errors
    ///
    /// Fails like [`Self::build`], or with [`RequestError::NotBound`] when
    /// the builder was not created through an engine.
    pub fn dispatch(self) -> Result<LoadHandle, RequestError> {
        let request = self.build()?;
        let engine = self.engine.ok_or(RequestError::NotBound)?;
        Ok(engine.submit(request))
    }
}

impl std::fmt::Debug for IconRequestBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IconRequestBuilder")
            .field("bound", &self.engine.is_some())
            .field("page_url", &self.page_url)
            .field("candidates", &self.candidates.len())
            .field("target_size", &self.target_size)
            .field("prepare_only", &self.prepare_only)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::IconKind;

    #[test]
    fn test_build_requires_valid_page_url() {
        let err = IconRequestBuilder::new("not a url")
            .build()
            .expect_err("invalid URL should be rejected");
        assert!(matches!(err, RequestError::InvalidPageUrl { .. }));
    }

    #[test]
    fn test_build_collects_candidates_ranked() {
        let request = IconRequestBuilder::new("https://example.com/page")
            .with_candidate(IconDescriptor::new("https://example.com/a.png", IconKind::Favicon))
            .with_candidate(
                IconDescriptor::new("https://example.com/b.png", IconKind::TouchIcon),
            )
            .build()
            .expect("request should build");

        assert_eq!(request.candidates.len(), 2);
        assert_eq!(
            request.candidates.best().map(|d| d.url.as_str()),
            Some("https://example.com/b.png")
        );
    }

    #[test]
    fn test_blank_page_url_is_missing() {
        let err = IconRequestBuilder::new("  ")
            .build()
            .expect_err("blank URL should be rejected");
        assert!(matches!(err, RequestError::MissingPageUrl));
    }

    #[test]
    fn test_unbound_builder_cannot_execute() {
        let err = IconRequestBuilder::new("https://example.com/")
            .execute(|_| {})
            .expect_err("unbound builder must not submit");
        assert!(matches!(err, RequestError::NotBound));
    }
}
