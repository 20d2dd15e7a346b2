//! The unit of work: one "find an icon for this page" operation
//!
//! Requests are staged through [`builder::IconRequestBuilder`] and become
//! immutable snapshots at `build()`. A task owns its request exclusively
//! while executing; the preparer stage is the only thing that still touches
//! the candidate set, and it runs inside that exclusive ownership.

pub mod builder;

pub use builder::IconRequestBuilder;

use url::Url;

use crate::descriptor::CandidateSet;
use crate::response::IconResponse;

/// Callback invoked with the resolved icon
pub type IconCallback = Box<dyn FnOnce(IconResponse) + Send + Sync + 'static>;

/// Why a request could not be built
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// `build()` was called without a page URL
    #[error("request has no page URL")]
    MissingPageUrl,

    /// The page URL did not parse
    #[error("invalid page URL {url:?}: {source}")]
    InvalidPageUrl {
        url: String,
        source: url::ParseError,
    },

    /// The builder was not created from an engine, so it cannot submit
    #[error("builder is not bound to an engine; use IconEngine::for_page or IconEngine::submit")]
    NotBound,
}

/// One icon resolution request, immutable once built
pub struct IconRequest {
    pub(crate) page_url: Url,
    pub(crate) privileged: bool,
    pub(crate) private_mode: bool,
    pub(crate) candidates: CandidateSet,
    pub(crate) skip_network: bool,
    pub(crate) skip_disk: bool,
    pub(crate) skip_memory: bool,
    pub(crate) target_size: u32,
    pub(crate) minimum_size_after_scaling: u32,
    pub(crate) prepare_only: bool,
    pub(crate) run_callback_on_worker: bool,
    pub(crate) callback: Option<IconCallback>,
}

impl IconRequest {
    /// The page this request resolves an icon for
    #[must_use]
    pub fn page_url(&self) -> &Url {
        &self.page_url
    }

    /// Current ranked candidate set
    #[must_use]
    pub fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    /// Desired output edge length in pixels
    #[must_use]
    pub fn target_size(&self) -> u32 {
        self.target_size
    }

    /// Whether this request may read privileged/packaged sources
    #[must_use]
    pub fn privileged(&self) -> bool {
        self.privileged
    }

    /// Whether this request only warms the URL index
    #[must_use]
    pub fn prepare_only(&self) -> bool {
        self.prepare_only
    }

    /// Attach the callback invoked with the resolved icon
    ///
    /// Only meaningful before the request is submitted; `execute` does this
    /// for you.
    pub fn set_callback(&mut self, callback: impl FnOnce(IconResponse) + Send + Sync + 'static) {
        self.callback = Some(Box::new(callback));
    }
}

// The pipeline worker holds `&IconRequest` across await points inside a
// spawned task, so the request (callback included) must be Send and Sync.
const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<IconRequest>();
};

impl std::fmt::Debug for IconRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IconRequest")
            .field("page_url", &self.page_url.as_str())
            .field("privileged", &self.privileged)
            .field("private_mode", &self.private_mode)
            .field("candidates", &self.candidates.len())
            .field("skip_network", &self.skip_network)
            .field("skip_disk", &self.skip_disk)
            .field("skip_memory", &self.skip_memory)
            .field("target_size", &self.target_size)
            .field("minimum_size_after_scaling", &self.minimum_size_after_scaling)
            .field("prepare_only", &self.prepare_only)
            .field("run_callback_on_worker", &self.run_callback_on_worker)
            .field("has_callback", &self.callback.is_some())
            .finish()
    }
}
