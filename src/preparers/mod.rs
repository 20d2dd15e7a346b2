//! Candidate preparation stage
//!
//! Preparers run in a fixed order before any loading happens and shape the
//! request's candidate set:
//! - `LookupIconUrl` injects the remembered icon URL for the page
//! - `FilterMimeTypes` drops candidates this engine cannot decode
//! - `FilterPrivileged` drops internal-namespace candidates for web content
//! - `AddSpecialPageIcons` injects bundled icons for internal pages
//! - `AddDefaultIconUrl` appends the `/favicon.ico` guess
//! - `FilterKnownFailures` drops URLs that failed recently
//!
//! The set of preparers is closed, so dispatch is an enum rather than a
//! boxed trait object.

pub mod add_default_icon_url;
pub mod add_special_page_icons;
pub mod filter_known_failures;
pub mod filter_mime_types;
pub mod filter_privileged;
pub mod lookup_icon_url;

pub use add_default_icon_url::AddDefaultIconUrl;
pub use add_special_page_icons::AddSpecialPageIcons;
pub use filter_known_failures::FilterKnownFailures;
pub use filter_mime_types::FilterMimeTypes;
pub use filter_privileged::FilterPrivileged;
pub use lookup_icon_url::LookupIconUrl;

use crate::pipeline::PipelineContext;
use crate::request::IconRequest;

/// One step of the preparation chain
#[derive(Debug)]
pub enum IconPreparer {
    LookupIconUrl(LookupIconUrl),
    FilterMimeTypes(FilterMimeTypes),
    FilterPrivileged(FilterPrivileged),
    AddSpecialPageIcons(AddSpecialPageIcons),
    AddDefaultIconUrl(AddDefaultIconUrl),
    FilterKnownFailures(FilterKnownFailures),
}

impl IconPreparer {
    /// Apply this preparer to the request's candidate set
    pub(crate) async fn prepare(&self, ctx: &PipelineContext, request: &mut IconRequest) {
        match self {
            IconPreparer::LookupIconUrl(preparer) => preparer.prepare(ctx, request).await,
            IconPreparer::FilterMimeTypes(preparer) => preparer.prepare(request),
            IconPreparer::FilterPrivileged(preparer) => preparer.prepare(request),
            IconPreparer::AddSpecialPageIcons(preparer) => preparer.prepare(request),
            IconPreparer::AddDefaultIconUrl(preparer) => preparer.prepare(request),
            IconPreparer::FilterKnownFailures(preparer) => preparer.prepare(ctx, request),
        }
    }

    /// Stable name used in trace logging
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            IconPreparer::LookupIconUrl(_) => "lookup_icon_url",
            IconPreparer::FilterMimeTypes(_) => "filter_mime_types",
            IconPreparer::FilterPrivileged(_) => "filter_privileged",
            IconPreparer::AddSpecialPageIcons(_) => "add_special_page_icons",
            IconPreparer::AddDefaultIconUrl(_) => "add_default_icon_url",
            IconPreparer::FilterKnownFailures(_) => "filter_known_failures",
        }
    }
}

/// The fixed preparation order every request goes through
#[must_use]
pub fn default_chain() -> Vec<IconPreparer> {
    vec![
        IconPreparer::LookupIconUrl(LookupIconUrl),
        IconPreparer::FilterMimeTypes(FilterMimeTypes),
        IconPreparer::FilterPrivileged(FilterPrivileged),
        IconPreparer::AddSpecialPageIcons(AddSpecialPageIcons),
        IconPreparer::AddDefaultIconUrl(AddDefaultIconUrl),
        IconPreparer::FilterKnownFailures(FilterKnownFailures),
    ]
}
