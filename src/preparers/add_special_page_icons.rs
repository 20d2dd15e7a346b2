//! Bundled icons for internal pages

use log::debug;

use crate::descriptor::{IconDescriptor, IconKind};
use crate::request::IconRequest;
use crate::storage::DEFAULT_PAGE_ICON_URL;

/// Schemes that identify application-internal pages
const INTERNAL_SCHEMES: &[&str] = &["about", "resource"];

/// Injects the bundled default icon for application-internal pages
///
/// Runs after the privilege filter on purpose: the candidate it adds points
/// into the packaged namespace and would otherwise be stripped from
/// unprivileged requests. Internal pages have no markup-declared icons, so
/// without this they would always fall through to the generator.
#[derive(Debug)]
pub struct AddSpecialPageIcons;

impl AddSpecialPageIcons {
    pub(crate) fn prepare(&self, request: &mut IconRequest) {
        if !INTERNAL_SCHEMES.contains(&request.page_url.scheme()) {
            return;
        }

        if request
            .candidates
            .insert(IconDescriptor::new(DEFAULT_PAGE_ICON_URL, IconKind::Favicon))
        {
            debug!("Injected packaged icon for internal page {}", request.page_url);
        }
    }
}
