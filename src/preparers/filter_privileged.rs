//! Keep internal icon namespaces away from web content

use log::warn;

use crate::request::IconRequest;
use crate::storage::PackagedIcons;

/// Removes internal-namespace candidates from unprivileged requests
///
/// Ordinary web pages must not be able to address `resource://` or
/// `about:` URLs; only requests flagged as privileged (made on behalf of
/// the application itself) keep them.
#[derive(Debug)]
pub struct FilterPrivileged;

impl FilterPrivileged {
    pub(crate) fn prepare(&self, request: &mut IconRequest) {
        if request.privileged {
            return;
        }

        let page_url = request.page_url.clone();
        request.candidates.retain(|descriptor| {
            let internal =
                PackagedIcons::is_resource_url(&descriptor.url) || descriptor.url.starts_with("about:");
            if internal {
                warn!(
                    "Dropping internal candidate {} from unprivileged request for {page_url}",
                    descriptor.url
                );
            }
            !internal
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{IconDescriptor, IconKind};
    use crate::request::IconRequestBuilder;

    #[test]
    fn test_unprivileged_request_loses_resource_candidates() {
        let mut request = IconRequestBuilder::new("https://example.com/")
            .with_candidate(IconDescriptor::new("resource://siteicons/x", IconKind::Favicon))
            .with_candidate(IconDescriptor::new("about:config", IconKind::Favicon))
            .with_candidate(IconDescriptor::new("https://example.com/i.png", IconKind::Favicon))
            .build()
            .expect("request should build");

        FilterPrivileged.prepare(&mut request);

        let urls: Vec<&str> = request.candidates().iter().map(|d| d.url.as_str()).collect();
        assert_eq!(urls, vec!["https://example.com/i.png"]);
    }

    #[test]
    fn test_privileged_request_keeps_resource_candidates() {
        let mut request = IconRequestBuilder::new("about:home")
            .privileged(true)
            .with_candidate(IconDescriptor::new("resource://siteicons/x", IconKind::Favicon))
            .build()
            .expect("request should build");

        FilterPrivileged.prepare(&mut request);
        assert_eq!(request.candidates().len(), 1);
    }
}
