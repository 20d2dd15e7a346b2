//! The `/favicon.ico` guess of last resort

use log::debug;

use crate::descriptor::{IconDescriptor, IconKind};
use crate::request::IconRequest;

/// Appends `{origin}/favicon.ico` as a low-priority candidate
///
/// Only applies to http(s) pages. The candidate is `Generic`, so every
/// declared icon still outranks it.
#[derive(Debug)]
pub struct AddDefaultIconUrl;

impl AddDefaultIconUrl {
    pub(crate) fn prepare(&self, request: &mut IconRequest) {
        if !matches!(request.page_url.scheme(), "http" | "https") {
            return;
        }

        let default_url = format!("{}/favicon.ico", request.page_url.origin().ascii_serialization());
        if request
            .candidates
            .insert(IconDescriptor::new(&default_url, IconKind::Generic))
        {
            debug!("Appended default candidate {default_url}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::request::IconRequestBuilder;

    #[test]
    fn test_https_page_gets_origin_favicon() {
        let mut request = IconRequestBuilder::new("https://example.com/deep/page?q=1")
            .build()
            .expect("request should build");

        AddDefaultIconUrl.prepare(&mut request);

        let best = request.candidates().best().expect("candidate expected");
        assert_eq!(best.url, "https://example.com/favicon.ico");
        assert_eq!(best.kind, IconKind::Generic);
    }

    #[test]
    fn test_declared_candidate_still_outranks_default() {
        let mut request = IconRequestBuilder::new("https://example.com/")
            .with_candidate(IconDescriptor::new("https://example.com/i.png", IconKind::Favicon))
            .build()
            .expect("request should build");

        AddDefaultIconUrl.prepare(&mut request);

        assert_eq!(request.candidates().len(), 2);
        assert_eq!(
            request.candidates().best().map(|d| d.url.as_str()),
            Some("https://example.com/i.png")
        );
    }

    #[test]
    fn test_non_http_page_unchanged() {
        let mut request = IconRequestBuilder::new("about:home")
            .build()
            .expect("request should build");

        AddDefaultIconUrl.prepare(&mut request);
        assert!(request.candidates().is_empty());
    }
}
