//! Drop candidates this engine cannot decode

use log::debug;

use crate::descriptor::CONTAINER_MIME_TYPES;
use crate::request::IconRequest;

/// MIME types the decoder is known to reject
const UNDECODABLE_MIME_TYPES: &[&str] = &["image/svg+xml"];

/// Removes candidates whose declared MIME type cannot be decoded
///
/// Candidates without a declared type are kept; the decoder sniffs the
/// actual bytes later. A declared non-`image/*` type is treated as
/// undecodable outright, except the ICO container aliases servers commonly
/// declare (`text/ico`, `application/ico`), which the decoder handles.
#[derive(Debug)]
pub struct FilterMimeTypes;

impl FilterMimeTypes {
    pub(crate) fn prepare(&self, request: &mut IconRequest) {
        let before = request.candidates.len();
        request.candidates.retain(|descriptor| {
            let Some(mime) = descriptor.mime_type.as_deref() else {
                return true;
            };
            if CONTAINER_MIME_TYPES.contains(&mime) {
                return true;
            }
            mime.starts_with("image/") && !UNDECODABLE_MIME_TYPES.contains(&mime)
        });

        let dropped = before - request.candidates.len();
        if dropped > 0 {
            debug!("Dropped {dropped} undecodable candidates for {}", request.page_url);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{IconDescriptor, IconKind};
    use crate::request::IconRequestBuilder;

    fn request_with(candidates: Vec<IconDescriptor>) -> IconRequest {
        let mut builder = IconRequestBuilder::new("https://example.com/");
        for candidate in candidates {
            builder = builder.with_candidate(candidate);
        }
        builder.build().expect("request should build")
    }

    #[test]
    fn test_svg_and_non_image_candidates_dropped() {
        let mut request = request_with(vec![
            IconDescriptor::new("https://e.com/a.svg", IconKind::Favicon)
                .with_mime_type("image/svg+xml"),
            IconDescriptor::new("https://e.com/a.html", IconKind::Favicon)
                .with_mime_type("text/html"),
            IconDescriptor::new("https://e.com/a.png", IconKind::Favicon)
                .with_mime_type("image/png"),
        ]);

        FilterMimeTypes.prepare(&mut request);

        let urls: Vec<&str> = request.candidates().iter().map(|d| d.url.as_str()).collect();
        assert_eq!(urls, vec!["https://e.com/a.png"]);
    }

    #[test]
    fn test_ico_container_aliases_survive_filter() {
        let mut request = request_with(vec![
            IconDescriptor::new("https://e.com/a.ico", IconKind::Favicon)
                .with_mime_type("application/ico"),
            IconDescriptor::new("https://e.com/b.ico", IconKind::Favicon)
                .with_mime_type("text/ico"),
            IconDescriptor::new("https://e.com/c.ico", IconKind::Favicon)
                .with_mime_type("image/vnd.microsoft.icon"),
        ]);

        FilterMimeTypes.prepare(&mut request);
        assert_eq!(request.candidates().len(), 3);
    }

    #[test]
    fn test_undeclared_mime_type_kept() {
        let mut request = request_with(vec![IconDescriptor::new(
            "https://e.com/favicon.ico",
            IconKind::Generic,
        )]);

        FilterMimeTypes.prepare(&mut request);
        assert_eq!(request.candidates().len(), 1);
    }
}
