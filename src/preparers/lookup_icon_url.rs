//! Inject the remembered icon URL for a page

use log::debug;

use crate::descriptor::{IconDescriptor, IconKind};
use crate::pipeline::PipelineContext;
use crate::request::IconRequest;

/// Adds the page's persisted icon URL as a `Lookup` candidate
///
/// The mapping comes from earlier successful loads recorded by the
/// persistence processor, so a revisit can resolve without re-discovering
/// the icon from page markup.
#[derive(Debug)]
pub struct LookupIconUrl;

impl LookupIconUrl {
    pub(crate) async fn prepare(&self, ctx: &PipelineContext, request: &mut IconRequest) {
        let Some(icon_url) = ctx
            .stores
            .url_index
            .lookup_icon_url(request.page_url.as_str())
            .await
        else {
            return;
        };

        if request.candidates.insert(IconDescriptor::new(&icon_url, IconKind::Lookup)) {
            debug!("Injected remembered icon {icon_url} for {}", request.page_url);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IconEngineConfig;
    use crate::request::IconRequestBuilder;
    use crate::storage::Stores;

    async fn context() -> (tempfile::TempDir, PipelineContext) {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = IconEngineConfig::builder().storage_dir(dir.path()).build();
        let stores = Stores::open(&config).await.expect("stores should open");
        (dir, PipelineContext { stores, config })
    }

    #[tokio::test]
    async fn test_remembered_icon_injected_as_lookup_candidate() {
        let (_dir, ctx) = context().await;
        ctx.stores
            .url_index
            .record_icon_url("https://example.com/", "https://example.com/icon.png")
            .await
            .expect("recording should succeed");

        let mut request = IconRequestBuilder::new("https://example.com/")
            .build()
            .expect("request should build");
        LookupIconUrl.prepare(&ctx, &mut request).await;

        let best = request.candidates().best().expect("candidate expected");
        assert_eq!(best.url, "https://example.com/icon.png");
        assert_eq!(best.kind, IconKind::Lookup);
    }

    #[tokio::test]
    async fn test_unknown_page_adds_nothing() {
        let (_dir, ctx) = context().await;
        let mut request = IconRequestBuilder::new("https://unknown.example/")
            .build()
            .expect("request should build");
        LookupIconUrl.prepare(&ctx, &mut request).await;
        assert!(request.candidates().is_empty());
    }
}
