//! Prime the memory cache with the final response

use crate::pipeline::PipelineContext;
use crate::response::{IconResponse, IconSource};

/// Puts the fully processed icon into the memory cache
///
/// Runs last so the cached entry carries the final size and extracted
/// color. Responses that came from the memory cache are not re-stored, and
/// generated icons are skipped for lack of a URL key.
#[derive(Debug)]
pub struct StoreInMemory;

impl StoreInMemory {
    pub(crate) async fn process(&self, ctx: &PipelineContext, response: &IconResponse) {
        if response.source == IconSource::MemoryCache {
            return;
        }
        let Some(source_url) = response.source_url.as_deref() else {
            return;
        };

        ctx.stores
            .memory
            .put(source_url, response.image.clone(), response.color)
            .await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IconEngineConfig;
    use crate::storage::Stores;
    use image::{DynamicImage, Rgba, RgbaImage};

    async fn context() -> (tempfile::TempDir, PipelineContext) {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = IconEngineConfig::builder().storage_dir(dir.path()).build();
        let stores = Stores::open(&config).await.expect("stores should open");
        (dir, PipelineContext { stores, config })
    }

    fn solid() -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(8, 8, Rgba([2, 2, 2, 255])))
    }

    #[tokio::test]
    async fn test_network_response_cached_with_color() {
        let (_dir, ctx) = context().await;
        let mut response = IconResponse::network(solid(), "https://e.com/i.png");
        response.color = 0xFFAB_CDEF;

        StoreInMemory.process(&ctx, &response).await;

        let cached = ctx
            .stores
            .memory
            .get("https://e.com/i.png")
            .await
            .expect("processed icon should be cached");
        assert_eq!(cached.color, 0xFFAB_CDEF);
    }

    #[tokio::test]
    async fn test_memory_hit_not_restored() {
        let (_dir, ctx) = context().await;
        let response = IconResponse::from_memory(solid(), 0, "https://e.com/i.png");

        StoreInMemory.process(&ctx, &response).await;
        assert!(ctx.stores.memory.is_empty().await);
    }

    #[tokio::test]
    async fn test_generated_response_not_cached() {
        let (_dir, ctx) = context().await;
        let response = IconResponse::generated(solid(), 0xFF10_2030);

        StoreInMemory.process(&ctx, &response).await;
        assert!(ctx.stores.memory.is_empty().await);
    }
}
