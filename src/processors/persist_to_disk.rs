//! Persist resolved icons and their page mapping

use anyhow::Result;

use crate::pipeline::PipelineContext;
use crate::request::IconRequest;
use crate::response::{IconResponse, IconSource};

/// Writes the icon to the disk cache and records the page mapping
///
/// Skipped entirely for private-mode and `skip_disk` requests, for
/// responses that were read from the disk cache (rewriting would be a
/// no-op), and for generated icons, which carry no source URL to key on.
#[derive(Debug)]
pub struct PersistToDisk;

impl PersistToDisk {
    pub(crate) async fn process(
        &self,
        ctx: &PipelineContext,
        request: &IconRequest,
        response: &IconResponse,
    ) -> Result<()> {
        if request.private_mode || request.skip_disk {
            return Ok(());
        }
        let Some(source_url) = response.source_url.as_deref() else {
            return Ok(());
        };

        if response.source != IconSource::DiskCache {
            ctx.stores.disk.write(source_url, &response.image).await?;
        }
        ctx.stores
            .url_index
            .record_icon_url(request.page_url.as_str(), source_url)
            .await
    }
}
