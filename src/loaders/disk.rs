//! Fifth tier: the on-disk cache

use log::debug;

use crate::descriptor::IconDescriptor;
use crate::pipeline::PipelineContext;
use crate::request::IconRequest;
use crate::response::IconResponse;

use super::LoadOutcome;

/// Reads icons persisted by earlier successful loads
///
/// A hit here is marked as disk provenance so the persistence processor
/// does not rewrite an identical file.
#[derive(Debug)]
pub struct DiskLoader;

impl DiskLoader {
    pub(crate) async fn load(
        &self,
        ctx: &PipelineContext,
        request: &IconRequest,
        candidate: &IconDescriptor,
    ) -> LoadOutcome {
        if request.skip_disk {
            return LoadOutcome::Miss;
        }

        match ctx.stores.disk.read(&candidate.url).await {
            Some(image) => {
                debug!("Disk cache hit for {}", candidate.url);
                LoadOutcome::Hit(IconResponse::from_disk(image, &candidate.url))
            }
            None => LoadOutcome::Miss,
        }
    }
}
