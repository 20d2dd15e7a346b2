//! First tier: the in-process LRU cache

use log::debug;

use crate::descriptor::IconDescriptor;
use crate::pipeline::PipelineContext;
use crate::request::IconRequest;
use crate::response::IconResponse;

use super::LoadOutcome;

/// Serves icons straight from the memory cache
///
/// The cached entry keeps its previously extracted color, so a hit here
/// skips color extraction in the processor stage as well.
#[derive(Debug)]
pub struct MemoryLoader;

impl MemoryLoader {
    pub(crate) async fn load(
        &self,
        ctx: &PipelineContext,
        request: &IconRequest,
        candidate: &IconDescriptor,
    ) -> LoadOutcome {
        if request.skip_memory {
            return LoadOutcome::Miss;
        }

        match ctx.stores.memory.get(&candidate.url).await {
            Some(cached) => {
                debug!("Memory cache hit for {}", candidate.url);
                LoadOutcome::Hit(IconResponse::from_memory(
                    cached.image,
                    cached.color,
                    &candidate.url,
                ))
            }
            None => LoadOutcome::Miss,
        }
    }
}
