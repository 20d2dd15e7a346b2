//! Fourth tier: application-provided icon blobs

use log::debug;

use crate::descriptor::IconDescriptor;
use crate::pipeline::PipelineContext;
use crate::response::IconResponse;

use super::LoadOutcome;

/// Consults the pluggable external content index, when one is configured
///
/// Engines without a configured index treat this tier as a permanent miss.
#[derive(Debug)]
pub struct ExternalIndexLoader;

impl ExternalIndexLoader {
    pub(crate) fn load(&self, ctx: &PipelineContext, candidate: &IconDescriptor) -> LoadOutcome {
        let Some(index) = ctx.stores.external.as_deref() else {
            return LoadOutcome::Miss;
        };

        let Some(bytes) = index.lookup(&candidate.url) else {
            return LoadOutcome::Miss;
        };

        match crate::imaging::decode(&bytes) {
            Ok(image) => {
                debug!("External index hit for {}", candidate.url);
                LoadOutcome::Hit(IconResponse::plain(image, &candidate.url))
            }
            Err(err) => {
                debug!("External index bytes for {} undecodable: {err}", candidate.url);
                LoadOutcome::Miss
            }
        }
    }
}
