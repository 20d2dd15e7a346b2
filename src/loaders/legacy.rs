//! Sixth tier: the deprecated flat-file store

use log::debug;

use crate::descriptor::IconDescriptor;
use crate::pipeline::PipelineContext;
use crate::response::IconResponse;

use super::LoadOutcome;

/// Reads icons cached by old installs in the pre-hashing file layout
///
/// Hits are deliberately NOT marked as disk provenance: that lets the
/// persistence processor migrate them into the current disk cache, after
/// which the disk tier serves them directly.
#[derive(Debug)]
pub struct LegacyStoreLoader;

impl LegacyStoreLoader {
    pub(crate) async fn load(&self, ctx: &PipelineContext, candidate: &IconDescriptor) -> LoadOutcome {
        let Some(bytes) = ctx.stores.legacy.read(&candidate.url).await else {
            return LoadOutcome::Miss;
        };

        match crate::imaging::decode(&bytes) {
            Ok(image) => {
                debug!("Legacy store hit for {}", candidate.url);
                LoadOutcome::Hit(IconResponse::plain(image, &candidate.url))
            }
            Err(err) => {
                debug!("Legacy bytes for {} undecodable: {err}", candidate.url);
                LoadOutcome::Miss
            }
        }
    }
}
