//! Third tier: bundled `resource://` icons

use log::warn;

use crate::descriptor::IconDescriptor;
use crate::pipeline::PipelineContext;
use crate::response::IconResponse;
use crate::storage::PackagedIcons;

use super::LoadOutcome;

/// Serves icons bundled with the application
#[derive(Debug)]
pub struct PackagedIconLoader;

impl PackagedIconLoader {
    pub(crate) fn load(&self, ctx: &PipelineContext, candidate: &IconDescriptor) -> LoadOutcome {
        if !PackagedIcons::is_resource_url(&candidate.url) {
            return LoadOutcome::Miss;
        }

        let Some(bytes) = ctx.stores.packaged.read(&candidate.url) else {
            return LoadOutcome::Miss;
        };

        match crate::imaging::decode(bytes) {
            Ok(image) => LoadOutcome::Hit(IconResponse::plain(image, &candidate.url)),
            Err(err) => {
                // Bundled bytes failing to decode is a packaging bug.
                warn!("Packaged icon {} is undecodable: {err}", candidate.url);
                LoadOutcome::Miss
            }
        }
    }
}
