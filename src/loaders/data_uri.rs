//! Second tier: inline `data:` payloads

use log::debug;

use crate::descriptor::IconDescriptor;
use crate::fetch::{DataUrl, is_data_url};
use crate::imaging;
use crate::response::IconResponse;

use super::LoadOutcome;

/// Decodes candidates that embed their own bytes
///
/// Purely local; a malformed or undecodable payload is a miss without any
/// failure-tracker entry, since there is nothing remote to back off from.
#[derive(Debug)]
pub struct DataUriLoader;

impl DataUriLoader {
    pub(crate) fn load(&self, candidate: &IconDescriptor) -> LoadOutcome {
        if !is_data_url(&candidate.url) {
            return LoadOutcome::Miss;
        }

        let Some(parsed) = DataUrl::parse(&candidate.url) else {
            debug!("Malformed data URL candidate ignored");
            return LoadOutcome::Miss;
        };

        match imaging::decode(&parsed.bytes) {
            Ok(image) => LoadOutcome::Hit(IconResponse::plain(image, &candidate.url)),
            Err(err) => {
                debug!("Undecodable data URL payload: {err}");
                LoadOutcome::Miss
            }
        }
    }
}
