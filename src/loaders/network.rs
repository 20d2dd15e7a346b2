//! Last tier: fetch over the network

use log::debug;

use crate::descriptor::IconDescriptor;
use crate::pipeline::PipelineContext;
use crate::request::IconRequest;
use crate::response::IconResponse;

use super::LoadOutcome;

/// Fetches icon bytes over HTTP and decodes them
///
/// The only tier with remote side effects: a failed fetch or undecodable
/// body records the URL into the failure tracker, so retries within the
/// failure TTL are filtered out before loading even starts.
#[derive(Debug)]
pub struct NetworkLoader;

impl NetworkLoader {
    pub(crate) async fn load(
        &self,
        ctx: &PipelineContext,
        request: &IconRequest,
        candidate: &IconDescriptor,
    ) -> LoadOutcome {
        if request.skip_network {
            return LoadOutcome::Miss;
        }
        if !candidate.url.starts_with("http://") && !candidate.url.starts_with("https://") {
            return LoadOutcome::Miss;
        }

        let bytes = match ctx.stores.http.get(&candidate.url).await {
            Ok(bytes) => bytes,
            Err(err) => {
                debug!("Fetch of {} failed: {err}", candidate.url);
                ctx.stores.failures.record_failure(&candidate.url);
                return LoadOutcome::Miss;
            }
        };

        match crate::imaging::decode(&bytes) {
            Ok(image) => LoadOutcome::Hit(IconResponse::network(image, &candidate.url)),
            Err(err) => {
                debug!("Fetched bytes from {} undecodable: {err}", candidate.url);
                ctx.stores.failures.record_failure(&candidate.url);
                LoadOutcome::Miss
            }
        }
    }
}
