//! Skip icon URLs that failed recently

use log::debug;

use crate::pipeline::PipelineContext;
use crate::request::IconRequest;

/// Removes candidates the failure tracker marked as recently failed
///
/// Runs last so it also covers candidates other preparers injected. The
/// tracker entry expires after the configured TTL, after which the URL is
/// eligible again.
#[derive(Debug)]
pub struct FilterKnownFailures;

impl FilterKnownFailures {
    pub(crate) fn prepare(&self, ctx: &PipelineContext, request: &mut IconRequest) {
        let failures = &ctx.stores.failures;
        request.candidates.retain(|descriptor| {
            let failed = failures.is_recent_failure(&descriptor.url);
            if failed {
                debug!("Skipping recently failed candidate {}", descriptor.url);
            }
            !failed
        });
    }
}
