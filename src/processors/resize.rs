//! Scale the response to the requested size

use log::debug;

use crate::imaging;
use crate::request::IconRequest;
use crate::response::IconResponse;

/// Scales the icon to the request's target size
///
/// Downscaling always happens. Upscaling only happens when the native size
/// already meets the configured floor; a tiny source icon is better served
/// at native resolution than blown up past recognition.
#[derive(Debug)]
pub struct ResizeProcessor;

impl ResizeProcessor {
    pub(crate) fn process(&self, request: &IconRequest, response: &mut IconResponse) {
        let native = response.image.width().max(response.image.height());
        let target = request.target_size;

        if native == target {
            return;
        }
        if native < target && native < request.minimum_size_after_scaling {
            debug!("Keeping {native}px icon at native size instead of upscaling to {target}px");
            return;
        }

        response.image = imaging::resize(&response.image, target);
    }
}
