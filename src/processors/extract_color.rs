//! Fill in the dominant color

use crate::imaging;
use crate::response::IconResponse;

/// Computes the response's dominant color when it is still unset
///
/// Runs before resizing so the color reflects the full-resolution icon.
/// Memory-cache hits and generated tiles arrive with their color already
/// set and are left untouched.
#[derive(Debug)]
pub struct ExtractColor;

impl ExtractColor {
    pub(crate) fn process(&self, response: &mut IconResponse) {
        if response.color != 0 {
            return;
        }
        if let Some(color) = imaging::dominant_color(&response.image) {
            response.color = color;
        }
    }
}
