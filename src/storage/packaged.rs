//! Packaged icon resources
//!
//! Icons that ship with the application live in a `resource://` namespace
//! instead of on the network. The set is small and fixed, so the entries
//! are rendered once at engine startup and served from memory.

use std::collections::HashMap;

use image::{DynamicImage, Rgba, RgbaImage};
use log::error;

use crate::imaging;

/// Candidate URL the special-page preparer injects for internal pages
pub const DEFAULT_PAGE_ICON_URL: &str = "resource://siteicons/default-page";

/// Scheme prefix of the packaged namespace
const RESOURCE_SCHEME: &str = "resource://";

/// Bundled icon resources addressed by `resource://` URL
pub struct PackagedIcons {
    entries: HashMap<String, Vec<u8>>,
}

impl PackagedIcons {
    /// Render and register the bundled icon set
    #[must_use]
    pub fn new() -> Self {
        let mut entries = HashMap::new();

        // Neutral slate tile used for about-style internal pages.
        match imaging::encode_png(&solid_tile(32, Rgba([0x45, 0x51, 0x5E, 0xFF]))) {
            Ok(bytes) => {
                entries.insert(DEFAULT_PAGE_ICON_URL.to_string(), bytes);
            }
            Err(err) => {
                // Leaves internal pages to the generator fallback.
                error!("Failed to render packaged default icon: {err:#}");
            }
        }

        Self { entries }
    }

    /// Whether a candidate URL is addressed to the packaged namespace
    #[inline]
    #[must_use]
    pub fn is_resource_url(url: &str) -> bool {
        url.starts_with(RESOURCE_SCHEME)
    }

    /// Stored bytes for a packaged icon URL
    #[must_use]
    pub fn read(&self, url: &str) -> Option<&[u8]> {
        self.entries.get(url).map(Vec::as_slice)
    }
}

impl Default for PackagedIcons {
    fn default() -> Self {
        Self::new()
    }
}

fn solid_tile(size: u32, color: Rgba<u8>) -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_pixel(size, size, color))
}
