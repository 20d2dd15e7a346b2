//! The result of a resolved icon load
//!
//! Exactly one loader (or the generator) creates an `IconResponse`; the
//! processor chain then enriches it in place before it is handed to the
//! caller's callback.

use image::DynamicImage;

/// Which tier produced a response (its provenance)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconSource {
    /// Directly constructed, e.g. decoded from a `data:` URL or a packaged
    /// resource
    Plain,
    /// Fetched over the network
    Network,
    /// Served from the in-process memory cache
    MemoryCache,
    /// Read back from the on-disk cache
    DiskCache,
    /// Synthesized by the fallback generator
    Generated,
}

/// A successfully resolved icon
///
/// `image` and `color` are updated in place by the processor chain: resizing
/// replaces the image, color extraction fills in `color` when it is still 0.
pub struct IconResponse {
    /// The decoded icon bitmap
    pub image: DynamicImage,
    /// Dominant color as ARGB, 0 when not (yet) computed
    pub color: u32,
    /// URL the bytes were resolved from; `None` for generated icons
    pub source_url: Option<String>,
    /// Tier that produced this response
    pub source: IconSource,
}

impl IconResponse {
    /// Response without provenance, e.g. for a manually supplied bitmap
    #[must_use]
    pub fn plain(image: DynamicImage, source_url: impl Into<String>) -> Self {
        Self {
            image,
            color: 0,
            source_url: Some(source_url.into()),
            source: IconSource::Plain,
        }
    }

    /// Response freshly fetched over the network
    #[must_use]
    pub fn network(image: DynamicImage, source_url: impl Into<String>) -> Self {
        Self {
            image,
            color: 0,
            source_url: Some(source_url.into()),
            source: IconSource::Network,
        }
    }

    /// Response served from the in-process memory cache
    #[must_use]
    pub fn from_memory(image: DynamicImage, color: u32, source_url: impl Into<String>) -> Self {
        Self {
            image,
            color,
            source_url: Some(source_url.into()),
            source: IconSource::MemoryCache,
        }
    }

    /// Response read back from the disk cache
    #[must_use]
    pub fn from_disk(image: DynamicImage, source_url: impl Into<String>) -> Self {
        Self {
            image,
            color: 0,
            source_url: Some(source_url.into()),
            source: IconSource::DiskCache,
        }
    }

    /// Response synthesized by the fallback generator
    #[must_use]
    pub fn generated(image: DynamicImage, color: u32) -> Self {
        Self {
            image,
            color,
            source_url: None,
            source: IconSource::Generated,
        }
    }
}

impl std::fmt::Debug for IconResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IconResponse")
            .field("width", &self.image.width())
            .field("height", &self.image.height())
            .field("color", &format_args!("{:#010x}", self.color))
            .field("source_url", &self.source_url)
            .field("source", &self.source)
            .finish()
    }
}
