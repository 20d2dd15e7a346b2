//! Decode, encode, and resize wrappers over the `image` crate

use std::io::Cursor;

use anyhow::{Context, Result};
use image::DynamicImage;
use image::imageops::FilterType;

/// Bytes were obtained but could not be decoded into a bitmap
///
/// Loaders treat this as a miss for their tier: the next loader (or the
/// next candidate) gets its turn.
#[derive(Debug, thiserror::Error)]
#[error("failed to decode icon bytes: {0}")]
pub struct DecodeError(#[from] image::ImageError);

/// Decode icon bytes, guessing the format from the payload
pub fn decode(bytes: &[u8]) -> Result<DynamicImage, DecodeError> {
    Ok(image::load_from_memory(bytes)?)
}

/// Encode an image as PNG, the storage format of the disk cache
pub fn encode_png(image: &DynamicImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .context("Failed to encode icon as PNG")?;
    Ok(bytes)
}

/// Scale an image to fit within `size` x `size`, preserving aspect ratio
#[must_use]
pub fn resize(image: &DynamicImage, size: u32) -> DynamicImage {
    image.resize(size, size, FilterType::Lanczos3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode(b"definitely not an image").is_err());
    }

    #[test]
    fn test_encoded_png_decodes_back() {
        let image = DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            8,
            8,
            Rgba([200, 40, 40, 255]),
        ));
        let bytes = encode_png(&image).expect("PNG encoding should succeed");
        let decoded = decode(&bytes).expect("our own PNG output should decode");
        assert_eq!(decoded.width(), 8);
        assert_eq!(decoded.height(), 8);
    }

    #[test]
    fn test_resize_preserves_aspect_ratio() {
        let image = DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            64,
            32,
            Rgba([0, 0, 0, 255]),
        ));
        let resized = resize(&image, 16);
        assert_eq!(resized.width(), 16);
        assert_eq!(resized.height(), 8);
    }
}
