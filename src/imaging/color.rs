//! Dominant color extraction
//!
//! Cheap quantization approach: downsample the icon, bucket opaque pixels
//! into a 4-bit-per-channel histogram, and average the winning bucket. Good
//! enough for theming a toolbar behind the icon, and deterministic for a
//! given input.

use image::DynamicImage;

/// Edge length the icon is downsampled to before counting pixels
const SAMPLE_SIZE: u32 = 16;

/// Pixels with less alpha than this do not vote
const MIN_ALPHA: u8 = 128;

/// Compute the dominant color of an icon as ARGB
///
/// Returns `None` when the image has no sufficiently opaque pixels (the
/// caller then leaves the response color unset).
#[must_use]
pub fn dominant_color(image: &DynamicImage) -> Option<u32> {
    let sample = image.thumbnail(SAMPLE_SIZE, SAMPLE_SIZE).to_rgba8();

    // Bucket key is r/g/b truncated to 4 bits each; values accumulate the
    // full-precision channel sums so the winner averages back smoothly.
    let mut buckets: std::collections::HashMap<u16, (u64, u64, u64, u64)> =
        std::collections::HashMap::new();

    for pixel in sample.pixels() {
        let [r, g, b, a] = pixel.0;
        if a < MIN_ALPHA {
            continue;
        }
        let key = (u16::from(r >> 4) << 8) | (u16::from(g >> 4) << 4) | u16::from(b >> 4);
        let entry = buckets.entry(key).or_insert((0, 0, 0, 0));
        entry.0 += 1;
        entry.1 += u64::from(r);
        entry.2 += u64::from(g);
        entry.3 += u64::from(b);
    }

    let (count, r_sum, g_sum, b_sum) = buckets.into_values().max_by_key(|entry| entry.0)?;
    let r = (r_sum / count) as u32;
    let g = (g_sum / count) as u32;
    let b = (b_sum / count) as u32;
    Some(0xFF00_0000 | (r << 16) | (g << 8) | b)
}
