//! Guaranteed fallback: the letter-tile generator
//!
//! When every candidate misses every tier, the request still resolves: a
//! deterministic tile is drawn with a background color picked from a fixed
//! palette by hashing the page's domain and the domain's initial letter in
//! white. The same page always gets the same tile.

use image::{DynamicImage, Rgba, RgbaImage};
use xxhash_rust::xxh3::xxh3_64;

use crate::request::IconRequest;
use crate::response::IconResponse;

/// Background palette, indexed by domain hash
const PALETTE: &[[u8; 3]] = &[
    [0xE5, 0x73, 0x73], // red
    [0xBA, 0x68, 0xC8], // purple
    [0x79, 0x86, 0xCB], // indigo
    [0x64, 0xB5, 0xF6], // blue
    [0x4D, 0xB6, 0xAC], // teal
    [0x81, 0xC7, 0x84], // green
    [0xFF, 0xB7, 0x4D], // orange
    [0x90, 0xA4, 0xAE], // blue grey
];

const GLYPH_WIDTH: u32 = 5;
const GLYPH_HEIGHT: u32 = 7;

/// Synthesizes an icon for requests no loader could satisfy
#[derive(Debug)]
pub struct IconGenerator;

impl IconGenerator {
    /// Produce the deterministic letter tile for a request
    ///
    /// Infallible by design; this is the guarantee that every request ends
    /// with an icon.
    #[must_use]
    pub fn generate(request: &IconRequest) -> IconResponse {
        let domain = display_domain(request);
        let size = request.target_size.max(1);

        let [r, g, b] = PALETTE[(xxh3_64(domain.as_bytes()) as usize) % PALETTE.len()];
        let background = Rgba([r, g, b, 0xFF]);
        let mut tile = RgbaImage::from_pixel(size, size, background);

        draw_glyph(&mut tile, initial_letter(&domain));

        let color = 0xFF00_0000 | (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b);
        IconResponse::generated(DynamicImage::ImageRgba8(tile), color)
    }
}

/// Domain shown on the tile: host without a leading `www.`, or the scheme
/// for pages that have no host
fn display_domain(request: &IconRequest) -> String {
    match request.page_url.host_str() {
        Some(host) => host.strip_prefix("www.").unwrap_or(host).to_string(),
        None => request.page_url.scheme().to_string(),
    }
}

/// First ASCII alphanumeric of the domain, uppercased; `?` when none exists
fn initial_letter(domain: &str) -> char {
    domain
        .chars()
        .find(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_uppercase())
        .unwrap_or('?')
}

fn draw_glyph(tile: &mut RgbaImage, letter: char) {
    let size = tile.width();
    let rows = glyph_rows(letter);

    // Integer scale keeping the glyph at roughly half the tile height.
    let scale = (size / (GLYPH_HEIGHT * 2)).max(1);
    let glyph_w = GLYPH_WIDTH * scale;
    let glyph_h = GLYPH_HEIGHT * scale;
    let origin_x = size.saturating_sub(glyph_w) / 2;
    let origin_y = size.saturating_sub(glyph_h) / 2;
    let white = Rgba([0xFF, 0xFF, 0xFF, 0xFF]);

    for (row_index, row) in rows.iter().enumerate() {
        for bit in 0..GLYPH_WIDTH {
            if row & (1 << (GLYPH_WIDTH - 1 - bit)) == 0 {
                continue;
            }
            let base_x = origin_x + bit * scale;
            let base_y = origin_y + row_index as u32 * scale;
            for dy in 0..scale {
                for dx in 0..scale {
                    let x = base_x + dx;
                    let y = base_y + dy;
                    if x < size && y < size {
                        tile.put_pixel(x, y, white);
                    }
                }
            }
        }
    }
}

/// 5x7 bitmap font rows for A-Z, 0-9, and the fallback glyph
fn glyph_rows(letter: char) -> [u8; 7] {
    match letter {
        'A' => [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'B' => [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
        'C' => [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
        'D' => [0x1E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1E],
        'E' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
        'F' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
        'G' => [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0E],
        'H' => [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'I' => [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
        'J' => [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C],
        'K' => [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
        'L' => [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
        'M' => [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
        'N' => [0x11, 0x19, 0x15, 0x13, 0x11, 0x11, 0x11],
        'O' => [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'P' => [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
        'Q' => [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
        'R' => [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
        'S' => [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
        'T' => [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
        'U' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'V' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
        'W' => [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A],
        'X' => [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
        'Y' => [0x11, 0x11, 0x0A, 0x04, 0x04, 0x04, 0x04],
        'Z' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F],
        '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
        '3' => [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
        '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        _ => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x00, 0x04],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::IconRequestBuilder;
    use crate::response::IconSource;
    use image::GenericImageView;

    fn request(url: &str, size: u32) -> IconRequest {
        IconRequestBuilder::new(url)
            .target_size(size)
            .build()
            .expect("request should build")
    }

    #[test]
    fn test_same_page_generates_same_tile() {
        let a = IconGenerator::generate(&request("https://example.com/one", 32));
        let b = IconGenerator::generate(&request("https://example.com/two", 32));

        assert_eq!(a.color, b.color);
        assert_eq!(a.image.to_rgba8().as_raw(), b.image.to_rgba8().as_raw());
    }

    #[test]
    fn test_www_prefix_does_not_change_tile() {
        let bare = IconGenerator::generate(&request("https://example.com/", 32));
        let www = IconGenerator::generate(&request("https://www.example.com/", 32));
        assert_eq!(bare.color, www.color);
        assert_eq!(bare.image.to_rgba8().as_raw(), www.image.to_rgba8().as_raw());
    }

    #[test]
    fn test_tile_matches_target_size_and_provenance() {
        let response = IconGenerator::generate(&request("https://example.com/", 48));
        assert_eq!(response.image.dimensions(), (48, 48));
        assert_eq!(response.source, IconSource::Generated);
        assert!(response.source_url.is_none());
        assert_ne!(response.color, 0);
    }

    #[test]
    fn test_glyph_drawn_in_white() {
        let response = IconGenerator::generate(&request("https://example.com/", 64));
        let rgba = response.image.to_rgba8();
        let has_white = rgba
            .pixels()
            .any(|p| p.0 == [0xFF, 0xFF, 0xFF, 0xFF]);
        assert!(has_white, "tile should contain the white initial glyph");
    }

    #[test]
    fn test_hostless_page_still_generates() {
        let response = IconGenerator::generate(&request("about:home", 32));
        assert_eq!(response.image.width(), 32);
    }
}
