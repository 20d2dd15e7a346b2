//! On-disk icon cache
//!
//! One PNG file per icon, named by the xxh3-128 hash of the icon URL so
//! file names stay stable across runs and independent of URL length or
//! characters. Writes go through a temp file plus rename so a crashed write
//! never leaves a half-decoded icon behind.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::DynamicImage;
use log::{debug, warn};
use xxhash_rust::xxh3::xxh3_128;

use crate::imaging;

/// Persistent icon cache surviving process restarts
pub struct DiskCache {
    root: PathBuf,
}

impl DiskCache {
    /// Open (and create if needed) the cache directory
    pub async fn open(root: PathBuf) -> Result<Self> {
        tokio::fs::create_dir_all(&root)
            .await
            .context("Failed to create disk cache directory")?;
        Ok(Self { root })
    }

    /// Stable file name for an icon URL
    #[must_use]
    pub fn cache_key(icon_url: &str) -> String {
        format!("{:032x}", xxh3_128(icon_url.as_bytes()))
    }

    /// Path of the cache file for an icon URL
    #[must_use]
    pub fn file_path(&self, icon_url: &str) -> PathBuf {
        self.root.join(format!("{}.png", Self::cache_key(icon_url)))
    }

    /// Read a cached icon back, `None` on absence or corruption
    ///
    /// A file that fails to decode is treated as absent (and logged); the
    /// next successful write replaces it.
    pub async fn read(&self, icon_url: &str) -> Option<DynamicImage> {
        let path = self.file_path(icon_url);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return None,
            Err(err) => {
                warn!("Failed to read cached icon {}: {err}", path.display());
                return None;
            }
        };

        match imaging::decode(&bytes) {
            Ok(image) => Some(image),
            Err(err) => {
                warn!("Corrupt cached icon {}: {err}", path.display());
                None
            }
        }
    }

    /// Persist an icon under its URL key
    pub async fn write(&self, icon_url: &str, image: &DynamicImage) -> Result<()> {
        let bytes = imaging::encode_png(image)?;
        let path = self.file_path(icon_url);
        write_atomically(&path, &bytes).await?;
        debug!("Persisted icon for {icon_url} to {}", path.display());
        Ok(())
    }
}

/// Write bytes via a sibling temp file and rename into place
pub(crate) async fn write_atomically(path: &Path, bytes: &[u8]) -> Result<()> {
    let parent = path
        .parent()
        .context("Cache path has no parent directory")?;
    let tmp = tempfile::NamedTempFile::new_in(parent)
        .context("Failed to create temp file for cache write")?;
    let tmp_path = tmp.into_temp_path();

    tokio::fs::write(&tmp_path, bytes)
        .await
        .context("Failed to write cache temp file")?;
    tmp_path
        .persist(path)
        .context("Failed to move cache file into place")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[tokio::test]
    async fn test_write_then_read_round_trip() {
        let dir = tempfile::tempdir().expect("temp dir should be creatable");
        let cache = DiskCache::open(dir.path().join("icons"))
            .await
            .expect("cache directory should open");

        let image = DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            16,
            16,
            Rgba([1, 2, 3, 255]),
        ));
        cache
            .write("https://example.com/favicon.ico", &image)
            .await
            .expect("write should succeed");

        let read_back = cache
            .read("https://example.com/favicon.ico")
            .await
            .expect("written icon should be readable");
        assert_eq!(read_back.width(), 16);
        assert!(cache.read("https://example.com/missing.ico").await.is_none());
    }

    #[tokio::test]
    async fn test_corrupt_file_reads_as_absent() {
        let dir = tempfile::tempdir().expect("temp dir should be creatable");
        let cache = DiskCache::open(dir.path().join("icons"))
            .await
            .expect("cache directory should open");

        tokio::fs::write(cache.file_path("https://example.com/x.png"), b"not a png")
            .await
            .expect("seeding corrupt file should succeed");
        assert!(cache.read("https://example.com/x.png").await.is_none());
    }

    #[test]
    fn test_cache_key_is_stable() {
        let a = DiskCache::cache_key("https://example.com/favicon.ico");
        let b = DiskCache::cache_key("https://example.com/favicon.ico");
        assert_eq!(a, b);
        assert_eq!(a.len(), 32);
        assert_ne!(a, DiskCache::cache_key("https://example.org/favicon.ico"));
    }
}
