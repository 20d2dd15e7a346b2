//! Deprecated flat-file icon store
//!
//! Earlier releases stored icons as raw bytes in files named by the
//! URL-safe base64 of the icon URL, with no hashing and no atomic writes.
//! Kept read-only so icons cached by old installs still resolve; new
//! writes go exclusively to `DiskCache`.

use std::path::{Path, PathBuf};

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use log::warn;

/// Read-only view of the deprecated icon store
pub struct LegacyStore {
    root: PathBuf,
}

impl LegacyStore {
    /// Point at the legacy directory; it is never created by this store
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// File path the old format used for an icon URL
    #[must_use]
    pub fn file_path(&self, icon_url: &str) -> PathBuf {
        self.root.join(URL_SAFE_NO_PAD.encode(icon_url))
    }

    /// Raw stored bytes for an icon URL, `None` when absent
    pub async fn read(&self, icon_url: &str) -> Option<Vec<u8>> {
        let path = self.file_path(icon_url);
        match tokio::fs::read(&path).await {
            Ok(bytes) if !bytes.is_empty() => Some(bytes),
            Ok(_) => None,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
            Err(err) => {
                warn!("Failed to read legacy icon {}: {err}", path.display());
                None
            }
        }
    }

    /// Root directory of the legacy store (tests seed files here)
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reads_seeded_legacy_file() {
        let dir = tempfile::tempdir().expect("temp dir should be creatable");
        let store = LegacyStore::new(dir.path().to_path_buf());

        tokio::fs::write(store.file_path("https://example.com/old.ico"), b"old-bytes")
            .await
            .expect("seeding legacy file should succeed");

        assert_eq!(
            store.read("https://example.com/old.ico").await.as_deref(),
            Some(b"old-bytes".as_slice())
        );
        assert!(store.read("https://example.com/new.ico").await.is_none());
    }

    #[tokio::test]
    async fn test_missing_directory_reads_as_absent() {
        let store = LegacyStore::new(PathBuf::from("/nonexistent/legacy/store"));
        assert!(store.read("https://example.com/icon.png").await.is_none());
    }
}
