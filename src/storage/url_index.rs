//! Persistent page-URL to icon-URL index
//!
//! Remembers which icon URL last worked for a page so the next request can
//! skip straight to it. Small JSON file, fully held in memory behind an
//! RwLock, written through on every new mapping.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::debug;
use tokio::sync::RwLock;

use super::disk_cache::write_atomically;

const INDEX_FILE: &str = "url_index.json";

/// Persistent mapping of page URL to the icon URL that resolved for it
pub struct UrlIndex {
    path: PathBuf,
    entries: RwLock<HashMap<String, String>>,
}

impl UrlIndex {
    /// Load the index file under `root`, starting empty when absent
    pub async fn open(root: &Path) -> Result<Self> {
        let path = root.join(INDEX_FILE);
        let entries = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .context("Failed to parse URL index file")
                .unwrap_or_else(|err| {
                    // A damaged index only costs warm lookups; start over.
                    log::warn!("Discarding unreadable URL index: {err:#}");
                    HashMap::new()
                }),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(err) => return Err(err).context("Failed to read URL index file"),
        };

        debug!("URL index loaded with {} entries", entries.len());
        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    /// Icon URL previously recorded for a page, if any
    pub async fn lookup_icon_url(&self, page_url: &str) -> Option<String> {
        self.entries.read().await.get(page_url).cloned()
    }

    /// Record that `icon_url` resolved for `page_url`
    ///
    /// Persists immediately; recording an unchanged mapping is a no-op.
    pub async fn record_icon_url(&self, page_url: &str, icon_url: &str) -> Result<()> {
        {
            let mut entries = self.entries.write().await;
            if entries.get(page_url).map(String::as_str) == Some(icon_url) {
                return Ok(());
            }
            entries.insert(page_url.to_string(), icon_url.to_string());
        }
        self.persist().await
    }

    /// Number of recorded mappings
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    async fn persist(&self) -> Result<()> {
        let bytes = {
            let entries = self.entries.read().await;
            serde_json::to_vec_pretty(&*entries).context("Failed to serialize URL index")?
        };
        write_atomically(&self.path, &bytes).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_recorded_mapping_survives_reopen() {
        let dir = tempfile::tempdir().expect("temp dir should be creatable");

        let index = UrlIndex::open(dir.path()).await.expect("index should open");
        index
            .record_icon_url("https://example.com/", "https://example.com/favicon.ico")
            .await
            .expect("recording should succeed");

        let reopened = UrlIndex::open(dir.path())
            .await
            .expect("index should reopen");
        assert_eq!(
            reopened.lookup_icon_url("https://example.com/").await,
            Some("https://example.com/favicon.ico".to_string())
        );
        assert_eq!(reopened.lookup_icon_url("https://other.com/").await, None);
    }

    #[tokio::test]
    async fn test_damaged_index_file_starts_empty() {
        let dir = tempfile::tempdir().expect("temp dir should be creatable");
        tokio::fs::write(dir.path().join(INDEX_FILE), b"{ not json")
            .await
            .expect("seeding damaged file should succeed");

        let index = UrlIndex::open(dir.path()).await.expect("index should open");
        assert!(index.is_empty().await);
    }

    #[tokio::test]
    async fn test_rerecording_same_mapping_is_noop() {
        let dir = tempfile::tempdir().expect("temp dir should be creatable");
        let index = UrlIndex::open(dir.path()).await.expect("index should open");

        index
            .record_icon_url("https://a.com/", "https://a.com/i.png")
            .await
            .expect("first record should succeed");
        index
            .record_icon_url("https://a.com/", "https://a.com/i.png")
            .await
            .expect("repeat record should succeed");
        assert_eq!(index.len().await, 1);
    }
}
