//! External content index hook
//!
//! Embedders that already hold icon blobs elsewhere (a bookmarks store, a
//! history database) can plug that source into the loader chain without the
//! engine knowing its shape. The default engine runs without one.

/// Application-provided icon blob source keyed by icon URL
///
/// Implementations should answer from local state quickly; the lookup runs
/// on the pipeline worker between the packaged-resource and disk-cache
/// tiers.
pub trait ExternalIndex: Send + Sync {
    /// Raw icon bytes for this URL, `None` when the index has nothing
    fn lookup(&self, icon_url: &str) -> Option<Vec<u8>>;
}
