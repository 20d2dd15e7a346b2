//! In-process icon cache
//!
//! Bounded LRU keyed by icon URL. First tier the loader chain consults, so
//! lookups must never block on I/O; the only wait is the cache lock itself.

use std::num::NonZeroUsize;

use image::DynamicImage;
use lru::LruCache;
use tokio::sync::Mutex;

/// An icon plus its extracted dominant color, as stored in memory
#[derive(Clone)]
pub struct CachedIcon {
    pub image: DynamicImage,
    /// ARGB dominant color, 0 when never extracted
    pub color: u32,
}

/// Bounded in-process LRU cache of resolved icons
pub struct MemoryCache {
    entries: Mutex<LruCache<String, CachedIcon>>,
}

impl MemoryCache {
    /// Create a cache holding at most `capacity` icons
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Look up an icon by its source URL
    pub async fn get(&self, icon_url: &str) -> Option<CachedIcon> {
        let mut entries = self.entries.lock().await;
        entries.get(icon_url).cloned()
    }

    /// Store an icon under its source URL, evicting the least recently used
    /// entry when full
    pub async fn put(&self, icon_url: &str, image: DynamicImage, color: u32) {
        let mut entries = self.entries.lock().await;
        entries.put(icon_url.to_string(), CachedIcon { image, color });
    }

    /// Number of icons currently cached
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
