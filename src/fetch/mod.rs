//! Byte-level fetch backends
//!
//! HTTP fetching with a shared client, and `data:` URL payload extraction.
//! Loaders call these and decide how to treat failures; nothing here caches.

pub mod data_url;
pub mod http;

pub use data_url::{DataUrl, is_data_url};
pub use http::{FetchError, HttpFetcher};
