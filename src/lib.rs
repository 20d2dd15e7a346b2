//! siteicons: website-icon resolution and caching
//!
//! Resolves the best available icon for a page through a ranked candidate
//! set and an ordered chain of backends, and guarantees a result by
//! synthesizing a letter tile when everything else misses.
//!
//! - Candidates are ranked by role, declared size, and format
//! - Loaders try memory, inline data, packaged, external, disk, legacy,
//!   then network, cheapest first
//! - Processors extract a dominant color, persist, resize, and prime the
//!   memory cache
//! - All requests run serialized on one worker; handles support
//!   cooperative cancellation
//!
//! ```no_run
//! use siteicons::{IconDescriptor, IconEngine, IconEngineConfig, IconKind};
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let engine = IconEngine::new(
//!     IconEngineConfig::builder().storage_dir("/tmp/siteicons").build(),
//! )
//! .await?;
//!
//! let handle = engine
//!     .for_page("https://example.com/")
//!     .with_candidate(
//!         IconDescriptor::new("https://example.com/apple-touch-icon.png", IconKind::TouchIcon)
//!             .with_size(180),
//!     )
//!     .execute(|response| {
//!         println!("icon {}x{}", response.image.width(), response.image.height());
//!     })?;
//! handle.join().await;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod descriptor;
pub mod engine;
pub mod fetch;
pub mod imaging;
pub mod loaders;
pub mod pipeline;
pub mod preparers;
pub mod processors;
pub mod request;
pub mod response;
pub mod storage;

pub use config::{IconEngineConfig, IconEngineConfigBuilder};
pub use descriptor::{CandidateSet, IconDescriptor, IconKind};
pub use engine::IconEngine;
pub use pipeline::{LoadHandle, TaskOutcome};
pub use request::{IconRequest, IconRequestBuilder, RequestError};
pub use response::{IconResponse, IconSource};
pub use storage::ExternalIndex;
