//! Icon loading stage
//!
//! Loaders are tried in a fixed order against the current best candidate:
//! memory cache, inline `data:` payload, packaged resources, the pluggable
//! external index, disk cache, the deprecated legacy store, and finally the
//! network. The first hit wins; a full miss removes the candidate and the
//! chain restarts against the next best one.
//!
//! Misses are side-effect-free with one exception: loaders that fetched
//! bytes remotely record undecodable or unreachable URLs into the failure
//! tracker before reporting the miss.
//!
//! Like the preparers, the set of loaders is closed and dispatched as an
//! enum.

pub mod data_uri;
pub mod disk;
pub mod external_index;
pub mod generator;
pub mod legacy;
pub mod memory;
pub mod network;
pub mod packaged;

pub use data_uri::DataUriLoader;
pub use disk::DiskLoader;
pub use external_index::ExternalIndexLoader;
pub use generator::IconGenerator;
pub use legacy::LegacyStoreLoader;
pub use memory::MemoryLoader;
pub use network::NetworkLoader;
pub use packaged::PackagedIconLoader;

use crate::descriptor::IconDescriptor;
use crate::pipeline::PipelineContext;
use crate::request::IconRequest;
use crate::response::IconResponse;

/// Result of one loader attempt against one candidate
#[derive(Debug)]
pub enum LoadOutcome {
    /// The loader produced a decoded icon
    Hit(IconResponse),
    /// This tier has nothing for the candidate; try the next
    Miss,
}

/// One tier of the loading chain
#[derive(Debug)]
pub enum IconLoader {
    Memory(MemoryLoader),
    DataUri(DataUriLoader),
    Packaged(PackagedIconLoader),
    ExternalIndex(ExternalIndexLoader),
    Disk(DiskLoader),
    Legacy(LegacyStoreLoader),
    Network(NetworkLoader),
}

impl IconLoader {
    /// Try to produce an icon for the candidate from this tier
    pub(crate) async fn load(
        &self,
        ctx: &PipelineContext,
        request: &IconRequest,
        candidate: &IconDescriptor,
    ) -> LoadOutcome {
        match self {
            IconLoader::Memory(loader) => loader.load(ctx, request, candidate).await,
            IconLoader::DataUri(loader) => loader.load(candidate),
            IconLoader::Packaged(loader) => loader.load(ctx, candidate),
            IconLoader::ExternalIndex(loader) => loader.load(ctx, candidate),
            IconLoader::Disk(loader) => loader.load(ctx, request, candidate).await,
            IconLoader::Legacy(loader) => loader.load(ctx, candidate).await,
            IconLoader::Network(loader) => loader.load(ctx, request, candidate).await,
        }
    }

    /// Stable name used in trace logging
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            IconLoader::Memory(_) => "memory",
            IconLoader::DataUri(_) => "data_uri",
            IconLoader::Packaged(_) => "packaged",
            IconLoader::ExternalIndex(_) => "external_index",
            IconLoader::Disk(_) => "disk",
            IconLoader::Legacy(_) => "legacy",
            IconLoader::Network(_) => "network",
        }
    }
}

/// The fixed tier order, fastest and cheapest first
#[must_use]
pub fn default_chain() -> Vec<IconLoader> {
    vec![
        IconLoader::Memory(MemoryLoader),
        IconLoader::DataUri(DataUriLoader),
        IconLoader::Packaged(PackagedIconLoader),
        IconLoader::ExternalIndex(ExternalIndexLoader),
        IconLoader::Disk(DiskLoader),
        IconLoader::Legacy(LegacyStoreLoader),
        IconLoader::Network(NetworkLoader),
    ]
}
