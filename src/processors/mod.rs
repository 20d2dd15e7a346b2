//! Post-load processing stage
//!
//! Processors run in a fixed order on every resolved response (cached,
//! fetched, or generated) and enrich it in place:
//! - `ExtractColor` fills in the dominant color
//! - `PersistToDisk` writes the icon and the page mapping
//! - `ResizeProcessor` scales to the requested size
//! - `StoreInMemory` primes the memory cache
//!
//! A processor failure fails the whole task at its boundary; effects of
//! processors that already ran are kept, but the callback never fires on a
//! partially processed response.

pub mod extract_color;
pub mod persist_to_disk;
pub mod resize;
pub mod store_in_memory;

pub use extract_color::ExtractColor;
pub use persist_to_disk::PersistToDisk;
pub use resize::ResizeProcessor;
pub use store_in_memory::StoreInMemory;

use anyhow::Result;

use crate::pipeline::PipelineContext;
use crate::request::IconRequest;
use crate::response::IconResponse;

/// One step of the processing chain
#[derive(Debug)]
pub enum IconProcessor {
    ExtractColor(ExtractColor),
    PersistToDisk(PersistToDisk),
    Resize(ResizeProcessor),
    StoreInMemory(StoreInMemory),
}

impl IconProcessor {
    /// Apply this processor to the response
    pub(crate) async fn process(
        &self,
        ctx: &PipelineContext,
        request: &IconRequest,
        response: &mut IconResponse,
    ) -> Result<()> {
        match self {
            IconProcessor::ExtractColor(processor) => {
                processor.process(response);
                Ok(())
            }
            IconProcessor::PersistToDisk(processor) => processor.process(ctx, request, response).await,
            IconProcessor::Resize(processor) => {
                processor.process(request, response);
                Ok(())
            }
            IconProcessor::StoreInMemory(processor) => {
                processor.process(ctx, response).await;
                Ok(())
            }
        }
    }

    /// Stable name used in trace logging
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            IconProcessor::ExtractColor(_) => "extract_color",
            IconProcessor::PersistToDisk(_) => "persist_to_disk",
            IconProcessor::Resize(_) => "resize",
            IconProcessor::StoreInMemory(_) => "store_in_memory",
        }
    }
}

/// The fixed processing order applied to every resolved response
#[must_use]
pub fn default_chain() -> Vec<IconProcessor> {
    vec![
        IconProcessor::ExtractColor(ExtractColor),
        IconProcessor::PersistToDisk(PersistToDisk),
        IconProcessor::Resize(ResizeProcessor),
        IconProcessor::StoreInMemory(StoreInMemory),
    ]
}
