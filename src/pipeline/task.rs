//! One request's walk through the pipeline
//!
//! A task moves through prepare, load, generate, process and ends in
//! exactly one of three outcomes. The cancellation flag is checked before
//! every preparer, every loader attempt, and every processor; a cancelled
//! task stops at the next checkpoint and never invokes its callback.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, error, warn};

use crate::loaders::{IconGenerator, IconLoader, LoadOutcome};
use crate::preparers::IconPreparer;
use crate::processors::IconProcessor;
use crate::request::IconRequest;
use crate::response::IconResponse;

use super::PipelineContext;

/// How a task ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskOutcome {
    /// The pipeline ran to the end (callback delivered unless the request
    /// was prepare-only or had none attached)
    Completed,
    /// Cancellation was observed at a checkpoint; no callback
    Cancelled,
    /// A stage failed; logged, no callback
    Failed,
}

/// Executes a single request against the pipeline chains
pub(crate) struct IconTask {
    request: IconRequest,
    cancelled: Arc<AtomicBool>,
}

impl IconTask {
    pub(crate) fn new(request: IconRequest, cancelled: Arc<AtomicBool>) -> Self {
        Self { request, cancelled }
    }

    fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Run the request to completion, cancellation, or failure
    pub(crate) async fn run(
        mut self,
        ctx: &PipelineContext,
        preparers: &[IconPreparer],
        loaders: &[IconLoader],
        processors: &[IconProcessor],
    ) -> TaskOutcome {
        for preparer in preparers {
            if self.is_cancelled() {
                return TaskOutcome::Cancelled;
            }
            preparer.prepare(ctx, &mut self.request).await;
        }
        debug!(
            "Prepared {} candidates for {}",
            self.request.candidates.len(),
            self.request.page_url
        );

        if self.request.prepare_only {
            return TaskOutcome::Completed;
        }

        let mut response = match self.load(ctx, loaders).await {
            Ok(Some(response)) => response,
            Ok(None) => return TaskOutcome::Cancelled,
            Err(()) => return TaskOutcome::Failed,
        };

        for processor in processors {
            if self.is_cancelled() {
                return TaskOutcome::Cancelled;
            }
            if let Err(err) = processor.process(ctx, &self.request, &mut response).await {
                warn!(
                    "Processor {} failed for {}: {err:#}",
                    processor.name(),
                    self.request.page_url
                );
                return TaskOutcome::Failed;
            }
        }

        if self.is_cancelled() {
            return TaskOutcome::Cancelled;
        }

        if let Some(callback) = self.request.callback.take() {
            if self.request.run_callback_on_worker {
                callback(response);
            } else {
                // Keeps a slow callback from stalling the serialized queue.
                tokio::spawn(async move { callback(response) });
            }
        }
        TaskOutcome::Completed
    }

    /// Walk candidates best-first through the loader tiers
    ///
    /// `Ok(None)` signals cancellation; `Err(())` a broken generator.
    async fn load(
        &mut self,
        ctx: &PipelineContext,
        loaders: &[IconLoader],
    ) -> Result<Option<IconResponse>, ()> {
        while let Some(candidate) = self.request.candidates.best().cloned() {
            for loader in loaders {
                if self.is_cancelled() {
                    return Ok(None);
                }
                if let LoadOutcome::Hit(response) =
                    loader.load(ctx, &self.request, &candidate).await
                {
                    debug!("Loader {} resolved {}", loader.name(), candidate.url);
                    return Ok(Some(response));
                }
            }
            self.request.candidates.remove_best();
        }

        if self.is_cancelled() {
            return Ok(None);
        }

        // The generator is the guarantee of this engine; a panic here is a
        // bug in the fallback itself and gets its own distinct log line.
        let request = &self.request;
        match std::panic::catch_unwind(AssertUnwindSafe(|| IconGenerator::generate(request))) {
            Ok(response) => Ok(Some(response)),
            Err(_) => {
                error!("Icon generator panicked for {}", self.request.page_url);
                Err(())
            }
        }
    }
}
