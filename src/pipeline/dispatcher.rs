//! Serializing task dispatcher
//!
//! All submitted requests funnel into one mpsc queue drained by a single
//! worker task. One task finishes (or cancels) before the next starts; that
//! serialization is what lets the loaders and processors touch the shared
//! stores without coordinating among themselves.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use futures::FutureExt;
use log::{debug, error, warn};
use tokio::sync::{mpsc, oneshot};

use crate::loaders::{self, IconLoader};
use crate::preparers::{self, IconPreparer};
use crate::processors::{self, IconProcessor};
use crate::request::IconRequest;

use super::task::{IconTask, TaskOutcome};
use super::PipelineContext;

struct QueuedTask {
    request: IconRequest,
    cancelled: Arc<AtomicBool>,
    done: oneshot::Sender<TaskOutcome>,
}

/// Handle to a submitted request
///
/// Dropping the handle does NOT cancel the task; the work continues and
/// the callback still fires.
#[derive(Debug)]
pub struct LoadHandle {
    cancelled: Arc<AtomicBool>,
    completion: oneshot::Receiver<TaskOutcome>,
}

impl LoadHandle {
    /// Request cooperative cancellation
    ///
    /// The task stops at its next checkpoint; a task past its last
    /// checkpoint completes normally.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Wait for the task to finish and return how it ended
    pub async fn join(self) -> TaskOutcome {
        // A dropped sender means the worker died mid-task.
        self.completion.await.unwrap_or(TaskOutcome::Failed)
    }
}

/// Owns the worker task and the queue feeding it
pub(crate) struct Dispatcher {
    queue: mpsc::UnboundedSender<QueuedTask>,
}

impl Dispatcher {
    /// Spawn the worker loop over the shared pipeline context
    pub(crate) fn spawn(ctx: Arc<PipelineContext>) -> Self {
        let (queue, mut rx) = mpsc::unbounded_channel::<QueuedTask>();

        tokio::spawn(async move {
            let preparers: Vec<IconPreparer> = preparers::default_chain();
            let loaders: Vec<IconLoader> = loaders::default_chain();
            let processors: Vec<IconProcessor> = processors::default_chain();

            while let Some(queued) = rx.recv().await {
                let page_url = queued.request.page_url.clone();
                let task = IconTask::new(queued.request, queued.cancelled);

                let outcome = std::panic::AssertUnwindSafe(task.run(
                    &ctx,
                    &preparers,
                    &loaders,
                    &processors,
                ))
                .catch_unwind()
                .await
                .unwrap_or_else(|_| {
                    error!("Icon task for {page_url} panicked");
                    TaskOutcome::Failed
                });

                debug!("Task for {page_url} ended: {outcome:?}");
                let _ = queued.done.send(outcome);
            }
        });

        Self { queue }
    }

    /// Enqueue a request and hand back its cancellation/join handle
    pub(crate) fn submit(&self, request: IconRequest) -> LoadHandle {
        let cancelled = Arc::new(AtomicBool::new(false));
        let (done, completion) = oneshot::channel();

        let queued = QueuedTask {
            request,
            cancelled: Arc::clone(&cancelled),
            done,
        };
        if self.queue.send(queued).is_err() {
            // Worker gone; the dropped sender surfaces as Failed on join.
            warn!("Icon pipeline worker is gone, dropping request");
        }

        LoadHandle {
            cancelled,
            completion,
        }
    }
}
