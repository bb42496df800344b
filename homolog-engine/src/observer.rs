//! Run observer
//!
//! Per-run diagnostics flow through an injectable observer rather than
//! process-wide logging configuration. The engine reports lifecycle
//! events here; what happens to them (logging, metrics, progress UI) is
//! the caller's choice.

use tracing::{info, warn};
use uuid::Uuid;

use homolog_client::ClientError;
use homolog_core::domain::job::{JobStatus, ProjectHandle};

/// Observer for the lifecycle of one modeling run
///
/// All methods are fire-and-forget notifications; implementations must
/// not block. The `run_id` correlates events belonging to the same
/// engine run.
pub trait JobObserver: Send + Sync {
    /// The service accepted the submission and returned a project handle
    fn on_submitted(&self, run_id: Uuid, handle: &ProjectHandle);

    /// A status poll completed; `attempt` counts from 1
    fn on_status(&self, run_id: Uuid, attempt: u32, status: JobStatus);

    /// A status poll failed; the poller will retry on the next tick
    /// unless the consecutive-failure bound is reached
    fn on_poll_error(&self, run_id: Uuid, attempt: u32, error: &ClientError);

    /// A model entry was skipped because it carried no coordinates
    /// reference; `index` is its position in the summary
    fn on_artifact_skipped(&self, run_id: Uuid, index: usize);
}

/// Observer that routes events to `tracing`
///
/// The default when no observer is injected.
#[derive(Debug, Clone, Default)]
pub struct TracingObserver;

impl TracingObserver {
    /// Creates a new tracing-backed observer
    pub fn new() -> Self {
        Self
    }
}

impl JobObserver for TracingObserver {
    fn on_submitted(&self, run_id: Uuid, handle: &ProjectHandle) {
        info!("Job started with project ID {} (run {})", handle, run_id);
    }

    fn on_status(&self, run_id: Uuid, attempt: u32, status: JobStatus) {
        info!("Job status is now {} (run {}, poll {})", status, run_id, attempt);
    }

    fn on_poll_error(&self, run_id: Uuid, attempt: u32, error: &ClientError) {
        warn!("Status poll {} failed (run {}): {}", attempt, run_id, error);
    }

    fn on_artifact_skipped(&self, run_id: Uuid, index: usize) {
        warn!(
            "Skipping model entry {} without a coordinates reference (run {})",
            index, run_id
        );
    }
}
