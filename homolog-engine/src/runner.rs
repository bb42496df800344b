//! Modeling engine
//!
//! Composes the full lifecycle of one modeling run: submit the request,
//! poll the project to a terminal state, extract artifacts, and report a
//! structured outcome. Each run is strictly sequential; callers wanting
//! several jobs in flight run the engine from separate tasks, since runs
//! share no mutable state.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};
use uuid::Uuid;

use homolog_client::{ModelingClient, ProjectApi};
use homolog_core::domain::job::{FailureKind, JobOutcome, JobStatus, ModelingRequest};

use crate::config::EngineConfig;
use crate::error::client_failure_kind;
use crate::extract::extract_artifacts;
use crate::observer::{JobObserver, TracingObserver};
use crate::poller::StatusPoller;

/// Drives modeling requests through submit, poll, and extract
///
/// Cheap to share behind `Arc`; every call to [`run`](Self::run) owns its
/// own project handle and response buffers. Running the same request
/// twice submits two independent remote jobs; the engine performs no
/// deduplication.
pub struct ModelingEngine {
    api: Arc<dyn ProjectApi>,
    observer: Arc<dyn JobObserver>,
    poller: StatusPoller,
}

impl ModelingEngine {
    /// Creates an engine talking to the real service described by `config`
    pub fn new(config: &EngineConfig) -> Self {
        let api: Arc<dyn ProjectApi> =
            Arc::new(ModelingClient::new(&config.base_url, &config.api_token));
        Self::with_api(config, api)
    }

    /// Creates an engine over a custom API implementation
    ///
    /// The polling policy still comes from `config`; diagnostics go to the
    /// default tracing observer.
    pub fn with_api(config: &EngineConfig, api: Arc<dyn ProjectApi>) -> Self {
        Self::with_observer(config, api, Arc::new(TracingObserver::new()))
    }

    /// Creates an engine with both a custom API and a custom observer
    pub fn with_observer(
        config: &EngineConfig,
        api: Arc<dyn ProjectApi>,
        observer: Arc<dyn JobObserver>,
    ) -> Self {
        let poller = StatusPoller::new(Arc::clone(&api), Arc::clone(&observer), config);
        Self {
            api,
            observer,
            poller,
        }
    }

    /// Runs a modeling request to completion
    ///
    /// Equivalent to [`run_with_cancel`](Self::run_with_cancel) with a
    /// token that is never cancelled.
    pub async fn run(&self, request: ModelingRequest) -> JobOutcome {
        self.run_with_cancel(request, CancellationToken::new()).await
    }

    /// Runs a modeling request to completion, abortable between polls
    ///
    /// All failures (infrastructure errors, a FAILED remote job, poll
    /// exhaustion, cancellation) come back as [`JobOutcome::Failure`]
    /// with the originating kind; nothing is retried at this level. A
    /// cancelled run does not notify the remote service.
    pub async fn run_with_cancel(
        &self,
        request: ModelingRequest,
        cancel: CancellationToken,
    ) -> JobOutcome {
        let run_id = Uuid::new_v4();

        if cancel.is_cancelled() {
            return JobOutcome::failure(FailureKind::Cancelled, "run cancelled before submission");
        }

        info!(
            "Submitting {} job \"{}\" with {} target sequence(s) (run {})",
            request.mode(),
            request.project_title(),
            request.target_sequences().len(),
            run_id
        );

        let handle = match self.api.submit(&request).await {
            Ok(handle) => handle,
            Err(e) => {
                error!("Submission failed (run {}): {}", run_id, e);
                return JobOutcome::failure(client_failure_kind(&e), e.to_string());
            }
        };

        self.observer.on_submitted(run_id, &handle);

        let (status, summary) = match self
            .poller
            .poll_until_terminal(&handle, &cancel, run_id)
            .await
        {
            Ok(terminal) => terminal,
            Err(e) => {
                warn!(
                    "Polling project {} ended without a terminal state (run {}): {}",
                    handle, run_id, e
                );
                return JobOutcome::failure(e.failure_kind(), e.to_string());
            }
        };

        match status {
            JobStatus::Completed => {
                match extract_artifacts(status, &summary, run_id, self.observer.as_ref()) {
                    Ok(artifacts) => {
                        if artifacts.is_empty() {
                            warn!(
                                "Project {} completed without model artifacts (run {})",
                                handle, run_id
                            );
                        } else {
                            info!(
                                "Project {} completed with {} model artifact(s) (run {})",
                                handle,
                                artifacts.len(),
                                run_id
                            );
                        }
                        JobOutcome::success(artifacts)
                    }
                    Err(e) => JobOutcome::failure(FailureKind::Precondition, e.to_string()),
                }
            }
            JobStatus::Failed => {
                info!("Project {} reported FAILED (run {})", handle, run_id);
                JobOutcome::failure(
                    FailureKind::RemoteJobFailed,
                    format!("modeling project {} reported FAILED", handle),
                )
            }
            // The poller only returns terminal statuses
            other => JobOutcome::failure(
                FailureKind::Precondition,
                format!("poller returned non-terminal status {}", other),
            ),
        }
    }
}
