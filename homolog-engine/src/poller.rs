//! Status poller
//!
//! Polls the modeling service for a project's status until it reaches a
//! terminal state, applying a fixed inter-poll delay. The sleep between
//! polls is the only suspension point and holds no lock, so many runs can
//! poll concurrently from one engine.

use std::sync::Arc;
use std::time::Duration;

use tokio::time;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};
use uuid::Uuid;

use homolog_client::ProjectApi;
use homolog_core::domain::job::{JobStatus, ProjectHandle};
use homolog_core::dto::project::ProjectSummary;

use crate::config::EngineConfig;
use crate::error::PollError;
use crate::observer::JobObserver;

/// Fixed-interval poller for a submitted project
///
/// Terminal states (COMPLETED, FAILED) stop the loop. Everything else,
/// including UNKNOWN, keeps it going: a transient service hiccup must not
/// be mistaken for a failed job. Fetch failures are likewise retried on
/// the next tick, up to a bound of consecutive failures.
pub struct StatusPoller {
    api: Arc<dyn ProjectApi>,
    observer: Arc<dyn JobObserver>,
    interval: Duration,
    max_attempts: Option<u32>,
    max_consecutive_failures: u32,
}

impl StatusPoller {
    /// Creates a poller with the policy from `config`
    pub fn new(
        api: Arc<dyn ProjectApi>,
        observer: Arc<dyn JobObserver>,
        config: &EngineConfig,
    ) -> Self {
        Self {
            api,
            observer,
            interval: config.poll_interval,
            max_attempts: config.max_poll_attempts,
            max_consecutive_failures: config.max_consecutive_failures,
        }
    }

    /// Polls until the project reports a terminal status
    ///
    /// Returns the terminal status together with the summary that carried
    /// it, so the caller can extract artifacts without a further fetch.
    /// The cancellation token is checked once per iteration and raced
    /// against the inter-poll sleep; a cancelled run issues no further
    /// requests.
    pub async fn poll_until_terminal(
        &self,
        handle: &ProjectHandle,
        cancel: &CancellationToken,
        run_id: Uuid,
    ) -> Result<(JobStatus, ProjectSummary), PollError> {
        let mut attempts: u32 = 0;
        let mut failed_fetches: u32 = 0;
        let mut unknown_statuses: u32 = 0;

        loop {
            if cancel.is_cancelled() {
                return Err(PollError::Cancelled);
            }

            attempts += 1;

            match self.api.fetch_summary(handle).await {
                Ok(summary) => {
                    failed_fetches = 0;
                    self.observer.on_status(run_id, attempts, summary.status);
                    debug!(
                        "Poll {}: project {} is {}",
                        attempts, handle, summary.status
                    );

                    if summary.status.is_terminal() {
                        return Ok((summary.status, summary));
                    }

                    if summary.status == JobStatus::Unknown {
                        unknown_statuses += 1;
                        warn!(
                            "Poll {}: no recognizable status for project {} ({} in a row)",
                            attempts, handle, unknown_statuses
                        );
                        if unknown_statuses >= self.max_consecutive_failures {
                            return Err(PollError::RepeatedUnknown {
                                consecutive: unknown_statuses,
                            });
                        }
                    } else {
                        unknown_statuses = 0;
                    }
                }
                Err(e) => {
                    failed_fetches += 1;
                    self.observer.on_poll_error(run_id, attempts, &e);
                    warn!(
                        "Poll {} failed for project {} ({} in a row): {}",
                        attempts, handle, failed_fetches, e
                    );
                    if failed_fetches >= self.max_consecutive_failures {
                        return Err(PollError::Transport {
                            consecutive: failed_fetches,
                            source: e,
                        });
                    }
                }
            }

            if let Some(max) = self.max_attempts {
                if attempts >= max {
                    return Err(PollError::Timeout { attempts });
                }
            }

            tokio::select! {
                _ = cancel.cancelled() => return Err(PollError::Cancelled),
                _ = time::sleep(self.interval) => {}
            }
        }
    }
}
