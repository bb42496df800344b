//! Shared test doubles
//!
//! Scripted API implementations and a recording observer used by the
//! poller and engine unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;
use uuid::Uuid;

use homolog_client::{ClientError, ProjectApi, Result as ClientResult};
use homolog_core::domain::job::{JobStatus, ModelingRequest, ProjectHandle};
use homolog_core::dto::project::{ModelRecord, ProjectSummary};

use crate::observer::JobObserver;

/// A summary carrying only a status
pub(crate) fn summary(status: JobStatus) -> ProjectSummary {
    ProjectSummary::with_status(status)
}

/// A COMPLETED summary with the given model coordinate references
pub(crate) fn completed_with(urls: Vec<Option<&str>>) -> ProjectSummary {
    ProjectSummary {
        status: JobStatus::Completed,
        date_created: None,
        models: urls
            .into_iter()
            .map(|url| ModelRecord {
                coordinates_url: url.map(str::to_string),
            })
            .collect(),
    }
}

/// A representative transient fetch failure
pub(crate) fn fetch_error() -> ClientError {
    ClientError::unexpected_status(502, "bad gateway")
}

/// ProjectApi double fed from a script of responses
///
/// Submission defaults to accepting with handle "P-1" unless a scripted
/// response is installed. When the summary script runs dry the project
/// reports RUNNING forever, which lets tests exercise attempt bounds and
/// cancellation.
pub(crate) struct ScriptedApi {
    submit_response: Mutex<Option<ClientResult<ProjectHandle>>>,
    summaries: Mutex<VecDeque<ClientResult<ProjectSummary>>>,
    submit_calls: AtomicU32,
    fetch_calls: AtomicU32,
}

impl ScriptedApi {
    pub(crate) fn new(summaries: Vec<ClientResult<ProjectSummary>>) -> Self {
        Self {
            submit_response: Mutex::new(None),
            summaries: Mutex::new(summaries.into()),
            submit_calls: AtomicU32::new(0),
            fetch_calls: AtomicU32::new(0),
        }
    }

    pub(crate) fn with_submit(self, response: ClientResult<ProjectHandle>) -> Self {
        *self.submit_response.lock().unwrap() = Some(response);
        self
    }

    pub(crate) fn submit_calls(&self) -> u32 {
        self.submit_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn fetch_calls(&self) -> u32 {
        self.fetch_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProjectApi for ScriptedApi {
    async fn submit(&self, _request: &ModelingRequest) -> ClientResult<ProjectHandle> {
        self.submit_calls.fetch_add(1, Ordering::SeqCst);
        match self.submit_response.lock().unwrap().take() {
            Some(response) => response,
            None => Ok(ProjectHandle::new("P-1")),
        }
    }

    async fn fetch_summary(&self, _handle: &ProjectHandle) -> ClientResult<ProjectSummary> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        match self.summaries.lock().unwrap().pop_front() {
            Some(response) => response,
            None => Ok(ProjectSummary::with_status(JobStatus::Running)),
        }
    }
}

/// Observer that records every event it receives
#[derive(Default)]
pub(crate) struct RecordingObserver {
    pub(crate) submitted: Mutex<Vec<ProjectHandle>>,
    pub(crate) statuses: Mutex<Vec<JobStatus>>,
    pub(crate) poll_errors: AtomicU32,
    pub(crate) skipped: Mutex<Vec<usize>>,
}

impl JobObserver for RecordingObserver {
    fn on_submitted(&self, _run_id: Uuid, handle: &ProjectHandle) {
        self.submitted.lock().unwrap().push(handle.clone());
    }

    fn on_status(&self, _run_id: Uuid, _attempt: u32, status: JobStatus) {
        self.statuses.lock().unwrap().push(status);
    }

    fn on_poll_error(&self, _run_id: Uuid, _attempt: u32, _error: &ClientError) {
        self.poll_errors.fetch_add(1, Ordering::SeqCst);
    }

    fn on_artifact_skipped(&self, _run_id: Uuid, index: usize) {
        self.skipped.lock().unwrap().push(index);
    }
}
