//! Error types for the modeling engine

use thiserror::Error;

use homolog_client::ClientError;
use homolog_core::domain::job::{FailureKind, JobStatus};

/// Errors from the status polling loop
#[derive(Debug, Error)]
pub enum PollError {
    /// The attempt bound was exceeded without reaching a terminal state
    #[error("no terminal state after {attempts} poll attempts")]
    Timeout { attempts: u32 },

    /// Too many consecutive status fetches failed
    ///
    /// Individual fetch failures are transient (the remote job keeps
    /// running regardless), but a long unbroken streak means the service
    /// is unreachable and the run is abandoned.
    #[error("{consecutive} consecutive status fetch failures, last: {source}")]
    Transport {
        consecutive: u32,
        #[source]
        source: ClientError,
    },

    /// Too many consecutive responses carried no recognizable status
    #[error("{consecutive} consecutive responses without a recognizable status")]
    RepeatedUnknown { consecutive: u32 },

    /// The caller aborted the run
    #[error("run cancelled by caller")]
    Cancelled,
}

impl PollError {
    /// Classification of this error for the run outcome
    pub fn failure_kind(&self) -> FailureKind {
        match self {
            Self::Timeout { .. } => FailureKind::PollTimeout,
            Self::Transport { .. } => FailureKind::Transport,
            Self::RepeatedUnknown { .. } => FailureKind::MalformedResponse,
            Self::Cancelled => FailureKind::Cancelled,
        }
    }
}

/// Errors from artifact extraction
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Extraction is defined only for COMPLETED jobs
    #[error("artifact extraction requires a COMPLETED job, got {status}")]
    Precondition { status: JobStatus },
}

/// Classification of a client error for the run outcome
pub(crate) fn client_failure_kind(error: &ClientError) -> FailureKind {
    match error {
        ClientError::Transport(_) => FailureKind::Transport,
        ClientError::UnexpectedStatus { .. } => FailureKind::UnexpectedStatus,
        ClientError::MalformedResponse(_) => FailureKind::MalformedResponse,
    }
}
