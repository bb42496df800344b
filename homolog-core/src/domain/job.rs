//! Modeling job domain types

use serde::{Deserialize, Serialize};

/// A homology-modeling request
///
/// The two variants mirror the two submission modes of the remote service:
/// plain automodel (template selection left to the service) and user-template
/// modeling (the caller supplies template coordinates). Both are consumed by
/// the same submission path; only the endpoint and payload shape differ.
///
/// Requests are immutable values: constructed once by the caller and never
/// mutated by the workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelingRequest {
    /// Sequence-only modeling; the service picks templates
    Automodel {
        target_sequences: Vec<String>,
        project_title: String,
    },
    /// Modeling against caller-supplied template coordinates (PDB text)
    UserTemplate {
        target_sequences: Vec<String>,
        template_coordinates: String,
        project_title: String,
    },
}

impl ModelingRequest {
    /// Creates a sequence-only modeling request
    pub fn automodel(
        target_sequences: Vec<String>,
        project_title: impl Into<String>,
    ) -> Self {
        Self::Automodel {
            target_sequences,
            project_title: project_title.into(),
        }
    }

    /// Creates a user-template modeling request
    pub fn user_template(
        target_sequences: Vec<String>,
        template_coordinates: impl Into<String>,
        project_title: impl Into<String>,
    ) -> Self {
        Self::UserTemplate {
            target_sequences,
            template_coordinates: template_coordinates.into(),
            project_title: project_title.into(),
        }
    }

    /// The target sequences to model
    pub fn target_sequences(&self) -> &[String] {
        match self {
            Self::Automodel {
                target_sequences, ..
            }
            | Self::UserTemplate {
                target_sequences, ..
            } => target_sequences,
        }
    }

    /// The human-readable project title
    pub fn project_title(&self) -> &str {
        match self {
            Self::Automodel { project_title, .. }
            | Self::UserTemplate { project_title, .. } => project_title,
        }
    }

    /// Short label for the submission mode, used in diagnostics
    pub fn mode(&self) -> &'static str {
        match self {
            Self::Automodel { .. } => "automodel",
            Self::UserTemplate { .. } => "user-template",
        }
    }
}

/// Opaque identifier of a remote modeling project
///
/// Returned by the service at submission time and used as the correlation
/// key for every subsequent status request. Created at most once per
/// request; never reused across requests.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectHandle(String);

impl ProjectHandle {
    /// Wraps a project identifier returned by the service
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw identifier string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProjectHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Remote job status as reported by the status endpoint
///
/// `Completed` and `Failed` are the only terminal states. `Unknown` covers
/// any status string the service reports that this client does not
/// recognize, as well as a missing status field; it is non-terminal and
/// polling continues through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    Accepted,
    Pending,
    Running,
    Completed,
    Failed,
    #[serde(other)]
    Unknown,
}

impl JobStatus {
    /// Whether no further polling is meaningful for this status
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}

impl Default for JobStatus {
    fn default() -> Self {
        Self::Unknown
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Accepted => "ACCEPTED",
            Self::Pending => "PENDING",
            Self::Running => "RUNNING",
            Self::Completed => "COMPLETED",
            Self::Failed => "FAILED",
            Self::Unknown => "UNKNOWN",
        };
        f.write_str(s)
    }
}

/// A produced model artifact
///
/// Minimally a reference to the model's coordinate file. The extractor
/// guarantees the reference is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub coordinates_url: String,
}

impl ModelArtifact {
    /// Creates an artifact from a coordinates reference
    pub fn new(coordinates_url: impl Into<String>) -> Self {
        Self {
            coordinates_url: coordinates_url.into(),
        }
    }
}

/// Classification of a failed run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureKind {
    /// Network, timeout, or connection failure (possibly escalated from
    /// repeated transient poll failures)
    Transport,
    /// Submission was not acknowledged with HTTP 202
    UnexpectedStatus,
    /// A response lacked an expected field or could not be parsed
    MalformedResponse,
    /// The poll attempt bound was exceeded without a terminal state
    PollTimeout,
    /// The remote job itself reported FAILED
    RemoteJobFailed,
    /// The caller aborted the run
    Cancelled,
    /// Internal contract violation
    Precondition,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Transport => "transport failure",
            Self::UnexpectedStatus => "unexpected submission status",
            Self::MalformedResponse => "malformed response",
            Self::PollTimeout => "poll timeout",
            Self::RemoteJobFailed => "remote job failed",
            Self::Cancelled => "cancelled",
            Self::Precondition => "precondition violation",
        };
        f.write_str(s)
    }
}

/// Final answer of one modeling run
///
/// This is the only value the workflow exposes to callers. A `Success`
/// may carry an empty artifact list: a COMPLETED job that produced no
/// models is a valid, if unusual, outcome and callers must handle it
/// explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobOutcome {
    Success { artifacts: Vec<ModelArtifact> },
    Failure { kind: FailureKind, message: String },
}

impl JobOutcome {
    /// Creates a success outcome
    pub fn success(artifacts: Vec<ModelArtifact>) -> Self {
        Self::Success { artifacts }
    }

    /// Creates a failure outcome
    pub fn failure(kind: FailureKind, message: impl Into<String>) -> Self {
        Self::Failure {
            kind,
            message: message.into(),
        }
    }

    /// Whether the run produced a COMPLETED remote job
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The failure classification, if the run failed
    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            Self::Failure { kind, .. } => Some(*kind),
            Self::Success { .. } => None,
        }
    }
}
