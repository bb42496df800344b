//! Artifact extraction
//!
//! Turns the terminal summary of a COMPLETED project into model
//! artifacts. A COMPLETED project with zero models is a valid, empty
//! result; calling the extractor with any other status is a contract
//! violation.

use tracing::warn;
use uuid::Uuid;

use homolog_core::domain::job::{JobStatus, ModelArtifact};
use homolog_core::dto::project::ProjectSummary;

use crate::error::ExtractError;
use crate::observer::JobObserver;

/// Extracts model artifacts from a terminal project summary
///
/// Entries without a coordinates reference are skipped with a warning;
/// they do not fail the run. The poller's terminal-state gating means a
/// non-COMPLETED status here should not occur.
pub fn extract_artifacts(
    status: JobStatus,
    summary: &ProjectSummary,
    run_id: Uuid,
    observer: &dyn JobObserver,
) -> Result<Vec<ModelArtifact>, ExtractError> {
    if status != JobStatus::Completed {
        return Err(ExtractError::Precondition { status });
    }

    let mut artifacts = Vec::with_capacity(summary.models.len());

    for (index, model) in summary.models.iter().enumerate() {
        match model.coordinates_url.as_deref() {
            Some(url) if !url.is_empty() => artifacts.push(ModelArtifact::new(url)),
            _ => {
                warn!(
                    "Model entry {} has no coordinates reference (run {})",
                    index, run_id
                );
                observer.on_artifact_skipped(run_id, index);
            }
        }
    }

    Ok(artifacts)
}
