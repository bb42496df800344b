//! Project submission and status endpoints
//!
//! Handles communication with the modeling service:
//! - Submitting a modeling project (automodel or user-template)
//! - Fetching the project models summary for polling
//!
//! The trait is the seam the engine depends on, enabling scripted
//! implementations in tests.

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use tracing::debug;

use crate::ModelingClient;
use crate::error::{ClientError, Result};
use homolog_core::domain::job::{ModelingRequest, ProjectHandle};
use homolog_core::dto::project::{
    ProjectSummary, SubmitAccepted, SubmitAutomodel, SubmitUserTemplate,
};

/// API trait for modeling project operations
#[async_trait]
pub trait ProjectApi: Send + Sync {
    /// Submits a modeling project to the service
    ///
    /// Success is exactly HTTP 202; the returned handle is the service's
    /// correlation key for all subsequent status requests. Submission is
    /// never retried here: a failure is terminal for the run and the
    /// caller decides whether to submit a fresh request.
    async fn submit(&self, request: &ModelingRequest) -> Result<ProjectHandle>;

    /// Fetches the current models summary for a project
    ///
    /// The summary carries the job status and, once the project has
    /// completed, the produced model entries.
    async fn fetch_summary(&self, handle: &ProjectHandle) -> Result<ProjectSummary>;
}

#[async_trait]
impl ProjectApi for ModelingClient {
    async fn submit(&self, request: &ModelingRequest) -> Result<ProjectHandle> {
        let url = format!("{}/{}", self.base_url(), submit_path(request));

        debug!("Submitting {} project to {}", request.mode(), url);

        let builder = self
            .http()
            .post(&url)
            .header(AUTHORIZATION, self.auth_header());

        let response = match request {
            ModelingRequest::Automodel {
                target_sequences,
                project_title,
            } => {
                builder
                    .json(&SubmitAutomodel {
                        target_sequences: target_sequences.clone(),
                        project_title: project_title.clone(),
                    })
                    .send()
                    .await?
            }
            ModelingRequest::UserTemplate {
                target_sequences,
                template_coordinates,
                project_title,
            } => {
                builder
                    .json(&SubmitUserTemplate {
                        target_sequences: target_sequences.clone(),
                        template_coordinates: template_coordinates.clone(),
                        project_title: project_title.clone(),
                    })
                    .send()
                    .await?
            }
        };

        let status = response.status().as_u16();
        let body = response.text().await?;

        handle_from_submission(status, &body)
    }

    async fn fetch_summary(&self, handle: &ProjectHandle) -> Result<ProjectSummary> {
        let url = format!("{}/project/{}/models/summary/", self.base_url(), handle);

        debug!("Fetching models summary for project {}", handle);

        let response = self
            .http()
            .get(&url)
            .header(AUTHORIZATION, self.auth_header())
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        summary_from_body(status, &body)
    }
}

/// Endpoint path for a submission request
fn submit_path(request: &ModelingRequest) -> &'static str {
    match request {
        ModelingRequest::Automodel { .. } => "automodel",
        ModelingRequest::UserTemplate { .. } => "user_template",
    }
}

/// Interprets a submission response
///
/// Only HTTP 202 is an accepted submission; anything else surfaces the
/// body as diagnostic context. A 202 whose body lacks the project id is
/// malformed.
fn handle_from_submission(status: u16, body: &str) -> Result<ProjectHandle> {
    if status != 202 {
        return Err(ClientError::unexpected_status(status, body));
    }

    let accepted: SubmitAccepted = serde_json::from_str(body).map_err(|_| {
        ClientError::MalformedResponse(format!(
            "submission accepted but no project_id in body: {}",
            body
        ))
    })?;

    Ok(ProjectHandle::new(accepted.project_id))
}

/// Interprets a models-summary response
///
/// Non-2xx responses are errors. A 2xx body that is not JSON is
/// malformed; a JSON body with missing or unrecognized fields still
/// parses (leniently) so the poller can classify it.
fn summary_from_body(status: u16, body: &str) -> Result<ProjectSummary> {
    if !(200..300).contains(&status) {
        return Err(ClientError::unexpected_status(status, body));
    }

    serde_json::from_str(body).map_err(|e| {
        ClientError::MalformedResponse(format!("unparseable project summary: {}", e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use homolog_core::domain::job::JobStatus;

    #[test]
    fn test_accepted_submission_yields_handle() {
        let handle = handle_from_submission(202, r#"{"project_id": "X"}"#).unwrap();
        assert_eq!(handle, ProjectHandle::new("X"));
    }

    #[test]
    fn test_non_202_submission_is_unexpected_status() {
        let err = handle_from_submission(200, r#"{"project_id": "X"}"#).unwrap_err();
        match err {
            ClientError::UnexpectedStatus { status, .. } => assert_eq!(status, 200),
            other => panic!("expected UnexpectedStatus, got {:?}", other),
        }

        let err = handle_from_submission(403, "permission denied").unwrap_err();
        match err {
            ClientError::UnexpectedStatus { status, body } => {
                assert_eq!(status, 403);
                assert_eq!(body, "permission denied");
            }
            other => panic!("expected UnexpectedStatus, got {:?}", other),
        }
    }

    #[test]
    fn test_202_without_project_id_is_malformed() {
        let err = handle_from_submission(202, r#"{"message": "ok"}"#).unwrap_err();
        assert!(matches!(err, ClientError::MalformedResponse(_)));
    }

    #[test]
    fn test_summary_parses_status_and_models() {
        let body = r#"{
            "status": "COMPLETED",
            "models": [{ "coordinates_url": "u1" }]
        }"#;

        let summary = summary_from_body(200, body).unwrap();
        assert_eq!(summary.status, JobStatus::Completed);
        assert_eq!(summary.models.len(), 1);
    }

    #[test]
    fn test_summary_with_unrecognized_status_flows_through() {
        let summary = summary_from_body(200, r#"{"status": "MIGRATING"}"#).unwrap();
        assert_eq!(summary.status, JobStatus::Unknown);
    }

    #[test]
    fn test_summary_non_json_body_is_malformed() {
        let err = summary_from_body(200, "<html>gateway</html>").unwrap_err();
        assert!(matches!(err, ClientError::MalformedResponse(_)));
    }

    #[test]
    fn test_summary_error_status() {
        let err = summary_from_body(502, "bad gateway").unwrap_err();
        assert!(err.is_server_error());
    }

    #[test]
    fn test_submit_paths() {
        let auto = ModelingRequest::automodel(vec!["MKT".to_string()], "t");
        assert_eq!(submit_path(&auto), "automodel");

        let tpl = ModelingRequest::user_template(vec!["MKT".to_string()], "ATOM", "t");
        assert_eq!(submit_path(&tpl), "user_template");
    }
}
