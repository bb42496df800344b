//! Project DTOs for the modeling service API

use serde::{Deserialize, Serialize};

use crate::domain::job::JobStatus;

/// Submission payload for sequence-only modeling
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitAutomodel {
    pub target_sequences: Vec<String>,
    pub project_title: String,
}

/// Submission payload for user-template modeling
///
/// Identical to [`SubmitAutomodel`] plus the template coordinates (PDB
/// text) the service should model against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitUserTemplate {
    pub target_sequences: Vec<String>,
    pub template_coordinates: String,
    pub project_title: String,
}

/// Body of an accepted (HTTP 202) submission response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitAccepted {
    pub project_id: String,
}

/// Body of the project models-summary endpoint
///
/// Deserialization is lenient: a missing or unrecognized
/// status field becomes [`JobStatus::Unknown`] and a missing model list
/// becomes empty, so a degraded body keeps flowing to the poller instead
/// of failing the fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSummary {
    #[serde(default)]
    pub status: JobStatus,
    #[serde(default)]
    pub date_created: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default)]
    pub models: Vec<ModelRecord>,
}

impl ProjectSummary {
    /// Creates a summary carrying only a status, with no models
    pub fn with_status(status: JobStatus) -> Self {
        Self {
            status,
            date_created: None,
            models: Vec::new(),
        }
    }
}

/// One model entry in a project summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelRecord {
    #[serde(default)]
    pub coordinates_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_parses_completed_body() {
        let body = r#"{
            "status": "COMPLETED",
            "date_created": "2026-07-01T09:30:00Z",
            "models": [
                { "coordinates_url": "https://example.org/m1.pdb" },
                { "coordinates_url": "https://example.org/m2.pdb" }
            ]
        }"#;

        let summary: ProjectSummary = serde_json::from_str(body).unwrap();
        assert_eq!(summary.status, JobStatus::Completed);
        assert!(summary.date_created.is_some());
        assert_eq!(summary.models.len(), 2);
        assert_eq!(
            summary.models[0].coordinates_url.as_deref(),
            Some("https://example.org/m1.pdb")
        );
    }

    #[test]
    fn test_summary_missing_fields_defaults() {
        let summary: ProjectSummary = serde_json::from_str("{}").unwrap();
        assert_eq!(summary.status, JobStatus::Unknown);
        assert!(summary.models.is_empty());
        assert!(summary.date_created.is_none());
    }

    #[test]
    fn test_summary_unrecognized_status() {
        let summary: ProjectSummary =
            serde_json::from_str(r#"{ "status": "ARCHIVED" }"#).unwrap();
        assert_eq!(summary.status, JobStatus::Unknown);
    }

    #[test]
    fn test_user_template_payload_shape() {
        let payload = SubmitUserTemplate {
            target_sequences: vec!["MKT".to_string()],
            template_coordinates: "ATOM ...".to_string(),
            project_title: "demo".to_string(),
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("template_coordinates").is_some());

        let payload = SubmitAutomodel {
            target_sequences: vec!["MKT".to_string()],
            project_title: "demo".to_string(),
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("template_coordinates").is_none());
    }
}
