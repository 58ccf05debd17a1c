use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::ProcessingStatus;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeTemplate {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub preview_url: String,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateContent {
    pub latex_template: String,
}

/// A long-running server-side LaTeX generation job, tracked by status polling.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeGeneration {
    pub id: String,
    pub template_id: String,
    pub status: ProcessingStatus,
    #[serde(default)]
    pub latex_content: Option<String>,
    #[serde(default)]
    pub pdf_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResumeRequest {
    pub template_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_job: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_instructions: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateLatexRequest {
    pub latex_content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Pdf,
    Latex,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportResult {
    pub download_url: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ExportRequest {
    pub format: ExportFormat,
}
