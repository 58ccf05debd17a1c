use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::ProcessingStatus;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    pub id: String,
    pub file_name: String,
    pub status: ProcessingStatus,
    pub is_primary: bool,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub parsed_data: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
