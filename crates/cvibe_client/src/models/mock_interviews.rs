use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::interviews::InterviewStatus;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MockInterview {
    pub id: String,
    pub company: String,
    pub position: String,
    #[serde(default)]
    pub resume_id: Option<String>,
    pub status: InterviewStatus,
    pub current_question_number: u32,
    pub total_questions: u32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartMockInterviewRequest {
    pub company: String,
    pub position: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MockQuestion {
    pub id: String,
    pub question_number: u32,
    pub question: String,
    pub category: String,
    #[serde(default)]
    pub hints: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitMockAnswerRequest {
    pub question_id: String,
    pub answer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MockAnswerFeedback {
    pub score: f64,
    pub feedback: String,
    #[serde(default)]
    pub sample_answer: Option<String>,
    #[serde(default)]
    pub next_question: Option<MockQuestion>,
    #[serde(default)]
    pub next_question_id: Option<String>,
    pub is_complete: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MockInterviewSummary {
    pub total_interviews: u64,
    pub completed_interviews: u64,
    pub average_score: f64,
    #[serde(default)]
    pub top_companies: Vec<String>,
}
