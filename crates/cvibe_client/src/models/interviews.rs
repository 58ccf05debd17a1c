use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Session status. The backend has emitted both upper and lower case forms,
/// so both are accepted on decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InterviewStatus {
    #[serde(alias = "active")]
    Active,
    #[serde(alias = "paused")]
    Paused,
    #[serde(alias = "completed")]
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewSession {
    pub id: String,
    pub company: String,
    pub position: String,
    pub status: InterviewStatus,
    pub questions_answered: u32,
    pub total_questions: u32,
    #[serde(default)]
    pub score: Option<f64>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInterviewRequest {
    pub company: String,
    pub position: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewQuestion {
    pub id: String,
    pub question: String,
    pub category: String,
    pub difficulty: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAnswerRequest {
    pub question_id: String,
    pub answer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerFeedback {
    pub score: f64,
    pub feedback: String,
    #[serde(default)]
    pub improvements: Vec<String>,
    #[serde(default)]
    pub next_question: Option<InterviewQuestion>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub id: String,
    pub question_id: String,
    #[serde(default)]
    pub question: Option<String>,
    pub answer: String,
    pub score: f64,
    pub feedback: String,
    pub created_at: DateTime<Utc>,
}
