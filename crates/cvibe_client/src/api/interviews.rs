use crate::client::CvibeClient;
use crate::error::ApiResult;
use crate::models::{
    Answer, AnswerFeedback, CreateInterviewRequest, InterviewSession, SubmitAnswerRequest,
};

impl CvibeClient {
    pub async fn create_interview_session(
        &self,
        request: &CreateInterviewRequest,
    ) -> ApiResult<InterviewSession> {
        self.post("/interviews/sessions", request).await
    }

    pub async fn get_interview_session(&self, session_id: &str) -> ApiResult<InterviewSession> {
        self.get(&format!("/interviews/sessions/{session_id}")).await
    }

    pub async fn get_interview_sessions(&self) -> ApiResult<Vec<InterviewSession>> {
        self.get("/interviews/sessions").await
    }

    pub async fn submit_answer(
        &self,
        session_id: &str,
        request: &SubmitAnswerRequest,
    ) -> ApiResult<AnswerFeedback> {
        self.post(&format!("/interviews/sessions/{session_id}/answers"), request)
            .await
    }

    pub async fn get_answers(&self, session_id: &str) -> ApiResult<Vec<Answer>> {
        self.get(&format!("/interviews/sessions/{session_id}/answers"))
            .await
    }

    pub async fn pause_interview_session(&self, session_id: &str) -> ApiResult<()> {
        self.post_empty_unit(&format!("/interviews/sessions/{session_id}/pause"))
            .await
    }

    pub async fn resume_interview_session(&self, session_id: &str) -> ApiResult<()> {
        self.post_empty_unit(&format!("/interviews/sessions/{session_id}/resume"))
            .await
    }

    pub async fn delete_interview_session(&self, session_id: &str) -> ApiResult<()> {
        self.delete_unit(&format!("/interviews/sessions/{session_id}"))
            .await
    }
}
