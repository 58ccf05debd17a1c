use crate::client::CvibeClient;
use crate::error::ApiResult;
use crate::models::{
    MockAnswerFeedback, MockInterview, MockInterviewSummary, MockQuestion,
    StartMockInterviewRequest, SubmitMockAnswerRequest,
};

impl CvibeClient {
    pub async fn start_mock_interview(
        &self,
        request: &StartMockInterviewRequest,
    ) -> ApiResult<MockInterview> {
        self.post("/v1/mock-interview/start", request).await
    }

    pub async fn get_mock_interview(&self, interview_id: &str) -> ApiResult<MockInterview> {
        self.get(&format!("/v1/mock-interview/{interview_id}")).await
    }

    pub async fn get_mock_interview_history(&self) -> ApiResult<Vec<MockInterview>> {
        self.get("/v1/mock-interview/history").await
    }

    pub async fn get_next_question(&self, interview_id: &str) -> ApiResult<MockQuestion> {
        self.get(&format!("/v1/mock-interview/{interview_id}/next-question"))
            .await
    }

    pub async fn submit_mock_answer(
        &self,
        interview_id: &str,
        request: &SubmitMockAnswerRequest,
    ) -> ApiResult<MockAnswerFeedback> {
        self.post(&format!("/v1/mock-interview/{interview_id}/answer"), request)
            .await
    }

    pub async fn pause_mock_interview(&self, interview_id: &str) -> ApiResult<()> {
        self.post_empty_unit(&format!("/v1/mock-interview/{interview_id}/pause"))
            .await
    }

    pub async fn resume_mock_interview(&self, interview_id: &str) -> ApiResult<()> {
        self.post_empty_unit(&format!("/v1/mock-interview/{interview_id}/resume"))
            .await
    }

    pub async fn get_mock_interview_summary(&self) -> ApiResult<MockInterviewSummary> {
        self.get("/v1/mock-interview/summary").await
    }
}
