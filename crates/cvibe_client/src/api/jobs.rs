use super::page_query;
use crate::client::CvibeClient;
use crate::error::ApiResult;
use crate::models::{Job, JobMatch, JobMatchSummary, JobSearchParams, PagedResponse};

impl CvibeClient {
    pub async fn get_jobs(&self, params: &JobSearchParams) -> ApiResult<PagedResponse<Job>> {
        self.get_query("/v1/jobs", &params.query()).await
    }

    pub async fn get_latest_jobs(&self) -> ApiResult<Vec<Job>> {
        self.get("/v1/jobs/latest").await
    }

    pub async fn get_remote_jobs(
        &self,
        page: Option<u32>,
        size: Option<u32>,
    ) -> ApiResult<PagedResponse<Job>> {
        self.get_query("/v1/jobs/remote", &page_query(page, size))
            .await
    }

    pub async fn get_job_by_id(&self, job_id: &str) -> ApiResult<Job> {
        self.get(&format!("/v1/jobs/{job_id}")).await
    }

    pub async fn generate_job_matches(&self) -> ApiResult<()> {
        self.post_empty_unit("/v1/jobs/matches/generate").await
    }

    pub async fn get_job_matches(
        &self,
        page: Option<u32>,
        size: Option<u32>,
    ) -> ApiResult<PagedResponse<JobMatch>> {
        self.get_query("/v1/jobs/matches", &page_query(page, size))
            .await
    }

    pub async fn get_job_match_summary(&self) -> ApiResult<JobMatchSummary> {
        self.get("/v1/jobs/matches/summary").await
    }

    pub async fn view_job_match(&self, match_id: &str) -> ApiResult<()> {
        self.post_empty_unit(&format!("/v1/jobs/matches/{match_id}/view"))
            .await
    }

    pub async fn save_job_match(&self, match_id: &str) -> ApiResult<()> {
        self.post_empty_unit(&format!("/v1/jobs/matches/{match_id}/save"))
            .await
    }

    pub async fn apply_to_job(&self, match_id: &str) -> ApiResult<()> {
        self.post_empty_unit(&format!("/v1/jobs/matches/{match_id}/apply"))
            .await
    }

    pub async fn get_saved_jobs(&self) -> ApiResult<Vec<JobMatch>> {
        self.get("/v1/jobs/saved").await
    }

    pub async fn get_applied_jobs(&self) -> ApiResult<Vec<JobMatch>> {
        self.get("/v1/jobs/applied").await
    }
}
