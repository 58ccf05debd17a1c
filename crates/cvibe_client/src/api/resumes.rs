use crate::client::CvibeClient;
use crate::error::ApiResult;
use crate::models::Resume;

impl CvibeClient {
    /// Upload a resume file as `multipart/form-data` with a single `file`
    /// field. Parsing happens server-side; the returned record starts in
    /// `PENDING` status.
    pub async fn upload_resume(&self, file_name: &str, bytes: Vec<u8>) -> ApiResult<Resume> {
        self.upload("/resumes", file_name, bytes).await
    }

    pub async fn get_resumes(&self) -> ApiResult<Vec<Resume>> {
        self.get("/resumes").await
    }

    pub async fn get_resume_by_id(&self, resume_id: &str) -> ApiResult<Resume> {
        self.get(&format!("/resumes/{resume_id}")).await
    }

    pub async fn get_primary_resume(&self) -> ApiResult<Resume> {
        self.get("/resumes/primary").await
    }

    pub async fn set_primary_resume(&self, resume_id: &str) -> ApiResult<()> {
        self.put_empty_unit(&format!("/resumes/{resume_id}/primary"))
            .await
    }

    pub async fn delete_resume(&self, resume_id: &str) -> ApiResult<()> {
        self.delete_unit(&format!("/resumes/{resume_id}")).await
    }
}
