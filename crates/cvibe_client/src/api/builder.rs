use crate::client::CvibeClient;
use crate::error::ApiResult;
use crate::models::builder::{ExportRequest, UpdateLatexRequest};
use crate::models::{
    ExportFormat, ExportResult, GenerateResumeRequest, ResumeGeneration, ResumeTemplate,
    TemplateContent,
};

impl CvibeClient {
    pub async fn get_templates(&self) -> ApiResult<Vec<ResumeTemplate>> {
        self.get("/resume-builder/templates").await
    }

    pub async fn get_featured_templates(&self) -> ApiResult<Vec<ResumeTemplate>> {
        self.get("/resume-builder/templates/featured").await
    }

    pub async fn get_templates_by_category(&self, category: &str) -> ApiResult<Vec<ResumeTemplate>> {
        self.get(&format!("/resume-builder/templates/category/{category}"))
            .await
    }

    pub async fn get_my_templates(&self) -> ApiResult<Vec<ResumeTemplate>> {
        self.get("/resume-builder/templates/my").await
    }

    pub async fn get_template_content(&self, template_id: &str) -> ApiResult<TemplateContent> {
        self.get(&format!("/resume-builder/templates/{template_id}/content"))
            .await
    }

    /// Kick off a generation job. The returned record carries the status
    /// token to poll; see [`crate::generation`] for the polling policy.
    pub async fn generate_resume(
        &self,
        request: &GenerateResumeRequest,
    ) -> ApiResult<ResumeGeneration> {
        self.post("/resume-builder/generate", request).await
    }

    pub async fn get_generations(&self) -> ApiResult<Vec<ResumeGeneration>> {
        self.get("/resume-builder/generations").await
    }

    pub async fn get_generation_by_id(&self, generation_id: &str) -> ApiResult<ResumeGeneration> {
        self.get(&format!("/resume-builder/generations/{generation_id}"))
            .await
    }

    pub async fn update_generation_latex(
        &self,
        generation_id: &str,
        latex_content: &str,
    ) -> ApiResult<()> {
        let request = UpdateLatexRequest {
            latex_content: latex_content.to_string(),
        };
        self.put_unit(
            &format!("/resume-builder/generations/{generation_id}/latex"),
            &request,
        )
        .await
    }

    pub async fn export_generation(
        &self,
        generation_id: &str,
        format: ExportFormat,
    ) -> ApiResult<ExportResult> {
        let request = ExportRequest { format };
        self.post(
            &format!("/resume-builder/generations/{generation_id}/export"),
            &request,
        )
        .await
    }
}
