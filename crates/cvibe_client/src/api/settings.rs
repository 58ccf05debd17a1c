use crate::client::CvibeClient;
use crate::error::ApiResult;
use crate::models::settings::UpdatePasswordRequest;
use crate::models::{AiConfig, UpdateAiConfigRequest, UpdateProfileRequest, UserRecord};

impl CvibeClient {
    pub async fn update_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> ApiResult<()> {
        let request = UpdatePasswordRequest {
            current_password: current_password.to_string(),
            new_password: new_password.to_string(),
        };
        self.put_unit("/settings/password", &request).await
    }

    pub async fn update_profile(&self, request: &UpdateProfileRequest) -> ApiResult<UserRecord> {
        self.put("/settings/profile", request).await
    }

    pub async fn get_ai_config(&self) -> ApiResult<AiConfig> {
        self.get("/settings/ai-config").await
    }

    pub async fn update_ai_config(&self, request: &UpdateAiConfigRequest) -> ApiResult<AiConfig> {
        self.put("/settings/ai-config", request).await
    }

    pub async fn delete_ai_config(&self) -> ApiResult<()> {
        self.delete_unit("/settings/ai-config").await
    }
}
