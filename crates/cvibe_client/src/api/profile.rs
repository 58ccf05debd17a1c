use crate::client::CvibeClient;
use crate::error::ApiResult;
use crate::models::{
    AddExperienceRequest, AddSkillRequest, Experience, Profile, Skill, UpdateUserProfileRequest,
};

impl CvibeClient {
    pub async fn get_profile(&self) -> ApiResult<Profile> {
        self.get("/profile").await
    }

    pub async fn update_user_profile(
        &self,
        request: &UpdateUserProfileRequest,
    ) -> ApiResult<Profile> {
        self.put("/profile", request).await
    }

    pub async fn get_experiences(&self) -> ApiResult<Vec<Experience>> {
        self.get("/profile/experiences").await
    }

    pub async fn add_experience(&self, request: &AddExperienceRequest) -> ApiResult<Experience> {
        self.post("/profile/experiences", request).await
    }

    pub async fn update_experience(
        &self,
        experience_id: i64,
        request: &AddExperienceRequest,
    ) -> ApiResult<Experience> {
        self.put(&format!("/profile/experiences/{experience_id}"), request)
            .await
    }

    pub async fn delete_experience(&self, experience_id: i64) -> ApiResult<()> {
        self.delete_unit(&format!("/profile/experiences/{experience_id}"))
            .await
    }

    pub async fn get_skills(&self) -> ApiResult<Vec<Skill>> {
        self.get("/profile/skills").await
    }

    pub async fn add_skill(&self, request: &AddSkillRequest) -> ApiResult<Skill> {
        self.post("/profile/skills", request).await
    }

    pub async fn delete_skill(&self, skill_id: i64) -> ApiResult<()> {
        self.delete_unit(&format!("/profile/skills/{skill_id}")).await
    }
}
