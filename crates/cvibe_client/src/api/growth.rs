use crate::client::CvibeClient;
use crate::error::ApiResult;
use crate::models::{
    CreateGoalRequest, GapAnalysis, GrowthGoal, GrowthSummary, LearningPath, SkillGap,
    UpdateGoalRequest,
};

impl CvibeClient {
    pub async fn create_goal(&self, request: &CreateGoalRequest) -> ApiResult<GrowthGoal> {
        self.post("/v1/growth/goals", request).await
    }

    pub async fn get_goals(&self) -> ApiResult<Vec<GrowthGoal>> {
        self.get("/v1/growth/goals").await
    }

    pub async fn get_goal_by_id(&self, goal_id: &str) -> ApiResult<GrowthGoal> {
        self.get(&format!("/v1/growth/goals/{goal_id}")).await
    }

    pub async fn update_goal(
        &self,
        goal_id: &str,
        request: &UpdateGoalRequest,
    ) -> ApiResult<GrowthGoal> {
        self.put(&format!("/v1/growth/goals/{goal_id}"), request)
            .await
    }

    pub async fn delete_goal(&self, goal_id: &str) -> ApiResult<()> {
        self.delete_unit(&format!("/v1/growth/goals/{goal_id}")).await
    }

    pub async fn analyze_goal(&self, goal_id: &str) -> ApiResult<GapAnalysis> {
        self.post_empty(&format!("/v1/growth/goals/{goal_id}/analyze"))
            .await
    }

    pub async fn get_gaps(&self, goal_id: &str) -> ApiResult<Vec<SkillGap>> {
        self.get(&format!("/v1/growth/goals/{goal_id}/gaps")).await
    }

    pub async fn generate_learning_paths(&self, goal_id: &str) -> ApiResult<Vec<LearningPath>> {
        self.post_empty(&format!("/v1/growth/goals/{goal_id}/generate-paths"))
            .await
    }

    pub async fn get_learning_paths(&self, goal_id: &str) -> ApiResult<Vec<LearningPath>> {
        self.get(&format!("/v1/growth/goals/{goal_id}/paths")).await
    }

    pub async fn complete_milestone(&self, milestone_id: &str) -> ApiResult<()> {
        self.post_empty_unit(&format!("/v1/growth/milestones/{milestone_id}/complete"))
            .await
    }

    pub async fn uncomplete_milestone(&self, milestone_id: &str) -> ApiResult<()> {
        self.post_empty_unit(&format!("/v1/growth/milestones/{milestone_id}/uncomplete"))
            .await
    }

    pub async fn get_growth_summary(&self) -> ApiResult<GrowthSummary> {
        self.get("/v1/growth/summary").await
    }
}
