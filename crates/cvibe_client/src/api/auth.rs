use crate::client::CvibeClient;
use crate::error::ApiResult;
use crate::models::{
    AuthResponse, HealthStatus, LoginRequest, RefreshTokenRequest, RegisterRequest, UserRecord,
};

impl CvibeClient {
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        nickname: &str,
    ) -> ApiResult<AuthResponse> {
        let request = RegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
            nickname: nickname.to_string(),
        };
        self.post("/auth/register", &request).await
    }

    pub async fn login(&self, email: &str, password: &str) -> ApiResult<AuthResponse> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.post("/auth/login", &request).await
    }

    pub async fn logout(&self) -> ApiResult<()> {
        self.post_empty_unit("/auth/logout").await
    }

    pub async fn get_current_user(&self) -> ApiResult<UserRecord> {
        self.get("/auth/me").await
    }

    /// Manual refresh-token exchange. Nothing in the session lifecycle calls
    /// this automatically; stale access tokens surface reactively on the
    /// next failing call.
    pub async fn refresh_token(&self, refresh_token: &str) -> ApiResult<AuthResponse> {
        let request = RefreshTokenRequest {
            refresh_token: refresh_token.to_string(),
        };
        self.post("/auth/refresh", &request).await
    }

    pub async fn health(&self) -> ApiResult<HealthStatus> {
        self.get("/health").await
    }
}
