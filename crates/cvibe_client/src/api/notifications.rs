use crate::client::CvibeClient;
use crate::error::ApiResult;
use crate::models::{NotificationItem, NotificationListResponse, UnreadCountResponse};

impl CvibeClient {
    pub async fn get_notifications(
        &self,
        page: u32,
        size: u32,
    ) -> ApiResult<NotificationListResponse> {
        self.get_query(
            "/v1/notifications",
            &[("page", page.to_string()), ("size", size.to_string())],
        )
        .await
    }

    pub async fn get_recent_notifications(&self, limit: u32) -> ApiResult<Vec<NotificationItem>> {
        self.get_query("/v1/notifications/recent", &[("limit", limit.to_string())])
            .await
    }

    pub async fn get_unread_count(&self) -> ApiResult<UnreadCountResponse> {
        self.get("/v1/notifications/unread/count").await
    }

    pub async fn mark_notification_as_read(&self, notification_id: &str) -> ApiResult<()> {
        self.post_empty_unit(&format!("/v1/notifications/{notification_id}/read"))
            .await
    }

    pub async fn mark_all_notifications_as_read(&self) -> ApiResult<()> {
        self.post_empty_unit("/v1/notifications/read-all").await
    }
}
