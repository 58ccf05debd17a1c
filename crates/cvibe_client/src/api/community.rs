use super::page_query;
use crate::client::CvibeClient;
use crate::error::ApiResult;
use crate::models::{
    Comment, CreateCommentRequest, CreatePostRequest, PagedResponse, Post, UpdatePostRequest,
};

impl CvibeClient {
    pub async fn create_post(&self, request: &CreatePostRequest) -> ApiResult<Post> {
        self.post("/v1/community/posts", request).await
    }

    pub async fn get_post(&self, post_id: &str) -> ApiResult<Post> {
        self.get(&format!("/v1/community/posts/{post_id}")).await
    }

    pub async fn update_post(
        &self,
        post_id: &str,
        request: &UpdatePostRequest,
    ) -> ApiResult<Post> {
        self.put(&format!("/v1/community/posts/{post_id}"), request)
            .await
    }

    pub async fn delete_post(&self, post_id: &str) -> ApiResult<()> {
        self.delete_unit(&format!("/v1/community/posts/{post_id}"))
            .await
    }

    pub async fn get_feed(
        &self,
        page: Option<u32>,
        size: Option<u32>,
    ) -> ApiResult<PagedResponse<Post>> {
        self.get_query("/v1/community/feed", &page_query(page, size))
            .await
    }

    pub async fn get_trending_posts(&self) -> ApiResult<Vec<Post>> {
        self.get("/v1/community/posts/trending").await
    }

    pub async fn search_posts(&self, keyword: &str) -> ApiResult<Vec<Post>> {
        self.get_query(
            "/v1/community/posts/search",
            &[("keyword", keyword.to_string())],
        )
        .await
    }

    pub async fn create_comment(
        &self,
        post_id: &str,
        request: &CreateCommentRequest,
    ) -> ApiResult<Comment> {
        self.post(&format!("/v1/community/posts/{post_id}/comments"), request)
            .await
    }

    pub async fn get_comments(&self, post_id: &str) -> ApiResult<Vec<Comment>> {
        self.get(&format!("/v1/community/posts/{post_id}/comments"))
            .await
    }

    pub async fn like_post(&self, post_id: &str) -> ApiResult<()> {
        self.post_empty_unit(&format!("/v1/community/posts/{post_id}/like"))
            .await
    }

    pub async fn unlike_post(&self, post_id: &str) -> ApiResult<()> {
        self.delete_unit(&format!("/v1/community/posts/{post_id}/like"))
            .await
    }
}
