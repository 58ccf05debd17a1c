mod support;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use cvibe_client::models::GenerateResumeRequest;
use cvibe_client::ArtifactSource;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn generation_body(status: &str, latex: Option<&str>) -> serde_json::Value {
    let mut data = serde_json::json!({
        "id": "g1",
        "templateId": "modern",
        "status": status,
        "createdAt": "2024-01-01T00:00:00Z"
    });
    if let Some(latex) = latex {
        data["latexContent"] = serde_json::Value::String(latex.to_string());
    }
    serde_json::json!({ "success": true, "data": data })
}

async fn mount_kickoff(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/resume-builder/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(generation_body("PENDING", None)))
        .mount(server)
        .await;
}

fn request() -> GenerateResumeRequest {
    GenerateResumeRequest {
        template_id: "modern".to_string(),
        target_job: Some("Software Engineer".to_string()),
        ..Default::default()
    }
}

#[tokio::test]
async fn resolves_with_content_after_three_polls() {
    let server = MockServer::start().await;
    mount_kickoff(&server).await;

    let poll_count = Arc::new(AtomicUsize::new(0));
    let counter = poll_count.clone();
    Mock::given(method("GET"))
        .and(path("/resume-builder/generations/g1"))
        .respond_with(move |_req: &wiremock::Request| {
            let count = counter.fetch_add(1, Ordering::SeqCst);
            if count < 2 {
                ResponseTemplate::new(200).set_body_json(generation_body("PENDING", None))
            } else {
                ResponseTemplate::new(200)
                    .set_body_json(generation_body("COMPLETED", Some("\\documentclass{article}")))
            }
        })
        .mount(&server)
        .await;

    let client = support::client_with_token(&server.uri(), "t1").await;
    let artifact = client
        .generate_resume_with_fallback_at(&request(), Duration::ZERO, 30)
        .await;

    assert_eq!(poll_count.load(Ordering::SeqCst), 3);
    assert_eq!(artifact.source, ArtifactSource::Generated);
    assert_eq!(artifact.latex, "\\documentclass{article}");
    assert_eq!(artifact.generation_id.as_deref(), Some("g1"));
}

#[tokio::test]
async fn exhausted_attempt_budget_falls_back() {
    let server = MockServer::start().await;
    mount_kickoff(&server).await;

    Mock::given(method("GET"))
        .and(path("/resume-builder/generations/g1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(generation_body("PENDING", None)))
        .expect(30)
        .mount(&server)
        .await;

    let client = support::client_with_token(&server.uri(), "t1").await;
    let artifact = client
        .generate_resume_with_fallback_at(&request(), Duration::ZERO, 30)
        .await;

    assert_eq!(artifact.source, ArtifactSource::Fallback);
    assert!(artifact.latex.contains("\\documentclass"));
    assert_eq!(artifact.generation_id.as_deref(), Some("g1"));
}

#[tokio::test]
async fn failed_status_falls_back() {
    let server = MockServer::start().await;
    mount_kickoff(&server).await;

    Mock::given(method("GET"))
        .and(path("/resume-builder/generations/g1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(generation_body("FAILED", None)))
        .expect(1)
        .mount(&server)
        .await;

    let client = support::client_with_token(&server.uri(), "t1").await;
    let artifact = client
        .generate_resume_with_fallback_at(&request(), Duration::ZERO, 30)
        .await;

    assert_eq!(artifact.source, ArtifactSource::Fallback);
}

#[tokio::test]
async fn kickoff_failure_falls_back_without_generation_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/resume-builder/generate"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "success": false,
            "error": "generation service unavailable"
        })))
        .mount(&server)
        .await;

    let client = support::client_with_token(&server.uri(), "t1").await;
    let artifact = client
        .generate_resume_with_fallback_at(&request(), Duration::ZERO, 30)
        .await;

    assert_eq!(artifact.source, ArtifactSource::Fallback);
    assert!(artifact.generation_id.is_none());
    assert!(artifact.latex.contains("\\begin{document}"));
}

#[tokio::test]
async fn transport_error_during_polling_falls_back() {
    let server = MockServer::start().await;
    mount_kickoff(&server).await;

    // No mock for the status endpoint: wiremock answers 404 with an empty
    // body, which the client normalizes and the poller swallows.
    let client = support::client_with_token(&server.uri(), "t1").await;
    let artifact = client
        .generate_resume_with_fallback_at(&request(), Duration::ZERO, 30)
        .await;

    assert_eq!(artifact.source, ArtifactSource::Fallback);
    assert_eq!(artifact.generation_id.as_deref(), Some("g1"));
}

#[tokio::test]
async fn completed_kickoff_skips_polling() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/resume-builder/generate"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(generation_body("COMPLETED", Some("\\section*{Done}"))),
        )
        .mount(&server)
        .await;

    let client = support::client_with_token(&server.uri(), "t1").await;
    let artifact = client
        .generate_resume_with_fallback_at(&request(), Duration::ZERO, 30)
        .await;

    assert_eq!(artifact.source, ArtifactSource::Generated);
    assert_eq!(artifact.latex, "\\section*{Done}");
}
