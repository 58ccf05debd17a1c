mod support;

use wiremock::matchers::{header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn upload_sends_multipart_with_bearer() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/resumes"))
        .and(header("Authorization", "Bearer t1"))
        .and(header_exists("content-type"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "data": {
                "id": "r1",
                "fileName": "resume.pdf",
                "status": "PENDING",
                "isPrimary": false,
                "skills": [],
                "createdAt": "2024-01-01T00:00:00Z",
                "updatedAt": "2024-01-01T00:00:00Z"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = support::client_with_token(&server.uri(), "t1").await;
    let resume = client
        .upload_resume("resume.pdf", b"%PDF-1.4 fake".to_vec())
        .await
        .expect("upload");

    assert_eq!(resume.id, "r1");
    assert_eq!(resume.file_name, "resume.pdf");

    // The body must be multipart/form-data with the single `file` field,
    // never JSON.
    let requests = server.received_requests().await.expect("requests");
    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains("name=\"file\""));
    assert!(body.contains("filename=\"resume.pdf\""));
}

#[tokio::test]
async fn upload_failure_is_normalized() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/resumes"))
        .respond_with(ResponseTemplate::new(413).set_body_json(serde_json::json!({
            "success": false,
            "error": { "code": "FILE_TOO_LARGE", "message": "File exceeds 5MB" }
        })))
        .mount(&server)
        .await;

    let client = support::client_with_token(&server.uri(), "t1").await;
    let err = client
        .upload_resume("big.pdf", vec![0u8; 16])
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(413));
    assert_eq!(err.message(), "File exceeds 5MB");
}
