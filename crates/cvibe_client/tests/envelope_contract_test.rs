mod support;

use cvibe_client::ApiError;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn success_envelope_yields_data() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "data": {
                "id": "u1",
                "email": "a@b.com",
                "nickname": "A",
                "role": "USER",
                "hasPassword": true,
                "createdAt": "2024-01-01T00:00:00Z",
                "googleUser": false
            }
        })))
        .mount(&server)
        .await;

    let client = support::client_with_token(&server.uri(), "t1").await;
    let user = client.get_current_user().await.expect("current user");
    assert_eq!(user.id, "u1");
    assert_eq!(user.email, "a@b.com");
    assert!(user.has_password);
}

#[tokio::test]
async fn bearer_header_attached_when_credential_present() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .and(header("Authorization", "Bearer t1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "data": {
                "id": "u1",
                "email": "a@b.com",
                "role": "USER",
                "hasPassword": true,
                "createdAt": "2024-01-01T00:00:00Z",
                "googleUser": false
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = support::client_with_token(&server.uri(), "t1").await;
    client.get_current_user().await.expect("current user");
}

#[tokio::test]
async fn missing_credential_is_not_a_client_error() {
    let server = MockServer::start().await;
    // The request still goes out without an Authorization header; the
    // backend is the authority on rejecting it.
    Mock::given(method("GET"))
        .and(path("/v1/jobs/latest"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "success": false,
            "error": "Authentication required"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = support::anonymous_client(&server.uri());
    let err = client.get_latest_jobs().await.unwrap_err();
    assert_eq!(err.status(), Some(401));
    assert_eq!(err.message(), "Authentication required");
}

#[tokio::test]
async fn logical_failure_with_plain_string_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": false,
            "error": "Invalid credentials"
        })))
        .mount(&server)
        .await;

    let client = support::anonymous_client(&server.uri());
    let err = client.login("a@b.com", "wrong").await.unwrap_err();
    assert!(matches!(err, ApiError::Backend(_)));
    assert_eq!(err.message(), "Invalid credentials");
}

#[tokio::test]
async fn non_2xx_with_structured_error_object() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "success": false,
            "error": { "code": "AUTH_EXPIRED", "message": "Token expired" }
        })))
        .mount(&server)
        .await;

    let client = support::client_with_token(&server.uri(), "stale").await;
    let err = client.get_current_user().await.unwrap_err();
    assert_eq!(err.status(), Some(401));
    assert!(err.is_unauthorized());
    assert_eq!(err.message(), "Token expired");
}

#[tokio::test]
async fn non_json_error_body_reports_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let client = support::client_with_token(&server.uri(), "t1").await;
    let err = client.get_current_user().await.unwrap_err();
    assert_eq!(err.status(), Some(502));
    assert!(!err.message().is_empty());
}

#[tokio::test]
async fn garbage_2xx_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = support::client_with_token(&server.uri(), "t1").await;
    let err = client.get_current_user().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
    assert!(!err.message().is_empty());
}

#[tokio::test]
async fn success_without_data_is_a_decode_error_for_typed_ops() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "success": true })),
        )
        .mount(&server)
        .await;

    let client = support::client_with_token(&server.uri(), "t1").await;
    let err = client.get_current_user().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn void_operation_tolerates_missing_data() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/logout"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "success": true })),
        )
        .mount(&server)
        .await;

    let client = support::client_with_token(&server.uri(), "t1").await;
    client.logout().await.expect("logout");
}

#[tokio::test]
async fn transport_failure_is_a_network_error() {
    // A dedicated (non-pooled) server so the listener actually closes on drop.
    let server = MockServer::builder().start().await;
    let uri = server.uri();
    drop(server);

    let client = support::anonymous_client(&uri);
    let err = client.get_latest_jobs().await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
    assert!(!err.message().is_empty());
}

#[tokio::test]
async fn query_parameters_are_forwarded() {
    use cvibe_client::models::JobSearchParams;
    use wiremock::matchers::query_param;

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/jobs"))
        .and(query_param("page", "2"))
        .and(query_param("title", "engineer"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "data": {
                "content": [],
                "page": 2,
                "size": 20,
                "totalElements": 0,
                "totalPages": 0
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = support::anonymous_client(&server.uri());
    let page = client
        .get_jobs(&JobSearchParams {
            page: Some(2),
            title: Some("engineer".to_string()),
            ..Default::default()
        })
        .await
        .expect("jobs");
    assert!(page.is_empty());
    assert_eq!(page.page, 2);
}
