//! Integration tests for the delete-user form against a stub gateway.

use axum::{
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use admin_console_lib::{
    AdminClient, ConsoleConfig, ConsoleError, DeleteUserForm, FormController, Notice,
    RecordingNotifier,
};

// =============================================================================
// Stub gateway
// =============================================================================

/// Mimics the delete endpoint: `jdoe` exists, `boom` fails, a token is required.
async fn delete_user(headers: HeaderMap, Json(body): Json<Value>) -> Response {
    if headers.get("authorization").and_then(|h| h.to_str().ok()) != Some("Bearer test-token") {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Authentication required" })),
        )
            .into_response();
    }

    match body["username"].as_str() {
        None | Some("") => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": "Username is required" })),
        )
            .into_response(),
        Some("jdoe") => Json(json!({ "message": "User jdoe deleted successfully." })).into_response(),
        Some("boom") => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "message": "An error occurred while deleting the user.",
                "error": "connection refused"
            })),
        )
            .into_response(),
        Some("html") => (StatusCode::BAD_GATEWAY, "<html>bad gateway</html>").into_response(),
        Some(other) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": format!("User {} not found.", other) })),
        )
            .into_response(),
    }
}

async fn spawn_gateway() -> String {
    let app = Router::new().route("/auth/delete/user", post(delete_user));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn controller(token: Option<&str>) -> FormController<RecordingNotifier> {
    let base_url = spawn_gateway().await;
    let config = ConsoleConfig::new(base_url, token.map(String::from));
    FormController::new(AdminClient::new(&config).unwrap(), RecordingNotifier::default())
}

// =============================================================================
// Client
// =============================================================================

#[tokio::test]
async fn test_client_parses_error_detail() {
    let base_url = spawn_gateway().await;
    let client = AdminClient::new(&ConsoleConfig::new(base_url, Some("test-token".into()))).unwrap();

    let reply = tokio_test::assert_ok!(client.delete_user("boom").await);

    assert_eq!(reply.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!reply.is_success());
    assert_eq!(reply.error.as_deref(), Some("connection refused"));
}

#[tokio::test]
async fn test_client_rejects_non_json_reply() {
    let base_url = spawn_gateway().await;
    let client = AdminClient::new(&ConsoleConfig::new(base_url, Some("test-token".into()))).unwrap();

    let err = tokio_test::assert_err!(client.delete_user("html").await);
    assert!(matches!(err, ConsoleError::Http(_)));
}

// =============================================================================
// Form controller
// =============================================================================

#[tokio::test]
async fn test_successful_submit_shows_server_message() {
    let controller = controller(Some("test-token")).await;

    let notice = controller.on_submit(&DeleteUserForm::new("jdoe")).await;

    assert_eq!(notice, Notice::Success("User jdoe deleted successfully.".to_string()));
    assert_eq!(controller.notifier().notices(), vec![notice]);
}

#[tokio::test]
async fn test_not_found_is_prefixed_with_error() {
    let controller = controller(Some("test-token")).await;

    let notice = controller.on_submit(&DeleteUserForm::new("ghost")).await;

    assert_eq!(notice, Notice::Error("Error: User ghost not found.".to_string()));
}

#[tokio::test]
async fn test_empty_username_is_sent_and_rejected_by_gateway() {
    let controller = controller(Some("test-token")).await;

    let notice = controller.on_submit(&DeleteUserForm::default()).await;

    assert_eq!(notice, Notice::Error("Error: Username is required".to_string()));
}

#[tokio::test]
async fn test_missing_token_reports_authentication_error() {
    let controller = controller(None).await;

    let notice = controller.on_submit(&DeleteUserForm::new("jdoe")).await;

    assert_eq!(notice, Notice::Error("Error: Authentication required".to_string()));
}

#[tokio::test]
async fn test_unreachable_gateway_reports_unexpected_error() {
    // Bind then drop to get a port nobody listens on.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = ConsoleConfig::new(format!("http://{}", addr), Some("test-token".into()));
    let controller = FormController::new(AdminClient::new(&config).unwrap(), RecordingNotifier::default());

    let notice = controller.on_submit(&DeleteUserForm::new("jdoe")).await;

    assert!(matches!(&notice, Notice::Error(_)));
    assert!(notice.text().starts_with("An unexpected error occurred: "));
    assert_eq!(controller.notifier().notices().len(), 1);
}
