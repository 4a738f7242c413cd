//! Admin monitored-users endpoint.

use axum::http::StatusCode;
use chrono::Utc;

use pethub_entity::user::UserRole;

use crate::helpers::TestApp;

const PATH: &str = "/api/admin/monitored-users";

#[tokio::test]
async fn test_missing_header_is_unauthorized() {
    let app = TestApp::new();
    let response = app.get(PATH, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_non_bearer_header_is_unauthorized() {
    let app = TestApp::new();
    let response = app.get(PATH, Some("Basic YWRtaW46YWRtaW4=")).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app.get(PATH, Some("Bearer ")).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_invalid_token_is_forbidden() {
    let app = TestApp::new();
    let response = app.get_as(PATH, "not.a.jwt").await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["message"], "Invalid token");
}

#[tokio::test]
async fn test_expired_token_is_forbidden() {
    let app = TestApp::new();
    let token = app.expired_token(1, UserRole::Admin);
    let response = app.get_as(PATH, &token).await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_regular_user_is_forbidden() {
    let app = TestApp::new();
    let token = app.token(2, UserRole::Regular);
    let response = app.get_as(PATH, &token).await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["message"], "Access denied - Admins only");
}

#[tokio::test]
async fn test_admin_gets_empty_array() {
    let app = TestApp::new();
    let token = app.token(1, UserRole::Admin);
    let response = app.get_as(PATH, &token).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, serde_json::json!([]));
}

#[tokio::test]
async fn test_admin_sees_flagged_users_verbatim() {
    let app = TestApp::new();
    let now = Utc::now();
    app.seed_actions(7, 5, now).await;
    app.seed_actions(8, 4, now).await;
    app.monitor.run_cycle(now).await.unwrap();

    let token = app.token(1, UserRole::Admin);
    let response = app.get_as(PATH, &token).await;

    assert_eq!(response.status, StatusCode::OK);
    let items = response.body.as_array().expect("bare array body");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["userId"], 7);
    assert_eq!(
        items[0]["reason"],
        "Performed 5 operations in the last 60 seconds"
    );
    assert!(items[0]["createdAt"].is_string());
}

#[tokio::test]
async fn test_legacy_user_id_token_is_accepted() {
    let app = TestApp::new();
    let token = app.legacy_token(1, "Admin");
    let response = app.get_as(PATH, &token).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, serde_json::json!([]));

    let token = app.legacy_token(2, "User");
    let response = app.get_as(PATH, &token).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_root_path_serves_same_listing() {
    let app = TestApp::new();
    let now = Utc::now();
    app.seed_actions(7, 5, now).await;
    app.monitor.run_cycle(now).await.unwrap();

    let response = app.get("/monitored-users", None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let token = app.token(2, UserRole::Regular);
    let response = app.get_as("/monitored-users", &token).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let token = app.token(1, UserRole::Admin);
    let root = app.get_as("/monitored-users", &token).await;
    let nested = app.get_as(PATH, &token).await;
    assert_eq!(root.status, StatusCode::OK);
    assert_eq!(root.body, nested.body);
    assert_eq!(root.body[0]["userId"], 7);
}

#[tokio::test]
async fn test_store_outage_is_service_unavailable() {
    let app = TestApp::new();
    app.monitored.set_available(false);

    let token = app.token(1, UserRole::Admin);
    let response = app.get_as(PATH, &token).await;
    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_health_reports_store_state() {
    let app = TestApp::new();
    let response = app.get("/api/health", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
    assert_eq!(response.body["data"]["store"], "memory");

    app.log.set_available(false);
    let response = app.get("/api/health", None).await;
    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.body["data"]["store_healthy"], false);
}
