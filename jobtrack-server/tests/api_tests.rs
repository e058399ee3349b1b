//! Integration tests for jobtrack-server API endpoints
//!
//! Every test runs against its own in-memory database installed through
//! `connect_to_db`, exactly as the binary does it.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use jobtrack_common::{connect_to_db, DatabaseConfig, Error};
use jobtrack_server::JobtrackApp;
use serde_json::{json, Value};
use tower::util::ServiceExt; // for `oneshot` method

/// Test helper: connected host app with a fresh database
async fn setup_app() -> Router {
    let mut app = JobtrackApp::new();
    connect_to_db(&mut app, DatabaseConfig::in_memory().with_echo(false))
        .await
        .expect("Should connect to in-memory database");
    app.router().expect("Router should build once connected")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Test helper: Extract JSON body from response
async fn extract_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

/// Send a request and return status plus parsed body
async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    (status, extract_json(response.into_body()).await)
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let app = setup_app().await;

    let (status, body) = send(&app, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "jobtrack-server");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_router_requires_connection() {
    let app = JobtrackApp::new();

    assert!(matches!(app.router(), Err(Error::Config(_))));
}

// =============================================================================
// Records
// =============================================================================

#[tokio::test]
async fn test_create_and_get_job() {
    let app = setup_app().await;

    let (status, created) = send(
        &app,
        post("/api/jobs", json!({"job_title": "Engineer", "location": "Remote"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["job_title"], "Engineer");
    assert_eq!(created["location"], "Remote");
    assert!(created["notes"].is_null());

    let id = created["job_id"].as_i64().unwrap();
    let (status, fetched) = send(&app, get(&format!("/api/jobs/{}", id))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (_, list) = send(&app, get("/api/jobs")).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_missing_job_is_404() {
    let app = setup_app().await;

    let (status, body) = send(&app, get("/api/jobs/99")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("job 99"));
}

#[tokio::test]
async fn test_application_flow() {
    let app = setup_app().await;

    let (_, job) = send(&app, post("/api/jobs", json!({"job_title": "Engineer"}))).await;
    let (_, user) = send(&app, post("/api/users", json!({"name": "Ada"}))).await;
    let job_id = job["job_id"].as_i64().unwrap();
    let user_id = user["user_id"].as_i64().unwrap();

    let (status, application) = send(
        &app,
        post(
            "/api/applications",
            json!({
                "job_id": job_id,
                "user_id": user_id,
                "date_applied": "2024-03-01T09:30:00Z"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let application_id = application["application_id"].as_i64().unwrap();

    let (status, _) = send(
        &app,
        post(
            "/api/statuses",
            json!({
                "user_id": user_id,
                "application_id": application_id,
                "date": "2024-03-08T15:00:00Z",
                "notes": "Phone screen"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, statuses) = send(
        &app,
        get(&format!("/api/applications/{}/statuses", application_id)),
    )
    .await;
    assert_eq!(statuses[0]["notes"], "Phone screen");

    let (_, users) = send(&app, get(&format!("/api/jobs/{}/users", job_id))).await;
    assert_eq!(users[0]["name"], "Ada");

    let (_, jobs) = send(&app, get(&format!("/api/users/{}/jobs", user_id))).await;
    assert_eq!(jobs[0]["job_title"], "Engineer");
}

#[tokio::test]
async fn test_application_with_unknown_job_is_conflict() {
    let app = setup_app().await;
    let (_, user) = send(&app, post("/api/users", json!({"name": "Ada"}))).await;

    let (status, body) = send(
        &app,
        post(
            "/api/applications",
            json!({"job_id": 42, "user_id": user["user_id"]}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_overlong_company_name_is_bad_request() {
    let app = setup_app().await;

    let (status, _) = send(
        &app,
        post("/api/companies", json!({"name": "x".repeat(65)})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, post("/api/companies", json!({"name": "Acme"}))).await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, companies) = send(&app, get("/api/companies")).await;
    assert_eq!(companies.as_array().unwrap().len(), 1);
}
