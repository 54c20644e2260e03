//! Integration tests for the lesson plan HTTP API.
//!
//! Uses axum-test to test the handlers without starting a real server.

// Allow unwrap and panic in tests - these are standard for test code
// Allow holding MutexGuard across await - tests are serialized
// intentionally to avoid env var conflicts
#![allow(clippy::unwrap_used, clippy::panic, clippy::await_holding_lock)]

use axum::http::StatusCode;
use axum_test::TestServer;
use lessonplan::api::{
    AppState, HealthResponse, PlanRequest, PlanResponse, SubjectsResponse, create_router,
};
use lessonplan::config::{AppConfig, ServerConfig};
use lessonplan_core::ProgramDefaults;
use serde_json::json;
use std::sync::Mutex;

/// Mutex to serialize tests since some modify env vars.
static ENV_TEST_MUTEX: Mutex<()> = Mutex::new(());

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Guard wrapper that holds the mutex and ensures cleanup on drop.
struct TestGuard {
    _guard: std::sync::MutexGuard<'static, ()>,
}

impl Drop for TestGuard {
    fn drop(&mut self) {
        // SAFETY: Tests run sequentially under ENV_TEST_MUTEX, so no concurrent env access.
        unsafe { std::env::remove_var("LESSONPLAN_RATE_LIMIT") };
    }
}

/// Create a test server from a config.
/// Returns a guard that must be kept alive during the test.
fn create_server_with(config: AppConfig) -> (TestServer, TestGuard) {
    let guard = ENV_TEST_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    // SAFETY: Tests run sequentially under ENV_TEST_MUTEX, so no concurrent env access.
    unsafe { std::env::remove_var("LESSONPLAN_RATE_LIMIT") };
    let router = create_router(AppState::new(config));
    (
        TestServer::new(router).unwrap(),
        TestGuard { _guard: guard },
    )
}

/// Create a test server with the default configuration.
fn create_test_server() -> (TestServer, TestGuard) {
    create_server_with(AppConfig::default())
}

// =============================================================================
// HEALTH ENDPOINT TESTS
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let (server, _guard) = create_test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let health: HealthResponse = response.json();
    assert_eq!(health.status, "ok");
    assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
}

// =============================================================================
// FORM PAGE TESTS
// =============================================================================

#[tokio::test]
async fn test_form_page_has_all_fields() {
    let (server, _guard) = create_test_server();

    let response = server.get("/").await;

    response.assert_status_ok();
    let html = response.text();
    for field in ["grade", "subject", "program", "unit", "lesson", "standard"] {
        assert!(
            html.contains(&format!("name=\"{}\"", field)),
            "missing field {}",
            field
        );
    }
    assert!(html.contains("<form class=\"plan-form\" method=\"post\" action=\"/plan\">"));
    assert!(html.contains("<button type=\"submit\">"));
}

#[tokio::test]
async fn test_form_page_hides_print_action() {
    let (server, _guard) = create_test_server();

    let html = server.get("/").await.text();

    assert!(html.contains("id=\"print-plan\""));
    assert!(html.contains("onclick=\"window.print()\" hidden>"));
    assert!(html.contains("<div id=\"plan-output\"></div>"));
}

#[tokio::test]
async fn test_form_submission_injects_plan() {
    let (server, _guard) = create_test_server();

    let response = server
        .post("/plan")
        .form(&PlanRequest {
            grade: "3".to_string(),
            subject: "Math".to_string(),
            lesson: "7".to_string(),
            standard: "3.4K".to_string(),
            ..PlanRequest::default()
        })
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("<div id=\"plan-output\"><article class=\"lesson-plan\""));
    assert!(html.contains("Grade 3 Math Lesson Plan"));
    assert!(html.contains("Bluebonnet"));
    assert!(html.contains("___/___"));
    // Print action becomes visible once a plan is present.
    assert!(html.contains("onclick=\"window.print()\">"));
    assert!(!html.contains("onclick=\"window.print()\" hidden>"));
    // Submitted values are echoed back.
    assert!(html.contains("name=\"lesson\" value=\"7\""));
    assert!(html.contains("<option value=\"Math\" selected>Math</option>"));
}

#[tokio::test]
async fn test_form_submission_unknown_subject() {
    let (server, _guard) = create_test_server();

    let response = server
        .post("/plan")
        .form(&PlanRequest {
            grade: "3".to_string(),
            subject: "Science".to_string(),
            ..PlanRequest::default()
        })
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let html = response.text();
    assert!(html.contains("role=\"alert\""));
    assert!(html.contains("Unknown subject"));
    assert!(html.contains("<div id=\"plan-output\"></div>"));
    assert!(html.contains("onclick=\"window.print()\" hidden>"));
}

#[tokio::test]
async fn test_form_submission_missing_fields_uses_defaults() {
    let (server, _guard) = create_test_server();

    let response = server
        .post("/plan")
        .form(&PlanRequest {
            subject: "Reading".to_string(),
            ..PlanRequest::default()
        })
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Grade ___ Reading Lesson Plan"));
    assert!(html.contains("HMH Into Reading"));
}

// =============================================================================
// JSON API TESTS
// =============================================================================

#[tokio::test]
async fn test_plan_api_math() {
    let (server, _guard) = create_test_server();

    let response = server
        .post("/api/plan")
        .json(&json!({
            "grade": "4",
            "subject": "math",
            "unit": "2",
            "lesson": "9"
        }))
        .await;

    response.assert_status_ok();
    let plan: PlanResponse = response.json();
    assert!(plan.success);
    assert!(plan.printable);
    assert_eq!(plan.subject.as_deref(), Some("Math"));
    assert_eq!(plan.program.as_deref(), Some("Bluebonnet Learning Math"));
    assert_eq!(plan.title.as_deref(), Some("Grade 4 Math Lesson Plan"));
    let html = plan.html.unwrap();
    assert!(html.contains("Unit 2, Lesson 9"));
    assert!(plan.error.is_none());
}

#[tokio::test]
async fn test_plan_api_blank_subject_defaults_to_reading() {
    let (server, _guard) = create_test_server();

    let response = server.post("/api/plan").json(&json!({})).await;

    response.assert_status_ok();
    let plan: PlanResponse = response.json();
    assert_eq!(plan.subject.as_deref(), Some("Reading"));
    assert!(plan.html.unwrap().contains("___/___"));
}

#[tokio::test]
async fn test_plan_api_unknown_subject() {
    let (server, _guard) = create_test_server();

    let response = server
        .post("/api/plan")
        .json(&json!({ "subject": "Art" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let plan: PlanResponse = response.json();
    assert!(!plan.success);
    assert!(!plan.printable);
    assert!(plan.html.is_none());
    assert!(plan.error.unwrap().contains("Art"));
}

#[tokio::test]
async fn test_plan_api_is_deterministic() {
    let (server, _guard) = create_test_server();
    let body = json!({ "grade": "1", "subject": "Reading", "standard": "1.6G" });

    let first: PlanResponse = server.post("/api/plan").json(&body).await.json();
    let second: PlanResponse = server.post("/api/plan").json(&body).await.json();

    assert_eq!(first.html, second.html);
}

#[tokio::test]
async fn test_plan_api_oversized_body_rejected() {
    let (server, _guard) = create_test_server();
    let huge = "x".repeat(128 * 1024);

    let response = server
        .post("/api/plan")
        .json(&json!({ "subject": "Math", "standard": huge }))
        .await;

    assert_eq!(response.status_code(), StatusCode::PAYLOAD_TOO_LARGE);
}

// =============================================================================
// SUBJECTS ENDPOINT TESTS
// =============================================================================

#[tokio::test]
async fn test_subjects_default_programs() {
    let (server, _guard) = create_test_server();

    let response = server.get("/api/subjects").await;

    response.assert_status_ok();
    let listing: SubjectsResponse = response.json();
    let names: Vec<_> = listing.subjects.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Reading", "Math"]);
    assert_eq!(listing.subjects[1].default_program, "Bluebonnet Learning Math");
}

#[tokio::test]
async fn test_configured_programs_are_used() {
    let config = AppConfig {
        programs: ProgramDefaults {
            reading: "Amplify CKLA".to_string(),
            ..ProgramDefaults::default()
        },
        ..AppConfig::default()
    };
    let (server, _guard) = create_server_with(config);

    let listing: SubjectsResponse = server.get("/api/subjects").await.json();
    assert_eq!(listing.subjects[0].default_program, "Amplify CKLA");

    let plan: PlanResponse = server
        .post("/api/plan")
        .json(&json!({ "subject": "Reading" }))
        .await
        .json();
    assert_eq!(plan.program.as_deref(), Some("Amplify CKLA"));
}

// =============================================================================
// RATE LIMIT TESTS
// =============================================================================

#[tokio::test]
async fn test_rate_limit_from_config() {
    let config = AppConfig {
        server: ServerConfig {
            rate_limit: Some(1),
            ..ServerConfig::default()
        },
        ..AppConfig::default()
    };
    let (server, _guard) = create_server_with(config);

    server.get("/health").await.assert_status_ok();
    let response = server.get("/health").await;
    response.assert_status(StatusCode::TOO_MANY_REQUESTS);
}

#[tokio::test]
async fn test_rate_limit_env_overrides_config() {
    let config = AppConfig {
        server: ServerConfig {
            rate_limit: Some(1),
            ..ServerConfig::default()
        },
        ..AppConfig::default()
    };
    let guard = ENV_TEST_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    // SAFETY: Tests run sequentially under ENV_TEST_MUTEX, so no concurrent env access.
    unsafe { std::env::set_var("LESSONPLAN_RATE_LIMIT", "0") };
    let server = TestServer::new(create_router(AppState::new(config))).unwrap();
    let _guard = TestGuard { _guard: guard };

    for _ in 0..3 {
        server.get("/health").await.assert_status_ok();
    }
}
