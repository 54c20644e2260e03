//! # API Endpoint Handlers
//!
//! This module implements the HTTP endpoint handlers.

use super::{
    AppState,
    page::{FormPage, render_form_page},
    types::{HealthResponse, PlanRequest, PlanResponse, SubjectsResponse},
};
use axum::{
    Form, Json,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
};

// =============================================================================
// HEALTH HANDLER
// =============================================================================

/// Health check endpoint.
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse::default())
}

// =============================================================================
// FORM PAGE HANDLERS
// =============================================================================

/// Serve the empty form page.
pub async fn form_page_handler(State(state): State<AppState>) -> impl IntoResponse {
    let values = PlanRequest::default();
    Html(render_form_page(&FormPage {
        values: &values,
        plan: None,
        error: None,
        defaults: state.renderer.defaults(),
    }))
}

/// Handle a form submission: render the plan into the page and reveal the
/// print action.
pub async fn submit_form_handler(
    State(state): State<AppState>,
    Form(form): Form<PlanRequest>,
) -> impl IntoResponse {
    let defaults = state.renderer.defaults();

    let request = match form.to_lesson_request() {
        Ok(r) => r,
        Err(e) => {
            tracing::warn!(error = %e, "Rejected lesson plan form");
            let message = e.to_string();
            return (
                StatusCode::BAD_REQUEST,
                Html(render_form_page(&FormPage {
                    values: &form,
                    plan: None,
                    error: Some(&message),
                    defaults,
                })),
            );
        }
    };

    let plan = state.renderer.render(&request);
    tracing::debug!(subject = %plan.subject, title = %plan.title, "Rendered lesson plan");

    (
        StatusCode::OK,
        Html(render_form_page(&FormPage {
            values: &form,
            plan: Some(&plan),
            error: None,
            defaults,
        })),
    )
}

// =============================================================================
// JSON API HANDLERS
// =============================================================================

/// Render a plan and return the fragment as JSON.
pub async fn plan_api_handler(
    State(state): State<AppState>,
    Json(request): Json<PlanRequest>,
) -> impl IntoResponse {
    let request = match request.to_lesson_request() {
        Ok(r) => r,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(PlanResponse::error(format!("Invalid request: {}", e))),
            );
        }
    };

    let plan = state.renderer.render(&request);
    tracing::debug!(subject = %plan.subject, title = %plan.title, "Rendered lesson plan");

    (StatusCode::OK, Json(PlanResponse::success(plan)))
}

/// List subjects with their default programs.
pub async fn subjects_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(SubjectsResponse::from_defaults(state.renderer.defaults()))
}
