//! # Lesson Plan HTTP API Module
//!
//! This module implements the HTTP server using axum.
//!
//! ## Endpoints
//!
//! - `GET /` - Lesson plan form page
//! - `POST /plan` - Form submission; returns the page with the plan injected
//! - `POST /api/plan` - Render a plan from JSON
//! - `GET /api/subjects` - Subjects and their default programs
//! - `GET /health` - Health check
//!
//! ## Security Configuration (Environment Variables)
//!
//! - `LESSONPLAN_CORS_ORIGINS`: Comma-separated list of allowed origins, or "*" for all (default: localhost only)
//! - `LESSONPLAN_RATE_LIMIT`: Requests per second (default: 100, 0 to disable)

mod handlers;
mod middleware;
mod page;
mod types;

// Re-exports for integration tests (via `lessonplan::api::*`)
pub use handlers::{
    form_page_handler, health_handler, plan_api_handler, subjects_handler, submit_form_handler,
};
pub use middleware::{DEFAULT_RATE_LIMIT, create_rate_limiter, resolve_rate_limit};
pub use page::{FormPage, render_form_page};
pub use types::{HealthResponse, PlanRequest, PlanResponse, SubjectInfo, SubjectsResponse};

use crate::config::{AppConfig, ServerConfig};
use axum::{
    Router,
    http::{HeaderValue, Method, header},
    middleware as axum_middleware,
    routing::{get, post},
};
use lessonplan_core::{PlanError, PlanRenderer};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Maximum request body size. Form submissions are a handful of short fields.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

// =============================================================================
// SERVER STATE
// =============================================================================

/// Shared server state: the renderer and the server settings.
///
/// The renderer is read-only; handlers never need a lock.
#[derive(Clone)]
pub struct AppState {
    pub renderer: Arc<PlanRenderer>,
    pub server: Arc<ServerConfig>,
}

impl AppState {
    /// Create app state from configuration.
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        Self {
            renderer: Arc::new(PlanRenderer::new(config.programs)),
            server: Arc::new(config.server),
        }
    }
}

// =============================================================================
// CORS CONFIGURATION
// =============================================================================

/// Build CORS layer from environment and configuration.
///
/// `LESSONPLAN_CORS_ORIGINS` wins over `[server] cors_origins`:
/// - If "*": allows all origins (development mode - use with caution!)
/// - If neither is set: localhost only
/// - Otherwise: the listed origins
fn build_cors_layer(configured: Option<&[String]>) -> CorsLayer {
    let from_env: Option<Vec<String>> = std::env::var("LESSONPLAN_CORS_ORIGINS")
        .ok()
        .map(|v| v.split(',').map(|s| s.trim().to_string()).collect());

    let origins = match (from_env, configured) {
        (Some(list), _) => list,
        (None, Some(list)) => list.to_vec(),
        (None, None) => {
            tracing::info!("CORS: No origins configured, defaulting to localhost only");
            return build_localhost_cors();
        }
    };

    if origins.iter().any(|o| o == "*") {
        tracing::warn!("CORS: Allowing ALL origins. This is insecure for production!");
        return CorsLayer::permissive();
    }

    let allowed_origins: Vec<HeaderValue> = origins
        .iter()
        .filter(|s| !s.is_empty())
        .filter_map(|s| match s.parse::<HeaderValue>() {
            Ok(hv) => {
                tracing::info!("CORS: Allowing origin: {}", s);
                Some(hv)
            }
            Err(e) => {
                tracing::warn!("CORS: Invalid origin '{}': {}", s, e);
                None
            }
        })
        .collect();

    if allowed_origins.is_empty() {
        tracing::warn!("CORS: No valid origins configured, defaulting to localhost only");
        build_localhost_cors()
    } else {
        CorsLayer::new()
            .allow_origin(allowed_origins)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE])
    }
}

/// Build a restrictive CORS layer that only allows localhost origins.
fn build_localhost_cors() -> CorsLayer {
    let origins: Vec<HeaderValue> = [
        "http://localhost:3000",
        "http://localhost:8080",
        "http://127.0.0.1:3000",
        "http://127.0.0.1:8080",
    ]
    .into_iter()
    .filter_map(|o| o.parse::<HeaderValue>().ok())
    .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

// =============================================================================
// ROUTER CREATION
// =============================================================================

/// Create the axum router with all endpoints and middleware.
///
/// Middleware stack (outer to inner):
/// 1. Tracing - logs all requests
/// 2. CORS - handles preflight requests
/// 3. Body limit
/// 4. Rate Limiting (if enabled)
pub fn create_router(state: AppState) -> Router {
    let cors = build_cors_layer(state.server.cors_origins.as_deref());

    let rate_limit = resolve_rate_limit(state.server.rate_limit);
    let rate_limiter = if rate_limit > 0 {
        tracing::info!("Rate limiting enabled: {} requests/second", rate_limit);
        Some(create_rate_limiter(rate_limit))
    } else {
        tracing::info!("Rate limiting disabled");
        None
    };

    let mut router = Router::new()
        .route("/", get(handlers::form_page_handler))
        .route("/plan", post(handlers::submit_form_handler))
        .route("/api/plan", post(handlers::plan_api_handler))
        .route("/api/subjects", get(handlers::subjects_handler))
        .route("/health", get(handlers::health_handler));

    if let Some(limiter) = rate_limiter {
        router = router.layer(axum_middleware::from_fn_with_state(
            limiter,
            middleware::rate_limit_middleware,
        ));
    }

    router
        .layer(axum::extract::DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

// =============================================================================
// SERVER STARTUP
// =============================================================================

/// Start the HTTP server and run until Ctrl+C.
pub async fn run_server(addr: &str, state: AppState) -> Result<(), PlanError> {
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| PlanError::IoError(format!("Bind failed: {}", e)))?;

    tracing::info!("Lesson plan server listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| PlanError::IoError(format!("Server error: {}", e)))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
