//! Router configuration for the TeenyHost web layer.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use super::handlers::{index, upload_file, view_file, AppState};

/// Slack added to the body limit so oversized uploads reach the
/// handler's own size check (multipart framing has overhead).
const BODY_LIMIT_SLACK: usize = 1024 * 1024;

/// Create the main router.
///
/// Routes: the landing page, the upload API, the viewer, and the public
/// static download path backed directly by the uploads directory.
pub fn create_router(app_state: Arc<AppState>) -> Router {
    let uploads_service = ServeDir::new(app_state.store.base_path());
    let body_limit = app_state.max_upload_size as usize + BODY_LIMIT_SLACK;

    Router::new()
        .route("/", get(index))
        .route("/api/upload", post(upload_file))
        .route("/view/:id", get(view_file))
        .nest_service("/uploads", uploads_service)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::max(body_limit)),
        )
        .with_state(app_state)
}

/// Create a health check router.
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}
