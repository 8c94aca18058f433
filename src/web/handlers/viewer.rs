//! Landing page and file viewer handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use std::sync::Arc;

use crate::view::FileView;
use crate::web::handlers::AppState;
use crate::web::pages;

/// GET / - The landing/upload page.
pub async fn index() -> Html<String> {
    Html(pages::landing_page())
}

/// GET /view/:id - Resolve an identifier and render the viewer page.
///
/// An unknown identifier, or any resolution failure, renders the
/// not-found page with a 404 status.
pub async fn view_file(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    match FileView::resolve(&state.store, &id) {
        Some(view) => {
            tracing::debug!(id = %id, filename = %view.filename, "rendering viewer");
            Html(pages::render_viewer(&view)).into_response()
        }
        None => {
            tracing::debug!(id = %id, "no stored file matches identifier");
            (StatusCode::NOT_FOUND, Html(pages::not_found_page())).into_response()
        }
    }
}
