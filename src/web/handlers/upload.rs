//! Upload handler for the TeenyHost API.

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::web::dto::UploadResponse;
use crate::web::error::ApiError;
use crate::web::handlers::AppState;

/// Content types accepted for upload.
const ALLOWED_CONTENT_TYPES: [&str; 4] = [
    "text/html",
    "application/zip",
    "application/x-zip-compressed",
    "application/pdf",
];

/// Check whether an upload is acceptable by declared type or filename.
///
/// Filename matching is case-insensitive so `report.HTML` is accepted.
fn is_allowed_type(content_type: &str, filename: &str) -> bool {
    if ALLOWED_CONTENT_TYPES.contains(&content_type) {
        return true;
    }
    let lower = filename.to_lowercase();
    lower.ends_with(".html") || lower.ends_with(".htm")
}

/// Error for an upload over the size limit, with the limit in the message.
fn too_large(max_upload_size: u64) -> ApiError {
    let max_mb = max_upload_size / 1024 / 1024;
    ApiError::bad_request(format!("File too large. Maximum size is {max_mb}MB."))
}

/// Map a multipart read failure to an API error.
///
/// A body over the transport limit fails inside the multipart stream
/// before the handler's own size check can run; it surfaces as a
/// payload-too-large multipart error and must be reported as a size
/// failure, not a malformed request.
fn multipart_error(e: MultipartError, max_upload_size: u64) -> ApiError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return too_large(max_upload_size);
    }
    tracing::error!("Failed to read multipart field: {}", e);
    ApiError::bad_request("Invalid multipart data")
}

/// POST /api/upload - Upload a file.
///
/// Request body: multipart/form-data with a "file" field. Validates
/// presence, size, and type in that order; on success the file is written
/// to the store and a shareable viewer URL is returned.
pub async fn upload_file(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    // Extract file from multipart
    let mut filename: Option<String> = None;
    let mut content_type: Option<String> = None;
    let mut content: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, state.max_upload_size))?
    {
        if field.name() == Some("file") {
            filename = field.file_name().map(|s| s.to_string());
            content_type = field.content_type().map(|s| s.to_string());
            content = Some(
                field
                    .bytes()
                    .await
                    .map_err(|e| multipart_error(e, state.max_upload_size))?
                    .to_vec(),
            );
        }
    }

    let content = content.ok_or_else(|| ApiError::bad_request("No file uploaded"))?;
    let filename = filename.unwrap_or_default();
    let content_type = content_type.unwrap_or_default();

    // Check file size
    if content.len() as u64 > state.max_upload_size {
        return Err(too_large(state.max_upload_size));
    }

    // Check file type
    if !is_allowed_type(&content_type, &filename) {
        return Err(ApiError::bad_request(
            "Invalid file type. Only HTML, ZIP, and PDF files are allowed.",
        ));
    }

    // Save file to storage
    let stored = state.store.put(&content, &filename).map_err(|e| {
        tracing::error!("Failed to store upload: {}", e);
        ApiError::internal("Upload failed")
    })?;

    tracing::info!(
        id = %stored.id,
        name = %filename,
        size = stored.size,
        "file uploaded"
    );

    let url = format!("{}/view/{}", state.base_url, stored.id);

    Ok(Json(UploadResponse {
        id: stored.id,
        name: filename,
        content_type,
        size: stored.size,
        url,
    }))
}
