//! Response DTOs for the TeenyHost API.

use serde::Serialize;

/// Successful upload response.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    /// Generated identifier of the stored file.
    pub id: String,
    /// Original filename as submitted by the client.
    pub name: String,
    /// Declared content type of the uploaded file.
    #[serde(rename = "type")]
    pub content_type: String,
    /// File size in bytes.
    pub size: u64,
    /// Shareable viewer URL.
    pub url: String,
}

/// Error response body: `{"error": "<message>"}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable error message.
    pub error: String,
}
