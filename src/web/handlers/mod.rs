//! Request handlers for the TeenyHost web layer.

pub mod upload;
pub mod viewer;

pub use upload::*;
pub use viewer::*;

use crate::storage::FileStore;

/// Shared application state for web handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The file store backing uploads and lookups.
    pub store: FileStore,
    /// Externally visible base URL for share links (no trailing slash).
    pub base_url: String,
    /// Maximum upload size in bytes.
    pub max_upload_size: u64,
}

impl AppState {
    /// Create a new application state.
    pub fn new(store: FileStore, base_url: impl Into<String>, max_upload_size: u64) -> Self {
        let base_url = base_url.into();
        Self {
            store,
            base_url: base_url.trim_end_matches('/').to_string(),
            max_upload_size,
        }
    }
}
