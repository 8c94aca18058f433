//! TeenyHost - Minimal file hosting.
//!
//! Upload an HTML, ZIP, or PDF file through the browser form and get a
//! shareable viewer link back. Files live in a flat uploads directory
//! under a generated identifier; the filename is the only metadata kept.

pub mod config;
pub mod error;
pub mod logging;
pub mod storage;
pub mod view;
pub mod web;

pub use config::Config;
pub use error::{Result, TeenyhostError};
pub use storage::{FileStore, StoredEntry, StoredFile};
pub use view::{format_file_size, mime_for_extension, FileView};
pub use web::{create_router, ApiError, WebServer};
