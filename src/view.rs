//! View model for the file viewer.
//!
//! A [`FileView`] is derived from the store on every view request and
//! never cached. Only HTML files get their content decoded for inline
//! preview; everything else is fetched by the browser through the public
//! download path.

use crate::storage::FileStore;

/// MIME type for a lower-cased file extension.
///
/// Small fixed table; anything unknown is served as a generic byte stream.
pub fn mime_for_extension(extension: &str) -> &'static str {
    match extension {
        "html" | "htm" => "text/html",
        "pdf" => "application/pdf",
        "zip" => "application/zip",
        _ => "application/octet-stream",
    }
}

/// Read-only view model computed per viewer request.
#[derive(Debug, Clone)]
pub struct FileView {
    /// The identifier the client asked for.
    pub id: String,
    /// The stored filename that matched.
    pub filename: String,
    /// Lower-cased extension of the stored filename.
    pub extension: String,
    /// File size in bytes.
    pub size: u64,
    /// Decoded text content, populated only for HTML files.
    pub content: Option<String>,
    /// MIME type derived from the extension.
    pub mime_type: &'static str,
    /// Public download path for the raw bytes.
    pub download_url: String,
}

impl FileView {
    /// Resolve an identifier against the store.
    ///
    /// Returns `None` when no stored file matches the identifier prefix.
    /// A failed content read for an HTML file degrades to no inline
    /// preview instead of failing the whole request.
    pub fn resolve(store: &FileStore, id: &str) -> Option<FileView> {
        let entry = store.find_by_prefix(id)?;

        let extension = entry
            .stored_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
            .unwrap_or_default();

        let content = if extension == "html" || extension == "htm" {
            match store.read(&entry.stored_name) {
                Ok(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
                Err(e) => {
                    tracing::warn!("failed to read {} for preview: {}", entry.stored_name, e);
                    None
                }
            }
        } else {
            None
        };

        Some(FileView {
            id: id.to_string(),
            mime_type: mime_for_extension(&extension),
            download_url: format!("/uploads/{}", entry.stored_name),
            filename: entry.stored_name,
            extension,
            size: entry.size,
            content,
        })
    }

    /// Whether this file gets an inline HTML preview.
    pub fn is_html(&self) -> bool {
        self.extension == "html" || self.extension == "htm"
    }
}

/// Format a byte count for display (e.g. "2.5 MB").
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    let i = ((bytes as f64).ln() / 1024f64.ln()).floor() as usize;
    let i = i.min(UNITS.len() - 1);
    let value = bytes as f64 / 1024f64.powi(i as i32);
    // Two decimals, trailing zeros trimmed
    let formatted = format!("{value:.2}");
    let formatted = formatted.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", formatted, UNITS[i])
}
