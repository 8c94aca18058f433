//! File storage for TeenyHost.
//!
//! This module provides the flat-directory storage backing the upload and
//! viewer endpoints:
//! - UUID-based file naming (`{id}.{ext}`)
//! - Prefix-based lookup by identifier
//! - Save and load operations
//!
//! The directory itself is the only source of truth; no index or database
//! shadows it, so lookup is an O(n) directory scan. That is acceptable at
//! the scale this service targets.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::{Result, TeenyhostError};

/// A file persisted by [`FileStore::put`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    /// The generated identifier (UUID v4).
    pub id: String,
    /// The on-disk filename (`{id}.{ext}`).
    pub stored_name: String,
    /// Size of the written content in bytes.
    pub size: u64,
}

/// A stored file located by [`FileStore::find_by_prefix`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredEntry {
    /// The on-disk filename.
    pub stored_name: String,
    /// Size of the file in bytes.
    pub size: u64,
}

/// Flat-directory file store.
///
/// Files are written once under a generated identifier and never updated
/// or deleted. The stored filename always begins with the identifier,
/// which is what makes prefix lookup work.
#[derive(Debug, Clone)]
pub struct FileStore {
    /// Base directory for uploads.
    base_path: PathBuf,
}

impl FileStore {
    /// Create a new FileStore with the given base path.
    ///
    /// The base directory will be created if it doesn't exist.
    pub fn new(base_path: impl Into<PathBuf>) -> Result<Self> {
        let base_path = base_path.into();
        fs::create_dir_all(&base_path)?;

        Ok(Self { base_path })
    }

    /// Get the base path of this store.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Persist content under a freshly generated identifier.
    ///
    /// The extension is derived from `original_name` and defaults to `bin`
    /// for names without one. No uniqueness check is made against existing
    /// entries; a 128-bit random identifier makes collisions negligible.
    pub fn put(&self, content: &[u8], original_name: &str) -> Result<StoredFile> {
        let id = Uuid::new_v4().to_string();
        let ext = extract_extension(original_name);
        let stored_name = format!("{id}.{ext}");

        // Tolerate the directory having been removed since construction,
        // and concurrent creation by another request.
        fs::create_dir_all(&self.base_path)?;

        let file_path = self.base_path.join(&stored_name);
        fs::write(&file_path, content)
            .map_err(|e| TeenyhostError::Storage(format!("write {stored_name}: {e}")))?;

        Ok(StoredFile {
            id,
            stored_name,
            size: content.len() as u64,
        })
    }

    /// Find the first stored file whose name starts with `id`.
    ///
    /// Returns `None` when no entry matches. Directory-read and stat
    /// failures are treated identically to no match; the caller cannot
    /// distinguish them.
    pub fn find_by_prefix(&self, id: &str) -> Option<StoredEntry> {
        if id.is_empty() {
            return None;
        }

        let entries = fs::read_dir(&self.base_path).ok()?;

        for entry in entries.flatten() {
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            if name.starts_with(id) {
                let size = entry.metadata().ok()?.len();
                return Some(StoredEntry {
                    stored_name: name.to_string(),
                    size,
                });
            }
        }

        None
    }

    /// Load the full content of a stored file.
    pub fn read(&self, stored_name: &str) -> Result<Vec<u8>> {
        let file_path = self.base_path.join(stored_name);

        match fs::read(&file_path) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(TeenyhostError::NotFound(format!("file {stored_name}")))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Check if a file exists in the store.
    pub fn exists(&self, stored_name: &str) -> bool {
        self.base_path.join(stored_name).exists()
    }

    /// Get the full on-disk path for a stored name.
    pub fn path_for(&self, stored_name: &str) -> PathBuf {
        self.base_path.join(stored_name)
    }

    /// Number of files currently in the store.
    pub fn len(&self) -> usize {
        fs::read_dir(&self.base_path)
            .map(|entries| entries.flatten().count())
            .unwrap_or(0)
    }

    /// Whether the store holds no files.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Extract the file extension from a filename.
///
/// Returns "bin" if no extension is found. A name with no dot (or only a
/// leading dot) has no extension and falls back to "bin".
pub fn extract_extension(filename: &str) -> &str {
    Path::new(filename)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("bin")
}
