//! Web API Upload Tests
//!
//! Integration tests for the upload endpoint.

use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;

use teenyhost::storage::FileStore;
use teenyhost::web::handlers::AppState;
use teenyhost::web::router::{create_health_router, create_router};

const MAX_UPLOAD_SIZE: u64 = 25 * 1024 * 1024;

/// Create a test server over a temporary uploads directory.
fn create_test_server(temp_dir: &TempDir) -> (TestServer, FileStore) {
    let store = FileStore::new(temp_dir.path()).expect("Failed to create file store");

    let app_state = Arc::new(AppState::new(
        store.clone(),
        "http://localhost:3000",
        MAX_UPLOAD_SIZE,
    ));

    let router = create_router(app_state).merge(create_health_router());
    let server = TestServer::new(router).expect("Failed to create test server");

    (server, store)
}

/// Build a multipart form with a single "file" part.
fn file_form(content: &[u8], filename: &str, content_type: &str) -> MultipartForm {
    let part = Part::bytes(content.to_vec())
        .file_name(filename)
        .mime_type(content_type);
    MultipartForm::new().add_part("file", part)
}

#[tokio::test]
async fn test_health() {
    let temp_dir = TempDir::new().unwrap();
    let (server, _store) = create_test_server(&temp_dir);

    let response = server.get("/health").await;
    response.assert_status_ok();
    assert_eq!(response.text(), "OK");
}

#[tokio::test]
async fn test_upload_html_success() {
    let temp_dir = TempDir::new().unwrap();
    let (server, store) = create_test_server(&temp_dir);

    let response = server
        .post("/api/upload")
        .multipart(file_form(b"0123456789", "a.html", "text/html"))
        .await;

    response.assert_status_ok();

    let body: Value = response.json();
    let id = body["id"].as_str().unwrap();
    assert!(!id.is_empty());
    assert_eq!(body["name"], "a.html");
    assert_eq!(body["type"], "text/html");
    assert_eq!(body["size"], 10);
    assert_eq!(
        body["url"].as_str().unwrap(),
        format!("http://localhost:3000/view/{id}")
    );

    // File is on disk under {id}.html with the uploaded bytes
    let stored_name = format!("{id}.html");
    assert!(store.exists(&stored_name));
    assert_eq!(store.read(&stored_name).unwrap(), b"0123456789");
}

#[tokio::test]
async fn test_upload_missing_file_field() {
    let temp_dir = TempDir::new().unwrap();
    let (server, store) = create_test_server(&temp_dir);

    let form = MultipartForm::new().add_text("description", "no file here");
    let response = server.post("/api/upload").multipart(form).await;

    response.assert_status_bad_request();

    let body: Value = response.json();
    assert_eq!(body["error"], "No file uploaded");
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_upload_too_large() {
    let temp_dir = TempDir::new().unwrap();
    let (server, store) = create_test_server(&temp_dir);

    // One byte over the 25 MiB limit
    let content = vec![0u8; (MAX_UPLOAD_SIZE + 1) as usize];
    let response = server
        .post("/api/upload")
        .multipart(file_form(&content, "big.pdf", "application/pdf"))
        .await;

    response.assert_status_bad_request();

    let body: Value = response.json();
    assert_eq!(body["error"], "File too large. Maximum size is 25MB.");
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_upload_far_over_limit_reports_too_large() {
    let temp_dir = TempDir::new().unwrap();
    let (server, store) = create_test_server(&temp_dir);

    // 30 MiB exceeds the transport body limit itself, so the failure
    // happens inside the multipart stream rather than the handler's
    // size check; the response must still name the size rule.
    let content = vec![0u8; 30 * 1024 * 1024];
    let response = server
        .post("/api/upload")
        .multipart(file_form(&content, "huge.pdf", "application/pdf"))
        .await;

    response.assert_status_bad_request();

    let body: Value = response.json();
    assert_eq!(body["error"], "File too large. Maximum size is 25MB.");
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_upload_at_limit_is_accepted() {
    let temp_dir = TempDir::new().unwrap();
    let (server, _store) = create_test_server(&temp_dir);

    let content = vec![0u8; MAX_UPLOAD_SIZE as usize];
    let response = server
        .post("/api/upload")
        .multipart(file_form(&content, "exact.pdf", "application/pdf"))
        .await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["size"], MAX_UPLOAD_SIZE);
}

#[tokio::test]
async fn test_upload_unsupported_type() {
    let temp_dir = TempDir::new().unwrap();
    let (server, store) = create_test_server(&temp_dir);

    let response = server
        .post("/api/upload")
        .multipart(file_form(b"plain text", "notes.txt", "text/plain"))
        .await;

    response.assert_status_bad_request();

    let body: Value = response.json();
    assert_eq!(
        body["error"],
        "Invalid file type. Only HTML, ZIP, and PDF files are allowed."
    );
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_upload_mixed_case_html_name_accepted() {
    let temp_dir = TempDir::new().unwrap();
    let (server, store) = create_test_server(&temp_dir);

    // Declared type is not in the allowed set; the .HTML name carries it.
    let response = server
        .post("/api/upload")
        .multipart(file_form(
            b"<p>report</p>",
            "report.HTML",
            "application/octet-stream",
        ))
        .await;

    response.assert_status_ok();

    let body: Value = response.json();
    let id = body["id"].as_str().unwrap();
    assert!(store.exists(&format!("{id}.HTML")));
}

#[tokio::test]
async fn test_upload_zip_by_declared_type() {
    let temp_dir = TempDir::new().unwrap();
    let (server, _store) = create_test_server(&temp_dir);

    let response = server
        .post("/api/upload")
        .multipart(file_form(b"PK\x03\x04", "bundle.zip", "application/zip"))
        .await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["type"], "application/zip");
    assert_eq!(body["size"], 4);
}

#[tokio::test]
async fn test_upload_no_extension_stored_as_bin() {
    let temp_dir = TempDir::new().unwrap();
    let (server, store) = create_test_server(&temp_dir);

    let response = server
        .post("/api/upload")
        .multipart(file_form(b"PK\x03\x04", "archive", "application/zip"))
        .await;

    response.assert_status_ok();

    let body: Value = response.json();
    let id = body["id"].as_str().unwrap();
    assert_eq!(body["name"], "archive");
    assert!(store.exists(&format!("{id}.bin")));
}

#[tokio::test]
async fn test_upload_same_file_twice_gets_distinct_copies() {
    let temp_dir = TempDir::new().unwrap();
    let (server, store) = create_test_server(&temp_dir);

    let first = server
        .post("/api/upload")
        .multipart(file_form(b"same content", "a.html", "text/html"))
        .await;
    let second = server
        .post("/api/upload")
        .multipart(file_form(b"same content", "a.html", "text/html"))
        .await;

    first.assert_status_ok();
    second.assert_status_ok();

    let first: Value = first.json();
    let second: Value = second.json();
    assert_ne!(first["id"], second["id"]);
    assert_eq!(store.len(), 2);
}
