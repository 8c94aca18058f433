//! Server-rendered HTML pages for TeenyHost.
//!
//! Three pages: the landing/upload page, the file viewer, and a not-found
//! page. Markup is assembled as plain strings; every interpolated value
//! goes through [`html_escape`].

use crate::view::{format_file_size, FileView};

/// Escape a string for safe interpolation into HTML text or attributes.
pub fn html_escape(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

const STYLE: &str = r#"<style>
body { font-family: system-ui, sans-serif; margin: 0; background: #eef2ff; color: #111827; }
header { background: #fff; border-bottom: 1px solid #e5e7eb; padding: 1rem 2rem; }
header h1 { font-size: 1.4rem; margin: 0; }
main { max-width: 56rem; margin: 0 auto; padding: 3rem 1.5rem; }
.card { background: #fff; border: 1px solid #e5e7eb; border-radius: 0.5rem; padding: 2rem; }
.dropzone { border: 2px dashed #93c5fd; border-radius: 0.5rem; padding: 3rem; text-align: center; cursor: pointer; }
.dropzone.dragging { border-color: #2563eb; background: #eff6ff; }
.btn { display: inline-block; background: #2563eb; color: #fff; border: none; border-radius: 0.4rem; padding: 0.6rem 1.2rem; font-size: 1rem; cursor: pointer; text-decoration: none; }
.btn:hover { background: #1d4ed8; }
.muted { color: #6b7280; }
.error { color: #b91c1c; }
.hidden { display: none; }
.share-link { font-family: monospace; background: #f3f4f6; padding: 0.5rem; border-radius: 0.3rem; word-break: break-all; }
.preview-frame { width: 100%; height: 24rem; border: 1px solid #e5e7eb; border-radius: 0.5rem; background: #fff; }
.file-meta { margin: 0.5rem 0 1.5rem; }
</style>"#;

const LANDING_SCRIPT: &str = r#"<script>
(function () {
  // Upload state machine: idle -> uploading -> succeeded | failed
  let state = 'idle';
  let result = null;
  let errorMessage = '';

  const dropzone = document.getElementById('dropzone');
  const fileInput = document.getElementById('file-input');
  const uploadingEl = document.getElementById('uploading');
  const successEl = document.getElementById('success');
  const failureEl = document.getElementById('failure');
  const shareLinkEl = document.getElementById('share-link');
  const errorEl = document.getElementById('error-message');
  const copyBtn = document.getElementById('copy-link');

  function render() {
    dropzone.classList.toggle('hidden', state === 'uploading');
    uploadingEl.classList.toggle('hidden', state !== 'uploading');
    successEl.classList.toggle('hidden', state !== 'succeeded');
    failureEl.classList.toggle('hidden', state !== 'failed');
    if (state === 'succeeded' && result) {
      shareLinkEl.textContent = result.url;
    }
    if (state === 'failed') {
      errorEl.textContent = errorMessage;
    }
  }

  function setState(next) {
    state = next;
    render();
  }

  async function uploadFile(file) {
    setState('uploading');
    const form = new FormData();
    form.append('file', file);
    try {
      const response = await fetch('/api/upload', { method: 'POST', body: form });
      const body = await response.json().catch(() => null);
      if (response.ok) {
        result = body;
        setState('succeeded');
      } else {
        errorMessage = (body && body.error) || 'Upload failed';
        setState('failed');
      }
    } catch (err) {
      errorMessage = 'Upload failed';
      setState('failed');
    }
  }

  dropzone.addEventListener('click', () => fileInput.click());
  dropzone.addEventListener('dragover', (e) => {
    e.preventDefault();
    dropzone.classList.add('dragging');
  });
  dropzone.addEventListener('dragleave', (e) => {
    e.preventDefault();
    dropzone.classList.remove('dragging');
  });
  dropzone.addEventListener('drop', (e) => {
    e.preventDefault();
    dropzone.classList.remove('dragging');
    if (e.dataTransfer.files.length > 0) {
      uploadFile(e.dataTransfer.files[0]);
    }
  });
  fileInput.addEventListener('change', () => {
    if (fileInput.files.length > 0) {
      uploadFile(fileInput.files[0]);
    }
  });

  // Copy state machine: idle -> copied -> idle (2s timer)
  let copyState = 'idle';
  copyBtn.addEventListener('click', async () => {
    if (copyState !== 'idle' || !result) return;
    await navigator.clipboard.writeText(result.url);
    copyState = 'copied';
    copyBtn.textContent = 'Copied!';
    setTimeout(() => {
      copyState = 'idle';
      copyBtn.textContent = 'Copy Link';
    }, 2000);
  });

  render();
})();
</script>"#;

const COPY_URL_SCRIPT: &str = r#"<script>
(function () {
  // Copy state machine: idle -> copied -> idle (2s timer)
  const btn = document.getElementById('copy-link');
  let state = 'idle';
  btn.addEventListener('click', async () => {
    if (state !== 'idle') return;
    await navigator.clipboard.writeText(window.location.href);
    state = 'copied';
    btn.textContent = 'Copied!';
    setTimeout(() => {
      state = 'idle';
      btn.textContent = 'Copy Link';
    }, 2000);
  });
})();
</script>"#;

fn page_head(title: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n{}\n</head>\n",
        html_escape(title),
        STYLE
    )
}

const HEADER: &str = "<header><h1>TeenyHost</h1></header>\n";

/// The landing/upload page.
pub fn landing_page() -> String {
    let mut page = page_head("TeenyHost - Host & share your files");
    page.push_str("<body>\n");
    page.push_str(HEADER);
    page.push_str(
        r#"<main>
<h2>The simplest way to host &amp; share your files online</h2>
<p class="muted">Drag &amp; drop HTML files, ZIP folders, or PDFs to get an instant shareable link. Maximum size 25MB.</p>
<div class="card">
  <div id="dropzone" class="dropzone">
    <p>Drag &amp; drop a file here, or click to choose one</p>
    <input type="file" id="file-input" class="hidden" accept=".html,.htm,.zip,.pdf">
  </div>
  <div id="uploading" class="hidden">
    <p>Uploading&hellip;</p>
  </div>
  <div id="success" class="hidden">
    <p>Your file is hosted. Share this link:</p>
    <p id="share-link" class="share-link"></p>
    <button id="copy-link" class="btn">Copy Link</button>
  </div>
  <div id="failure" class="hidden">
    <p class="error" id="error-message"></p>
  </div>
</div>
</main>
"#,
    );
    page.push_str(LANDING_SCRIPT);
    page.push_str("</body>\n</html>\n");
    page
}

/// Render the viewer page for a resolved file.
///
/// Branches on extension only: inline iframe for HTML, embed for PDF,
/// download card for ZIP and everything else.
pub fn render_viewer(view: &FileView) -> String {
    let mut page = page_head("TeenyHost - View file");
    page.push_str("<body>\n");
    page.push_str(HEADER);
    page.push_str("<main>\n");

    page.push_str(&format!(
        "<p class=\"file-meta\"><strong>{}</strong> <span class=\"muted\">({})</span></p>\n",
        html_escape(&view.filename),
        html_escape(&format_file_size(view.size)),
    ));

    page.push_str(&render_preview(view));

    page.push_str(&format!(
        "<p style=\"margin-top:1.5rem\">\
         <a class=\"btn\" href=\"{}\" download>Download File</a> \
         <button id=\"copy-link\" class=\"btn\">Copy Link</button></p>\n",
        html_escape(&view.download_url),
    ));

    page.push_str("</main>\n");
    page.push_str(COPY_URL_SCRIPT);
    page.push_str("</body>\n</html>\n");
    page
}

fn render_preview(view: &FileView) -> String {
    if view.is_html() {
        let content = view.content.as_deref().unwrap_or("");
        return format!(
            "<div class=\"card\">\n<p class=\"muted\">HTML Preview \
             &mdash; <a href=\"{url}\" target=\"_blank\" rel=\"noopener noreferrer\">Open in new tab</a></p>\n\
             <iframe class=\"preview-frame\" srcdoc=\"{srcdoc}\" \
             sandbox=\"allow-scripts allow-same-origin\" title=\"HTML Preview\"></iframe>\n</div>\n",
            url = html_escape(&view.download_url),
            srcdoc = html_escape(content),
        );
    }

    match view.extension.as_str() {
        "pdf" => format!(
            "<div class=\"card\">\n<p class=\"muted\">PDF Preview \
             &mdash; <a href=\"{url}\" target=\"_blank\" rel=\"noopener noreferrer\">Open PDF</a></p>\n\
             <embed class=\"preview-frame\" src=\"{url}\" type=\"application/pdf\">\n</div>\n",
            url = html_escape(&view.download_url),
        ),
        "zip" => "<div class=\"card\">\n<h3>ZIP Archive</h3>\n\
             <p class=\"muted\">This is a ZIP archive file. Use the download button below to save it to your device.</p>\n</div>\n"
            .to_string(),
        _ => "<div class=\"card\">\n<h3>File Ready</h3>\n\
             <p class=\"muted\">Your file has been uploaded and is ready to download.</p>\n</div>\n"
            .to_string(),
    }
}

/// The not-found page, returned with a 404 status.
pub fn not_found_page() -> String {
    let mut page = page_head("TeenyHost - File not found");
    page.push_str("<body>\n");
    page.push_str(HEADER);
    page.push_str(
        "<main>\n<div class=\"card\">\n<h2>File not found</h2>\n\
         <p class=\"muted\">The file you are looking for does not exist or the link is wrong.</p>\n\
         <p><a class=\"btn\" href=\"/\">Upload a file</a></p>\n</div>\n</main>\n",
    );
    page.push_str("</body>\n</html>\n");
    page
}
