//! Static file serving module
//!
//! Resolves a request path under the document root, guards against path
//! traversal, and loads file bytes or a directory listing.

use crate::handler::request::RequestContext;
use crate::http::{self, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use std::path::{Path, PathBuf};
use tokio::fs;

const INDEX_FILES: &[&str] = &["index.html", "index.htm"];

/// Characters escaped in listing hrefs, beyond controls. `%` must be
/// escaped too, or a name containing a literal escape sequence decodes to
/// a different name when the link is followed.
const HREF_ESCAPE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'%')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'?')
    .add(b'#');

/// Serve a GET/HEAD request from the document root.
pub async fn serve(ctx: &RequestContext<'_>, root: &Path) -> Response<Full<Bytes>> {
    let Some(decoded) = decode_path(ctx.path) else {
        return http::build_404_response();
    };

    let Some(resolved) = resolve_under_root(root, &decoded) else {
        return http::build_404_response();
    };

    if resolved.is_dir() {
        return serve_directory(ctx, &resolved, &decoded).await;
    }

    serve_file(ctx, &resolved).await
}

/// Percent-decode a URL path. Escapes that decode to invalid UTF-8 cannot
/// name a served file.
fn decode_path(path: &str) -> Option<String> {
    percent_decode_str(path)
        .decode_utf8()
        .ok()
        .map(|s| s.into_owned())
}

/// Map a decoded URL path to a filesystem path under `root`.
///
/// Both sides are canonicalized; anything resolving outside the root is
/// rejected. A path that fails to canonicalize does not exist (404).
fn resolve_under_root(root: &Path, url_path: &str) -> Option<PathBuf> {
    let relative = url_path.trim_start_matches('/');
    let candidate = root.join(relative);

    let root_canonical = match root.canonicalize() {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!(
                "Document root not found or inaccessible '{}': {e}",
                root.display()
            ));
            return None;
        }
    };

    let Ok(candidate_canonical) = candidate.canonicalize() else {
        return None;
    };
    if !candidate_canonical.starts_with(&root_canonical) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {url_path} -> {}",
            candidate_canonical.display()
        ));
        return None;
    }

    Some(candidate_canonical)
}

/// Read a file and build its 200 response.
async fn serve_file(ctx: &RequestContext<'_>, path: &Path) -> Response<Full<Bytes>> {
    match fs::read(path).await {
        Ok(content) => {
            let content_type = mime::resolve_content_type(&path.to_string_lossy());
            http::build_file_response(Bytes::from(content), content_type, ctx.is_head)
        }
        Err(e) => {
            logger::log_error(&format!("Failed to read file '{}': {e}", path.display()));
            http::build_404_response()
        }
    }
}

/// Serve a directory: redirect to the slash form, probe index files, then
/// fall back to a generated listing.
async fn serve_directory(
    ctx: &RequestContext<'_>,
    dir: &Path,
    url_path: &str,
) -> Response<Full<Bytes>> {
    // Relative links inside the listing only resolve correctly when the
    // URL ends with a slash.
    if !ctx.path.ends_with('/') {
        return http::build_redirect_response(&format!("{}/", ctx.path));
    }

    for index in INDEX_FILES {
        let index_path = dir.join(index);
        if index_path.is_file() {
            return serve_file(ctx, &index_path).await;
        }
    }

    match render_listing(dir, url_path).await {
        Ok(html) => http::build_html_response(html, ctx.is_head),
        Err(e) => {
            logger::log_error(&format!(
                "Failed to list directory '{}': {e}",
                dir.display()
            ));
            http::build_404_response()
        }
    }
}

/// Render an HTML listing of a directory's entries, sorted by name, with
/// directories marked by a trailing slash.
async fn render_listing(dir: &Path, url_path: &str) -> std::io::Result<String> {
    let mut names = Vec::new();
    let mut entries = fs::read_dir(dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        let mut name = entry.file_name().to_string_lossy().into_owned();
        if entry.file_type().await?.is_dir() {
            name.push('/');
        }
        names.push(name);
    }
    names.sort();

    let title = format!("Directory listing for {}", escape_html(url_path));
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{title}</title>\n</head>\n<body>\n"));
    html.push_str(&format!("<h1>{title}</h1>\n<hr>\n<ul>\n"));
    for name in &names {
        let href = utf8_percent_encode(name, HREF_ESCAPE);
        html.push_str(&format!(
            "<li><a href=\"{href}\">{}</a></li>\n",
            escape_html(name)
        ));
    }
    html.push_str("</ul>\n<hr>\n</body>\n</html>\n");
    Ok(html)
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
