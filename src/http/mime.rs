//! Content-Type resolution
//!
//! The explicit overrides run before the generic extension lookup: host
//! MIME databases sometimes report CSS as `text/plain` or `text/html`,
//! which browsers refuse to apply as a stylesheet. Pinning CSS/JS/JSON
//! here keeps responses browser-correct no matter what the lookup says.

/// Resolve the Content-Type for a request path.
///
/// Precedence: the `.css`/`.js`/`.json` overrides (case-sensitive suffix
/// match), then the generic extension table, then
/// `application/octet-stream`. Always returns a type.
///
/// # Examples
/// ```
/// assert_eq!(resolve_content_type("/app/style.css"), "text/css");
/// assert_eq!(resolve_content_type("/data.bin"), "application/octet-stream");
/// ```
pub fn resolve_content_type(path: &str) -> &'static str {
    if path.ends_with(".css") {
        return "text/css";
    }
    if path.ends_with(".js") {
        return "application/javascript";
    }
    if path.ends_with(".json") {
        return "application/json";
    }

    let extension = std::path::Path::new(path)
        .extension()
        .and_then(|e| e.to_str());
    lookup_extension(extension).unwrap_or("application/octet-stream")
}

/// Generic extension-to-MIME lookup for types with no override.
fn lookup_extension(extension: Option<&str>) -> Option<&'static str> {
    let mime = match extension? {
        // Text
        "html" | "htm" => "text/html; charset=utf-8",
        "txt" | "md" => "text/plain; charset=utf-8",
        "xml" => "application/xml",

        // WASM
        "wasm" => "application/wasm",

        // Images
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        "webp" => "image/webp",

        // Video
        "mp4" => "video/mp4",
        "webm" => "video/webm",

        // Audio
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",

        // Fonts
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        "ttf" => "font/ttf",
        "otf" => "font/otf",

        // Documents
        "pdf" => "application/pdf",
        "zip" => "application/zip",
        "gz" | "gzip" => "application/gzip",
        "tar" => "application/x-tar",

        _ => return None,
    };
    Some(mime)
}
