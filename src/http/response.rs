//! HTTP response building module
//!
//! Builders for the response shapes the server emits. CORS headers are not
//! added here; the request handler stamps them on every response at its
//! single exit point.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Build 200 response for a served file.
pub fn build_file_response(
    data: Bytes,
    content_type: &str,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let content_length = data.len();
    let body = if is_head { Bytes::new() } else { data };

    Response::builder()
        .status(200)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build generic HTML response (directory listings).
pub fn build_html_response(content: String, is_head: bool) -> Response<Full<Bytes>> {
    let content_length = content.len();
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(content)
    };

    Response::builder()
        .status(200)
        .header("Content-Type", "text/html; charset=utf-8")
        .header("Content-Length", content_length)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("HTML", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 404 Not Found response
pub fn build_404_response() -> Response<Full<Bytes>> {
    let body = Bytes::from_static(b"404 Not Found");
    Response::builder()
        .status(404)
        .header("Content-Type", "text/plain")
        .header("Content-Length", body.len())
        .body(Full::new(body.clone()))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(body))
        })
}

/// Build 405 Method Not Allowed response
pub fn build_405_response() -> Response<Full<Bytes>> {
    let body = Bytes::from_static(b"405 Method Not Allowed");
    Response::builder()
        .status(405)
        .header("Content-Type", "text/plain")
        .header("Content-Length", body.len())
        .header("Allow", "GET, HEAD, OPTIONS")
        .body(Full::new(body.clone()))
        .unwrap_or_else(|e| {
            log_build_error("405", &e);
            Response::new(Full::new(body))
        })
}

/// Build OPTIONS response (preflight request)
pub fn build_options_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(204)
        .header("Allow", "GET, HEAD, OPTIONS")
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("OPTIONS", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 301 redirect response (directory requested without trailing slash)
pub fn build_redirect_response(target: &str) -> Response<Full<Bytes>> {
    let body = Bytes::from_static(b"Moved Permanently");
    Response::builder()
        .status(301)
        .header("Location", target)
        .header("Content-Type", "text/plain")
        .header("Content-Length", body.len())
        .body(Full::new(body.clone()))
        .unwrap_or_else(|e| {
            log_build_error("301", &e);
            Response::new(Full::new(body))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn test_file_response() {
        let resp = build_file_response(Bytes::from_static(b"body { }"), "text/css", false);
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], "text/css");
        assert_eq!(resp.headers()["Content-Length"], "8");
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"body { }");
    }

    #[tokio::test]
    async fn test_head_response_has_length_but_no_body() {
        let resp = build_file_response(Bytes::from_static(b"12345"), "text/plain", true);
        assert_eq!(resp.headers()["Content-Length"], "5");
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert!(body.is_empty());
    }

    #[test]
    fn test_error_responses() {
        assert_eq!(build_404_response().status(), 404);
        let resp = build_405_response();
        assert_eq!(resp.status(), 405);
        assert_eq!(resp.headers()["Allow"], "GET, HEAD, OPTIONS");
    }

    #[tokio::test]
    async fn test_error_responses_declare_body_length() {
        for resp in [
            build_404_response(),
            build_405_response(),
            build_redirect_response("/assets/"),
        ] {
            let declared: usize = resp.headers()["Content-Length"]
                .to_str()
                .unwrap()
                .parse()
                .unwrap();
            let body = resp.into_body().collect().await.unwrap().to_bytes();
            assert_eq!(declared, body.len());
            assert!(declared > 0);
        }
    }

    #[test]
    fn test_options_response() {
        let resp = build_options_response();
        assert_eq!(resp.status(), 204);
        assert_eq!(resp.headers()["Allow"], "GET, HEAD, OPTIONS");
    }

    #[test]
    fn test_redirect_response() {
        let resp = build_redirect_response("/assets/");
        assert_eq!(resp.status(), 301);
        assert_eq!(resp.headers()["Location"], "/assets/");
    }
}
