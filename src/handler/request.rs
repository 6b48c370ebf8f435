//! Request entry point
//!
//! Dispatches on HTTP method, hands GET/HEAD to the static file handler,
//! and stamps the CORS headers onto every outgoing response. Requests are
//! independent; nothing is carried from one to the next.

use crate::config::ServerConfig;
use crate::handler::static_files;
use crate::http::{self, cors};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;

/// Request context encapsulating information needed for request processing
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub is_head: bool,
}

/// Main entry point for HTTP request handling.
///
/// Generic over the body type: the body is never read, every request is
/// resolved from its method and path alone.
pub async fn handle_request<B>(
    req: Request<B>,
    cfg: &ServerConfig,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method();
    // uri.path() excludes the query string
    let path = req.uri().path();
    let is_head = *method == Method::HEAD;

    let mut response = match method {
        &Method::GET | &Method::HEAD => {
            let ctx = RequestContext { path, is_head };
            static_files::serve(&ctx, &cfg.root).await
        }
        &Method::OPTIONS => http::build_options_response(),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            http::build_405_response()
        }
    };

    // Every response carries the CORS headers, error responses included
    cors::apply(&mut response);

    let body_bytes = response
        .headers()
        .get("Content-Length")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);
    logger::log_access(method.as_str(), path, response.status().as_u16(), body_bytes);

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::{BodyExt, Empty};
    use std::path::PathBuf;

    fn fixture_root(tag: &str) -> PathBuf {
        let root = std::env::temp_dir().join(format!("staticors-req-{tag}-{}", std::process::id()));
        std::fs::create_dir_all(&root).unwrap();
        root
    }

    fn test_config(root: PathBuf) -> ServerConfig {
        ServerConfig { port: 0, root }
    }

    fn request(method: Method, path: &str) -> Request<Empty<Bytes>> {
        Request::builder()
            .method(method)
            .uri(path)
            .body(Empty::new())
            .unwrap()
    }

    fn assert_cors(resp: &Response<Full<Bytes>>) {
        assert_eq!(resp.headers()["Access-Control-Allow-Origin"], "*");
        assert_eq!(
            resp.headers()["Access-Control-Allow-Methods"],
            "GET, POST, OPTIONS"
        );
        assert_eq!(resp.headers()["Access-Control-Allow-Headers"], "Content-Type");
    }

    #[tokio::test]
    async fn test_get_existing_file() {
        let root = fixture_root("get");
        std::fs::write(root.join("style.css"), "body { color: red }").unwrap();
        let cfg = test_config(root);

        let resp = handle_request(request(Method::GET, "/style.css"), &cfg)
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], "text/css");
        assert_cors(&resp);
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"body { color: red }");
    }

    #[tokio::test]
    async fn test_head_existing_file() {
        let root = fixture_root("head");
        std::fs::write(root.join("data.json"), "{}").unwrap();
        let cfg = test_config(root);

        let resp = handle_request(request(Method::HEAD, "/data.json"), &cfg)
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], "application/json");
        assert_cors(&resp);
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_not_found_carries_cors() {
        let cfg = test_config(fixture_root("missing"));
        let resp = handle_request(request(Method::GET, "/does-not-exist.html"), &cfg)
            .await
            .unwrap();
        assert_eq!(resp.status(), 404);
        assert_cors(&resp);
    }

    #[tokio::test]
    async fn test_options_carries_cors() {
        let cfg = test_config(fixture_root("options"));
        let resp = handle_request(request(Method::OPTIONS, "/anything"), &cfg)
            .await
            .unwrap();
        assert_eq!(resp.status(), 204);
        assert_cors(&resp);
    }

    #[tokio::test]
    async fn test_post_carries_cors() {
        let cfg = test_config(fixture_root("post"));
        let resp = handle_request(request(Method::POST, "/upload"), &cfg)
            .await
            .unwrap();
        assert_eq!(resp.status(), 405);
        assert_cors(&resp);
    }
}
