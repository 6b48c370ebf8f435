//! Connection handling module
//!
//! Serves one accepted TCP connection over HTTP/1.1 in its own task.

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::sync::Arc;

use crate::config::ServerConfig;
use crate::handler;
use crate::logger;

/// Serve a single connection in a spawned task.
///
/// Wraps the stream in `TokioIo`, serves HTTP/1.1 with keep-alive, and
/// hands every request to the static file handler.
pub fn handle_connection(stream: tokio::net::TcpStream, cfg: Arc<ServerConfig>) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let service = service_fn(move |req| {
            let cfg = Arc::clone(&cfg);
            async move { handler::handle_request(req, &cfg).await }
        });

        if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
            logger::log_connection_error(&err);
        }
    });
}
