//! Server module entry point
//!
//! Owns the accept loop plus the listener, connection, and signal plumbing.

pub mod connection;
pub mod listener;
pub mod signal;

// Re-export commonly used functions
pub use listener::create_listener;

use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Notify;

use crate::config::ServerConfig;
use crate::logger;

/// Accept connections until shutdown is signalled.
///
/// Each accepted connection is served on its own task; in-flight requests
/// are abandoned when the loop exits.
pub async fn run(listener: TcpListener, cfg: Arc<ServerConfig>, shutdown: &Notify) {
    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, _peer_addr)) => {
                        connection::handle_connection(stream, Arc::clone(&cfg));
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            () = shutdown.notified() => {
                break;
            }
        }
    }
}
