//! Signal handling module
//!
//! SIGINT (Ctrl+C) and SIGTERM both trigger a graceful stop: the accept
//! loop exits, the process returns 0. No reload or restart signals exist
//! in this server.

use std::sync::Arc;
use tokio::sync::Notify;

use crate::logger;

/// Start the signal listener task (Unix).
#[cfg(unix)]
pub fn start_signal_handler(shutdown: Arc<Notify>) {
    use tokio::signal::unix::{signal, SignalKind};

    tokio::spawn(async move {
        let mut sigterm =
            signal(SignalKind::terminate()).expect("Failed to register SIGTERM handler");
        let mut sigint =
            signal(SignalKind::interrupt()).expect("Failed to register SIGINT handler");

        tokio::select! {
            _ = sigterm.recv() => logger::log_signal("SIGTERM"),
            _ = sigint.recv() => logger::log_signal("SIGINT"),
        }

        shutdown.notify_waiters();
    });
}

/// Windows fallback - only handles Ctrl+C
#[cfg(not(unix))]
pub fn start_signal_handler(shutdown: Arc<Notify>) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            logger::log_signal("Ctrl+C");
            shutdown.notify_waiters();
        }
    });
}
