//! Logger module
//!
//! Console logging for the server: lifecycle messages, per-request access
//! lines, and error/warning output. Info goes to stdout, errors to stderr.

use crate::config::ServerConfig;
use chrono::Local;
use std::net::SocketAddr;

pub fn log_server_start(addr: &SocketAddr, cfg: &ServerConfig) {
    println!("======================================");
    println!("Static file server started");
    println!("Document root: {}", cfg.root.display());
    println!("Listening on: http://{addr}");
    println!("Content-Type overrides:");
    println!("  - .css   -> text/css");
    println!("  - .js    -> application/javascript");
    println!("  - .json  -> application/json");
    println!("  - other  -> extension lookup / application/octet-stream");
    println!("Press Ctrl+C to stop");
    println!("======================================\n");
}

pub fn log_server_stop() {
    println!("Server stopped");
}

pub fn log_signal(name: &str) {
    println!("\n[SIGNAL] {name} received, shutting down");
}

/// One line per handled request, in common-log spirit.
pub fn log_access(method: &str, path: &str, status: u16, body_bytes: usize) {
    let time = Local::now().format("%d/%b/%Y:%H:%M:%S %z");
    println!("[{time}] \"{method} {path}\" {status} {body_bytes}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}
