//! Request handler module
//!
//! Method dispatch and static file serving over the document root.

pub mod request;
pub mod static_files;

// Re-export main entry point
pub use request::handle_request;
