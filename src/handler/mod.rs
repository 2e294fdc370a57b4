//! Request handler module
//!
//! Dispatches incoming requests: preflight handling, method validation, and
//! static file serving under the document root.

pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::handle_request;
