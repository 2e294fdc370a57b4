//! Logger module
//!
//! Stdout/stderr logging for the dashboard server: startup banner,
//! timestamped per-request lines, and error/warning output. Nothing here is
//! persisted and nothing here affects how a request is handled.

use crate::config::AppState;
use chrono::Local;
use hyper::Method;
use std::net::SocketAddr;

pub fn log_server_start(addr: &SocketAddr, state: &AppState) {
    println!("======================================");
    println!("Auditor dashboard server started");
    println!("Listening on: http://{addr}");
    println!("Dashboard: http://{addr}/index.html");
    println!("Serving from: {}", state.document_root.display());
    println!("======================================");
    println!("Features enabled:");
    println!("  - Spreadsheet MIME types (.xlsx, .xls)");
    println!("  - CSV/TSV file support");
    println!("  - CORS headers for webhook calls");
    println!("  - Client-side caching disabled");
    println!("  - Per-request error handling");
    println!("======================================");
    println!("Press Ctrl+C to stop the server\n");
}

/// Per-request access line with a local-time prefix, plus the cosmetic
/// dashboard/webhook annotations.
pub fn log_request(method: &Method, path: &str) {
    let timestamp = Local::now().format("%H:%M:%S");
    println!("  [{timestamp}] {method} {path}");

    match request_annotation(path) {
        Some(Annotation::DashboardLoaded) => println!("    Dashboard loaded"),
        Some(Annotation::ApiCall) => println!("    API call detected: {path}"),
        None => {}
    }
}

/// Cosmetic request classification for the access log.
///
/// Pure pattern match on the path string; never gates request handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Annotation {
    DashboardLoaded,
    ApiCall,
}

pub fn request_annotation(path: &str) -> Option<Annotation> {
    if path.contains("index.html") {
        Some(Annotation::DashboardLoaded)
    } else if path.starts_with("/webhook") || path.contains("auditor") {
        Some(Annotation::ApiCall)
    } else {
        None
    }
}

pub fn log_shutdown() {
    println!("\nServer stopped by operator");
}

pub fn log_port_in_use(port: u16) {
    eprintln!("[ERROR] Port {port} is already in use");
    eprintln!("        Stop the other server or pick a different port");
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_entry_is_annotated() {
        assert_eq!(
            request_annotation("/index.html"),
            Some(Annotation::DashboardLoaded)
        );
        assert_eq!(
            request_annotation("/reports/index.html"),
            Some(Annotation::DashboardLoaded)
        );
    }

    #[test]
    fn webhook_and_auditor_paths_are_annotated() {
        assert_eq!(request_annotation("/webhook/run"), Some(Annotation::ApiCall));
        assert_eq!(
            request_annotation("/data/auditor-report.json"),
            Some(Annotation::ApiCall)
        );
    }

    #[test]
    fn plain_paths_are_not_annotated() {
        assert_eq!(request_annotation("/styles.css"), None);
        assert_eq!(request_annotation("/report.xlsx"), None);
        assert_eq!(request_annotation("/"), None);
    }
}
