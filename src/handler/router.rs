//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: access logging, method
//! validation, and dispatch to static file serving. The fixed dashboard
//! headers are appended here so every response carries them, whatever its
//! status.

use crate::config::AppState;
use crate::handler::static_files;
use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    if state.config.logging.access_log {
        logger::log_request(&method, &path);
    }

    Ok(respond(&method, &path, &state).await)
}

/// Produce the response for a method/path pair.
///
/// Split out from `handle_request` so dispatch is testable without a socket
/// or a `hyper::body::Incoming` body.
pub async fn respond(method: &Method, path: &str, state: &AppState) -> Response<Full<Bytes>> {
    let mut response = match *method {
        // Preflight: empty 200, never touches the filesystem
        Method::OPTIONS => http::build_preflight_response(),
        Method::GET => static_files::serve(state, path, false).await,
        Method::HEAD => static_files::serve(state, path, true).await,
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            http::build_405_response()
        }
    };

    // Unconditional post-processing: every response carries the fixed set
    http::apply_dashboard_headers(response.headers_mut());
    response
}
