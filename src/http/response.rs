//! HTTP response building module
//!
//! Builders for the status codes the dashboard server can answer with. The
//! fixed header set is not applied here; the router appends it to every
//! response in one place.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Build 200 response carrying static file content
pub fn build_file_response(
    data: Vec<u8>,
    content_type: &str,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let content_length = data.len();
    let body = if is_head { Bytes::new() } else { Bytes::from(data) };

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

/// Build the empty 200 response answering a CORS preflight request
pub fn build_preflight_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(200)
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("preflight", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 403 Forbidden response
pub fn build_403_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(403)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("403 Forbidden")))
        .unwrap_or_else(|e| {
            log_build_error("403", &e);
            Response::new(Full::new(Bytes::from("403 Forbidden")))
        })
}

/// Build 404 Not Found response
pub fn build_404_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(404)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("404 Not Found")))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::from("404 Not Found")))
        })
}

/// Build 405 Method Not Allowed response
pub fn build_405_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(405)
        .header("Content-Type", "text/plain")
        .header("Allow", "GET, HEAD, OPTIONS")
        .body(Full::new(Bytes::from("405 Method Not Allowed")))
        .unwrap_or_else(|e| {
            log_build_error("405", &e);
            Response::new(Full::new(Bytes::from("405 Method Not Allowed")))
        })
}

/// Build 500 Internal Server Error response
pub fn build_500_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(500)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("500 Internal Server Error")))
        .unwrap_or_else(|e| {
            log_build_error("500", &e);
            Response::new(Full::new(Bytes::from("500 Internal Server Error")))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
