//! Fixed response header policy
//!
//! Every response leaves the server with the same six CORS/no-cache headers,
//! regardless of method, path, or status. The CORS set lets the externally
//! hosted automation webhook call into the dashboard; the no-cache set makes
//! file edits visible on the next reload.

use hyper::header::{self, HeaderValue};
use hyper::HeaderMap;

const ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
const ALLOW_HEADERS: &str = "Content-Type, Authorization, X-Requested-With";
const NO_CACHE: &str = "no-cache, no-store, must-revalidate";

/// Append the fixed CORS and cache-disabling headers.
///
/// Runs as the last step before a response is returned, on success and error
/// responses alike. Insertion replaces any same-named header set earlier.
pub fn apply_dashboard_headers(headers: &mut HeaderMap) {
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOW_METHODS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOW_HEADERS),
    );
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static(NO_CACHE));
    headers.insert(header::PRAGMA, HeaderValue::from_static("no-cache"));
    headers.insert(header::EXPIRES, HeaderValue::from_static("0"));
}
