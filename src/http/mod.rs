//! HTTP protocol layer module
//!
//! Response builders, MIME detection, and the fixed dashboard header set,
//! decoupled from request dispatch.

pub mod headers;
pub mod mime;
pub mod response;

// Re-export commonly used functions
pub use headers::apply_dashboard_headers;
pub use response::{
    build_403_response, build_404_response, build_405_response, build_500_response,
    build_file_response, build_preflight_response,
};
