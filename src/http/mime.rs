//! MIME type detection module
//!
//! Dashboard override table layered over a generic extension-to-type guess.

/// Get MIME Content-Type based on file extension.
///
/// The dashboard's own asset types are pinned explicitly so the browser and
/// the spreadsheet consumer always receive the exact types they expect; any
/// other extension falls through to the generic table.
pub fn get_content_type(extension: Option<&str>) -> &'static str {
    match extension {
        Some("html") => "text/html",
        Some("js") => "application/javascript",
        Some("css") => "text/css",
        Some("json") => "application/json",
        Some("xlsx" | "xls") => {
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
        }
        other => guess_content_type(other),
    }
}

/// Generic extension-to-type guess, `application/octet-stream` when unknown
fn guess_content_type(extension: Option<&str>) -> &'static str {
    match extension {
        // Text
        Some("htm") => "text/html",
        Some("txt" | "md") => "text/plain; charset=utf-8",
        Some("csv") => "text/csv",
        Some("tsv") => "text/tab-separated-values",
        Some("xml") => "application/xml",

        // Images
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("webp") => "image/webp",

        // Fonts
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",
        Some("otf") => "font/otf",

        // Documents
        Some("pdf") => "application/pdf",
        Some("zip") => "application/zip",
        Some("gz" | "gzip") => "application/gzip",

        // Default
        _ => "application/octet-stream",
    }
}
