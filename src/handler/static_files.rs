//! Static file serving module
//!
//! Resolves request paths against the document root, guards against
//! traversal, picks index files for directory paths, and builds the response
//! with the MIME table applied.

use crate::config::AppState;
use crate::http::{self, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Why a request path could not be served
#[derive(Debug)]
pub enum ServeError {
    /// No file at the resolved path
    NotFound,
    /// Path escapes the document root, or the OS denied access
    Forbidden,
    /// Any other I/O failure during resolution or read
    Io(io::Error),
}

/// Serve a request path from the document root
pub async fn serve(state: &AppState, path: &str, is_head: bool) -> Response<Full<Bytes>> {
    match load_from_root(
        &state.document_root,
        path,
        &state.config.files.index_files,
    )
    .await
    {
        Ok((content, content_type)) => http::build_file_response(content, content_type, is_head),
        Err(ServeError::NotFound) => http::build_404_response(),
        Err(ServeError::Forbidden) => {
            logger::log_warning(&format!("Access denied for path: {path}"));
            http::build_403_response()
        }
        Err(ServeError::Io(e)) => {
            logger::log_error(&format!("Failed to serve '{path}': {e}"));
            http::build_500_response()
        }
    }
}

/// Resolve a request path to file content and its Content-Type.
///
/// The resolved path is canonicalized and checked against the (already
/// canonical) document root, so `..` segments and symlinks cannot escape it.
/// Directory paths are answered with the first index file present.
pub async fn load_from_root(
    root: &Path,
    request_path: &str,
    index_files: &[String],
) -> Result<(Vec<u8>, &'static str), ServeError> {
    let relative = request_path.trim_start_matches('/');
    let joined = root.join(relative);

    let resolved = canonicalize_within(root, &joined).await?;
    let metadata = fs::metadata(&resolved).await.map_err(classify_io_error)?;
    let file_path = if metadata.is_dir() {
        find_index_file(&resolved, index_files)
            .await
            .ok_or(ServeError::NotFound)?
    } else {
        resolved
    };

    let content = fs::read(&file_path).await.map_err(classify_io_error)?;
    let content_type = mime::get_content_type(file_path.extension().and_then(|e| e.to_str()));

    Ok((content, content_type))
}

/// Canonicalize `path` and require it to stay under `root`
async fn canonicalize_within(root: &Path, path: &Path) -> Result<PathBuf, ServeError> {
    let canonical = fs::canonicalize(path).await.map_err(classify_io_error)?;
    if canonical.starts_with(root) {
        Ok(canonical)
    } else {
        Err(ServeError::Forbidden)
    }
}

/// First existing index file inside a directory, if any
async fn find_index_file(dir: &Path, index_files: &[String]) -> Option<PathBuf> {
    for name in index_files {
        let candidate = dir.join(name);
        if fs::metadata(&candidate).await.is_ok_and(|m| m.is_file()) {
            return Some(candidate);
        }
    }
    None
}

fn classify_io_error(e: io::Error) -> ServeError {
    match e.kind() {
        // A path that routes through an existing file (e.g. /index.html/extra)
        // names nothing servable, same as a missing file
        io::ErrorKind::NotFound | io::ErrorKind::NotADirectory => ServeError::NotFound,
        io::ErrorKind::PermissionDenied => ServeError::Forbidden,
        _ => ServeError::Io(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_root(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("dashboard-static-{name}"));
        std::fs::create_dir_all(&dir).expect("create fixture dir");
        dir.canonicalize().expect("canonicalize fixture dir")
    }

    fn index_files() -> Vec<String> {
        vec!["index.html".to_string(), "index.htm".to_string()]
    }

    #[tokio::test]
    async fn reads_existing_file_with_mime_type() {
        let root = fixture_root("read");
        std::fs::write(root.join("app.js"), "console.log(1);").expect("write file");

        let (content, content_type) = load_from_root(&root, "/app.js", &index_files())
            .await
            .expect("file should load");

        assert_eq!(content, b"console.log(1);");
        assert_eq!(content_type, "application/javascript");
    }

    #[tokio::test]
    async fn unknown_extension_gets_octet_stream() {
        let root = fixture_root("unknown");
        std::fs::write(root.join("blob.qqq"), [1, 2, 3]).expect("write file");

        let (_, content_type) = load_from_root(&root, "/blob.qqq", &index_files())
            .await
            .expect("file should load");

        assert_eq!(content_type, "application/octet-stream");
    }

    #[tokio::test]
    async fn directory_without_index_is_not_found() {
        let root = fixture_root("no-index");

        let result = load_from_root(&root, "/", &index_files()).await;

        assert!(matches!(result, Err(ServeError::NotFound)));
    }

    #[tokio::test]
    async fn directory_with_index_serves_it() {
        let root = fixture_root("with-index");
        std::fs::write(root.join("index.html"), "<html>OK</html>").expect("write index");

        let (content, content_type) = load_from_root(&root, "/", &index_files())
            .await
            .expect("index should load");

        assert_eq!(content, b"<html>OK</html>");
        assert_eq!(content_type, "text/html");
    }

    #[tokio::test]
    async fn missing_file_is_not_found() {
        let root = fixture_root("missing");

        let result = load_from_root(&root, "/nope.css", &index_files()).await;

        assert!(matches!(result, Err(ServeError::NotFound)));
    }

    #[tokio::test]
    async fn path_through_existing_file_is_not_found() {
        let root = fixture_root("file-as-dir");
        std::fs::write(root.join("index.html"), "<html>OK</html>").expect("write index");

        let result = load_from_root(&root, "/index.html/extra", &index_files()).await;

        assert!(matches!(result, Err(ServeError::NotFound)));
    }

    #[tokio::test]
    async fn escape_to_existing_file_is_forbidden() {
        let root = fixture_root("escape").join("inner");
        std::fs::create_dir_all(&root).expect("create inner dir");
        let root = root.canonicalize().expect("canonicalize inner dir");

        // Sibling file outside the root that the escape would reach
        std::fs::write(root.join("../outside.txt"), "secret").expect("write sibling");

        let result = load_from_root(&root, "/../outside.txt", &index_files()).await;

        assert!(matches!(result, Err(ServeError::Forbidden)));
    }
}
