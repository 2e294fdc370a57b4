// Connection handling module
// Serves HTTP/1.1 requests on a single accepted TCP connection

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::sync::Arc;

use crate::config::AppState;
use crate::handler;
use crate::logger;

/// Serve an accepted connection on a spawned task.
///
/// One task per connection; no counters, limits, or timeouts beyond the
/// stack's defaults. Connection-level errors are logged and the task ends.
pub fn handle_connection(stream: tokio::net::TcpStream, state: Arc<AppState>) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let conn = http1::Builder::new().keep_alive(true).serve_connection(
            io,
            service_fn(move |req| {
                let state = Arc::clone(&state);
                async move { handler::handle_request(req, state).await }
            }),
        );

        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }
    });
}
