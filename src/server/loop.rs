// Server loop module
// Accept loop: serves connections until the shutdown signal fires

use std::sync::Arc;
use tokio::net::TcpListener;

use super::connection::handle_connection;
use super::signal::shutdown_signal;
use crate::config::AppState;
use crate::logger;

/// Accept connections until the operator interrupts the process.
///
/// Accept errors are logged and the loop continues; only the shutdown signal
/// ends it, and that path returns `Ok`.
pub async fn run_until_shutdown(
    listener: TcpListener,
    state: Arc<AppState>,
) -> Result<(), Box<dyn std::error::Error>> {
    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, _peer_addr)) => {
                        handle_connection(stream, Arc::clone(&state));
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            () = &mut shutdown => {
                return Ok(());
            }
        }
    }
}
