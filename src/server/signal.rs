// Signal handling module
//
// SIGINT (Ctrl+C) and SIGTERM both mean "stop accepting and exit cleanly";
// operator interrupts are a normal shutdown path, never an error.

/// Resolve when the operator asks the process to stop
#[cfg(unix)]
pub async fn shutdown_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm = match signal(SignalKind::terminate()) {
        Ok(sigterm) => sigterm,
        Err(e) => {
            crate::logger::log_warning(&format!("Failed to register SIGTERM handler: {e}"));
            let _ = tokio::signal::ctrl_c().await;
            return;
        }
    };

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {}
        _ = sigterm.recv() => {}
    }
}

/// Windows fallback - only handles Ctrl+C
#[cfg(not(unix))]
pub async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
