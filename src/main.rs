use std::process::ExitCode;
use std::sync::Arc;

mod config;
mod handler;
mod http;
mod logger;
mod server;

fn main() -> ExitCode {
    let cfg = match config::Config::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            logger::log_error(&format!("Failed to load configuration: {e}"));
            return ExitCode::FAILURE;
        }
    };

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            logger::log_error(&format!("Failed to build Tokio runtime: {e}"));
            return ExitCode::FAILURE;
        }
    };

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> ExitCode {
    let document_root = match cfg.resolve_document_root() {
        Ok(root) => root,
        Err(e) => {
            logger::log_error(&format!("Failed to resolve document root: {e}"));
            return ExitCode::FAILURE;
        }
    };

    let addr = match cfg.socket_addr() {
        Ok(addr) => addr,
        Err(e) => {
            logger::log_error(&e);
            return ExitCode::FAILURE;
        }
    };

    let listener = match server::create_reusable_listener(addr) {
        Ok(listener) => listener,
        Err(e) if e.kind() == std::io::ErrorKind::AddrInUse => {
            logger::log_port_in_use(addr.port());
            return ExitCode::FAILURE;
        }
        Err(e) => {
            logger::log_error(&format!("Failed to bind {addr}: {e}"));
            return ExitCode::FAILURE;
        }
    };

    let state = Arc::new(config::AppState::new(cfg, document_root));
    logger::log_server_start(&addr, &state);

    match server::run_until_shutdown(listener, state).await {
        Ok(()) => {
            logger::log_shutdown();
            ExitCode::SUCCESS
        }
        Err(e) => {
            logger::log_error(&format!("Server error: {e}"));
            ExitCode::FAILURE
        }
    }
}
