// Server module entry point
// Listener creation, connection handling, signals, and the accept loop

pub mod connection;
pub mod listener;
pub mod signal;

// Rust does not allow `loop` as a module name (keyword), so use server_loop
#[path = "loop.rs"]
pub mod server_loop;

// Re-export commonly used functions
pub use listener::create_reusable_listener;
pub use server_loop::run_until_shutdown;
