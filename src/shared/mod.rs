pub mod constants;
pub mod errors;
pub mod services;
pub mod utils;

// Server-only logging module
#[cfg(not(target_arch = "wasm32"))]
pub mod logging;

// Available in fullstack mode (both client and server)
pub mod hooks;
pub mod state;
