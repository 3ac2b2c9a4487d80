//! Unimind - Main Entry Point
//!
//! Configures the server with the therapy proxy routes and the Dioxus app.
//! Uses the dioxus::serve() pattern for dx serve compatibility.

use unimind::app::App;

// Server entry point - NO #[tokio::main], dioxus::serve() creates its own runtime
#[cfg(feature = "server")]
fn main() {
    use clap::Parser;
    use unimind::cli::ServerArgs;
    use unimind::handlers::api_routes;
    use unimind::server::{bootstrap, init_tracing, install_panic_hook};

    install_panic_hook();
    // Initialize tracing BEFORE dioxus::serve
    init_tracing();

    tracing::info!("Starting Unimind...");

    let args = ServerArgs::parse();
    let therapy = match bootstrap(&args) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("{:#}", e);
            std::process::exit(1);
        }
    };

    dioxus::serve(move || {
        let therapy = therapy.clone();
        async move { Ok(dioxus::server::router(App).merge(api_routes(therapy))) }
    });
}

// WASM entry point (browser) - no server feature
#[cfg(all(not(feature = "server"), target_arch = "wasm32"))]
fn main() {
    web_sys::console::log_1(&"[WASM] Unimind - WASM initialized!".into());
    dioxus::launch(App);
}

// Native client (desktop) - no server feature, not WASM
#[cfg(all(not(feature = "server"), not(target_arch = "wasm32")))]
fn main() {
    dioxus::launch(App);
}
