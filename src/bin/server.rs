//! Standalone API server (without the Dioxus frontend)
//! Serves the therapy proxy and health check for backend development.
//!
//! Run with: PORT=3003 cargo run --bin server

use std::net::SocketAddr;

use clap::Parser;
use tower_http::cors::CorsLayer;

use unimind::cli::ServerArgs;
use unimind::handlers::api_routes;
use unimind::server::{bootstrap, init_tracing};

#[tokio::main]
async fn main() {
    init_tracing();

    tracing::info!("Starting Unimind API Server (standalone)...");

    let args = ServerArgs::parse();
    let therapy = match bootstrap(&args) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("{:#}", e);
            std::process::exit(1);
        }
    };

    let app = api_routes(therapy).layer(CorsLayer::permissive());

    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));
    tracing::info!("Server running on http://{}", addr);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Server error: {}", e);
    }
}
