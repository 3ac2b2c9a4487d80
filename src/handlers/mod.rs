/// Proxy for the external therapy service
pub mod therapy_proxy;

pub mod health;

use axum::{
    routing::{get, post},
    Extension, Router,
};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

pub use therapy_proxy::{
    continue_conversation_handler, start_conversation_handler, therapy_stats_handler,
    TherapyProxyState,
};

pub use health::health_handler;

/// `/api/*` routes served next to the app
// NOTE: Axum 0.8 uses {param} syntax instead of :param
pub fn api_routes(therapy: TherapyProxyState) -> Router {
    Router::new()
        .route("/api/health", get(health_handler))
        .route("/api/therapy/start", post(start_conversation_handler))
        .route("/api/therapy/continue", post(continue_conversation_handler))
        .route("/api/therapy/stats/{session_id}", get(therapy_stats_handler))
        .layer(Extension(therapy))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}
