pub mod config;
pub mod error;
pub mod game;
pub mod models;
pub mod routes;
pub mod session;
pub mod utils;
pub mod vocabulary;
pub mod websocket;

use std::sync::Arc;

use axum::{routing::get, Router};
use config::Config;
use dashmap::DashMap;
use session::GameSession;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use uuid::Uuid;
use vocabulary::Vocabulary;

/// Application state shared across all handlers
pub struct AppState {
    pub config: Config,
    pub vocabulary: Vocabulary,
    /// One game per WebSocket connection, keyed by connection id
    pub sessions: DashMap<Uuid, GameSession>,
}

impl AppState {
    pub fn new(config: Config, vocabulary: Vocabulary) -> Self {
        Self {
            config,
            vocabulary,
            sessions: DashMap::new(),
        }
    }
}

/// Build the full router: WebSocket endpoint, API routes and the static client
pub fn build_router(state: Arc<AppState>) -> Router {
    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Serve frontend static files
    let frontend_service = ServeDir::new(&state.config.server.static_dir);

    Router::new()
        // WebSocket endpoint
        .route("/ws", get(websocket::handle_websocket))
        // API routes
        .merge(routes::create_routes())
        .fallback_service(frontend_service)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
