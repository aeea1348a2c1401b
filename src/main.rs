use std::sync::Arc;

use anyhow::Result;
use sopa_backend::{build_router, config::Config, vocabulary::Vocabulary, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sopa_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting word search server...");

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Load vocabulary
    let vocabulary = match Vocabulary::load(&config.game.words_path).await {
        Ok(vocabulary) if !vocabulary.is_empty() => vocabulary,
        Ok(_) => {
            tracing::warn!(
                "Word list {} is empty. Using the built-in word list.",
                config.game.words_path
            );
            Vocabulary::builtin()
        }
        Err(e) => {
            tracing::warn!("Failed to load word list: {:#}. Using the built-in word list.", e);
            tracing::warn!(
                "Put a word list at {} to choose your own words",
                config.game.words_path
            );
            Vocabulary::builtin()
        }
    };
    tracing::info!(
        "{} words available, {} per {:?} game",
        vocabulary.len(),
        config.game.default_difficulty.word_count(),
        config.game.default_difficulty
    );

    // Create application state
    let state = Arc::new(AppState::new(config.clone(), vocabulary));

    let app = build_router(state);

    // Start server
    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);
    tracing::info!("WebSocket endpoint: ws://{}/ws", addr);
    tracing::info!("Health check: http://{}/health", addr);
    tracing::info!("Game frontend: http://{}/", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
