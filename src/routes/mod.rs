pub mod game;
pub mod health;

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::AppState;

pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", api_routes())
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new().route("/difficulties", get(game::list_difficulties))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Config, vocabulary::Vocabulary};
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    fn app() -> Router {
        let state = Arc::new(AppState::new(Config::default(), Vocabulary::builtin()));
        create_routes().with_state(state)
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_health_check() {
        let (status, body) = get_json("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["active_sessions"], 0);
        assert!(body["vocabulary_words"].as_u64().unwrap() > 0);
    }

    #[tokio::test]
    async fn test_list_difficulties() {
        let (status, body) = get_json("/api/difficulties").await;
        assert_eq!(status, StatusCode::OK);

        let tiers = body.as_array().unwrap();
        assert_eq!(tiers.len(), 3);
        assert_eq!(tiers[0]["difficulty"], "easy");
        assert_eq!(tiers[0]["word_count"], 6);
        assert_eq!(tiers[2]["difficulty"], "hard");
        assert_eq!(tiers[2]["board_size"], 14);
    }
}
