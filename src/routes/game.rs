use axum::Json;
use serde::Serialize;

use crate::models::Difficulty;

#[derive(Debug, Serialize)]
pub struct DifficultyInfo {
    pub difficulty: Difficulty,
    pub word_count: usize,
    pub board_size: usize,
}

/// List the difficulty tiers a client can start a game with
pub async fn list_difficulties() -> Json<Vec<DifficultyInfo>> {
    Json(
        Difficulty::ALL
            .into_iter()
            .map(|difficulty| DifficultyInfo {
                difficulty,
                word_count: difficulty.word_count(),
                board_size: difficulty.board_size(),
            })
            .collect(),
    )
}
