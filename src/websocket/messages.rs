use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{Board, ColoredWord, Difficulty, Position};

/// Messages sent from client to server
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    StartGame {
        name: String,
        #[serde(default)]
        difficulty: Option<Difficulty>,
    },
    SubmitWord {
        coordinates: Vec<Position>,
    },
    Solve,
}

/// Messages sent from server to client
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    GameStarted {
        board: Board,
        words: Vec<ColoredWord>,
        difficulty: Difficulty,
        started_at: DateTime<Utc>,
    },
    WordFound {
        word: String,
        coordinates: Vec<Position>,
        found_words: Vec<String>,
    },
    WordDuplicate {
        word: String,
        message: String,
    },
    WordInvalid {
        message: String,
    },
    GameCompleted {
        total_seconds: i64,
        found_count: usize,
    },
    Solutions {
        /// `null` for words that did not make it onto the board
        solutions: BTreeMap<String, Option<Vec<Position>>>,
        elapsed_ms: i64,
    },
    Error {
        message: String,
    },
}
