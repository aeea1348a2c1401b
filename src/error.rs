/// Errors raised by the word-search engine and the session layer.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GameError {
    #[error("board size must be at least 1")]
    InvalidBoardSize,

    #[error("word '{word}' has {len} letters and cannot fit on a {size}x{size} board")]
    WordTooLong { word: String, len: usize, size: usize },

    #[error("need {requested} words that fit the board but only {available} are available")]
    NotEnoughWords { requested: usize, available: usize },

    #[error("no active game for this connection")]
    SessionNotFound,
}
