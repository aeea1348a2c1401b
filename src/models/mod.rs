pub mod game;

pub use game::{
    // Board types
    Board, Direction, Position,
    // Session presentation types
    ColoredWord, Difficulty,
};
