// Word-search engine: pure, synchronous, no shared state

pub mod colors;
pub mod grid;
pub mod locator;
pub mod selector;
pub mod validator;

pub use colors::ColorAssigner;
pub use grid::{dropped_words, BoardGenerator, GeneratedBoard, Placement, PlacementOutcome};
pub use locator::WordLocator;
pub use selector::RandomWordSelector;
pub use validator::WordPathValidator;
