use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::{
    error::GameError,
    game::{
        self, BoardGenerator, ColorAssigner, PlacementOutcome, RandomWordSelector, WordLocator,
        WordPathValidator,
    },
    models::{Board, ColoredWord, Difficulty, Position},
    vocabulary::Vocabulary,
};

/// Result of a single guess against a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// A new word was found
    Found { word: String },
    /// The last missing word was found; the session is now over
    Completed { word: String, total_seconds: i64 },
    /// The path spells a word that was already found
    Duplicate { word: String },
    /// The path does not spell any of the session's words
    Invalid,
    /// The game already ended (solved or completed)
    Inactive,
}

/// One player's game: board, hidden words and progress
#[derive(Debug, Clone)]
pub struct GameSession {
    pub player_name: String,
    pub difficulty: Difficulty,
    /// Selected words, lowercase, in selection order
    pub words: Vec<String>,
    pub colored_words: Vec<ColoredWord>,
    pub board: Board,
    pub placements: Vec<PlacementOutcome>,
    /// Found words in the order they were found
    pub found_words: Vec<String>,
    pub found_coordinates: HashMap<String, Vec<Position>>,
    pub started_at: DateTime<Utc>,
    pub active: bool,
}

impl GameSession {
    /// Select words, assign colors and generate the board for a new game
    pub fn start(
        player_name: impl Into<String>,
        difficulty: Difficulty,
        vocabulary: &Vocabulary,
    ) -> Result<Self, GameError> {
        Self::start_with(player_name, difficulty, vocabulary, &mut rand::rng())
    }

    pub fn start_with(
        player_name: impl Into<String>,
        difficulty: Difficulty,
        vocabulary: &Vocabulary,
        rng: &mut impl Rng,
    ) -> Result<Self, GameError> {
        let size = difficulty.board_size();
        let count = difficulty.word_count();

        let candidates = vocabulary.fitting(size);
        if candidates.len() < count {
            return Err(GameError::NotEnoughWords {
                requested: count,
                available: candidates.len(),
            });
        }

        let words = RandomWordSelector::select_with(&candidates, count, rng);
        let colored_words = ColorAssigner::assign_with(&words, rng);
        let generated = BoardGenerator::generate_with(&words, size, rng)?;

        Ok(Self {
            player_name: player_name.into(),
            difficulty,
            words,
            colored_words,
            board: generated.board,
            placements: generated.outcomes,
            found_words: Vec::new(),
            found_coordinates: HashMap::new(),
            started_at: Utc::now(),
            active: true,
        })
    }

    /// Check a guess and record it when it is a new find
    pub fn submit(&mut self, coordinates: &[Position]) -> GuessOutcome {
        if !self.active {
            return GuessOutcome::Inactive;
        }

        let Some(word) = WordPathValidator::matched_word(&self.board, coordinates, &self.words)
        else {
            return GuessOutcome::Invalid;
        };
        let word = word.to_string();

        if self.found_words.contains(&word) {
            return GuessOutcome::Duplicate { word };
        }

        self.found_words.push(word.clone());
        self.found_coordinates.insert(word.clone(), coordinates.to_vec());

        if self.is_complete() {
            self.active = false;
            GuessOutcome::Completed {
                word,
                total_seconds: self.elapsed_seconds(),
            }
        } else {
            GuessOutcome::Found { word }
        }
    }

    /// Coordinates of every hidden word; `None` for words missing from the board.
    /// Ends the game.
    pub fn solve(&mut self) -> BTreeMap<String, Option<Vec<Position>>> {
        self.active = false;
        self.words
            .iter()
            .map(|word| (word.clone(), WordLocator::locate(&self.board, word)))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.found_words.len() == self.words.len()
    }

    /// Words the generator could not fit on the board
    pub fn dropped_words(&self) -> Vec<&str> {
        game::dropped_words(&self.placements)
    }

    pub fn elapsed_seconds(&self) -> i64 {
        (Utc::now() - self.started_at).num_seconds()
    }

    pub fn elapsed_millis(&self) -> i64 {
        (Utc::now() - self.started_at).num_milliseconds()
    }
}
