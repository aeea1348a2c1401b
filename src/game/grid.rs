use rand::Rng;
use serde::Serialize;

use crate::{
    error::GameError,
    models::{Board, Direction, Position},
    utils::letters::random_letter,
};

/// Attempts spent on a single word before it is dropped from the board
pub const MAX_PLACEMENT_ATTEMPTS: usize = 500;

/// Where a word ended up on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub word: String,
    pub start: Position,
    pub direction: Direction,
}

impl Placement {
    /// Cells covered by the word, first letter first
    pub fn cells(&self) -> Vec<Position> {
        (0..self.word.to_uppercase().chars().count())
            .filter_map(|i| self.start.step(self.direction, i))
            .collect()
    }
}

/// Result of trying to embed one word
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PlacementOutcome {
    Placed(Placement),
    /// The retry budget ran out; the word is not on the board
    Dropped { word: String },
}

impl PlacementOutcome {
    pub fn word(&self) -> &str {
        match self {
            PlacementOutcome::Placed(placement) => &placement.word,
            PlacementOutcome::Dropped { word } => word,
        }
    }

    pub fn is_placed(&self) -> bool {
        matches!(self, PlacementOutcome::Placed(_))
    }
}

/// A finished board plus one outcome per requested word, in request order
#[derive(Debug, Clone)]
pub struct GeneratedBoard {
    pub board: Board,
    pub outcomes: Vec<PlacementOutcome>,
}

/// Words from `outcomes` that did not make it onto the board, in request order
pub fn dropped_words(outcomes: &[PlacementOutcome]) -> Vec<&str> {
    outcomes
        .iter()
        .filter(|outcome| !outcome.is_placed())
        .map(PlacementOutcome::word)
        .collect()
}

pub struct BoardGenerator;

impl BoardGenerator {
    /// Generate a `size`×`size` board hiding `words`
    pub fn generate<S: AsRef<str>>(words: &[S], size: usize) -> Result<GeneratedBoard, GameError> {
        Self::generate_with(words, size, &mut rand::rng())
    }

    /// Same as [`BoardGenerator::generate`] with a caller supplied RNG
    pub fn generate_with<S: AsRef<str>>(
        words: &[S],
        size: usize,
        rng: &mut impl Rng,
    ) -> Result<GeneratedBoard, GameError> {
        if size == 0 {
            return Err(GameError::InvalidBoardSize);
        }

        let letters: Vec<Vec<char>> = words
            .iter()
            .map(|word| word.as_ref().to_uppercase().chars().collect())
            .collect();

        if let Some((idx, too_long)) = letters.iter().enumerate().find(|(_, l)| l.len() > size) {
            return Err(GameError::WordTooLong {
                word: words[idx].as_ref().to_string(),
                len: too_long.len(),
                size,
            });
        }

        let mut board = Board::filled_with(size, || random_letter(&mut *rng));
        let mut occupied = vec![vec![false; size]; size];

        // Longest first; sort_by is stable so equal lengths keep request order
        let mut order: Vec<usize> = (0..letters.len()).collect();
        order.sort_by(|&a, &b| letters[b].len().cmp(&letters[a].len()));

        let mut outcomes = Vec::with_capacity(order.len());
        for idx in order {
            let word = words[idx].as_ref().to_string();
            let outcome = match Self::place_word(&mut board, &mut occupied, &letters[idx], rng) {
                Some((start, direction)) => {
                    tracing::debug!(
                        "Placed '{}' at ({}, {}) going {:?}",
                        word,
                        start.row,
                        start.col,
                        direction
                    );
                    PlacementOutcome::Placed(Placement {
                        word,
                        start,
                        direction,
                    })
                }
                None => {
                    tracing::warn!(
                        "Could not place '{}' on a {}x{} board after {} attempts, dropping it",
                        word,
                        size,
                        size,
                        MAX_PLACEMENT_ATTEMPTS
                    );
                    PlacementOutcome::Dropped { word }
                }
            };
            outcomes.push((idx, outcome));
        }

        outcomes.sort_by_key(|(idx, _)| *idx);

        Ok(GeneratedBoard {
            board,
            outcomes: outcomes.into_iter().map(|(_, outcome)| outcome).collect(),
        })
    }

    /// Try random starts and directions until the word fits; returns where it went
    fn place_word(
        board: &mut Board,
        occupied: &mut [Vec<bool>],
        letters: &[char],
        rng: &mut impl Rng,
    ) -> Option<(Position, Direction)> {
        if letters.is_empty() {
            return None;
        }

        let size = board.size();
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let direction = Direction::random(rng);
            let start = Position::new(rng.random_range(0..size), rng.random_range(0..size));

            // The path is a straight line, so checking the end cell bounds it
            if start.offset(direction, letters.len() - 1, size).is_none() {
                continue;
            }
            let cells: Vec<Position> = (0..letters.len())
                .filter_map(|i| start.offset(direction, i, size))
                .collect();

            // Overlap is only allowed where the letters agree
            let conflict = cells.iter().zip(letters).any(|(pos, &letter)| {
                occupied[pos.row][pos.col] && board.get(pos) != Some(letter)
            });
            if conflict {
                continue;
            }

            for (pos, &letter) in cells.iter().zip(letters) {
                board.set(pos, letter);
                occupied[pos.row][pos.col] = true;
            }
            return Some((start, direction));
        }

        None
    }
}
