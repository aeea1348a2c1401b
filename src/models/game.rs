use rand::Rng;
use serde::{Deserialize, Serialize};

/// A cell coordinate on the board, zero based
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Walk `steps` cells along `direction`, returning `None` if the result
    /// leaves a `size`×`size` board
    pub fn offset(&self, direction: Direction, steps: usize, size: usize) -> Option<Position> {
        self.step(direction, steps)
            .filter(|pos| pos.row < size && pos.col < size)
    }

    /// Walk `steps` cells along `direction` with no upper bound; `None` if a
    /// coordinate would go negative
    pub fn step(&self, direction: Direction, steps: usize) -> Option<Position> {
        let (d_row, d_col) = direction.delta();
        let steps = steps as isize;
        let row = self.row as isize + d_row * steps;
        let col = self.col as isize + d_col * steps;

        if row < 0 || col < 0 {
            return None;
        }
        Some(Position::new(row as usize, col as usize))
    }
}

/// One of the 8 straight lines a word can follow on the board
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Right,
    Down,
    DownRight,
    DownLeft,
    Left,
    Up,
    UpLeft,
    UpRight,
}

impl Direction {
    /// Scan order used by the locator; ties between placements resolve to the
    /// earliest entry
    pub const ALL: [Direction; 8] = [
        Direction::Right,
        Direction::Down,
        Direction::DownRight,
        Direction::DownLeft,
        Direction::Left,
        Direction::Up,
        Direction::UpLeft,
        Direction::UpRight,
    ];

    /// Unit step as `(d_row, d_col)`
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::DownRight => (1, 1),
            Direction::DownLeft => (1, -1),
            Direction::Left => (0, -1),
            Direction::Up => (-1, 0),
            Direction::UpLeft => (-1, -1),
            Direction::UpRight => (-1, 1),
        }
    }

    /// Direction from the sign of a row/column difference; `None` for `(0, 0)`
    pub fn from_signs(d_row: isize, d_col: isize) -> Option<Direction> {
        let signs = (d_row.signum(), d_col.signum());
        Self::ALL.into_iter().find(|dir| dir.delta() == signs)
    }

    /// Direction between two cells, based only on the signs of the difference
    pub fn between(from: &Position, to: &Position) -> Option<Direction> {
        Self::from_signs(
            to.row as isize - from.row as isize,
            to.col as isize - from.col as isize,
        )
    }

    pub fn random(rng: &mut impl Rng) -> Direction {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// Square grid of uppercase letters
///
/// Serialized as an array of rows, each an array of one-letter strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Board {
    rows: Vec<Vec<char>>,
}

impl Board {
    /// Build a `size`×`size` board, asking `letter` for every cell in row-major order
    pub fn filled_with(size: usize, mut letter: impl FnMut() -> char) -> Self {
        let rows = (0..size)
            .map(|_| (0..size).map(|_| letter()).collect())
            .collect();
        Self { rows }
    }

    /// Build a board from row strings. Letters are uppercased.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Self {
        let rows = rows
            .iter()
            .map(|row| row.as_ref().to_uppercase().chars().collect())
            .collect();
        Self { rows }
    }

    pub fn size(&self) -> usize {
        self.rows.len()
    }

    pub fn contains(&self, pos: &Position) -> bool {
        self.rows
            .get(pos.row)
            .is_some_and(|row| pos.col < row.len())
    }

    pub fn get(&self, pos: &Position) -> Option<char> {
        self.rows.get(pos.row).and_then(|row| row.get(pos.col)).copied()
    }

    pub(crate) fn set(&mut self, pos: &Position, letter: char) {
        self.rows[pos.row][pos.col] = letter;
    }

    pub fn rows(&self) -> &[Vec<char>] {
        &self.rows
    }

    /// Letters read along `positions`, in order. Positions off the board are skipped.
    pub fn read(&self, positions: &[Position]) -> String {
        positions.iter().filter_map(|pos| self.get(pos)).collect()
    }
}

/// A selected word paired with the color the client highlights it with
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ColoredWord {
    pub text: String,
    pub color: String,
}

/// Named difficulty tiers
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// How many words a session on this tier hides
    pub fn word_count(self) -> usize {
        match self {
            Difficulty::Easy => 6,
            Difficulty::Medium => 8,
            Difficulty::Hard => 12,
        }
    }

    /// Side length of the square board
    pub fn board_size(self) -> usize {
        match self {
            Difficulty::Easy => 10,
            Difficulty::Medium => 12,
            Difficulty::Hard => 14,
        }
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty '{}'", other)),
        }
    }
}
