use crate::{
    game::grid::Placement,
    models::{Board, Direction, Position},
};

pub struct WordLocator;

impl WordLocator {
    /// Find the cells spelling `word`, or `None` if it is not on the board
    pub fn locate(board: &Board, word: &str) -> Option<Vec<Position>> {
        Self::locate_placement(board, word).map(|placement| placement.cells())
    }

    /// Exhaustive scan: cells in row-major order, then directions in
    /// [`Direction::ALL`] order. The first match wins.
    pub fn locate_placement(board: &Board, word: &str) -> Option<Placement> {
        let letters: Vec<char> = word.to_uppercase().chars().collect();
        if letters.is_empty() {
            return None;
        }

        let size = board.size();
        for row in 0..size {
            for col in 0..size {
                let start = Position::new(row, col);
                for direction in Direction::ALL {
                    if Self::matches_at(board, start, direction, &letters) {
                        return Some(Placement {
                            word: word.to_string(),
                            start,
                            direction,
                        });
                    }
                }
            }
        }

        None
    }

    fn matches_at(board: &Board, start: Position, direction: Direction, letters: &[char]) -> bool {
        letters.iter().enumerate().all(|(i, &letter)| {
            start
                .offset(direction, i, board.size())
                .and_then(|pos| board.get(&pos))
                == Some(letter)
        })
    }
}
