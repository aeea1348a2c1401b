use crate::models::{Board, Direction, Position};

pub struct WordPathValidator;

impl WordPathValidator {
    /// Check whether `coordinates` trace a word from `vocabulary` on the board,
    /// read in either direction
    pub fn validate<S: AsRef<str>>(board: &Board, coordinates: &[Position], vocabulary: &[S]) -> bool {
        Self::matched_word(board, coordinates, vocabulary).is_some()
    }

    /// The vocabulary entry spelled by `coordinates`. The word as read is
    /// preferred over its reversal when both are present.
    pub fn matched_word<'v, S: AsRef<str>>(
        board: &Board,
        coordinates: &[Position],
        vocabulary: &'v [S],
    ) -> Option<&'v str> {
        if coordinates.is_empty() {
            return None;
        }

        if !coordinates.iter().all(|pos| board.contains(pos)) {
            return None;
        }

        if coordinates.len() > 1 && !Self::is_straight_path(coordinates) {
            return None;
        }

        let spelled = Self::extract_word(board, coordinates);
        let reversed: String = spelled.chars().rev().collect();

        Self::lookup(vocabulary, &spelled).or_else(|| Self::lookup(vocabulary, &reversed))
    }

    /// Lowercased letters under `coordinates`, in the order given
    pub fn extract_word(board: &Board, coordinates: &[Position]) -> String {
        board.read(coordinates).to_lowercase()
    }

    /// Straight, gap-free and repeat-free, checked as submitted and then from
    /// the other end
    fn is_straight_path(coordinates: &[Position]) -> bool {
        if Self::follows_line(coordinates.iter()) {
            return true;
        }
        Self::follows_line(coordinates.iter().rev())
    }

    /// The direction comes from the first two cells; every later cell must sit
    /// exactly `i` unit steps from the first
    fn follows_line<'a>(mut path: impl Iterator<Item = &'a Position> + Clone) -> bool {
        let Some(first) = path.next() else {
            return false;
        };
        let Some(second) = path.clone().next() else {
            return true;
        };
        let Some(direction) = Direction::between(first, second) else {
            return false;
        };

        path.enumerate()
            .all(|(i, pos)| first.step(direction, i + 1) == Some(*pos))
    }

    fn lookup<'v, S: AsRef<str>>(vocabulary: &'v [S], word: &str) -> Option<&'v str> {
        vocabulary
            .iter()
            .map(|candidate| candidate.as_ref())
            .find(|candidate| *candidate == word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{BoardGenerator, WordLocator};
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn cat_board() -> Board {
        Board::from_rows(&["CAT", "XXX", "XXX"])
    }

    fn path(cells: &[(usize, usize)]) -> Vec<Position> {
        cells.iter().map(|&(row, col)| Position::new(row, col)).collect()
    }

    #[test]
    fn test_forward_word() {
        let coords = path(&[(0, 0), (0, 1), (0, 2)]);
        assert!(WordPathValidator::validate(&cat_board(), &coords, &["cat"]));
    }

    #[test]
    fn test_reversed_submission() {
        let coords = path(&[(0, 2), (0, 1), (0, 0)]);
        assert!(WordPathValidator::validate(&cat_board(), &coords, &["cat"]));
        assert_eq!(
            WordPathValidator::matched_word(&cat_board(), &coords, &["cat"]),
            Some("cat")
        );
    }

    #[test]
    fn test_forward_reading_preferred() {
        let coords = path(&[(0, 2), (0, 1), (0, 0)]);
        let vocabulary = ["cat", "tac"];
        assert_eq!(
            WordPathValidator::matched_word(&cat_board(), &coords, &vocabulary),
            Some("tac")
        );
    }

    #[test]
    fn test_word_not_in_vocabulary() {
        let coords = path(&[(0, 0), (1, 1)]);
        assert!(!WordPathValidator::validate(&cat_board(), &coords, &["cat"]));
    }

    #[test]
    fn test_gap_in_path_is_invalid() {
        let board = Board::from_rows(&["CXT", "XAX", "XXX"]);
        let coords = path(&[(0, 0), (0, 2)]);
        assert!(!WordPathValidator::validate(&board, &coords, &["ct"]));

        let coords = path(&[(0, 0), (1, 1), (0, 2)]);
        assert!(!WordPathValidator::validate(&board, &coords, &["cat"]));
    }

    #[test]
    fn test_l_shape_is_invalid() {
        let board = Board::from_rows(&["CAX", "XTX", "XXX"]);
        let coords = path(&[(0, 0), (0, 1), (1, 1)]);
        assert!(!WordPathValidator::validate(&board, &coords, &["cat", "tac"]));
    }

    #[test]
    fn test_repeated_cell_is_invalid() {
        let board = Board::from_rows(&["AXX", "XXX", "XXX"]);
        let coords = path(&[(0, 0), (0, 0)]);
        assert!(!WordPathValidator::validate(&board, &coords, &["aa"]));
    }

    #[test]
    fn test_empty_and_out_of_bounds() {
        assert!(!WordPathValidator::validate(&cat_board(), &[], &["cat"]));

        let coords = path(&[(0, 1), (0, 2), (0, 3)]);
        assert!(!WordPathValidator::validate(&cat_board(), &coords, &["atx"]));
    }

    #[test]
    fn test_single_cell() {
        let coords = path(&[(0, 1)]);
        assert!(WordPathValidator::validate(&cat_board(), &coords, &["a"]));
        assert!(!WordPathValidator::validate(&cat_board(), &coords, &["cat"]));
    }

    #[test]
    fn test_vertical_and_anti_diagonal() {
        let board = Board::from_rows(&["SXL", "OOX", "LXS"]);
        let down = path(&[(0, 0), (1, 0), (2, 0)]);
        assert!(WordPathValidator::validate(&board, &down, &["sol"]));

        let anti = path(&[(2, 0), (1, 1), (0, 2)]);
        assert!(WordPathValidator::validate(&board, &anti, &["lol"]));
    }

    #[test]
    fn test_validation_is_symmetric_under_reversal() {
        let words = ["gato", "perro", "raton", "oveja"];
        let mut rng = StdRng::seed_from_u64(42);
        let generated = BoardGenerator::generate_with(&words, 10, &mut rng).unwrap();

        for word in words {
            if let Some(mut cells) = WordLocator::locate(&generated.board, word) {
                assert!(WordPathValidator::validate(&generated.board, &cells, &words));
                cells.reverse();
                assert!(WordPathValidator::validate(&generated.board, &cells, &words));
            }
        }

        // Random short paths: validity never depends on submission order
        for _ in 0..500 {
            let len = rng.random_range(1..5);
            let mut cells: Vec<Position> = (0..len)
                .map(|_| Position::new(rng.random_range(0..10), rng.random_range(0..10)))
                .collect();
            let forward = WordPathValidator::validate(&generated.board, &cells, &words);
            cells.reverse();
            let backward = WordPathValidator::validate(&generated.board, &cells, &words);
            assert_eq!(forward, backward);
        }
    }

    #[test]
    fn test_validation_is_idempotent() {
        let coords = path(&[(0, 0), (0, 1), (0, 2)]);
        let board = cat_board();
        let first = WordPathValidator::validate(&board, &coords, &["cat"]);
        let second = WordPathValidator::validate(&board, &coords, &["cat"]);
        assert_eq!(first, second);
        assert_eq!(board, cat_board());
    }
}
