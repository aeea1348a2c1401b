use rand::{seq::SliceRandom, Rng};

use crate::models::ColoredWord;

/// Highlight colors handed to the client, one per hidden word
pub const PALETTE: &[&str] = &[
    "#e6194b", "#3cb44b", "#ffe119", "#4363d8", "#f58231", "#911eb4",
    "#46f0f0", "#f032e6", "#bcf60c", "#fabebe", "#008080", "#e6beff",
];

pub struct ColorAssigner;

impl ColorAssigner {
    /// Pair every word with a palette color, keeping the input order
    pub fn assign<S: AsRef<str>>(words: &[S]) -> Vec<ColoredWord> {
        Self::assign_with(words, &mut rand::rng())
    }

    pub fn assign_with<S: AsRef<str>>(words: &[S], rng: &mut impl Rng) -> Vec<ColoredWord> {
        Self::assign_from(words, PALETTE, rng)
    }

    /// Colors do not repeat until the palette runs out, then cycle
    fn assign_from<S: AsRef<str>>(
        words: &[S],
        palette: &[&str],
        rng: &mut impl Rng,
    ) -> Vec<ColoredWord> {
        let mut order: Vec<usize> = (0..palette.len()).collect();
        order.shuffle(rng);

        words
            .iter()
            .zip(order.iter().cycle())
            .map(|(word, &idx)| ColoredWord {
                text: word.as_ref().to_string(),
                color: palette[idx].to_string(),
            })
            .collect()
    }
}
