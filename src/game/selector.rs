use rand::{seq::index, Rng};

pub struct RandomWordSelector;

impl RandomWordSelector {
    /// Draw `count` distinct words, or every word when the vocabulary is smaller
    pub fn select<S: AsRef<str>>(vocabulary: &[S], count: usize) -> Vec<String> {
        Self::select_with(vocabulary, count, &mut rand::rng())
    }

    /// Uniform sampling without replacement; the result is in draw order
    pub fn select_with<S: AsRef<str>>(
        vocabulary: &[S],
        count: usize,
        rng: &mut impl Rng,
    ) -> Vec<String> {
        let amount = count.min(vocabulary.len());
        index::sample(rng, vocabulary.len(), amount)
            .into_iter()
            .map(|i| vocabulary[i].as_ref().to_string())
            .collect()
    }
}
