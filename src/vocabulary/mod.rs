mod embedded;

pub use embedded::DEFAULT_WORDS;

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use tokio::fs;

/// Accepted JSON layouts for a word file
#[derive(Deserialize)]
#[serde(untagged)]
enum WordFile {
    Palabras { palabras: Vec<String> },
    Words { words: Vec<String> },
    List(Vec<String>),
}

/// The full candidate word list, lowercase and free of duplicates.
/// Loaded once and shared read-only by every session.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    words: Vec<String>,
}

impl Vocabulary {
    /// Load the vocabulary from a JSON file (`{"palabras": [...]}`,
    /// `{"words": [...]}` or a bare array) or a text file with one word per line
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read word list {}", path.display()))?;

        let vocabulary = Self::parse(&content)?;
        tracing::info!(
            "Loaded {} words into vocabulary from {}",
            vocabulary.len(),
            path.display()
        );

        Ok(vocabulary)
    }

    /// Parse file contents; anything that does not start like JSON is read line by line
    pub fn parse(content: &str) -> Result<Self> {
        let trimmed = content.trim_start();
        if trimmed.starts_with('{') || trimmed.starts_with('[') {
            let file: WordFile =
                serde_json::from_str(content).context("word list is not valid JSON")?;
            let words = match file {
                WordFile::Palabras { palabras } => palabras,
                WordFile::Words { words } => words,
                WordFile::List(words) => words,
            };
            Ok(Self::from_words(words))
        } else {
            Ok(Self::from_words(content.lines()))
        }
    }

    /// Build from any word source: trims, folds to plain `a-z`, drops blanks and repeats
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let words = words
            .into_iter()
            .filter_map(|word| Self::normalize(word.as_ref()))
            .filter(|word| seen.insert(word.clone()))
            .collect();

        Self { words }
    }

    /// Board cells only hold A-Z, so accents are folded (`montaña` -> `montana`)
    /// and anything else is rejected
    fn normalize(raw: &str) -> Option<String> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        let folded = deunicode::deunicode(trimmed).to_lowercase();
        if folded.is_empty() || !folded.chars().all(|c| c.is_ascii_lowercase()) {
            tracing::warn!("Skipping word '{}': only letters a-z can go on the board", trimmed);
            return None;
        }

        Some(folded)
    }

    /// The built-in Spanish word list
    pub fn builtin() -> Self {
        Self::from_words(DEFAULT_WORDS)
    }

    /// Words short enough to fit on a `size`×`size` board
    pub fn fitting(&self, size: usize) -> Vec<&str> {
        self.words
            .iter()
            .map(String::as_str)
            .filter(|word| word.len() <= size)
            .collect()
    }

    /// Get the number of words in the vocabulary
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if vocabulary is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
