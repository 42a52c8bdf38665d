//! Stop-word filtering
//!
//! The built-in list is a small set of English function words. It is built
//! once and shared read-only by every summarizer in the process.

use std::collections::HashSet;
use std::sync::{Arc, OnceLock};

/// Built-in English stop words
pub const ENGLISH: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "he", "in", "is", "it",
    "of", "on", "that", "the", "to", "was", "were", "will", "with",
];

static ENGLISH_SET: OnceLock<Arc<StopWords>> = OnceLock::new();

/// An immutable set of lowercase stop words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// Shared instance of the built-in English list
    pub fn english() -> Arc<StopWords> {
        ENGLISH_SET
            .get_or_init(|| Arc::new(StopWords::from_list(ENGLISH)))
            .clone()
    }

    /// Build a set from a custom list; entries are lowercased and trimmed
    pub fn from_list<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Whether `word` (already lowercased) is a stop word
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of stop words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Stop words in alphabetical order
    pub fn sorted(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.words.iter().map(String::as_str).collect();
        words.sort_unstable();
        words
    }
}
