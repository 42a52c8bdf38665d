//! Term frequency table over a whole text

use std::collections::HashMap;

use crate::stopwords::StopWords;
use crate::tokenizer;

/// Occurrence counts of informative words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, usize>,
}

impl FrequencyTable {
    /// Count every word of `text` that is not a stop word and has at least
    /// `min_word_length` characters
    pub fn build(text: &str, stop_words: &StopWords, min_word_length: usize) -> Self {
        let mut counts = HashMap::new();

        for word in tokenizer::words(text) {
            if stop_words.contains(&word) || word.chars().count() < min_word_length {
                continue;
            }
            *counts.entry(word).or_insert(0) += 1;
        }

        Self { counts }
    }

    /// Count for `word`, 0 when it was never counted
    pub fn get(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no word qualified
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Words ordered by count descending, then alphabetically
    pub fn top_terms(&self, limit: usize) -> Vec<(&str, usize)> {
        let mut terms: Vec<(&str, usize)> = self
            .counts
            .iter()
            .map(|(word, count)| (word.as_str(), *count))
            .collect();
        terms.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        terms.truncate(limit);
        terms
    }
}
