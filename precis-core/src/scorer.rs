//! Sentence scoring against a frequency table

use crate::frequency::FrequencyTable;
use crate::stopwords::StopWords;
use crate::tokenizer::{self, Sentence};

/// A sentence with its significance score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredSentence {
    /// Sum of the table counts of the sentence's words
    pub score: usize,
    /// Position in the source sentence sequence
    pub index: usize,
    /// Sentence text, original casing kept
    pub text: String,
}

/// Score a single sentence.
///
/// Only stop words are filtered here. Words shorter than the table's minimum
/// length are looked up anyway and contribute 0.
pub fn score_sentence(text: &str, table: &FrequencyTable, stop_words: &StopWords) -> usize {
    tokenizer::words(text)
        .filter(|word| !stop_words.contains(word))
        .map(|word| table.get(&word))
        .sum()
}

/// Score every sentence, preserving input order
pub fn score_sentences(
    sentences: &[Sentence],
    table: &FrequencyTable,
    stop_words: &StopWords,
) -> Vec<ScoredSentence> {
    sentences
        .iter()
        .map(|sentence| ScoredSentence {
            score: score_sentence(&sentence.text, table, stop_words),
            index: sentence.index,
            text: sentence.text.clone(),
        })
        .collect()
}
