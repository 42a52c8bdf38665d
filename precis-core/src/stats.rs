//! Summary statistics

use serde::{Deserialize, Serialize};

use crate::config::SentenceCounting;
use crate::error::{Error, Result};
use crate::tokenizer;

/// Word and sentence counts for an input and its summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Whitespace-separated words in the input
    pub original_words: usize,
    /// Sentences in the input
    pub original_sentences: usize,
    /// Whitespace-separated words in the summary
    pub summary_words: usize,
    /// Sentences in the summary
    pub summary_sentences: usize,
    /// Summary words as a percentage of input words, one decimal place
    pub compression: f64,
}

impl SummaryStats {
    /// Compute statistics for `original` and its `summary`
    ///
    /// Fails when the original has no words, since the compression ratio is
    /// undefined.
    pub fn compute(original: &str, summary: &str, counting: SentenceCounting) -> Result<Self> {
        let original_words = tokenizer::whitespace_word_count(original);
        let summary_words = tokenizer::whitespace_word_count(summary);

        if original_words == 0 {
            return Err(Error::Computation(
                "original text contains no words".into(),
            ));
        }

        Ok(Self {
            original_words,
            original_sentences: sentence_count(original, counting),
            summary_words,
            summary_sentences: sentence_count(summary, counting),
            compression: compression_ratio(summary_words, original_words),
        })
    }
}

/// Count sentences in `text` according to `counting`
pub fn sentence_count(text: &str, counting: SentenceCounting) -> usize {
    match counting {
        SentenceCounting::Sentences => tokenizer::count_sentences(text),
        SentenceCounting::Fragments => tokenizer::count_fragments(text),
    }
}

/// Percentage rounded to one decimal, ties to even on the exact binary value
fn compression_ratio(summary_words: usize, original_words: usize) -> f64 {
    let percent = summary_words as f64 / original_words as f64 * 100.0;
    format!("{percent:.1}").parse().unwrap_or(percent)
}
