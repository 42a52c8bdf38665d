//! Extractive summarizer
//!
//! Pipeline: sentence split, whole-text frequency table, per-sentence
//! scoring, top-K selection, reassembly in source order. Every call is a pure
//! function of its input and the (immutable) configuration.

use std::sync::Arc;

use crate::config::Config;
use crate::error::Result;
use crate::frequency::FrequencyTable;
use crate::scorer::{self, ScoredSentence};
use crate::selector;
use crate::stopwords::StopWords;
use crate::tokenizer;

/// Result of a summarization with the selected sentences attached
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Summary text
    pub text: String,
    /// Selected sentences in source order (empty on passthrough)
    pub selected: Vec<ScoredSentence>,
    /// Number of sentences found in the input
    pub sentence_count: usize,
    /// Whether the input was returned unchanged
    pub passthrough: bool,
}

/// Frequency-based extractive summarizer
#[derive(Debug, Clone)]
pub struct Summarizer {
    config: Config,
    stop_words: Arc<StopWords>,
}

impl Summarizer {
    /// Create a summarizer with the default configuration
    pub fn new() -> Self {
        Self {
            config: Config::default(),
            stop_words: StopWords::english(),
        }
    }

    /// Create a summarizer with a custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;

        let stop_words = match &config.stop_words {
            Some(words) => Arc::new(StopWords::from_list(words)),
            None => StopWords::english(),
        };

        Ok(Self { config, stop_words })
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Stop words in use
    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    /// Summarize using the configured sentence count
    pub fn summarize(&self, text: &str) -> String {
        self.summarize_detailed(text).text
    }

    /// Summarize keeping at most `max_sentences` sentences
    pub fn summarize_with(&self, text: &str, max_sentences: usize) -> String {
        self.summarize_detailed_with(text, max_sentences).text
    }

    /// Summarize using the configured sentence count, keeping selection details
    pub fn summarize_detailed(&self, text: &str) -> Summary {
        self.summarize_detailed_with(text, self.config.max_sentences)
    }

    /// Summarize keeping at most `max_sentences` sentences, with selection details.
    ///
    /// Text with no more than `max_sentences` sentences comes back verbatim.
    pub fn summarize_detailed_with(&self, text: &str, max_sentences: usize) -> Summary {
        let sentences = tokenizer::split_sentences(text);
        let sentence_count = sentences.len();

        if sentence_count <= max_sentences {
            log::debug!(
                "{} sentence(s) within limit of {}, returning input unchanged",
                sentence_count,
                max_sentences
            );
            return Summary {
                text: text.to_string(),
                selected: Vec::new(),
                sentence_count,
                passthrough: true,
            };
        }

        let table = FrequencyTable::build(text, &self.stop_words, self.config.min_word_length);
        let scored = scorer::score_sentences(&sentences, &table, &self.stop_words);
        let selected = selector::select_top(scored, max_sentences);

        log::debug!(
            "selected sentences {:?} of {} using {} distinct terms",
            selected.iter().map(|s| s.index).collect::<Vec<_>>(),
            sentence_count,
            table.len()
        );

        Summary {
            text: selector::reassemble(&selected),
            selected,
            sentence_count,
            passthrough: false,
        }
    }
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Summarize `text` down to at most `max_sentences` sentences with the
/// built-in English stop words
///
/// ```
/// let text = "Rust is fast. Rust is safe. Cats nap. Rust compiles code.";
/// assert_eq!(
///     precis_core::summarize(text, 2),
///     "Rust is fast. Rust compiles code."
/// );
/// ```
pub fn summarize(text: &str, max_sentences: usize) -> String {
    Summarizer::new().summarize_with(text, max_sentences)
}
