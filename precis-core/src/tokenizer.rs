//! Sentence and word tokenization
//!
//! Two distinct notions of "word" live here. Scoring uses regex word tokens
//! (runs of Unicode word characters), while statistics count
//! whitespace-separated tokens. They are not interchangeable.

use std::sync::OnceLock;

use regex::Regex;

static TERMINATOR_RE: OnceLock<Regex> = OnceLock::new();
static WORD_RE: OnceLock<Regex> = OnceLock::new();

/// One or more consecutive sentence terminators
fn terminator_re() -> &'static Regex {
    TERMINATOR_RE.get_or_init(|| Regex::new(r"[.!?]+").expect("terminator regex"))
}

fn word_re() -> &'static Regex {
    WORD_RE.get_or_init(|| Regex::new(r"\b\w+\b").expect("word regex"))
}

/// A trimmed sentence and its position in the source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    /// 0-based position among the non-empty sentences
    pub index: usize,
    /// Sentence text without its terminator, original casing kept
    pub text: String,
}

/// Split text into non-empty, trimmed sentences
pub fn split_sentences(text: &str) -> Vec<Sentence> {
    terminator_re()
        .split(text)
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .enumerate()
        .map(|(index, piece)| Sentence {
            index,
            text: piece.to_string(),
        })
        .collect()
}

/// Lowercased word tokens of `text`
pub fn words(text: &str) -> impl Iterator<Item = String> + '_ {
    word_re()
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
}

/// Number of whitespace-separated tokens
pub fn whitespace_word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Number of pieces produced by splitting on terminators, empty pieces included
pub fn count_fragments(text: &str) -> usize {
    terminator_re().split(text).count()
}

/// Number of non-empty sentences
pub fn count_sentences(text: &str) -> usize {
    terminator_re()
        .split(text)
        .filter(|piece| !piece.trim().is_empty())
        .count()
}
