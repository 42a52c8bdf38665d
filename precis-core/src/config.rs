//! Summarizer configuration

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration constants
pub mod defaults {
    /// Number of sentences kept in a summary
    pub const MAX_SENTENCES: usize = 3;

    /// Shortest word (in characters) counted in the frequency table
    pub const MIN_WORD_LENGTH: usize = 3;

    /// Fewest whitespace-separated words a request may contain
    pub const MIN_INPUT_WORDS: usize = 10;
}

/// How sentences are counted when computing statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentenceCounting {
    /// Count non-empty sentences only
    #[default]
    Sentences,
    /// Count raw split fragments, empty ones included.
    ///
    /// A text ending in a terminator yields one trailing empty fragment, so a
    /// rebuilt summary of `n` sentences counts as `n + 1`.
    Fragments,
}

impl fmt::Display for SentenceCounting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SentenceCounting::Sentences => write!(f, "sentences"),
            SentenceCounting::Fragments => write!(f, "fragments"),
        }
    }
}

impl FromStr for SentenceCounting {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "sentences" => Ok(SentenceCounting::Sentences),
            "fragments" => Ok(SentenceCounting::Fragments),
            other => Err(Error::Configuration(format!(
                "unknown sentence counting mode: {other}"
            ))),
        }
    }
}

/// Summarization configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of sentences kept in a summary
    pub max_sentences: usize,
    /// Shortest word counted in the frequency table
    pub min_word_length: usize,
    /// Fewest words a request may contain
    pub min_input_words: usize,
    /// Sentence counting mode for statistics
    pub sentence_counting: SentenceCounting,
    /// Replacement stop-word list (None = built-in English list)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_words: Option<Vec<String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_sentences: defaults::MAX_SENTENCES,
            min_word_length: defaults::MIN_WORD_LENGTH,
            min_input_words: defaults::MIN_INPUT_WORDS,
            sentence_counting: SentenceCounting::default(),
            stop_words: None,
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Parse and validate a TOML configuration
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .map_err(|e| Error::Configuration(format!("invalid TOML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Infrastructure(format!("Failed to read config {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Serialize the configuration to TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::Configuration(e.to_string()))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.max_sentences == 0 {
            return Err(Error::Configuration(
                "max_sentences must be greater than 0".into(),
            ));
        }

        if self.min_word_length == 0 {
            return Err(Error::Configuration(
                "min_word_length must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    max_sentences: Option<usize>,
    min_word_length: Option<usize>,
    min_input_words: Option<usize>,
    sentence_counting: Option<SentenceCounting>,
    stop_words: Option<Vec<String>>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of sentences kept in a summary
    pub fn max_sentences(mut self, count: usize) -> Self {
        self.max_sentences = Some(count);
        self
    }

    /// Set the shortest word counted in the frequency table
    pub fn min_word_length(mut self, chars: usize) -> Self {
        self.min_word_length = Some(chars);
        self
    }

    /// Set the fewest words a request may contain
    pub fn min_input_words(mut self, count: usize) -> Self {
        self.min_input_words = Some(count);
        self
    }

    /// Set the sentence counting mode used by statistics
    pub fn sentence_counting(mut self, mode: SentenceCounting) -> Self {
        self.sentence_counting = Some(mode);
        self
    }

    /// Replace the built-in stop-word list
    pub fn stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stop_words = Some(words.into_iter().map(Into::into).collect());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if let Some(count) = self.max_sentences {
            config.max_sentences = count;
        }

        if let Some(chars) = self.min_word_length {
            config.min_word_length = chars;
        }

        if let Some(count) = self.min_input_words {
            config.min_input_words = count;
        }

        if let Some(mode) = self.sentence_counting {
            config.sentence_counting = mode;
        }

        if self.stop_words.is_some() {
            config.stop_words = self.stop_words;
        }

        config.validate()?;
        Ok(config)
    }
}
