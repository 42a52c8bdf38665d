//! Request boundary
//!
//! Wraps the summarizer with input validation and statistics and produces the
//! JSON envelope callers exchange: either `{summary, stats}` or `{error}`.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::stats::SummaryStats;
use crate::summarizer::Summarizer;
use crate::tokenizer;

/// A summarization request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRequest {
    /// Raw text to summarize
    #[serde(default)]
    pub text: String,
    /// Override for the configured sentence count
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_sentences: Option<usize>,
}

impl SummaryRequest {
    /// Create a request with the configured sentence count
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            max_sentences: None,
        }
    }

    /// Override the number of sentences kept
    pub fn with_max_sentences(mut self, count: usize) -> Self {
        self.max_sentences = Some(count);
        self
    }
}

/// A successful summarization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryResponse {
    /// Summary text
    pub summary: String,
    /// Counts for the input and the summary
    pub stats: SummaryStats,
}

/// Response body: a summary or a displayable error
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Envelope {
    /// Successful summarization
    Summary(SummaryResponse),
    /// Failed request
    Error {
        /// Error message
        error: String,
    },
}

impl Envelope {
    /// Whether this envelope carries an error
    pub fn is_error(&self) -> bool {
        matches!(self, Envelope::Error { .. })
    }
}

impl From<Result<SummaryResponse>> for Envelope {
    fn from(result: Result<SummaryResponse>) -> Self {
        match result {
            Ok(response) => Envelope::Summary(response),
            Err(error) => Envelope::Error {
                error: error.to_string(),
            },
        }
    }
}

/// Validates requests, summarizes and computes statistics
#[derive(Debug, Clone, Default)]
pub struct SummarizationService {
    summarizer: Summarizer,
}

impl SummarizationService {
    /// Create a service with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a service with a custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        Ok(Self {
            summarizer: Summarizer::with_config(config)?,
        })
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        self.summarizer.config()
    }

    /// Get the underlying summarizer
    pub fn summarizer(&self) -> &Summarizer {
        &self.summarizer
    }

    /// Handle a request.
    ///
    /// Inputs with fewer than the configured minimum of words are rejected
    /// before the summarizer runs.
    pub fn handle(&self, request: &SummaryRequest) -> Result<SummaryResponse> {
        let config = self.config();
        let text = request.text.trim();

        let found = tokenizer::whitespace_word_count(text);
        if found < config.min_input_words {
            log::info!(
                "rejecting request with {} word(s), {} required",
                found,
                config.min_input_words
            );
            return Err(Error::InsufficientInput {
                found,
                required: config.min_input_words,
            });
        }

        let max_sentences = request.max_sentences.unwrap_or(config.max_sentences);
        if max_sentences == 0 {
            return Err(Error::InvalidInput(
                "max_sentences must be greater than 0".into(),
            ));
        }

        let summary = self.summarizer.summarize_with(text, max_sentences);
        let stats = SummaryStats::compute(text, &summary, config.sentence_counting)?;

        log::info!(
            "summarized {} words into {} ({}%)",
            stats.original_words,
            stats.summary_words,
            stats.compression
        );

        Ok(SummaryResponse { summary, stats })
    }

    /// Handle a request, converting any failure into an error envelope
    pub fn respond(&self, request: &SummaryRequest) -> Envelope {
        let result = self.handle(request);
        if let Err(error) = &result {
            log::warn!("summarization request failed: {error}");
        }
        result.into()
    }
}
