//! Error types for summarization requests

use thiserror::Error;

/// Error type for request-level operations
///
/// The summarization pipeline itself never fails; these errors come from the
/// request boundary, statistics and configuration loading.
#[derive(Debug, Error)]
pub enum Error {
    /// Too few words were submitted to produce a meaningful summary
    #[error("Please provide at least {required} words")]
    InsufficientInput {
        /// Whitespace-separated words found in the input
        found: usize,
        /// Minimum number of words required
        required: usize,
    },

    /// Statistics could not be computed
    #[error("Computation error: {0}")]
    Computation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Infrastructure error (I/O, etc.)
    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

/// Result type for request-level operations
pub type Result<T> = std::result::Result<T, Error>;
