//! Frequency-based extractive text summarization
//!
//! Sentences are scored by how often their informative words occur across the
//! whole text, and the highest-scoring ones are returned in their original
//! order. Text that is already short enough is returned untouched.
//!
//! # Architecture
//!
//! - **Pipeline**: [`tokenizer`], [`stopwords`], [`frequency`], [`scorer`] and
//!   [`selector`], composed by [`Summarizer`]
//! - **Request boundary**: [`SummarizationService`] validates input, runs the
//!   summarizer and computes [`SummaryStats`]
//! - **Configuration**: [`Config`], loadable from TOML
//!
//! # Example
//!
//! ```rust
//! use precis_core::{SummarizationService, SummaryRequest};
//!
//! let service = SummarizationService::new();
//! let text = "Rust is fast and safe. Rust is safe. The cat sat on a mat today. \
//!             Rust compiles code into fast binaries.";
//! let response = service.handle(&SummaryRequest::new(text)).unwrap();
//!
//! assert_eq!(
//!     response.summary,
//!     "Rust is fast and safe. Rust is safe. Rust compiles code into fast binaries."
//! );
//! assert_eq!(response.stats.original_words, 21);
//! assert_eq!(response.stats.compression, 66.7);
//! ```

pub mod config;
pub mod error;
pub mod frequency;
pub mod scorer;
pub mod selector;
pub mod service;
pub mod stats;
pub mod stopwords;
pub mod summarizer;
pub mod tokenizer;

pub use config::{defaults, Config, ConfigBuilder, SentenceCounting};
pub use error::{Error, Result};
pub use service::{Envelope, SummarizationService, SummaryRequest, SummaryResponse};
pub use stats::SummaryStats;
pub use stopwords::StopWords;
pub use summarizer::{summarize, Summarizer, Summary};
