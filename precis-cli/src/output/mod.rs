//! Output formatting module

use anyhow::Result;
use precis_core::Envelope;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format the outcome for one input; `label` is set when several inputs
    /// are processed together
    fn format_result(&mut self, label: Option<&str>, envelope: &Envelope) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
