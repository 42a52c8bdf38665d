//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use precis_core::Envelope;
use std::io::Write;

/// Plain text formatter - summary followed by a statistics block
pub struct TextFormatter<W: Write> {
    writer: W,
    written: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_result(&mut self, label: Option<&str>, envelope: &Envelope) -> Result<()> {
        if self.written > 0 {
            writeln!(self.writer)?;
        }
        self.written += 1;

        if let Some(label) = label {
            writeln!(self.writer, "==> {label} <==")?;
        }

        match envelope {
            Envelope::Summary(response) => {
                let stats = &response.stats;
                writeln!(self.writer, "{}", response.summary)?;
                writeln!(self.writer)?;
                writeln!(
                    self.writer,
                    "Original: {} words, {} sentences",
                    stats.original_words, stats.original_sentences
                )?;
                writeln!(
                    self.writer,
                    "Summary: {} words, {} sentences",
                    stats.summary_words, stats.summary_sentences
                )?;
                writeln!(self.writer, "Compression: {:.1}%", stats.compression)?;
            }
            Envelope::Error { error } => {
                writeln!(self.writer, "Error: {error}")?;
            }
        }

        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use precis_core::{SummaryResponse, SummaryStats};

    fn response() -> Envelope {
        Envelope::Summary(SummaryResponse {
            summary: "Kept sentence.".to_string(),
            stats: SummaryStats {
                original_words: 20,
                original_sentences: 4,
                summary_words: 2,
                summary_sentences: 1,
                compression: 10.0,
            },
        })
    }

    #[test]
    fn test_summary_and_stats() {
        let mut buffer = Vec::new();
        let mut formatter = TextFormatter::new(&mut buffer);
        formatter.format_result(None, &response()).unwrap();
        formatter.finish().unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(
            output,
            "Kept sentence.\n\nOriginal: 20 words, 4 sentences\nSummary: 2 words, 1 sentences\nCompression: 10.0%\n"
        );
    }

    #[test]
    fn test_labels_and_errors() {
        let mut buffer = Vec::new();
        let mut formatter = TextFormatter::new(&mut buffer);
        formatter.format_result(Some("a.txt"), &response()).unwrap();
        formatter
            .format_result(
                Some("b.txt"),
                &Envelope::Error {
                    error: "Please provide at least 10 words".to_string(),
                },
            )
            .unwrap();
        formatter.finish().unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.starts_with("==> a.txt <==\nKept sentence."));
        assert!(output.contains("\n\n==> b.txt <==\nError: Please provide at least 10 words\n"));
    }
}
