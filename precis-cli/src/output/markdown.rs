//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use precis_core::Envelope;
use std::io::Write;

/// Markdown formatter - a section per input with a statistics list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    succeeded: usize,
    failed: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            succeeded: 0,
            failed: 0,
        }
    }
}

impl<W: Write> OutputFormatter for MarkdownFormatter<W> {
    fn format_result(&mut self, label: Option<&str>, envelope: &Envelope) -> Result<()> {
        writeln!(self.writer, "## {}", label.unwrap_or("Summary"))?;
        writeln!(self.writer)?;

        match envelope {
            Envelope::Summary(response) => {
                self.succeeded += 1;
                let stats = &response.stats;
                writeln!(self.writer, "{}", response.summary)?;
                writeln!(self.writer)?;
                writeln!(
                    self.writer,
                    "- **Original:** {} words, {} sentences",
                    stats.original_words, stats.original_sentences
                )?;
                writeln!(
                    self.writer,
                    "- **Summary:** {} words, {} sentences",
                    stats.summary_words, stats.summary_sentences
                )?;
                writeln!(self.writer, "- **Compression:** {:.1}%", stats.compression)?;
            }
            Envelope::Error { error } => {
                self.failed += 1;
                writeln!(self.writer, "> **Error:** {error}")?;
            }
        }

        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Summarized: {}, failed: {}*",
            self.succeeded, self.failed
        )?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use precis_core::{SummaryResponse, SummaryStats};

    #[test]
    fn test_markdown_sections() {
        let mut buffer = Vec::new();
        let mut formatter = MarkdownFormatter::new(&mut buffer);
        formatter
            .format_result(
                None,
                &Envelope::Summary(SummaryResponse {
                    summary: "Kept.".to_string(),
                    stats: SummaryStats {
                        original_words: 12,
                        original_sentences: 4,
                        summary_words: 1,
                        summary_sentences: 1,
                        compression: 8.3,
                    },
                }),
            )
            .unwrap();
        formatter
            .format_result(
                Some("short.txt"),
                &Envelope::Error {
                    error: "Please provide at least 10 words".to_string(),
                },
            )
            .unwrap();
        formatter.finish().unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.starts_with("## Summary\n\nKept.\n"));
        assert!(output.contains("- **Compression:** 8.3%"));
        assert!(output.contains("## short.txt\n\n> **Error:** Please provide at least 10 words"));
        assert!(output.ends_with("---\n*Summarized: 1, failed: 1*\n"));
    }
}
