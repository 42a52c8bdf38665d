//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use precis_core::Envelope;
use serde::Serialize;
use std::io::Write;

/// JSON formatter - one envelope, or an array of labeled envelopes
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    results: Vec<LabeledEnvelope>,
}

/// Envelope tagged with the input it belongs to
#[derive(Debug, Serialize)]
struct LabeledEnvelope {
    #[serde(skip_serializing_if = "Option::is_none")]
    input: Option<String>,
    #[serde(flatten)]
    envelope: Envelope,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            results: Vec::new(),
        }
    }

    fn write_value<T: Serialize>(&mut self, value: &T) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, value)?;
        } else {
            serde_json::to_writer(&mut self.writer, value)?;
        }
        Ok(())
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_result(&mut self, label: Option<&str>, envelope: &Envelope) -> Result<()> {
        self.results.push(LabeledEnvelope {
            input: label.map(str::to_string),
            envelope: envelope.clone(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let results = std::mem::take(&mut self.results);
        match results.as_slice() {
            [single] if single.input.is_none() => self.write_value(&single.envelope)?,
            _ => self.write_value(&results)?,
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
