//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        let template = Self::template();

        match &self.output {
            Some(path) => {
                std::fs::write(path, template)
                    .with_context(|| format!("Failed to write to {}", path.display()))?;
                eprintln!("Configuration written to {}", path.display());
                eprintln!("Use it with: precis summarize -c {} -i input.txt", path.display());
            }
            None => print!("{template}"),
        }

        Ok(())
    }

    /// Commented configuration holding the default values
    pub fn template() -> String {
        use precis_core::defaults;

        format!(
            r#"# precis configuration

[summarizer]
# Number of sentences kept in a summary. Inputs with no more sentences than
# this are returned unchanged.
max_sentences = {max_sentences}

# Shortest word (in characters) counted when building term frequencies
min_word_length = {min_word_length}

# Inputs with fewer whitespace-separated words are rejected
min_input_words = {min_input_words}

# How statistics count sentences:
#   "sentences" - non-empty sentences only
#   "fragments" - raw split pieces, so a text ending in a period counts one extra
sentence_counting = "sentences"

# Replace the built-in English stop words (uncomment to use)
# stop_words = ["a", "an", "the"]

[output]
# One of "text", "json", "markdown"
default_format = "text"
pretty_json = true
"#,
            max_sentences = defaults::MAX_SENTENCES,
            min_word_length = defaults::MIN_WORD_LENGTH,
            min_input_words = defaults::MIN_INPUT_WORDS,
        )
    }
}
