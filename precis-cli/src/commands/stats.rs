//! Stats command implementation

use anyhow::Result;
use clap::Args;
use precis_core::frequency::FrequencyTable;
use precis_core::{stats, tokenizer, Config, SentenceCounting, Summarizer};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{collect_inputs, InputText};

/// Arguments for the stats command
#[derive(Debug, Args)]
pub struct StatsArgs {
    /// Input files or patterns (supports glob); stdin is read when no input is given
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Text to analyze, given inline
    #[arg(short, long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Number of most frequent terms to list
    #[arg(long, value_name = "N", default_value_t = 5)]
    pub top: usize,

    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Count raw sentence fragments, trailing empty piece included
    #[arg(long)]
    pub fragment_count: bool,

    /// Configuration file (stop words, minimum word length, sentence counting)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Statistics for one input text
#[derive(Debug, Serialize)]
pub struct TextStats {
    /// Where the text came from
    pub input: String,
    /// Whitespace-separated words
    pub words: usize,
    /// Sentences
    pub sentences: usize,
    /// Most frequent informative terms
    pub top_terms: Vec<TermCount>,
}

/// A term and its occurrence count
#[derive(Debug, Serialize)]
pub struct TermCount {
    /// Lowercased term
    pub term: String,
    /// Occurrences in the text
    pub count: usize,
}

impl StatsArgs {
    /// Execute the stats command
    pub fn execute(&self) -> Result<()> {
        let config = CliConfig::load(self.config.as_deref())?;
        let summarizer = self.build_summarizer(config.summarizer)?;

        let inputs = collect_inputs(self.text.as_deref(), &self.input)?;
        let results: Vec<TextStats> = inputs
            .iter()
            .map(|input| analyze(&summarizer, input, self.top))
            .collect();

        let mut stdout = std::io::stdout().lock();
        if self.json {
            serde_json::to_writer_pretty(&mut stdout, &results)?;
            writeln!(stdout)?;
        } else {
            for result in &results {
                writeln!(
                    stdout,
                    "{}: {} words, {} sentences",
                    result.input, result.words, result.sentences
                )?;
                for term in &result.top_terms {
                    writeln!(stdout, "  {} ({})", term.term, term.count)?;
                }
            }
        }

        Ok(())
    }

    /// Apply command-line overrides on top of the file configuration
    fn build_summarizer(&self, mut config: Config) -> Result<Summarizer> {
        if self.fragment_count {
            config.sentence_counting = SentenceCounting::Fragments;
        }

        Summarizer::with_config(config).map_err(|e| {
            let message = match e {
                precis_core::Error::Configuration(message) => message,
                other => other.to_string(),
            };
            anyhow::Error::from(CliError::ConfigError(message))
        })
    }
}

/// Count words, sentences and frequent terms the way the summarizer sees them
fn analyze(summarizer: &Summarizer, input: &InputText, top: usize) -> TextStats {
    let config = summarizer.config();
    let table = FrequencyTable::build(
        &input.text,
        summarizer.stop_words(),
        config.min_word_length,
    );

    TextStats {
        input: input.label.clone(),
        words: tokenizer::whitespace_word_count(&input.text),
        sentences: stats::sentence_count(&input.text, config.sentence_counting),
        top_terms: table
            .top_terms(top)
            .into_iter()
            .map(|(term, count)| TermCount {
                term: term.to_string(),
                count,
            })
            .collect(),
    }
}
