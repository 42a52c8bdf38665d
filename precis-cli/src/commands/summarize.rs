//! Summarize command implementation

use anyhow::{Context, Result};
use clap::Args;
use precis_core::{SentenceCounting, SummarizationService, SummaryRequest};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::CliConfig;
use crate::error::CliError;
use crate::commands::sample::SAMPLE_ARTICLE;
use crate::input::{collect_inputs, InputText};
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};

/// Arguments for the summarize command
#[derive(Debug, Args)]
pub struct SummarizeArgs {
    /// Input files or patterns (supports glob); stdin is read when no input is given
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Text to summarize, given inline
    #[arg(short, long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Summarize the bundled sample article
    #[arg(long, conflicts_with = "text")]
    pub sample: bool,

    /// Maximum number of sentences in the summary
    #[arg(short = 'n', long, value_name = "N")]
    pub max_sentences: Option<usize>,

    /// Minimum number of words an input must contain
    #[arg(long, value_name = "N")]
    pub min_words: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Count raw sentence fragments in statistics, trailing empty piece included
    #[arg(long)]
    pub fragment_count: bool,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Summary followed by statistics
    Text,
    /// JSON envelope with summary and stats, or error
    Json,
    /// Markdown section per input
    Markdown,
}

impl SummarizeArgs {
    /// Execute the summarize command
    pub fn execute(&self) -> Result<()> {
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load(self.config.as_deref())?;
        let format = self.format.unwrap_or(config.output.default_format);
        let service = self.build_service(config.summarizer)?;

        let inputs = self.inputs()?;
        log::info!("Summarizing {} input(s)", inputs.len());

        let writer = open_writer(self.output.as_deref())?;
        let mut formatter: Box<dyn OutputFormatter> = match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, config.output.pretty_json)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        };

        let labeled = inputs.len() > 1;
        let mut failures = 0;

        for input in inputs {
            let envelope = service.respond(&SummaryRequest::new(input.text));
            if envelope.is_error() {
                failures += 1;
            }
            let label = labeled.then_some(input.label.as_str());
            formatter.format_result(label, &envelope)?;
        }

        formatter.finish()?;

        if failures > 0 {
            return Err(CliError::SummarizationFailed(failures).into());
        }

        Ok(())
    }

    fn inputs(&self) -> Result<Vec<InputText>> {
        if !self.sample {
            return collect_inputs(self.text.as_deref(), &self.input);
        }

        let mut inputs = collect_inputs(Some(SAMPLE_ARTICLE), &self.input)?;
        inputs[0].label = "<sample>".to_string();
        Ok(inputs)
    }

    /// Apply command-line overrides on top of the file configuration
    fn build_service(&self, mut config: precis_core::Config) -> Result<SummarizationService> {
        if let Some(max) = self.max_sentences {
            config.max_sentences = max;
        }
        if let Some(min) = self.min_words {
            config.min_input_words = min;
        }
        if self.fragment_count {
            config.sentence_counting = SentenceCounting::Fragments;
        }

        SummarizationService::with_config(config).map_err(|e| {
            let message = match e {
                precis_core::Error::Configuration(message) => message,
                other => other.to_string(),
            };
            anyhow::Error::from(CliError::ConfigError(message))
        })
    }
}

/// Open the output destination
pub(crate) fn open_writer(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}
