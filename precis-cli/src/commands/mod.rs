//! CLI command implementations

use clap::Subcommand;
use precis_core::StopWords;

use crate::error::CliResult;

pub mod generate_config;
pub mod sample;
pub mod stats;
pub mod summarize;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Summarize text from arguments, files, or stdin
    Summarize(summarize::SummarizeArgs),

    /// Show word and sentence statistics without summarizing
    Stats(stats::StatsArgs),

    /// Write a configuration file with default values
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Print the bundled sample article
    Sample,

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,

    /// List the built-in stop words
    StopWords,
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> CliResult<()> {
        match self {
            Commands::Summarize(args) => args.execute(),
            Commands::Stats(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Sample => {
                sample::execute();
                Ok(())
            }
            Commands::List { subcommand } => {
                for line in subcommand.lines() {
                    println!("{line}");
                }
                Ok(())
            }
        }
    }
}

impl ListCommands {
    /// Lines printed for this listing
    pub fn lines(&self) -> Vec<String> {
        match self {
            ListCommands::Formats => vec![
                "text      Summary followed by statistics".to_string(),
                "json      Summary and stats envelope, or error".to_string(),
                "markdown  Markdown section per input".to_string(),
            ],
            ListCommands::StopWords => StopWords::english()
                .sorted()
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }
}
