//! precis - extractive text summarization from the command line

use anyhow::Result;
use clap::Parser;
use precis_cli::commands::Commands;

/// Frequency-based extractive text summarization
#[derive(Debug, Parser)]
#[command(name = "precis", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Suppress log output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Increase verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .init();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.init_logging();

    log::debug!("Command: {:?}", cli.command);
    cli.command.execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_summarize() {
        let cli = Cli::try_parse_from([
            "precis", "summarize", "-t", "Some text", "-n", "2", "-f", "json", "-vv",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Summarize(args) => {
                assert_eq!(args.text.as_deref(), Some("Some text"));
                assert_eq!(args.max_sentences, Some(2));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
