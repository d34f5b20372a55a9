use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pronostico", version, about = "Five-day weather forecast TUI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to config.yaml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Re-run interactive setup
    Init,
    /// Validate config and test the OpenWeatherMap connection
    Check,
    /// Fetch once and print the daily forecast
    Show {
        /// Print JSON instead of text cards
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_show_with_global_flags() {
        let cli = Cli::parse_from(["pronostico", "show", "--json", "-vv", "-c", "my.yaml"]);
        assert!(matches!(cli.command, Some(Commands::Show { json: true })));
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("my.yaml")));
    }

    #[test]
    fn no_subcommand_runs_tui() {
        let cli = Cli::parse_from(["pronostico"]);
        assert!(cli.command.is_none());
    }
}
