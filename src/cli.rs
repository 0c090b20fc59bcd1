//! Command-line interface for prs_extreme.

use crate::ReportFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// PRS Extreme - rock-paper-scissors against a computer that may be lying
#[derive(Parser, Debug)]
#[command(name = "prs_extreme")]
#[command(about = "Rock-paper-scissors against a computer that announces its move", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it is missing)
    #[arg(long, global = true, default_value = "prs_extreme.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Seed for the computer's draws
        #[arg(long)]
        seed: Option<u64>,

        /// End the session after this many rounds
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        max_rounds: Option<u32>,
    },

    /// Play rounds headlessly with a random player and print a report
    Simulate {
        /// Number of rounds to play
        #[arg(short, long, default_value = "100")]
        rounds: u32,

        /// Seed for both the computer and the simulated player
        #[arg(long)]
        seed: Option<u64>,

        /// Report format
        #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_simulate() {
        let cli = Cli::parse_from([
            "prs_extreme",
            "simulate",
            "--rounds",
            "25",
            "--seed",
            "3",
            "--format",
            "json",
        ]);
        match cli.command {
            Command::Simulate {
                rounds,
                seed,
                format,
            } => {
                assert_eq!(rounds, 25);
                assert_eq!(seed, Some(3));
                assert_eq!(format, ReportFormat::Json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert_eq!(cli.config, PathBuf::from("prs_extreme.toml"));
    }

    #[test]
    fn test_max_rounds_must_be_positive() {
        let result = Cli::try_parse_from(["prs_extreme", "play", "--max-rounds", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_config_after_subcommand() {
        let cli = Cli::parse_from(["prs_extreme", "play", "--config", "custom.toml"]);
        assert_eq!(cli.config, PathBuf::from("custom.toml"));
        assert!(matches!(
            cli.command,
            Command::Play {
                seed: None,
                max_rounds: None
            }
        ));
    }
}
