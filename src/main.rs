//! PRS Extreme - command-line entry point.

use anyhow::Result;
use clap::Parser;
use prs_extreme::{Cli, Command, GameConfig, ReportFormat};
use tracing::{info, instrument};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GameConfig::load(&cli.config)?;

    match cli.command {
        Command::Play { seed, max_rounds } => {
            prs_extreme::run_tui(config.with_overrides(seed, max_rounds)).await
        }
        Command::Simulate {
            rounds,
            seed,
            format,
        } => run_simulate(config.with_overrides(seed, None), rounds, format),
    }
}

/// Runs a headless session and prints the report to stdout.
#[instrument(skip(config))]
fn run_simulate(config: GameConfig, rounds: u32, format: ReportFormat) -> Result<()> {
    prs_extreme::init_stderr_logging(&config);

    info!(
        rounds,
        seed = ?config.seed(),
        log_filter = %config.log_filter(),
        "Running simulation"
    );
    let report = prs_extreme::run_simulation(rounds, *config.seed());
    println!("{}", report.render(format)?);
    Ok(())
}
