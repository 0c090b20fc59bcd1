//! PRS Extreme - rock-paper-scissors where the computer announces its move
//! first and is free to lie about it.
//!
//! # Architecture
//!
//! - **Rules**: the round engine lives in the `prs_rules` crate and is
//!   re-exported here
//! - **TUI**: single-screen terminal front end
//! - **Simulate**: headless sessions with a random player
//! - **Config**: TOML settings with command-line overrides
//!
//! # Example
//!
//! ```
//! use prs_extreme::run_simulation;
//!
//! let report = run_simulation(50, Some(7));
//! assert_eq!(report.scoreboard().rounds, 50);
//! assert_eq!(report.scoreboard().scored(), 50);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod logging;
mod simulate;
mod tui;

// Crate-level exports - Command line
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Logging
pub use logging::{init_file_logging, init_stderr_logging};

// Crate-level exports - Simulation
pub use simulate::{ReportFormat, SimulationReport, run_simulation, simulate_with};

// Crate-level exports - Terminal UI
pub use tui::{App, AppAction, run_tui};

// Crate-level exports - Game rules
pub use prs_rules::{
    GameState, Move, MoveSource, Outcome, PendingResult, RandomMoves, RoundEngine, RoundPhase,
    RoundReport, Scoreboard, ScriptedMoves,
};
