//! Headless play: a random player against the computer for a fixed number
//! of rounds.

use derive_getters::Getters;
use prs_rules::{MoveSource, Outcome, RandomMoves, RoundEngine, Scoreboard};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Offset between the computer's seed and the simulated player's seed, so
/// the two streams never coincide.
const PLAYER_SEED_OFFSET: u64 = 0x9E37_79B9_7F4A_7C15;

/// How a simulation report is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    /// Human-readable summary.
    #[default]
    Text,
    /// One JSON object.
    Json,
}

/// Summary of a simulated session.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Seed used for the computer, if one was given.
    seed: Option<u64>,
    /// Final counters.
    scoreboard: Scoreboard,
    /// Longest run of consecutive lies.
    longest_lie_streak: u32,
}

impl SimulationReport {
    /// Renders the report in `format`.
    #[instrument(skip(self))]
    pub fn render(&self, format: ReportFormat) -> serde_json::Result<String> {
        match format {
            ReportFormat::Json => serde_json::to_string_pretty(self),
            ReportFormat::Text => Ok(self.render_text()),
        }
    }

    fn render_text(&self) -> String {
        let board = &self.scoreboard;
        let mut out = String::new();
        out.push_str(&format!("Rounds: {}\n", board.rounds));
        out.push_str(&format!(
            "Player: {}   Tied: {}   Computer: {}\n",
            board.player, board.tied, board.computer
        ));
        out.push_str(&format!(
            "Computer Lied: {} ({:.1}%)\n",
            board.computer_lied,
            board.lie_rate()
        ));
        out.push_str(&format!("Longest lie streak: {}\n", self.longest_lie_streak));
        out.push_str(&format!("Player win rate: {:.1}%\n", board.player_win_rate()));
        out
    }
}

/// Plays `rounds` rounds with a uniformly random player.
///
/// With a seed, both the computer and the player are reproducible.
#[instrument]
pub fn run_simulation(rounds: u32, seed: Option<u64>) -> SimulationReport {
    let (engine, player) = match seed {
        Some(seed) => (
            RoundEngine::seeded(seed),
            RandomMoves::seeded(seed.wrapping_add(PLAYER_SEED_OFFSET)),
        ),
        None => (RoundEngine::from_entropy(), RandomMoves::from_entropy()),
    };
    simulate_with(engine, player, rounds, seed)
}

/// Plays `rounds` rounds on `engine`, taking the player's picks from
/// `player`.
#[instrument(skip(engine, player))]
pub fn simulate_with<S: MoveSource, P: MoveSource>(
    mut engine: RoundEngine<S>,
    mut player: P,
    rounds: u32,
    seed: Option<u64>,
) -> SimulationReport {
    info!(rounds, "Starting simulation");

    let mut streak = 0;
    let mut longest_lie_streak = 0;
    for _ in 0..rounds {
        engine.submit_player_choice(player.draw());
        let report = engine.acknowledge_result();

        if *report.lied() {
            streak += 1;
            longest_lie_streak = longest_lie_streak.max(streak);
        } else {
            streak = 0;
        }

        if report.outcome() == &Some(Outcome::PlayerWin) {
            debug!(round = report.round(), "Player took the round");
        }
    }

    let scoreboard = engine.scoreboard();
    info!(
        player = scoreboard.player,
        computer = scoreboard.computer,
        tied = scoreboard.tied,
        lied = scoreboard.computer_lied,
        "Simulation finished"
    );

    SimulationReport {
        seed,
        scoreboard,
        longest_lie_streak,
    }
}
