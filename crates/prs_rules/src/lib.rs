//! Pure round logic for prediction rock-paper-scissors.
//!
//! The computer announces a predicted move, then plays a hidden move that
//! may or may not match. Every round is scored from the player's point of
//! view, and the number of times the computer's move differed from its
//! announcement is tracked alongside the scores.
//!
//! # Example
//!
//! ```
//! use prs_rules::{Move, Outcome, RoundEngine, ScriptedMoves};
//!
//! // Computer announces Rock, secretly plays Scissors.
//! let mut engine = RoundEngine::new(ScriptedMoves::new([Move::Rock, Move::Scissors]));
//! engine.submit_player_choice(Move::Rock);
//! let report = engine.acknowledge_result();
//!
//! assert_eq!(report.outcome(), &Some(Outcome::PlayerWin));
//! assert!(*report.lied());
//! assert_eq!(engine.state().player_score(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod invariants;
mod rules;
mod source;
mod state;
mod types;

pub use engine::RoundEngine;
pub use invariants::{
    Invariant, InvariantSet, InvariantViolation, LiesWithinRounds, PendingImpliesChoice,
    RoundInvariants, ScoresWithinRounds,
};
pub use rules::{beats, resolve_outcome};
pub use source::{MoveSource, RandomMoves, ScriptedMoves};
pub use state::{GameState, PendingResult, RoundPhase, RoundReport, Scoreboard};
pub use types::{Move, Outcome, ParseMoveError};
