//! Dominance relation and outcome resolution.
//!
//! The relation is cyclic and irreflexive: every move beats exactly one
//! other move and loses to exactly one other move.

use super::types::{Move, Outcome};
use tracing::instrument;

/// Returns true if `a` defeats `b`.
///
/// Paper beats Rock, Rock beats Scissors, Scissors beats Paper.
pub fn beats(a: Move, b: Move) -> bool {
    matches!(
        (a, b),
        (Move::Paper, Move::Rock) | (Move::Rock, Move::Scissors) | (Move::Scissors, Move::Paper)
    )
}

/// Classifies a round from the player's point of view.
#[instrument(level = "trace")]
pub fn resolve_outcome(player: Move, computer: Move) -> Outcome {
    if beats(player, computer) {
        Outcome::PlayerWin
    } else if beats(computer, player) {
        Outcome::ComputerWin
    } else {
        Outcome::Tie
    }
}
