//! Round invariants over [`GameState`].
//!
//! Each invariant is a zero-sized type. [`RoundInvariants`] groups the three
//! that every transition must preserve.

use super::state::GameState;
use derive_more::Display;

/// A property every reachable [`GameState`] satisfies.
pub trait Invariant {
    /// True if the property holds for `state`.
    fn holds(state: &GameState) -> bool;

    /// What the property says, for logs.
    fn description() -> &'static str;
}

/// A broken invariant, stamped with the round it was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display("{description} (round {round})")]
pub struct InvariantViolation {
    /// Which property failed.
    pub description: &'static str,
    /// `round_number` of the offending state.
    pub round: u32,
}

impl InvariantViolation {
    fn of<I: Invariant>(state: &GameState) -> Option<Self> {
        (!I::holds(state)).then(|| Self {
            description: I::description(),
            round: state.round_number,
        })
    }
}

/// Invariants checked together, reporting every failure at once.
pub trait InvariantSet {
    /// Checks each member against `state`.
    fn check_all(state: &GameState) -> Result<(), Vec<InvariantViolation>>;
}

impl<A: Invariant, B: Invariant, C: Invariant> InvariantSet for (A, B, C) {
    fn check_all(state: &GameState) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            InvariantViolation::of::<A>(state),
            InvariantViolation::of::<B>(state),
            InvariantViolation::of::<C>(state),
        ]
        .into_iter()
        .flatten()
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// At most one score per resolved round.
///
/// Rounds acknowledged without a choice score nothing, so the sum can fall
/// short of the round count but never exceed it.
pub struct ScoresWithinRounds;

impl Invariant for ScoresWithinRounds {
    fn holds(state: &GameState) -> bool {
        state.scoreboard().scored() <= state.round_number
    }

    fn description() -> &'static str {
        "Scored rounds never exceed resolved rounds"
    }
}

/// At most one lie per resolved round.
pub struct LiesWithinRounds;

impl Invariant for LiesWithinRounds {
    fn holds(state: &GameState) -> bool {
        state.computer_lied_count <= state.round_number
    }

    fn description() -> &'static str {
        "Lies never exceed resolved rounds"
    }
}

/// A pending result always has a player choice behind it.
pub struct PendingImpliesChoice;

impl Invariant for PendingImpliesChoice {
    fn holds(state: &GameState) -> bool {
        !state.result_pending || state.player_choice.is_some()
    }

    fn description() -> &'static str {
        "A pending result always carries a player choice"
    }
}

/// Everything a round transition must preserve.
pub type RoundInvariants = (ScoresWithinRounds, LiesWithinRounds, PendingImpliesChoice);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, ScriptedMoves};

    #[test]
    fn test_fresh_state_holds() {
        let state = GameState::with_computer(Move::Rock, Move::Paper);
        assert!(RoundInvariants::check_all(&state).is_ok());
    }

    #[test]
    fn test_holds_across_rounds() {
        let mut source = ScriptedMoves::new([Move::Rock, Move::Paper, Move::Scissors]);
        let mut state = GameState::new(&mut source);
        for (i, pick) in Move::ALL.iter().cycle().take(10).enumerate() {
            if i % 4 != 3 {
                state = state.submit_player_choice(*pick);
            }
            state = state.acknowledge_result(&mut source).0;
            assert!(RoundInvariants::check_all(&state).is_ok());
        }
    }

    #[test]
    fn test_detects_excess_scores() {
        let mut state = GameState::with_computer(Move::Rock, Move::Rock);
        state.player_score = 2;
        state.computer_lied_count = 1;

        let violations = RoundInvariants::check_all(&state).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].description, ScoresWithinRounds::description());
        assert_eq!(violations[1].description, LiesWithinRounds::description());
    }

    #[test]
    fn test_detects_pending_without_choice() {
        let mut state = GameState::with_computer(Move::Rock, Move::Rock);
        state.round_number = 4;
        state.result_pending = true;

        let violations = RoundInvariants::check_all(&state).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].to_string(),
            "A pending result always carries a player choice (round 4)"
        );
    }
}
