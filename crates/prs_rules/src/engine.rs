//! Round engine: owns the session state and the computer's move source.

use super::source::{MoveSource, RandomMoves};
use super::state::{GameState, PendingResult, RoundPhase, RoundReport, Scoreboard};
use super::types::Move;
use tracing::{info, instrument};

/// Drives one game session.
///
/// The presentation layer reads through [`RoundEngine::state`] and calls
/// [`RoundEngine::submit_player_choice`] and
/// [`RoundEngine::acknowledge_result`] in response to the player.
#[derive(Debug, Clone)]
pub struct RoundEngine<S = RandomMoves> {
    state: GameState,
    source: S,
}

impl RoundEngine<RandomMoves> {
    /// Engine with a reproducible random source.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self::new(RandomMoves::seeded(seed))
    }

    /// Engine seeded from the operating system.
    #[instrument]
    pub fn from_entropy() -> Self {
        Self::new(RandomMoves::from_entropy())
    }
}

impl<S: MoveSource> RoundEngine<S> {
    /// Creates an engine, drawing the opening round from `source`.
    #[instrument(skip(source))]
    pub fn new(mut source: S) -> Self {
        let state = GameState::new(&mut source);
        info!(prediction = %state.computer_prediction(), "Game session started");
        Self { state, source }
    }

    /// Current session state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Current phase of the round.
    pub fn phase(&self) -> RoundPhase {
        self.state.phase()
    }

    /// Counter snapshot.
    pub fn scoreboard(&self) -> Scoreboard {
        self.state.scoreboard()
    }

    /// The result as the dialog presents it.
    pub fn pending_result(&self) -> PendingResult {
        self.state.pending_result()
    }

    /// Records the player's pick for this round.
    #[instrument(skip(self))]
    pub fn submit_player_choice(&mut self, choice: Move) {
        self.transition(|state, _| (state.submit_player_choice(choice), ()));
    }

    /// Scores the round and starts the next one.
    #[instrument(skip(self))]
    pub fn acknowledge_result(&mut self) -> RoundReport {
        self.transition(|state, source| state.acknowledge_result(source))
    }

    /// Resets the round without scoring it.
    #[instrument(skip(self))]
    pub fn start_new_round(&mut self) {
        self.transition(|state, source| (state.start_new_round(source), ()));
    }

    fn transition<T>(&mut self, f: impl FnOnce(GameState, &mut S) -> (GameState, T)) -> T {
        let (next, output) = f(self.state.clone(), &mut self.source);
        self.state = next;
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Outcome, ScriptedMoves};

    #[test]
    fn test_engine_round_trip() {
        let source = ScriptedMoves::new([Move::Rock, Move::Scissors, Move::Paper, Move::Paper]);
        let mut engine = RoundEngine::new(source);
        assert_eq!(engine.phase(), RoundPhase::AwaitingPlayerChoice);

        engine.submit_player_choice(Move::Rock);
        assert_eq!(engine.phase(), RoundPhase::AwaitingAcknowledgment);
        assert_eq!(engine.pending_result().outcome(), &Outcome::PlayerWin);

        let report = engine.acknowledge_result();
        assert_eq!(report.outcome(), &Some(Outcome::PlayerWin));
        assert!(*report.lied());
        assert_eq!(engine.phase(), RoundPhase::AwaitingPlayerChoice);
        assert_eq!(engine.state().computer_prediction(), Move::Paper);
        assert_eq!(engine.state().computer_choice(), Move::Paper);
    }

    #[test]
    fn test_seeded_engines_agree() {
        let mut a = RoundEngine::seeded(99);
        let mut b = RoundEngine::seeded(99);
        for pick in Move::ALL.iter().cycle().take(12) {
            a.submit_player_choice(*pick);
            b.submit_player_choice(*pick);
            assert_eq!(a.acknowledge_result(), b.acknowledge_result());
        }
        assert_eq!(a.state(), b.state());
    }

    #[test]
    fn test_start_new_round_skips_scoring() {
        let mut engine = RoundEngine::new(ScriptedMoves::new([Move::Rock, Move::Paper]));
        engine.submit_player_choice(Move::Scissors);
        engine.start_new_round();
        assert_eq!(engine.state().round_number(), 1);
        assert_eq!(engine.scoreboard().scored(), 0);
        assert_eq!(engine.scoreboard().computer_lied, 0);
    }
}
