//! Game state aggregate and its round transitions.
//!
//! Transitions consume the state and return the next one. Nothing else in
//! the crate mutates a [`GameState`].

use super::rules::resolve_outcome;
use super::source::MoveSource;
use super::types::{Move, Outcome};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Where the current round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Waiting for the player to pick a move.
    AwaitingPlayerChoice,
    /// A result is on screen, waiting to be dismissed.
    AwaitingAcknowledgment,
}

/// Snapshot of the session counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Rounds the player won.
    pub player: u32,
    /// Rounds the computer won.
    pub computer: u32,
    /// Rounds that ended level.
    pub tied: u32,
    /// Rounds where the computer's move differed from its prediction.
    pub computer_lied: u32,
    /// Rounds resolved so far.
    pub rounds: u32,
}

impl Scoreboard {
    /// Rounds that actually changed a score.
    pub fn scored(&self) -> u32 {
        self.player + self.computer + self.tied
    }

    /// Player wins as a percentage of scored rounds.
    pub fn player_win_rate(&self) -> f64 {
        percent(self.player, self.scored())
    }

    /// Lies as a percentage of resolved rounds.
    pub fn lie_rate(&self) -> f64 {
        percent(self.computer_lied, self.rounds)
    }
}

fn percent(part: u32, whole: u32) -> f64 {
    if whole == 0 {
        0.0
    } else {
        f64::from(part) * 100.0 / f64::from(whole)
    }
}

/// What the result dialog shows while a round awaits acknowledgment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, new)]
pub struct PendingResult {
    /// Outcome as displayed.
    ///
    /// An absent player choice is evaluated as [`Move::FIRST`], so this is
    /// never missing even when nothing was picked.
    outcome: Outcome,
    /// The player's actual choice, if any.
    player: Option<Move>,
    /// The computer's revealed move.
    computer: Move,
}

impl PendingResult {
    /// Player choice label, `"NA"` when nothing was picked.
    pub fn player_label(&self) -> &'static str {
        self.player.map(Move::label).unwrap_or("NA")
    }
}

/// Record of a round that has just been acknowledged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, new, Serialize, Deserialize)]
pub struct RoundReport {
    /// Rounds resolved including this one.
    round: u32,
    /// The player's choice, if one was made.
    player: Option<Move>,
    /// The computer's hidden move.
    computer: Move,
    /// The move the computer announced.
    prediction: Move,
    /// Scored outcome. `None` when the round resolved without a choice.
    outcome: Option<Outcome>,
    /// True if the computer's move differed from its announcement.
    lied: bool,
}

/// Complete state of one game session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) player_choice: Option<Move>,
    pub(crate) computer_choice: Move,
    pub(crate) computer_prediction: Move,
    pub(crate) player_score: u32,
    pub(crate) computer_score: u32,
    pub(crate) tied_score: u32,
    pub(crate) computer_lied_count: u32,
    pub(crate) round_number: u32,
    pub(crate) result_pending: bool,
}

impl GameState {
    /// Starts a session, drawing the opening prediction and then the
    /// opening hidden move from `source`.
    ///
    /// Both opening draws come from [`Move::OPENING`]; every later round
    /// draws from all three moves.
    #[instrument(skip(source))]
    pub fn new(source: &mut impl MoveSource) -> Self {
        let prediction = source.draw_from(&Move::OPENING);
        let choice = source.draw_from(&Move::OPENING);
        Self::with_computer(prediction, choice)
    }

    /// Starts a session with a known opening prediction and hidden move.
    #[instrument]
    pub fn with_computer(prediction: Move, choice: Move) -> Self {
        Self {
            player_choice: None,
            computer_choice: choice,
            computer_prediction: prediction,
            player_score: 0,
            computer_score: 0,
            tied_score: 0,
            computer_lied_count: 0,
            round_number: 0,
            result_pending: false,
        }
    }

    /// The player's choice for the current round.
    pub fn player_choice(&self) -> Option<Move> {
        self.player_choice
    }

    /// The computer's hidden move for the current round.
    pub fn computer_choice(&self) -> Move {
        self.computer_choice
    }

    /// The move the computer announced for the current round.
    pub fn computer_prediction(&self) -> Move {
        self.computer_prediction
    }

    /// Rounds won by the player.
    pub fn player_score(&self) -> u32 {
        self.player_score
    }

    /// Rounds won by the computer.
    pub fn computer_score(&self) -> u32 {
        self.computer_score
    }

    /// Rounds tied.
    pub fn tied_score(&self) -> u32 {
        self.tied_score
    }

    /// Rounds where the computer did not play what it announced.
    pub fn computer_lied_count(&self) -> u32 {
        self.computer_lied_count
    }

    /// Rounds resolved so far.
    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    /// True while a result is waiting to be shown and dismissed.
    pub fn result_pending(&self) -> bool {
        self.result_pending
    }

    /// Current phase of the round.
    pub fn phase(&self) -> RoundPhase {
        if self.result_pending {
            RoundPhase::AwaitingAcknowledgment
        } else {
            RoundPhase::AwaitingPlayerChoice
        }
    }

    /// Counter snapshot.
    pub fn scoreboard(&self) -> Scoreboard {
        Scoreboard {
            player: self.player_score,
            computer: self.computer_score,
            tied: self.tied_score,
            computer_lied: self.computer_lied_count,
            rounds: self.round_number,
        }
    }

    /// The result as the dialog presents it.
    pub fn pending_result(&self) -> PendingResult {
        let player = self.player_choice.unwrap_or(Move::FIRST);
        PendingResult::new(
            resolve_outcome(player, self.computer_choice),
            self.player_choice,
            self.computer_choice,
        )
    }

    /// Records the player's move. Picking again before acknowledgment
    /// replaces the earlier pick.
    #[must_use]
    #[instrument(skip(self), fields(round = self.round_number))]
    pub fn submit_player_choice(mut self, choice: Move) -> Self {
        if let Some(previous) = self.player_choice {
            debug!(%previous, %choice, "Replacing unacknowledged choice");
        }
        self.player_choice = Some(choice);
        self.result_pending = true;
        self.debug_check();
        self
    }

    /// Scores the current round and starts the next one.
    ///
    /// With no player choice the scores are left alone; the lie counter
    /// and round number still advance.
    #[must_use]
    #[instrument(skip(self, source), fields(round = self.round_number))]
    pub fn acknowledge_result(mut self, source: &mut impl MoveSource) -> (Self, RoundReport) {
        let outcome = self
            .player_choice
            .map(|player| resolve_outcome(player, self.computer_choice));

        match outcome {
            Some(Outcome::PlayerWin) => self.player_score += 1,
            Some(Outcome::ComputerWin) => self.computer_score += 1,
            Some(Outcome::Tie) => self.tied_score += 1,
            None => debug!("Acknowledged without a player choice, scores unchanged"),
        }

        let lied = self.computer_choice != self.computer_prediction;
        if lied {
            self.computer_lied_count += 1;
        }

        let player = self.player_choice;
        let computer = self.computer_choice;
        let prediction = self.computer_prediction;

        let next = self.start_new_round(source);

        info!(
            round = next.round_number,
            player = ?player,
            %computer,
            %prediction,
            outcome = ?outcome,
            lied,
            "Round resolved"
        );

        let report = RoundReport::new(next.round_number, player, computer, prediction, outcome, lied);
        (next, report)
    }

    /// Advances the round counter, clears the player's pick and any pending
    /// result, then redraws the computer's prediction and hidden move.
    #[must_use]
    #[instrument(skip(self, source), fields(round = self.round_number))]
    pub fn start_new_round(mut self, source: &mut impl MoveSource) -> Self {
        self.round_number += 1;
        self.player_choice = None;
        self.result_pending = false;
        self.computer_prediction = source.draw();
        self.computer_choice = source.draw();
        debug!(
            round = self.round_number,
            prediction = %self.computer_prediction,
            "New round started"
        );
        self.debug_check();
        self
    }

    #[cfg(debug_assertions)]
    fn debug_check(&self) {
        use super::invariants::{InvariantSet, RoundInvariants};

        if let Err(violations) = RoundInvariants::check_all(self) {
            for violation in violations {
                tracing::warn!(%violation, "Invariant violated");
            }
        }
    }

    #[cfg(not(debug_assertions))]
    fn debug_check(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{RandomMoves, ScriptedMoves};

    #[test]
    fn test_new_draws_prediction_then_choice() {
        let mut source = ScriptedMoves::new([Move::Rock, Move::Scissors]);
        let state = GameState::new(&mut source);
        assert_eq!(state.computer_prediction(), Move::Rock);
        assert_eq!(state.computer_choice(), Move::Scissors);
        assert_eq!(state.round_number(), 0);
        assert_eq!(state.player_choice(), None);
        assert_eq!(state.phase(), RoundPhase::AwaitingPlayerChoice);
        assert_eq!(state.scoreboard(), Scoreboard::default());
    }

    #[test]
    fn test_opening_never_draws_scissors() {
        for seed in 0..200 {
            let mut source = RandomMoves::seeded(seed);
            let state = GameState::new(&mut source);
            assert!(Move::OPENING.contains(&state.computer_prediction()));
            assert!(Move::OPENING.contains(&state.computer_choice()));
        }
    }

    #[test]
    fn test_submit_sets_pending_without_scoring() {
        let state = GameState::with_computer(Move::Paper, Move::Rock).submit_player_choice(Move::Paper);
        assert_eq!(state.player_choice(), Some(Move::Paper));
        assert!(state.result_pending());
        assert_eq!(state.phase(), RoundPhase::AwaitingAcknowledgment);
        assert_eq!(state.scoreboard().scored(), 0);
    }

    #[test]
    fn test_resubmit_last_write_wins() {
        let state = GameState::with_computer(Move::Paper, Move::Rock)
            .submit_player_choice(Move::Scissors)
            .submit_player_choice(Move::Paper);
        assert_eq!(state.player_choice(), Some(Move::Paper));
        assert_eq!(state.pending_result().outcome(), &Outcome::PlayerWin);
    }

    #[test]
    fn test_start_new_round_redraws() {
        let mut source = ScriptedMoves::new([Move::Scissors, Move::Paper]);
        let state = GameState::with_computer(Move::Rock, Move::Rock)
            .submit_player_choice(Move::Rock)
            .start_new_round(&mut source);
        assert_eq!(state.round_number(), 1);
        assert_eq!(state.player_choice(), None);
        assert!(!state.result_pending());
        assert_eq!(state.computer_prediction(), Move::Scissors);
        assert_eq!(state.computer_choice(), Move::Paper);
        assert_eq!(source.draws(), 2);
    }

    #[test]
    fn test_acknowledge_clears_pending() {
        let mut source = ScriptedMoves::new([Move::Rock]);
        let (state, report) = GameState::with_computer(Move::Rock, Move::Rock)
            .submit_player_choice(Move::Rock)
            .acknowledge_result(&mut source);
        assert!(!state.result_pending());
        assert_eq!(report.outcome(), &Some(Outcome::Tie));
        assert!(!report.lied());
        assert_eq!(*report.round(), 1);
    }

    #[test]
    fn test_pending_result_labels_absent_choice() {
        let state = GameState::with_computer(Move::Rock, Move::Scissors);
        let pending = state.pending_result();
        assert_eq!(pending.player_label(), "NA");
        assert_eq!(pending.computer(), &Move::Scissors);
        assert_eq!(pending.outcome(), &Outcome::ComputerWin);
    }

    #[test]
    fn test_scoreboard_rates() {
        let board = Scoreboard {
            player: 1,
            computer: 2,
            tied: 1,
            computer_lied: 3,
            rounds: 6,
        };
        assert_eq!(board.scored(), 4);
        assert!((board.player_win_rate() - 25.0).abs() < f64::EPSILON);
        assert!((board.lie_rate() - 50.0).abs() < f64::EPSILON);
        assert_eq!(Scoreboard::default().lie_rate(), 0.0);
    }
}
