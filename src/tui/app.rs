//! Application state and key handling.

use crossterm::event::KeyCode;
use prs_rules::{Move, MoveSource, RandomMoves, RoundEngine, RoundPhase, RoundReport};
use tracing::{debug, info, instrument};

use super::input::move_cursor;

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Continue,
    /// Leave the game.
    Quit,
}

/// Main application state.
#[derive(Debug)]
pub struct App<S = RandomMoves> {
    engine: RoundEngine<S>,
    cursor: Move,
    max_rounds: Option<u32>,
    last_report: Option<RoundReport>,
}

impl<S: MoveSource> App<S> {
    /// Creates the application around a fresh engine.
    pub fn new(engine: RoundEngine<S>, max_rounds: Option<u32>) -> Self {
        Self {
            engine,
            cursor: Move::FIRST,
            max_rounds,
            last_report: None,
        }
    }

    /// The game engine.
    pub fn engine(&self) -> &RoundEngine<S> {
        &self.engine
    }

    /// Button under the cursor.
    pub fn cursor(&self) -> Move {
        self.cursor
    }

    /// Round limit, if one was configured.
    pub fn max_rounds(&self) -> Option<u32> {
        self.max_rounds
    }

    /// The most recently acknowledged round.
    pub fn last_report(&self) -> Option<&RoundReport> {
        self.last_report.as_ref()
    }

    /// True once the configured round limit has been reached.
    pub fn is_over(&self) -> bool {
        self.max_rounds
            .is_some_and(|max| self.engine.state().round_number() >= max)
    }

    /// Text for the status line.
    pub fn status_message(&self) -> String {
        if self.is_over() {
            return "Game over! Press 'q' to quit.".to_string();
        }
        match self.engine.phase() {
            RoundPhase::AwaitingAcknowledgment => "Press Enter to continue.".to_string(),
            RoundPhase::AwaitingPlayerChoice => match &self.last_report {
                Some(report) if *report.lied() => {
                    format!("Round {}: the computer lied!", report.round())
                }
                Some(report) => format!("Round {}: the computer kept its word.", report.round()),
                None => "Pick P, R or S (or use arrows and Enter). 'q' quits.".to_string(),
            },
        }
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> AppAction {
        if matches!(key, KeyCode::Char('q') | KeyCode::Esc) {
            info!("User quit");
            return AppAction::Quit;
        }

        if self.is_over() {
            return AppAction::Continue;
        }

        match self.engine.phase() {
            RoundPhase::AwaitingAcknowledgment => {
                if matches!(key, KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('o')) {
                    self.acknowledge();
                }
            }
            RoundPhase::AwaitingPlayerChoice => match key {
                KeyCode::Up | KeyCode::Down => {
                    self.cursor = move_cursor(self.cursor, key);
                }
                KeyCode::Enter | KeyCode::Char(' ') => self.choose(self.cursor),
                KeyCode::Char(c) => {
                    if let Some(choice) = Move::from_key(c) {
                        self.cursor = choice;
                        self.choose(choice);
                    }
                }
                _ => {}
            },
        }
        AppAction::Continue
    }

    fn choose(&mut self, choice: Move) {
        debug!(%choice, "Player chose");
        self.engine.submit_player_choice(choice);
    }

    fn acknowledge(&mut self) {
        let report = self.engine.acknowledge_result();
        if self.is_over() {
            info!(rounds = report.round(), "Round limit reached");
        }
        self.last_report = Some(report);
    }
}
