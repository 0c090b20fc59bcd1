//! Core domain types for prediction rock-paper-scissors.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// One of the three game pieces.
///
/// Variant order matters: [`Move::Paper`] is the first enumerated move and
/// is what an absent player choice is evaluated as when a result is shown.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, strum::EnumIter,
)]
pub enum Move {
    /// Paper covers rock.
    #[display("Paper")]
    Paper,
    /// Rock blunts scissors.
    #[display("Rock")]
    Rock,
    /// Scissors cut paper.
    #[display("Scissors")]
    Scissors,
}

impl Move {
    /// All moves in enumeration order.
    pub const ALL: [Move; 3] = [Move::Paper, Move::Rock, Move::Scissors];

    /// The first enumerated move.
    pub const FIRST: Move = Move::Paper;

    /// Moves the opening round draws from. Scissors only appears once the
    /// first round has been reset.
    pub const OPENING: [Move; 2] = [Move::Paper, Move::Rock];

    /// Returns the display label for this move.
    #[instrument]
    pub fn label(self) -> &'static str {
        match self {
            Move::Paper => "Paper",
            Move::Rock => "Rock",
            Move::Scissors => "Scissors",
        }
    }

    /// Returns the move at `index` in enumeration order.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Returns this move's position in enumeration order.
    pub fn index(self) -> usize {
        match self {
            Move::Paper => 0,
            Move::Rock => 1,
            Move::Scissors => 2,
        }
    }

    /// Returns true if this move defeats `other`.
    pub fn beats(self, other: Move) -> bool {
        crate::rules::beats(self, other)
    }

    /// Maps a single keypress to a move.
    ///
    /// Accepts the initial letter (`p`, `r`, `s`, any case) or the
    /// one-based button number (`1`, `2`, `3`).
    pub fn from_key(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'p' | '1' => Some(Move::Paper),
            'r' | '2' => Some(Move::Rock),
            's' | '3' => Some(Move::Scissors),
            _ => None,
        }
    }
}

/// Error returned when a string does not name a move.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unknown move: {input:?} (expected paper, rock or scissors)")]
pub struct ParseMoveError {
    /// The rejected input.
    pub input: String,
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Move::ALL
            .into_iter()
            .find(|m| m.label().eq_ignore_ascii_case(trimmed))
            .or_else(|| {
                let mut chars = trimmed.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Move::from_key(c),
                    _ => None,
                }
            })
            .ok_or_else(|| ParseMoveError {
                input: s.to_string(),
            })
    }
}

/// Result of a single round, from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Outcome {
    /// The player's move beat the computer's.
    #[display("Player wins")]
    PlayerWin,
    /// The computer's move beat the player's.
    #[display("Computer wins")]
    ComputerWin,
    /// Both sides played the same move.
    #[display("Tie")]
    Tie,
}

impl Outcome {
    /// Message shown in the result dialog.
    pub fn message(self) -> &'static str {
        match self {
            Outcome::PlayerWin => "You Win!",
            Outcome::ComputerWin => "You Lose",
            Outcome::Tie => "You Tied",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_all_matches_enum_iter() {
        let iterated: Vec<Move> = Move::iter().collect();
        assert_eq!(iterated, Move::ALL.to_vec());
    }

    #[test]
    fn test_index_round_trips() {
        for m in Move::ALL {
            assert_eq!(Move::from_index(m.index()), Some(m));
        }
        assert_eq!(Move::from_index(3), None);
    }

    #[test]
    fn test_first_is_paper() {
        assert_eq!(Move::FIRST, Move::Paper);
        assert_eq!(Move::from_index(0), Some(Move::FIRST));
    }

    #[test]
    fn test_parse_labels_and_keys() {
        assert_eq!("rock".parse::<Move>(), Ok(Move::Rock));
        assert_eq!(" SCISSORS ".parse::<Move>(), Ok(Move::Scissors));
        assert_eq!("p".parse::<Move>(), Ok(Move::Paper));
        assert_eq!("3".parse::<Move>(), Ok(Move::Scissors));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "lizard".parse::<Move>().unwrap_err();
        assert_eq!(err.input, "lizard");
        assert!(err.to_string().contains("lizard"));
        assert!("".parse::<Move>().is_err());
    }

    #[test]
    fn test_display_matches_label() {
        for m in Move::ALL {
            assert_eq!(m.to_string(), m.label());
        }
    }

    #[test]
    fn test_outcome_messages() {
        assert_eq!(Outcome::PlayerWin.message(), "You Win!");
        assert_eq!(Outcome::ComputerWin.message(), "You Lose");
        assert_eq!(Outcome::Tie.message(), "You Tied");
    }
}
