//! Cursor movement over the choice buttons.

use crossterm::event::KeyCode;
use prs_rules::Move;

/// Moves the button cursor. The buttons are stacked vertically, so only
/// Up and Down move it, and it stops at either end.
pub fn move_cursor(cursor: Move, key: KeyCode) -> Move {
    use Move::*;

    match (cursor, key) {
        (Paper, KeyCode::Down) => Rock,
        (Rock, KeyCode::Down) => Scissors,
        (Scissors, KeyCode::Up) => Rock,
        (Rock, KeyCode::Up) => Paper,
        _ => cursor,
    }
}
