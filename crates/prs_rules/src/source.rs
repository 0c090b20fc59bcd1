//! Sources of computer moves.
//!
//! The engine never reaches for ambient randomness. Every draw goes through
//! a [`MoveSource`], so tests can script exact sequences and sessions can be
//! replayed from a seed.

use super::types::Move;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{instrument, trace};

/// Something that can hand out moves, one draw at a time.
pub trait MoveSource {
    /// Draws the next move from `choices`.
    fn draw_from(&mut self, choices: &[Move]) -> Move;

    /// Draws the next move from all three.
    fn draw(&mut self) -> Move {
        self.draw_from(&Move::ALL)
    }
}

impl<S: MoveSource + ?Sized> MoveSource for &mut S {
    fn draw_from(&mut self, choices: &[Move]) -> Move {
        (**self).draw_from(choices)
    }
}

/// Uniform random draws over the offered moves.
#[derive(Debug, Clone)]
pub struct RandomMoves<R = StdRng> {
    rng: R,
}

impl<R: Rng> RandomMoves<R> {
    /// Wraps an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomMoves<StdRng> {
    /// Reproducible source: the same seed always yields the same draws.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Source seeded from the operating system.
    #[instrument]
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> MoveSource for RandomMoves<R> {
    fn draw_from(&mut self, choices: &[Move]) -> Move {
        if choices.is_empty() {
            return Move::FIRST;
        }
        let drawn = choices[self.rng.random_range(0..choices.len())];
        trace!(%drawn, offered = choices.len(), "Drew random move");
        drawn
    }
}

/// Replays a fixed sequence of moves, wrapping around at the end.
///
/// The script wins over the offered choices, so tests can pin any opening.
/// An empty script always yields [`Move::FIRST`].
#[derive(Debug, Clone, Default)]
pub struct ScriptedMoves {
    script: Vec<Move>,
    cursor: usize,
}

impl ScriptedMoves {
    /// Creates a source that yields `script` in order.
    pub fn new(script: impl IntoIterator<Item = Move>) -> Self {
        Self {
            script: script.into_iter().collect(),
            cursor: 0,
        }
    }

    /// Number of draws taken so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl MoveSource for ScriptedMoves {
    fn draw_from(&mut self, _choices: &[Move]) -> Move {
        let drawn = if self.script.is_empty() {
            Move::FIRST
        } else {
            self.script[self.cursor % self.script.len()]
        };
        self.cursor += 1;
        drawn
    }
}
