//! Random Move Opponent
//!
//! Picks uniformly among every pseudo-legal move the side has, so a piece
//! with more moves is proportionally more likely to be the one that moves.
//! Used as the automated opponent and for stress testing move generation.

use chess_core::{moves_for_color, Board, Color, Move, MoveSelector};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

#[cfg(test)]
mod lib_tests;

/// Uniform choice over the flattened `(from, to)` list for `color`.
/// `None` when `color` has no moves, which the caller treats as game over.
pub fn select_random_move<R: Rng + ?Sized>(board: &Board, color: Color, rng: &mut R) -> Option<Move> {
    let moves = moves_for_color(board, color);
    let choice = moves.choose(rng).copied();
    debug!(%color, candidates = moves.len(), chosen = ?choice, "random move");
    choice
}

/// An opponent that plays random pseudo-legal moves.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
    seed: Option<u64>,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            seed: None,
        }
    }

    /// Deterministic engine: equal seeds give equal move sequences.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSelector for RandomEngine {
    fn select_move(&mut self, board: &Board, color: Color) -> Option<Move> {
        select_random_move(board, color, &mut self.rng)
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        if let Some(seed) = self.seed {
            self.rng = StdRng::seed_from_u64(seed);
        }
    }
}
