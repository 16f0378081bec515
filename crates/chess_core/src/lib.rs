pub mod board;
pub mod error;
pub mod game;
pub mod movegen;
pub mod types;

pub use board::*;
pub use error::*;
pub use game::*;
pub use movegen::*;
pub use types::*;

// =============================================================================
// Seams to the caller: opponents and move notifications
// =============================================================================

/// Trait implemented by automated opponents.
pub trait MoveSelector {
    /// Pick a move for `color` on `board`, or `None` when `color` has no
    /// moves at all.
    fn select_move(&mut self, board: &Board, color: Color) -> Option<Move>;

    /// Returns the selector's name for display
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}

/// Notified once for every move the engine applies (e.g. to play a sound).
pub trait MoveListener {
    fn on_move_applied(&mut self, mv: Move);
}

impl<F: FnMut(Move)> MoveListener for F {
    fn on_move_applied(&mut self, mv: Move) {
        self(mv)
    }
}

/// Listener that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct Quiet;

impl MoveListener for Quiet {
    fn on_move_applied(&mut self, _mv: Move) {}
}
