//! Board plus side to move, for callers that alternate turns.

use tracing::debug;

use crate::{MoveListener, MoveSelector, board::Board, error::MoveError, movegen::*, types::*};

/// Whether the side to move can still play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    /// `loser` is to move and has no pseudo-legal move.
    NoMoves { loser: Color },
}

impl GameStatus {
    pub fn winner(self) -> Option<Color> {
        match self {
            GameStatus::Ongoing => None,
            GameStatus::NoMoves { loser } => Some(loser.other()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub board: Board,
    pub turn: Color,
}

impl Game {
    pub fn new() -> Self {
        Self::from_board(Board::startpos(), Color::White)
    }

    pub fn from_board(board: Board, turn: Color) -> Self {
        Self { board, turn }
    }

    /// Apply a move for the side to move. The turn flips only on success.
    pub fn play(&mut self, from: Square, to: Square, listener: &mut impl MoveListener) -> bool {
        let ok = apply_move(&mut self.board, from, to, self.turn, listener);
        if ok {
            self.turn = self.turn.other();
        }
        ok
    }

    /// Let `selector` move for the side to move.
    ///
    /// `Ok(None)` means it found no move; an error means it picked a move
    /// the side cannot play. The turn is unchanged in both cases.
    pub fn play_selected(
        &mut self,
        selector: &mut dyn MoveSelector,
        listener: &mut impl MoveListener,
    ) -> Result<Option<Move>, MoveError> {
        let mv = match selector.select_move(&self.board, self.turn) {
            Some(mv) => mv,
            None => return Ok(None),
        };
        debug!(selector = selector.name(), %mv, color = %self.turn, "selected move");
        try_apply_move(&mut self.board, mv.from, mv.to, self.turn, listener)?;
        self.turn = self.turn.other();
        Ok(Some(mv))
    }

    pub fn moves(&self) -> Vec<Move> {
        moves_for_color(&self.board, self.turn)
    }

    pub fn status(&self) -> GameStatus {
        let can_move = self
            .board
            .pieces(self.turn)
            .any(|(sq, _)| !generate_moves(&self.board, sq).is_empty());
        if can_move {
            GameStatus::Ongoing
        } else {
            GameStatus::NoMoves { loser: self.turn }
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
