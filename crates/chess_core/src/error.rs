use thiserror::Error;

use crate::types::{Color, Square};

/// Why a move was refused. Checked in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("no piece on {0}")]
    EmptySource(Square),
    #[error("piece on {square} does not belong to {expected}")]
    WrongColor { square: Square, expected: Color },
    #[error("{from} cannot move to {to}")]
    IllegalDestination { from: Square, to: Square },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid square: {0:?}")]
    Square(String),
    #[error("invalid move: {0:?}")]
    Move(String),
    #[error("invalid color: {0:?}")]
    Color(String),
    #[error("invalid board diagram: {0}")]
    Board(String),
}
