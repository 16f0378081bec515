//! Commands typed at the board prompt

use chess_core::{Move, ParseError, Square};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `e2e4` or `e2 e4`
    Play(Move),
    /// `moves e2`: show where the piece on a square can go
    Moves(Square),
    Board,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  e2e4 | e2 e4   move a piece
  moves <sq>     show where the piece on <sq> can go
  board          redraw the board
  help           show this text
  quit           leave the game";

impl Command {
    /// `Ok(None)` for a blank line.
    pub fn parse(line: &str) -> Result<Option<Command>, ParseError> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let cmd = match parts.as_slice() {
            [] => return Ok(None),
            ["quit" | "exit" | "q"] => Command::Quit,
            ["help" | "?"] => Command::Help,
            ["board" | "d"] => Command::Board,
            ["moves", sq] => Command::Moves(sq.parse()?),
            _ => Command::Play(line.trim().parse()?),
        };
        Ok(Some(cmd))
    }
}
