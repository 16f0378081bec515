use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::types::*;

/// Piece placement. Holds no rules; the move engine validates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Board {
    pub fn empty() -> Self {
        Board {
            squares: [None; 64],
        }
    }

    pub fn startpos() -> Self {
        let mut b = Board::empty();

        // Pawns
        for f in 0..8 {
            b.set_piece_at(
                Square::new(f, 1),
                Some(Piece::new(Color::Black, PieceKind::Pawn)),
            );
            b.set_piece_at(
                Square::new(f, 6),
                Some(Piece::new(Color::White, PieceKind::Pawn)),
            );
        }
        // Back ranks
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (f, &kind) in back.iter().enumerate() {
            b.set_piece_at(Square::new(f as u8, 0), Some(Piece::new(Color::Black, kind)));
            b.set_piece_at(Square::new(f as u8, 7), Some(Piece::new(Color::White, kind)));
        }
        b
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    pub fn set_piece_at(&mut self, sq: Square, pc: Option<Piece>) {
        self.squares[sq.index()] = pc;
    }

    /// Squares holding a piece of `color`, top rank first.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.piece_at(sq) {
            Some(pc) if pc.color == color => Some((sq, pc)),
            _ => None,
        })
    }

    pub fn count(&self, color: Color) -> usize {
        self.pieces(color).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::startpos()
    }
}

/// Eight rows top to bottom, piece letters with `.` for an empty square.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in 0..8 {
            for file in 0..8 {
                let ch = self
                    .piece_at(Square::new(file, rank))
                    .map_or('.', Piece::letter);
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseError;

    /// Parses the diagram written by `Display`. Blank lines and surrounding
    /// whitespace are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        if rows.len() != 8 {
            return Err(ParseError::Board(format!("expected 8 rows, got {}", rows.len())));
        }

        let mut board = Board::empty();
        for (rank, row) in rows.iter().enumerate() {
            let cells: Vec<char> = row.chars().collect();
            if cells.len() != 8 {
                return Err(ParseError::Board(format!(
                    "row {} has {} squares",
                    rank + 1,
                    cells.len()
                )));
            }
            for (file, &ch) in cells.iter().enumerate() {
                if ch == '.' {
                    continue;
                }
                let pc = Piece::from_letter(ch)
                    .ok_or_else(|| ParseError::Board(format!("unknown piece {ch:?}")))?;
                board.set_piece_at(Square::new(file as u8, rank as u8), Some(pc));
            }
        }
        Ok(board)
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
