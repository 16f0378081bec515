//! Pseudo-legal move generation and move application.
//!
//! Moves are never checked for leaving the mover's king attacked.

use tracing::debug;

use crate::{MoveListener, board::Board, error::MoveError, types::*};

const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Destinations for the piece on `from`. Empty when the square is empty.
pub fn generate_moves(board: &Board, from: Square) -> Vec<Square> {
    let pc = match board.piece_at(from) {
        Some(p) => p,
        None => return Vec::new(),
    };

    let mut out = Vec::with_capacity(28);
    match pc.kind {
        PieceKind::Pawn => gen_pawn(board, from, pc.color, &mut out),
        PieceKind::Knight => gen_knight(board, from, pc.color, &mut out),
        PieceKind::Bishop => gen_slider(board, from, pc.color, &mut out, &DIAGONALS),
        PieceKind::Rook => gen_slider(board, from, pc.color, &mut out, &ORTHOGONALS),
        PieceKind::Queen => {
            gen_slider(board, from, pc.color, &mut out, &DIAGONALS);
            gen_slider(board, from, pc.color, &mut out, &ORTHOGONALS);
        }
        PieceKind::King => gen_king(board, from, pc.color, &mut out),
    }

    // Never land on an own piece, whatever the per-piece rule produced.
    out.retain(|&to| board.piece_at(to).is_none_or(|dest| dest.color != pc.color));
    out
}

/// Every move available to `color`, flattened across its pieces.
pub fn moves_for_color(board: &Board, color: Color) -> Vec<Move> {
    board
        .pieces(color)
        .flat_map(|(from, _)| {
            generate_moves(board, from)
                .into_iter()
                .map(move |to| Move::new(from, to))
        })
        .collect()
}

/// Move the piece on `from` to `to` if it belongs to `expected` and `to` is
/// one of its generated destinations. Returns whatever was captured.
///
/// The board is untouched and `listener` is not called on error.
pub fn try_apply_move(
    board: &mut Board,
    from: Square,
    to: Square,
    expected: Color,
    listener: &mut impl MoveListener,
) -> Result<Option<Piece>, MoveError> {
    let pc = board.piece_at(from).ok_or(MoveError::EmptySource(from))?;
    if pc.color != expected {
        return Err(MoveError::WrongColor {
            square: from,
            expected,
        });
    }
    if !generate_moves(board, from).contains(&to) {
        return Err(MoveError::IllegalDestination { from, to });
    }

    let captured = board.piece_at(to);
    board.set_piece_at(to, Some(pc));
    board.set_piece_at(from, None);
    listener.on_move_applied(Move::new(from, to));
    Ok(captured)
}

/// Boolean form of [`try_apply_move`]. Does not advance any turn.
pub fn apply_move(
    board: &mut Board,
    from: Square,
    to: Square,
    expected: Color,
    listener: &mut impl MoveListener,
) -> bool {
    match try_apply_move(board, from, to, expected, listener) {
        Ok(_) => true,
        Err(e) => {
            debug!(%from, %to, error = %e, "move rejected");
            false
        }
    }
}

fn gen_pawn(board: &Board, from: Square, c: Color, out: &mut Vec<Square>) {
    let dir = c.forward();

    // forward 1
    if let Some(to) = from.offset(0, dir) {
        if board.piece_at(to).is_none() {
            out.push(to);

            // forward 2 from home rank
            if from.rank == c.home_rank() {
                if let Some(to2) = from.offset(0, 2 * dir) {
                    if board.piece_at(to2).is_none() {
                        out.push(to2);
                    }
                }
            }
        }
    }

    // captures
    for df in [-1, 1] {
        if let Some(to) = from.offset(df, dir) {
            if let Some(tpc) = board.piece_at(to) {
                if tpc.color != c {
                    out.push(to);
                }
            }
        }
    }
}

fn gen_knight(board: &Board, from: Square, c: Color, out: &mut Vec<Square>) {
    let deltas = [
        (1, 2),
        (2, 1),
        (-1, 2),
        (-2, 1),
        (1, -2),
        (2, -1),
        (-1, -2),
        (-2, -1),
    ];
    gen_steps(board, from, c, out, &deltas);
}

fn gen_king(board: &Board, from: Square, c: Color, out: &mut Vec<Square>) {
    gen_steps(board, from, c, out, &DIAGONALS);
    gen_steps(board, from, c, out, &ORTHOGONALS);
}

fn gen_steps(board: &Board, from: Square, c: Color, out: &mut Vec<Square>, deltas: &[(i8, i8)]) {
    for &(df, dr) in deltas {
        if let Some(to) = from.offset(df, dr) {
            match board.piece_at(to) {
                None => out.push(to),
                Some(pc) if pc.color != c => out.push(to),
                _ => {}
            }
        }
    }
}

fn gen_slider(board: &Board, from: Square, c: Color, out: &mut Vec<Square>, dirs: &[(i8, i8)]) {
    for &(df, dr) in dirs {
        let mut cur = from;
        while let Some(to) = cur.offset(df, dr) {
            match board.piece_at(to) {
                None => out.push(to),
                Some(pc) if pc.color != c => {
                    out.push(to);
                    break;
                }
                _ => break,
            }
            cur = to;
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
