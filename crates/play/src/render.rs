//! Text board drawing

use chess_core::{Board, Square};

/// Piece style for drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Unicode,
    Ascii,
}

/// Draw `board` with file letters and rank numbers. Squares in `marked` are
/// drawn as `*` when empty and `x` when they hold a capturable piece.
pub fn render(board: &Board, style: Style, marked: &[Square]) -> String {
    let mut out = String::with_capacity(200);
    out.push_str("  a b c d e f g h\n");
    for rank in 0..8u8 {
        let label = 8 - rank;
        out.push_str(&format!("{label} "));
        for file in 0..8u8 {
            let sq = Square::new(file, rank);
            let pc = board.piece_at(sq);
            let ch = match (marked.contains(&sq), pc) {
                (true, Some(_)) => 'x',
                (true, None) => '*',
                (false, Some(p)) => match style {
                    Style::Unicode => p.glyph(),
                    Style::Ascii => p.letter(),
                },
                (false, None) => '.',
            };
            out.push(ch);
            out.push(' ');
        }
        out.push_str(&format!("{label}\n"));
    }
    out.push_str("  a b c d e f g h\n");
    out
}
