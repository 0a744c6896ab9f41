//! Text rendering of the board.

use crate::config::DisplayConfig;
use chess_engine::Board;
use std::fmt::Write;

/// Draws the board with row 0 (rank 8) at the top.
///
/// Pieces are letters (upper case for White) or Unicode glyphs; empty cells
/// are dots. With coordinates on, each row is prefixed by its rank and a file
/// line is added underneath.
pub fn render(board: &Board, display: &DisplayConfig) -> String {
    let mut out = String::new();
    for row in 0..8 {
        if display.coordinates {
            let _ = write!(out, "{} ", 8 - row);
        }
        let cells: Vec<String> = (0..8)
            .map(|col| match board.piece_at(row, col) {
                Some(piece) if display.unicode => piece.glyph().to_string(),
                Some(piece) => piece.to_char().to_string(),
                None => ".".to_string(),
            })
            .collect();
        out.push_str(&cells.join(" "));
        out.push('\n');
    }
    if display.coordinates {
        out.push_str("  a b c d e f g h\n");
    }
    out
}
