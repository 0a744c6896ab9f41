//! Rook and bishop lines. The queen is the union of the two.

use crate::Board;
use chess_core::Move;

/// Straight along a row or a column, through empty cells only.
pub(super) fn rook(mv: Move, board: &Board) -> bool {
    let straight = (mv.row_delta() == 0) != (mv.col_delta() == 0);
    straight && path_clear(mv, board)
}

/// Along a diagonal, through empty cells only.
pub(super) fn bishop(mv: Move, board: &Board) -> bool {
    let dr = mv.row_delta();
    let diagonal = dr != 0 && dr.abs() == mv.col_delta().abs();
    diagonal && path_clear(mv, board)
}

/// Returns true if every cell strictly between source and destination is
/// empty. Only meaningful for straight or diagonal moves.
fn path_clear(mv: Move, board: &Board) -> bool {
    let step_row = mv.row_delta().signum();
    let step_col = mv.col_delta().signum();

    let mut row = mv.from_row() + step_row;
    let mut col = mv.from_col() + step_col;
    while (row, col) != (mv.to_row(), mv.to_col()) {
        if !board.is_empty_at(row, col) {
            return false;
        }
        row += step_row;
        col += step_col;
    }
    true
}
