//! Movement legality for each kind of piece.
//!
//! Every kind answers the same question: may this piece make this move on
//! this board? The answer only looks at geometry and occupancy. It does not
//! consider whose turn it is, whether the piece actually stands on the source
//! cell, or whether the move leaves the mover's own king attacked. That last
//! point is what lets check detection reuse these predicates as attack tests.

mod leaper;
mod pawn;
mod sliding;

use crate::Board;
use chess_core::{Move, Piece, PieceKind};

/// Returns true if `piece` may make `mv` on `board`.
///
/// Rejects, for every kind of piece:
/// - moves whose source and destination are the same cell,
/// - moves with any coordinate off the board,
/// - moves onto a cell occupied by a piece of the same owner.
///
/// What remains is decided by the kind's own movement rule.
pub fn is_legal(piece: Piece, mv: Move, board: &Board) -> bool {
    if !passes_common(piece, mv, board) {
        return false;
    }

    match piece.kind() {
        PieceKind::King => leaper::king(mv),
        PieceKind::Knight => leaper::knight(mv),
        PieceKind::Rook => sliding::rook(mv, board),
        PieceKind::Bishop => sliding::bishop(mv, board),
        PieceKind::Queen => sliding::rook(mv, board) || sliding::bishop(mv, board),
        PieceKind::Pawn => pawn::pawn(piece.owner(), mv, board),
    }
}

fn passes_common(piece: Piece, mv: Move, board: &Board) -> bool {
    if mv.is_null() || !mv.is_on_board() {
        return false;
    }
    match board.at(mv.to_row(), mv.to_col()) {
        Some(target) => target.owner() != piece.owner(),
        None => true,
    }
}
