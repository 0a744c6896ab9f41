//! Pawn movement.
//!
//! Pawns advance toward the opponent: White toward row 0, Black toward row 7.
//! A pawn standing on its owner's home rank may advance two cells. Because
//! pieces keep no history, any pawn placed on that rank counts as unmoved.
//! Promotion and en passant are not part of this engine.

use crate::Board;
use chess_core::{Move, Player};

pub(super) fn pawn(owner: Player, mv: Move, board: &Board) -> bool {
    let forward = owner.forward();
    let dr = mv.row_delta();
    let dc = mv.col_delta();
    let target = board.at(mv.to_row(), mv.to_col());

    if dc == 0 && dr == 2 * forward && mv.from_row() == owner.home_rank() {
        let middle_row = mv.from_row() + forward;
        return target.is_none() && board.is_empty_at(middle_row, mv.from_col());
    }

    if dr != forward {
        return false;
    }

    match dc {
        0 => target.is_none(),
        -1 | 1 => target.is_some_and(|p| p.owner() != owner),
        _ => false,
    }
}
