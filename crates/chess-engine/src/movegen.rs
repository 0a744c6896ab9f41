//! Candidate move enumeration.

use crate::rules;
use crate::Board;
use chess_core::{Move, Player, BOARD_SIZE};

/// Returns every move a piece owned by `player` may make, in row-major order
/// of source cell and then destination cell.
///
/// This is an exhaustive scan of each owned cell against all 64 destinations,
/// filtered through [`rules::is_legal`]. Moves that leave the player's own
/// king attacked are included.
pub fn candidate_moves(board: &Board, player: Player) -> Vec<Move> {
    let mut moves = Vec::new();
    for (from_row, from_col, piece) in board.pieces() {
        if piece.owner() != player {
            continue;
        }
        for to_row in 0..BOARD_SIZE {
            for to_col in 0..BOARD_SIZE {
                let mv = Move::new(from_row as i8, from_col as i8, to_row as i8, to_col as i8);
                if rules::is_legal(piece, mv, board) {
                    moves.push(mv);
                }
            }
        }
    }
    moves
}
