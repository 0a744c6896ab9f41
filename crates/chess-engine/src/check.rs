//! Check and checkmate detection.
//!
//! Both queries reuse the ordinary movement predicates. A square is attacked
//! if some opposing piece could legally move there, and a position is mate if
//! no candidate move gets the king out of that state. Pins are not modelled:
//! a piece shielding its own king still counts as an attacker.

use crate::movegen::candidate_moves;
use crate::rules;
use crate::simulate::Simulation;
use crate::Board;
use chess_core::{Move, PieceKind, Player};
use tracing::{debug, trace};

/// Returns the cell of `player`'s king.
///
/// Positions are expected to hold exactly one king per player. If there are
/// several, the last one in row-major order is returned.
pub fn find_king(board: &Board, player: Player) -> Option<(i8, i8)> {
    board
        .pieces()
        .filter(|(_, _, p)| p.kind() == PieceKind::King && p.owner() == player)
        .last()
        .map(|(row, col, _)| (row as i8, col as i8))
}

/// Returns true if any opposing piece could move onto `player`'s king.
///
/// A player without a king is never in check.
pub fn in_check(board: &Board, player: Player) -> bool {
    let Some((king_row, king_col)) = find_king(board, player) else {
        trace!(%player, "no king on board");
        return false;
    };

    let attacked = board
        .pieces()
        .filter(|(_, _, p)| p.owner() != player)
        .any(|(row, col, piece)| {
            let mv = Move::new(row as i8, col as i8, king_row, king_col);
            rules::is_legal(piece, mv, board)
        });

    trace!(%player, king_row, king_col, attacked, "check test");
    attacked
}

/// Returns true if `player` is in check and no candidate move escapes it.
///
/// Each candidate is tried on `board` itself and undone before the next one,
/// so the board is unchanged when this returns. All candidates are tried even
/// after an escape is found.
///
/// A player who is not in check is never mated, even with no moves at all:
/// stalemate is not detected.
pub fn is_checkmate(board: &mut Board, player: Player) -> bool {
    if !in_check(board, player) {
        return false;
    }

    let candidates = candidate_moves(board, player);
    let mut escapes = 0usize;
    for mv in &candidates {
        let sim = Simulation::apply(board, *mv);
        if !in_check(&sim, player) {
            escapes += 1;
        }
    }

    debug!(
        %player,
        candidates = candidates.len(),
        escapes,
        "checkmate search"
    );
    escapes == 0
}
