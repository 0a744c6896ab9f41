//! Hypothetical moves that undo themselves.

use crate::Board;
use chess_core::{Move, Piece};
use std::ops::Deref;

/// A move applied to a board for as long as this guard lives.
///
/// Creating the guard relocates the piece; dropping it puts back the
/// original contents of both the source and destination cells, whichever
/// way the enclosing scope is left. While the guard exists the board can
/// only be read through it.
pub struct Simulation<'a> {
    board: &'a mut Board,
    mv: Move,
    saved_from: Option<Piece>,
    saved_to: Option<Piece>,
}

impl<'a> Simulation<'a> {
    /// Applies `mv` to `board` until the returned guard is dropped.
    ///
    /// # Panics
    ///
    /// Panics if either cell of the move lies off the board.
    pub fn apply(board: &'a mut Board, mv: Move) -> Self {
        let saved_from = board.at(mv.from_row(), mv.from_col());
        let saved_to = board.at(mv.to_row(), mv.to_col());
        board.relocate(mv);
        Simulation {
            board,
            mv,
            saved_from,
            saved_to,
        }
    }

    /// The move being simulated.
    pub fn mv(&self) -> Move {
        self.mv
    }
}

impl Deref for Simulation<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl Drop for Simulation<'_> {
    fn drop(&mut self) {
        // relocate() already asserted both cells are on the board.
        let mv = self.mv;
        self.board.set_piece(
            mv.from_row() as usize,
            mv.from_col() as usize,
            self.saved_from,
        );
        self.board
            .set_piece(mv.to_row() as usize, mv.to_col() as usize, self.saved_to);
    }
}
