//! The 8×8 grid of cells.

use chess_core::{Move, Piece, Placement, PlacementError, Player, BOARD_SIZE};
use std::fmt;

/// An 8×8 grid where every cell is either empty or holds one piece.
///
/// Row 0 is at the top (Black's back rank), column 0 at the left. The board
/// enforces nothing about the position it holds: any number of kings, pawns
/// on the back ranks and so on are all representable. Direct edits through
/// [`set_piece`](Board::set_piece) are the intended way to build test and
/// puzzle positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates a board with no pieces.
    pub const fn empty() -> Self {
        Board {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Creates the standard 32-piece opening layout.
    pub fn standard() -> Self {
        Self::from(&Placement::standard())
    }

    /// Creates a board from a placement string, ignoring the player to move.
    pub fn from_placement(s: &str) -> Result<Self, PlacementError> {
        Placement::parse(s).map(|p| Self::from(&p))
    }

    /// Converts the board to a placement with the given player to move.
    pub fn to_placement(&self, to_move: Player) -> Placement {
        Placement {
            cells: self.cells,
            to_move,
        }
    }

    /// Returns the contents of a cell.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is 8 or more.
    #[inline]
    pub fn piece_at(&self, row: usize, col: usize) -> Option<Piece> {
        self.cells[row][col]
    }

    /// Overwrites a cell. No legality or consistency checks are made.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is 8 or more.
    #[inline]
    pub fn set_piece(&mut self, row: usize, col: usize, piece: Option<Piece>) {
        self.cells[row][col] = piece;
    }

    /// Returns the contents of a cell given signed coordinates, treating
    /// anything off the board as empty.
    #[inline]
    pub fn at(&self, row: i8, col: i8) -> Option<Piece> {
        if on_board(row) && on_board(col) {
            self.cells[row as usize][col as usize]
        } else {
            None
        }
    }

    /// Returns true if the cell holds no piece.
    #[inline]
    pub fn is_empty_at(&self, row: i8, col: i8) -> bool {
        self.at(row, col).is_none()
    }

    /// Moves whatever stands on the source cell to the destination cell,
    /// discarding anything that was there, and empties the source cell.
    ///
    /// Nothing is validated: applying an illegal move silently produces an
    /// illegal position.
    ///
    /// # Panics
    ///
    /// Panics if either cell lies off the board.
    pub fn relocate(&mut self, mv: Move) {
        let (fr, fc) = cell_index(mv.from_row(), mv.from_col());
        let (tr, tc) = cell_index(mv.to_row(), mv.to_col());
        self.cells[tr][tc] = self.cells[fr][fc].take();
    }

    /// Iterates over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Option<Piece>)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, &piece)| (row, col, piece))
        })
    }

    /// Iterates over the occupied cells in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (usize, usize, Piece)> + '_ {
        self.cells()
            .filter_map(|(row, col, piece)| piece.map(|p| (row, col, p)))
    }

    /// Returns the number of occupied cells.
    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl From<&Placement> for Board {
    fn from(placement: &Placement) -> Self {
        Board {
            cells: placement.cells,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cells in &self.cells {
            let line: Vec<String> = cells
                .iter()
                .map(|cell| cell.map_or('.', |p| p.to_char()).to_string())
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[inline]
fn on_board(v: i8) -> bool {
    v >= 0 && (v as usize) < BOARD_SIZE
}

#[inline]
fn cell_index(row: i8, col: i8) -> (usize, usize) {
    assert!(
        on_board(row) && on_board(col),
        "cell ({}, {}) is off the board",
        row,
        col
    );
    (row as usize, col as usize)
}
