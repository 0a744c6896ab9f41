//! Move representation.

use crate::BOARD_SIZE;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when parsing a move from text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoveParseError {
    #[error("invalid move '{0}': expected square notation like \"e2e4\" or four coordinates")]
    Unrecognized(String),

    #[error("invalid square: {0}")]
    InvalidSquare(String),

    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),
}

/// A request to move whatever stands on one cell to another cell.
///
/// Rows count down from the top of the board (row 0 is Black's back rank),
/// columns count from the left. Coordinates are not validated on
/// construction: a move may point off the board, and deciding whether it is
/// legal is entirely up to the board it is asked against.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from_row: i8,
    from_col: i8,
    to_row: i8,
    to_col: i8,
}

impl Move {
    #[inline]
    pub const fn new(from_row: i8, from_col: i8, to_row: i8, to_col: i8) -> Self {
        Move {
            from_row,
            from_col,
            to_row,
            to_col,
        }
    }

    #[inline]
    pub const fn from_row(self) -> i8 {
        self.from_row
    }

    #[inline]
    pub const fn from_col(self) -> i8 {
        self.from_col
    }

    #[inline]
    pub const fn to_row(self) -> i8 {
        self.to_row
    }

    #[inline]
    pub const fn to_col(self) -> i8 {
        self.to_col
    }

    /// Signed row distance from source to destination.
    #[inline]
    pub const fn row_delta(self) -> i8 {
        self.to_row - self.from_row
    }

    /// Signed column distance from source to destination.
    #[inline]
    pub const fn col_delta(self) -> i8 {
        self.to_col - self.from_col
    }

    /// Returns true if source and destination are the same cell.
    #[inline]
    pub const fn is_null(self) -> bool {
        self.from_row == self.to_row && self.from_col == self.to_col
    }

    /// Returns true if all four coordinates lie within the board.
    #[inline]
    pub const fn is_on_board(self) -> bool {
        in_range(self.from_row) && in_range(self.from_col) && in_range(self.to_row) && in_range(self.to_col)
    }

    /// Returns square notation (e.g. "e2e4") if the move lies on the board.
    pub fn to_squares(self) -> Option<String> {
        if !self.is_on_board() {
            return None;
        }
        let mut s = String::with_capacity(4);
        push_square(&mut s, self.from_row, self.from_col);
        push_square(&mut s, self.to_row, self.to_col);
        Some(s)
    }

    /// Parses square notation such as "e2e4".
    ///
    /// Files `a`..`h` map to columns 0..7 and ranks `1`..`8` to rows 7..0.
    pub fn from_squares(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 4 {
            return None;
        }
        let (from_row, from_col) = parse_square(bytes[0], bytes[1])?;
        let (to_row, to_col) = parse_square(bytes[2], bytes[3])?;
        Some(Move::new(from_row, from_col, to_row, to_col))
    }
}

#[inline]
const fn in_range(v: i8) -> bool {
    v >= 0 && (v as usize) < BOARD_SIZE
}

fn parse_square(file: u8, rank: u8) -> Option<(i8, i8)> {
    let file = file.to_ascii_lowercase();
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return None;
    }
    let col = (file - b'a') as i8;
    let row = BOARD_SIZE as i8 - (rank - b'0') as i8;
    Some((row, col))
}

fn push_square(s: &mut String, row: i8, col: i8) {
    s.push((b'a' + col as u8) as char);
    s.push((b'0' + (BOARD_SIZE as i8 - row) as u8) as char);
}

impl FromStr for Move {
    type Err = MoveParseError;

    /// Accepts square notation ("e2e4") or four whitespace separated
    /// coordinates ("6 4 4 4", source row/column then destination row/column).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let parts: Vec<&str> = s.split_whitespace().collect();

        match parts.len() {
            1 if s.len() == 4 => {
                Move::from_squares(s).ok_or_else(|| MoveParseError::InvalidSquare(s.to_string()))
            }
            4 => {
                let mut coords = [0i8; 4];
                for (slot, part) in coords.iter_mut().zip(&parts) {
                    *slot = part
                        .parse()
                        .map_err(|_| MoveParseError::InvalidCoordinate(part.to_string()))?;
                }
                Ok(Move::new(coords[0], coords[1], coords[2], coords[3]))
            }
            _ => Err(MoveParseError::Unrecognized(s.to_string())),
        }
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Move(({}, {}) -> ({}, {}))",
            self.from_row, self.from_col, self.to_row, self.to_col
        )
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_squares() {
            Some(s) => write!(f, "{}", s),
            None => write!(
                f,
                "({},{})->({},{})",
                self.from_row, self.from_col, self.to_row, self.to_col
            ),
        }
    }
}
