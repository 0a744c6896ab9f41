//! Text notation for board layouts.
//!
//! The format follows FEN piece placement: eight `/`-separated rows, digits
//! for runs of empty cells, piece letters upper case for White and lower case
//! for Black. The first row listed is row 0, Black's back rank. An optional
//! second field (`w` or `b`) names the player to move; White is assumed when
//! it is absent.

use crate::{Piece, Player, BOARD_SIZE};
use std::fmt;
use thiserror::Error;

/// Errors that can occur when parsing a placement string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlacementError {
    #[error("invalid placement: expected 1 or 2 fields, got {0}")]
    InvalidFieldCount(usize),

    #[error("invalid placement: expected 8 rows, got {0}")]
    InvalidRowCount(usize),

    #[error("row {row} has {cells} cells, expected 8")]
    InvalidRowWidth { row: usize, cells: usize },

    #[error("invalid character '{character}' in row {row}")]
    InvalidPiece { row: usize, character: char },

    #[error("invalid player to move: expected 'w' or 'b', got '{0}'")]
    InvalidPlayer(String),
}

/// A parsed board layout plus the player to move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// Cell contents indexed as `cells[row][col]`.
    pub cells: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
    /// The player to move.
    pub to_move: Player,
}

impl Placement {
    /// The standard opening layout with White to move.
    pub const STANDARD: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w";

    /// A layout with no pieces and White to move.
    pub const fn empty() -> Self {
        Placement {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
            to_move: Player::White,
        }
    }

    /// Parses a placement string.
    pub fn parse(s: &str) -> Result<Self, PlacementError> {
        let fields: Vec<&str> = s.split_whitespace().collect();
        if fields.is_empty() || fields.len() > 2 {
            return Err(PlacementError::InvalidFieldCount(fields.len()));
        }

        let mut placement = Placement::empty();

        let rows: Vec<&str> = fields[0].split('/').collect();
        if rows.len() != BOARD_SIZE {
            return Err(PlacementError::InvalidRowCount(rows.len()));
        }

        for (row, text) in rows.iter().enumerate() {
            let mut col = 0usize;
            for c in text.chars() {
                if let Some(run) = c.to_digit(10) {
                    col += run as usize;
                } else if let Some(piece) = Piece::from_char(c) {
                    if col < BOARD_SIZE {
                        placement.cells[row][col] = Some(piece);
                    }
                    col += 1;
                } else {
                    return Err(PlacementError::InvalidPiece { row, character: c });
                }
            }
            if col != BOARD_SIZE {
                return Err(PlacementError::InvalidRowWidth { row, cells: col });
            }
        }

        if let Some(side) = fields.get(1) {
            let mut chars = side.chars();
            placement.to_move = match (chars.next().and_then(Player::from_char), chars.next()) {
                (Some(player), None) => player,
                _ => return Err(PlacementError::InvalidPlayer(side.to_string())),
            };
        }

        Ok(placement)
    }

    /// Returns the standard opening layout.
    pub fn standard() -> Self {
        Self::parse(Self::STANDARD).expect("STANDARD is valid")
    }
}

impl Default for Placement {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            if row > 0 {
                write!(f, "/")?;
            }
            let mut empty = 0;
            for cell in cells {
                match cell {
                    Some(piece) => {
                        if empty > 0 {
                            write!(f, "{}", empty)?;
                            empty = 0;
                        }
                        write!(f, "{}", piece.to_char())?;
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                write!(f, "{}", empty)?;
            }
        }
        write!(f, " {}", self.to_move.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_standard() {
        let placement = Placement::standard();
        assert_eq!(placement.to_move, Player::White);
        assert_eq!(placement.cells[0][0], Some(Piece::rook(Player::Black)));
        assert_eq!(placement.cells[0][4], Some(Piece::king(Player::Black)));
        assert_eq!(placement.cells[7][3], Some(Piece::queen(Player::White)));
        assert_eq!(placement.cells[6][5], Some(Piece::pawn(Player::White)));
        assert_eq!(placement.cells[1][2], Some(Piece::pawn(Player::Black)));
        assert_eq!(placement.cells[4][4], None);
        assert_eq!(placement.to_string(), Placement::STANDARD);
    }

    #[test]
    fn side_to_move_is_optional() {
        let placement = Placement::parse("4k3/8/8/8/8/8/8/4K3").unwrap();
        assert_eq!(placement.to_move, Player::White);
        assert_eq!(placement.cells[0][4], Some(Piece::king(Player::Black)));
        assert_eq!(placement.cells[7][4], Some(Piece::king(Player::White)));

        let placement = Placement::parse("4k3/8/8/8/8/8/8/4K3 b").unwrap();
        assert_eq!(placement.to_move, Player::Black);
        assert_eq!(placement.to_string(), "4k3/8/8/8/8/8/8/4K3 b");
    }

    #[test]
    fn empty_layout() {
        let placement = Placement::parse("8/8/8/8/8/8/8/8").unwrap();
        assert_eq!(placement, Placement::empty());
        assert_eq!(placement.to_string(), "8/8/8/8/8/8/8/8 w");
    }

    #[test]
    fn invalid_field_count() {
        assert_eq!(
            Placement::parse(""),
            Err(PlacementError::InvalidFieldCount(0))
        );
        assert_eq!(
            Placement::parse("8/8/8/8/8/8/8/8 w -"),
            Err(PlacementError::InvalidFieldCount(3))
        );
    }

    #[test]
    fn invalid_row_count() {
        assert_eq!(
            Placement::parse("8/8/8/8/8/8/8"),
            Err(PlacementError::InvalidRowCount(7))
        );
    }

    #[test]
    fn invalid_row_width() {
        assert_eq!(
            Placement::parse("rnbqkbnrr/8/8/8/8/8/8/8"),
            Err(PlacementError::InvalidRowWidth { row: 0, cells: 9 })
        );
        assert_eq!(
            Placement::parse("8/8/8/8/8/8/7/8"),
            Err(PlacementError::InvalidRowWidth { row: 6, cells: 7 })
        );
    }

    #[test]
    fn invalid_piece_letter() {
        assert_eq!(
            Placement::parse("8/8/8/8/8/8/PPPPXPPP/8"),
            Err(PlacementError::InvalidPiece {
                row: 6,
                character: 'X'
            })
        );
    }

    #[test]
    fn invalid_player() {
        assert_eq!(
            Placement::parse("8/8/8/8/8/8/8/8 x"),
            Err(PlacementError::InvalidPlayer("x".to_string()))
        );
        assert_eq!(
            Placement::parse("8/8/8/8/8/8/8/8 wb"),
            Err(PlacementError::InvalidPlayer("wb".to_string()))
        );
    }

    #[test]
    fn error_display() {
        let err = PlacementError::InvalidRowCount(3);
        assert!(format!("{}", err).contains('3'));

        let err = PlacementError::InvalidPiece {
            row: 2,
            character: 'z',
        };
        assert!(format!("{}", err).contains('z'));
    }
}
