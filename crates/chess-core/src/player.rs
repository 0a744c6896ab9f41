//! Player identity.

use std::fmt;

/// The two sides of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Player {
    White = 0,
    Black = 1,
}

impl Player {
    /// Both players, White first.
    pub const ALL: [Player; 2] = [Player::White, Player::Black];

    /// Returns the player who moves after this one.
    #[inline]
    pub const fn next(self) -> Self {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    /// Returns the row step a pawn of this player takes when advancing.
    ///
    /// Row 0 is at the top of the board, so White advances toward lower rows.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Player::White => -1,
            Player::Black => 1,
        }
    }

    /// Returns the row this player's pawns start on (6 for White, 1 for Black).
    #[inline]
    pub const fn home_rank(self) -> i8 {
        match self {
            Player::White => 6,
            Player::Black => 1,
        }
    }

    /// Returns the row this player's major pieces start on.
    #[inline]
    pub const fn back_rank(self) -> i8 {
        match self {
            Player::White => 7,
            Player::Black => 0,
        }
    }

    /// Returns the side letter used in placement notation.
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Player::White => 'w',
            Player::Black => 'b',
        }
    }

    /// Parses a side letter (`w` or `b`).
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'w' | 'W' => Some(Player::White),
            'b' | 'B' => Some(Player::Black),
            _ => None,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::White => write!(f, "White"),
            Player::Black => write!(f, "Black"),
        }
    }
}
