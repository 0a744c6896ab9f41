//! Chess piece representation.

use crate::Player;
use std::fmt;

/// The six kinds of chess pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceKind {
    /// All piece kinds in order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Returns the lower-case placement letter for this kind.
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Returns true for pieces whose moves can be blocked along a line.
    #[inline]
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        };
        write!(f, "{}", name)
    }
}

/// A piece on the board: its kind and the player who owns it.
///
/// Pieces carry no other state. In particular there is no "has moved" flag,
/// so pawn double steps are decided purely from the row a pawn stands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    owner: Player,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, owner: Player) -> Self {
        Piece { kind, owner }
    }

    #[inline]
    pub const fn pawn(owner: Player) -> Self {
        Self::new(PieceKind::Pawn, owner)
    }

    #[inline]
    pub const fn knight(owner: Player) -> Self {
        Self::new(PieceKind::Knight, owner)
    }

    #[inline]
    pub const fn bishop(owner: Player) -> Self {
        Self::new(PieceKind::Bishop, owner)
    }

    #[inline]
    pub const fn rook(owner: Player) -> Self {
        Self::new(PieceKind::Rook, owner)
    }

    #[inline]
    pub const fn queen(owner: Player) -> Self {
        Self::new(PieceKind::Queen, owner)
    }

    #[inline]
    pub const fn king(owner: Player) -> Self {
        Self::new(PieceKind::King, owner)
    }

    #[inline]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub const fn owner(self) -> Player {
        self.owner
    }

    /// Returns the placement letter: upper case for White, lower case for Black.
    pub const fn to_char(self) -> char {
        let c = self.kind.letter();
        match self.owner {
            Player::White => c.to_ascii_uppercase(),
            Player::Black => c,
        }
    }

    /// Parses a placement letter into a piece.
    pub const fn from_char(c: char) -> Option<Self> {
        let owner = if c.is_ascii_uppercase() {
            Player::White
        } else {
            Player::Black
        };
        let kind = match c.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        Some(Piece::new(kind, owner))
    }

    /// Returns the Unicode chess glyph for this piece.
    pub const fn glyph(self) -> char {
        match (self.owner, self.kind) {
            (Player::White, PieceKind::King) => '♔',
            (Player::White, PieceKind::Queen) => '♕',
            (Player::White, PieceKind::Rook) => '♖',
            (Player::White, PieceKind::Bishop) => '♗',
            (Player::White, PieceKind::Knight) => '♘',
            (Player::White, PieceKind::Pawn) => '♙',
            (Player::Black, PieceKind::King) => '♚',
            (Player::Black, PieceKind::Queen) => '♛',
            (Player::Black, PieceKind::Rook) => '♜',
            (Player::Black, PieceKind::Bishop) => '♝',
            (Player::Black, PieceKind::Knight) => '♞',
            (Player::Black, PieceKind::Pawn) => '♟',
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.owner, self.kind)
    }
}
