//! Core types for chess.
//!
//! This crate provides the value types shared by the engine and its callers:
//! - [`Player`] for the two sides
//! - [`Piece`] and [`PieceKind`] for piece representation
//! - [`Move`] for four-coordinate move requests
//! - [`Placement`] for reading and writing board layouts as text

mod mov;
mod piece;
mod placement;
mod player;

pub use mov::{Move, MoveParseError};
pub use piece::{Piece, PieceKind};
pub use placement::{Placement, PlacementError};
pub use player::Player;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: usize = 8;
