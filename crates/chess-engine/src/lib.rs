//! Chess rules engine on an 8×8 board.
//!
//! This crate provides:
//! - [`Board`] - the grid of cells, editable without restriction
//! - [`Game`] - a board plus the player to move
//! - [`rules::is_legal`] - movement legality for each kind of piece
//! - [`check`] - check detection and the checkmate search
//! - [`movegen::candidate_moves`] - every move a player's pieces may make
//! - [`MoveSelector`] - the interface a computer player implements
//!
//! # Usage
//!
//! The engine validates but never enforces. A controller asks
//! [`Game::is_valid_move`], applies the move with [`Game::apply_move`] and
//! passes the turn with [`Game::set_next_player`], then asks about check and
//! checkmate for the side now to move.
//!
//! ```
//! use chess_core::{Move, Player};
//! use chess_engine::Game;
//!
//! let mut game = Game::new();
//! for text in ["f2f3", "e7e5", "g2g4", "d8h4"] {
//!     let mv: Move = text.parse().unwrap();
//!     assert!(game.is_valid_move(mv));
//!     game.apply_move(mv);
//!     game.set_next_player();
//! }
//! assert!(game.in_check(Player::White));
//! assert!(game.is_complete(Player::White));
//! ```
//!
//! Castling, en passant, promotion, stalemate and repetition draws are not
//! part of these rules.

mod board;
pub mod check;
mod game;
pub mod movegen;
pub mod rules;
mod selector;
mod simulate;

pub use board::Board;
pub use check::{in_check, is_checkmate};
pub use game::Game;
pub use movegen::candidate_moves;
pub use selector::MoveSelector;
pub use simulate::Simulation;
