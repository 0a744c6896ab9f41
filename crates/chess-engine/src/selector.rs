//! The seam for computer players.

use crate::Game;
use chess_core::Move;

/// Chooses a move for the player whose turn it is.
///
/// A selector only reads the game: it may inspect cells and the current
/// player, and probe [`Game::is_valid_move`] or
/// [`candidate_moves`](crate::movegen::candidate_moves). Applying the chosen
/// move and passing the turn is left to the caller, exactly as for a human
/// move. Returning `None` means the selector has nothing to play.
///
/// The engine ships no strategy of its own.
pub trait MoveSelector {
    fn select(&mut self, game: &Game) -> Option<Move>;
}

impl<F> MoveSelector for F
where
    F: FnMut(&Game) -> Option<Move>,
{
    fn select(&mut self, game: &Game) -> Option<Move> {
        self(game)
    }
}
