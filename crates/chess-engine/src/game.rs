//! Game state: the board plus whose turn it is.

use crate::check;
use crate::rules;
use crate::Board;
use chess_core::{Move, Piece, Placement, PlacementError, Player, BOARD_SIZE};
use tracing::debug;

/// A game in progress.
///
/// `Game` is deliberately permissive. It answers legality questions through
/// [`is_valid_move`](Game::is_valid_move) but never enforces them: cell edits,
/// move application and turn changes all succeed unconditionally. Sequencing
/// (validate, apply, then pass the turn) is the caller's job.
///
/// Castling, en passant, promotion, stalemate and repetition are not
/// implemented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    player: Player,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a game in the standard opening position with White to move.
    pub fn new() -> Self {
        Game {
            board: Board::standard(),
            player: Player::White,
        }
    }

    /// Creates a game from an existing board.
    pub fn from_board(board: Board, player: Player) -> Self {
        Game { board, player }
    }

    /// Creates a game from a placement string.
    pub fn from_placement(s: &str) -> Result<Self, PlacementError> {
        let placement = Placement::parse(s)?;
        Ok(Game {
            board: Board::from(&placement),
            player: placement.to_move,
        })
    }

    /// Returns the position as a placement.
    pub fn to_placement(&self) -> Placement {
        self.board.to_placement(self.player)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Always 8.
    pub const fn num_rows(&self) -> usize {
        BOARD_SIZE
    }

    /// Always 8.
    pub const fn num_columns(&self) -> usize {
        BOARD_SIZE
    }

    /// Returns the contents of a cell.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `column` is 8 or more.
    pub fn piece_at(&self, row: usize, column: usize) -> Option<Piece> {
        self.board.piece_at(row, column)
    }

    /// Overwrites a cell without any checks.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `column` is 8 or more.
    pub fn set_piece(&mut self, row: usize, column: usize, piece: Option<Piece>) {
        self.board.set_piece(row, column, piece);
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.player
    }

    /// Passes the turn to the other player, whether or not a move was made.
    pub fn set_next_player(&mut self) {
        self.player = self.player.next();
    }

    /// Returns true if the piece on the move's source cell may make the move.
    ///
    /// An empty or off-board source cell is never valid. The owner of the
    /// piece is not compared with the current player.
    pub fn is_valid_move(&self, mv: Move) -> bool {
        match self.board.at(mv.from_row(), mv.from_col()) {
            Some(piece) => rules::is_legal(piece, mv, &self.board),
            None => false,
        }
    }

    /// Moves the piece on the source cell to the destination cell, capturing
    /// whatever stood there.
    ///
    /// No legality check is made; call [`is_valid_move`](Game::is_valid_move)
    /// first. The turn is not passed.
    ///
    /// # Panics
    ///
    /// Panics if either cell lies off the board.
    pub fn apply_move(&mut self, mv: Move) {
        let captured = self.board.at(mv.to_row(), mv.to_col());
        debug!(%mv, player = %self.player, ?captured, "applying move");
        self.board.relocate(mv);
    }

    /// Returns true if `player`'s king is attacked.
    pub fn in_check(&self, player: Player) -> bool {
        check::in_check(&self.board, player)
    }

    /// Returns true if `player` is checkmated.
    ///
    /// Returns false whenever `player` is not in check, including stalemate.
    /// Candidate moves are tried on the board and undone, so the position is
    /// unchanged afterwards.
    pub fn is_complete(&mut self, player: Player) -> bool {
        check::is_checkmate(&mut self.board, player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_game() {
        let game = Game::new();
        assert_eq!(game.current_player(), Player::White);
        assert_eq!(game.num_rows(), 8);
        assert_eq!(game.num_columns(), 8);
        assert_eq!(game.board(), &Board::standard());
        assert!(!game.in_check(Player::White));
        assert!(!game.in_check(Player::Black));
    }

    #[test]
    fn turn_toggles_unconditionally() {
        let mut game = Game::new();
        game.set_next_player();
        assert_eq!(game.current_player(), Player::Black);
        game.set_next_player();
        assert_eq!(game.current_player(), Player::White);
    }

    #[test]
    fn set_piece_and_piece_at() {
        let mut game = Game::new();
        let king = Piece::king(Player::Black);
        game.set_piece(4, 4, Some(king));
        assert_eq!(game.piece_at(4, 4), Some(king));
        game.set_piece(4, 4, None);
        assert_eq!(game.piece_at(4, 4), None);
    }

    #[test]
    fn empty_source_is_never_valid() {
        let game = Game::new();
        assert!(!game.is_valid_move(Move::new(4, 4, 3, 4)));
        assert!(!game.is_valid_move(Move::new(-1, 0, 0, 0)));
    }

    #[test]
    fn validity_ignores_whose_turn_it_is() {
        let game = Game::new();
        assert_eq!(game.current_player(), Player::White);
        assert!(game.is_valid_move(Move::new(1, 4, 3, 4)));
    }

    #[test]
    fn apply_move_relocates_and_keeps_turn() {
        let mut game = Game::new();
        let mv = Move::new(6, 4, 4, 4);
        assert!(game.is_valid_move(mv));
        game.apply_move(mv);
        assert_eq!(game.piece_at(6, 4), None);
        assert_eq!(game.piece_at(4, 4), Some(Piece::pawn(Player::White)));
        assert_eq!(game.current_player(), Player::White);
    }

    #[test]
    fn apply_move_is_unchecked() {
        let mut game = Game::new();
        let mv = Move::new(7, 3, 1, 3);
        assert!(!game.is_valid_move(mv));
        game.apply_move(mv);
        assert_eq!(game.piece_at(1, 3), Some(Piece::queen(Player::White)));
        assert_eq!(game.board().piece_count(), 31);
    }

    #[test]
    fn from_placement_reads_side_to_move() {
        let game = Game::from_placement("4k3/8/8/8/8/8/8/4K3 b").unwrap();
        assert_eq!(game.current_player(), Player::Black);
        assert_eq!(game.board().piece_count(), 2);
        assert_eq!(game.to_placement().to_string(), "4k3/8/8/8/8/8/8/4K3 b");
        assert!(Game::from_placement("nonsense").is_err());
    }

    #[test]
    fn fools_mate() {
        let mut game = Game::new();
        for text in ["f2f3", "e7e5", "g2g4", "d8h4"] {
            let mv: Move = text.parse().unwrap();
            assert!(game.is_valid_move(mv), "{text}");
            game.apply_move(mv);
            game.set_next_player();
        }
        assert_eq!(game.current_player(), Player::White);
        assert!(game.in_check(Player::White));
        assert!(game.is_complete(Player::White));
        assert!(!game.is_complete(Player::Black));
    }

    #[test]
    fn check_with_king_escape_is_not_complete() {
        let mut game = Game::from_placement("4k3/8/8/8/8/8/8/r3K3").unwrap();
        assert!(game.in_check(Player::White));
        assert!(!game.is_complete(Player::White));
    }
}
