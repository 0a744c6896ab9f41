//! Turn sequencing on top of the rules engine.
//!
//! The engine only answers questions; a [`Session`] enforces the order of
//! play: the mover must own the piece, the move must be valid and must not
//! leave the mover's king attacked, and only then is it applied and the turn
//! passed.

use chess_core::{Move, Player};
use chess_engine::{candidate_moves, in_check, Game, Simulation};
use thiserror::Error;
use tracing::{debug, info};

/// Where the side to move stands after the last move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Normal,
    Check,
    Checkmate,
}

/// Reasons a move is refused.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("illegal move: {0}")]
    IllegalMove(Move),

    #[error("{mv}: that piece does not belong to {player}")]
    NotYourPiece { mv: Move, player: Player },

    #[error("{mv} would leave the {player} king in check")]
    LeavesKingInCheck { mv: Move, player: Player },

    #[error("the game is over: {0} is checkmated")]
    GameOver(Player),
}

/// A game being played turn by turn.
#[derive(Debug, Clone)]
pub struct Session {
    game: Game,
    status: Status,
}

impl Session {
    /// Starts a session from any position. The position may already be
    /// check or checkmate for the side to move.
    pub fn new(game: Game) -> Self {
        let mut session = Session {
            game,
            status: Status::Normal,
        };
        session.status = session.evaluate();
        session
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Status of the side to move.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Plays a move for the current player.
    ///
    /// # Errors
    ///
    /// Refuses moves after checkmate, moves of the opponent's pieces, moves
    /// the engine rejects, and moves that leave the mover in check. A refused
    /// move changes nothing.
    pub fn play(&mut self, mv: Move) -> Result<Status, SessionError> {
        let player = self.game.current_player();
        if self.status == Status::Checkmate {
            return Err(SessionError::GameOver(player));
        }

        if let Some(piece) = self.game.board().at(mv.from_row(), mv.from_col()) {
            if piece.owner() != player {
                return Err(SessionError::NotYourPiece { mv, player });
            }
        }
        if !self.game.is_valid_move(mv) {
            return Err(SessionError::IllegalMove(mv));
        }
        if leaves_in_check(&self.game, mv) {
            return Err(SessionError::LeavesKingInCheck { mv, player });
        }

        self.game.apply_move(mv);
        self.game.set_next_player();
        self.status = self.evaluate();

        info!(%player, %mv, status = ?self.status, "move played");
        Ok(self.status)
    }

    fn evaluate(&mut self) -> Status {
        let player = self.game.current_player();
        if self.game.is_complete(player) {
            Status::Checkmate
        } else if self.game.in_check(player) {
            Status::Check
        } else {
            Status::Normal
        }
    }
}

/// Returns the moves a [`Session`] would accept for the current player.
pub fn playable_moves(game: &Game) -> Vec<Move> {
    let moves: Vec<Move> = candidate_moves(game.board(), game.current_player())
        .into_iter()
        .filter(|&mv| !leaves_in_check(game, mv))
        .collect();
    debug!(player = %game.current_player(), count = moves.len(), "playable moves");
    moves
}

fn leaves_in_check(game: &Game, mv: Move) -> bool {
    let player = game.current_player();
    let mut scratch = game.board().clone();
    let after = Simulation::apply(&mut scratch, mv);
    in_check(&after, player)
}
