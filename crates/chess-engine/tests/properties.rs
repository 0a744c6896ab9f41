//! Property tests over arbitrary boards and moves.

use chess_core::{Move, Piece, PieceKind, Player};
use chess_engine::{candidate_moves, rules, Board, Game};
use proptest::prelude::*;

fn player() -> impl Strategy<Value = Player> {
    prop_oneof![Just(Player::White), Just(Player::Black)]
}

fn piece() -> impl Strategy<Value = Piece> {
    (0..PieceKind::ALL.len(), player()).prop_map(|(kind, owner)| Piece::new(PieceKind::ALL[kind], owner))
}

/// Boards with roughly a quarter of the cells occupied, kings or not.
fn board() -> impl Strategy<Value = Board> {
    prop::collection::vec(prop::option::weighted(0.25, piece()), 64).prop_map(|cells| {
        let mut board = Board::empty();
        for (i, cell) in cells.into_iter().enumerate() {
            board.set_piece(i / 8, i % 8, cell);
        }
        board
    })
}

/// Moves with coordinates reaching a little past each edge.
fn any_move() -> impl Strategy<Value = Move> {
    (-2i8..10, -2i8..10, -2i8..10, -2i8..10).prop_map(|(fr, fc, tr, tc)| Move::new(fr, fc, tr, tc))
}

proptest! {
    #[test]
    fn common_rejections_hold_for_every_piece(
        piece in piece(),
        board in board(),
        mv in any_move(),
    ) {
        let target = board.at(mv.to_row(), mv.to_col());
        let self_capture = target.is_some_and(|t| t.owner() == piece.owner());
        if mv.is_null() || !mv.is_on_board() || self_capture {
            prop_assert!(!rules::is_legal(piece, mv, &board));
        }
    }

    #[test]
    fn is_valid_move_is_pure(board in board(), to_move in player(), mv in any_move()) {
        let game = Game::from_board(board, to_move);
        let before = game.clone();
        let first = game.is_valid_move(mv);
        for _ in 0..3 {
            prop_assert_eq!(game.is_valid_move(mv), first);
        }
        prop_assert_eq!(&game, &before);
    }

    #[test]
    fn checkmate_search_restores_board(board in board(), player in player()) {
        let mut game = Game::from_board(board, player);
        let before = game.clone();
        let complete = game.is_complete(player);
        prop_assert_eq!(&game, &before);
        if complete {
            prop_assert!(game.in_check(player));
        }
    }

    #[test]
    fn candidates_are_valid_moves_of_own_pieces(board in board(), player in player()) {
        let game = Game::from_board(board, player);
        for mv in candidate_moves(game.board(), player) {
            prop_assert!(game.is_valid_move(mv));
            let piece = game.piece_at(mv.from_row() as usize, mv.from_col() as usize);
            prop_assert_eq!(piece.map(|p| p.owner()), Some(player));
        }
    }
}
