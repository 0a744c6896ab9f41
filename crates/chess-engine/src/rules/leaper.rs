//! King and knight steps. Neither can be blocked.

use chess_core::Move;

/// One cell in any direction. Moving into check is not refused here.
pub(super) fn king(mv: Move) -> bool {
    mv.row_delta().abs() <= 1 && mv.col_delta().abs() <= 1
}

/// Two cells one way and one cell the other, jumping anything in between.
pub(super) fn knight(mv: Move) -> bool {
    matches!(
        (mv.row_delta().abs(), mv.col_delta().abs()),
        (2, 1) | (1, 2)
    )
}
