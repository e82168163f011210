//! Material balance evaluation.
//!
//! All scores are returned from White's perspective (positive = White
//! ahead).

use roque_core::{GameState, PieceKind, Square};

/// Nominal piece values indexed by [`PieceKind::index()`].
///
/// | Piece  | value |
/// |--------|-------|
/// | Pawn   |  10   |
/// | Knight |  30   |
/// | Bishop |  30   |
/// | Rook   |  50   |
/// | Queen  |  90   |
/// | King   | 900   |
///
/// The king value only matters as the terminal mate bonus; while both kings
/// survive, their contributions cancel.
pub const PIECE_VALUE: [i32; PieceKind::COUNT] = [10, 30, 30, 50, 90, 900];

/// The nominal value of one piece kind.
#[inline]
pub const fn piece_value(kind: PieceKind) -> i32 {
    PIECE_VALUE[kind.index()]
}

/// Sum the signed nominal values of every piece on the board.
///
/// The result is independent of enumeration order: each occupied square
/// contributes `value × color sign` once, and addition commutes.
pub fn material<G: GameState>(state: &G) -> i32 {
    let mut total = 0;
    for sq in Square::all() {
        if let Some(piece) = state.piece_at(sq) {
            total += piece_value(piece.kind) * piece.color.sign();
        }
    }
    total
}
