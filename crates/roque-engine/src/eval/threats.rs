//! Next-capture heuristic: a zero-recursion approximation of immediate
//! tactical threat.

use roque_core::{GameState, PieceKind};

use crate::eval::material::piece_value;

/// Score the captures available to the side to move, without applying them.
///
/// Each capture-type legal move contributes half the victim's value, signed
/// by the capturing piece's color (White-positive convention). En passant
/// victims are always pawns.
pub fn capture_threats<G: GameState>(state: &G) -> i32 {
    let mut total = 0;
    for mv in state.capture_moves() {
        let victim = if mv.is_en_passant() {
            PieceKind::Pawn
        } else {
            match state.piece_at(mv.dest()) {
                Some(piece) => piece.kind,
                None => continue,
            }
        };
        let Some(attacker) = state.piece_at(mv.source()) else {
            continue;
        };
        total += piece_value(victim) / 2 * attacker.color.sign();
    }
    total
}
