//! Depth-limited minimax with alpha-beta pruning.

use roque_core::{GameState, Move};

use crate::eval::Evaluator;
use crate::search::history::HistoryTable;
use crate::search::ordering::{order_moves, SortOrder};

/// Score representing an unreachable upper/lower bound.
pub const INF: i32 = 30_000;

/// Applies a move on construction and guarantees the paired undo when
/// dropped, so every exit path out of a search node (normal return, pruning
/// break, or unwind) leaves the position exactly as it found it.
pub(crate) struct MoveGuard<'a, G: GameState> {
    state: &'a mut G,
}

impl<'a, G: GameState> MoveGuard<'a, G> {
    /// Apply `mv` to `state` and arm the undo.
    pub fn apply(state: &'a mut G, mv: Move) -> MoveGuard<'a, G> {
        state.make_move(mv);
        MoveGuard { state }
    }

    /// The mutated position, for the recursive call.
    pub fn position(&mut self) -> &mut G {
        self.state
    }
}

impl<G: GameState> Drop for MoveGuard<'_, G> {
    fn drop(&mut self) {
        self.state.undo_move();
    }
}

/// Recursive alpha-beta minimax.
///
/// Returns the White-positive score of the best line from `state`, looking
/// `depth` plies ahead. `depth == 0` and terminal positions (no legal
/// moves) evaluate statically without recursing.
///
/// Alpha and beta are handed to children unchanged: each layer keeps its
/// own bound conventions instead of negating the window the way a negamax
/// formulation would. The maximizing layer stops visiting siblings once
/// `best > beta`; the minimizing layer mirrors with `best < alpha`. This
/// propagation is load-bearing for how aggressively lines get pruned, so
/// both halves must stay exact mirrors.
pub fn alpha_beta<G: GameState>(
    state: &mut G,
    depth: u8,
    maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
    evaluator: &Evaluator,
    history: &HistoryTable,
) -> i32 {
    if depth == 0 {
        return evaluator.evaluate(state);
    }
    let moves = state.legal_moves();
    if moves.is_empty() {
        return evaluator.evaluate(state);
    }

    if maximizing {
        let mut best = -INF;
        for mv in order_moves(history, moves, SortOrder::Descending) {
            let score = {
                let mut guard = MoveGuard::apply(state, mv);
                alpha_beta(
                    guard.position(),
                    depth - 1,
                    false,
                    alpha,
                    beta,
                    evaluator,
                    history,
                )
            };
            best = best.max(score);
            if best > beta {
                break;
            }
            alpha = alpha.max(best);
        }
        best
    } else {
        let mut best = INF;
        for mv in order_moves(history, moves, SortOrder::Ascending) {
            let score = {
                let mut guard = MoveGuard::apply(state, mv);
                alpha_beta(
                    guard.position(),
                    depth - 1,
                    true,
                    alpha,
                    beta,
                    evaluator,
                    history,
                )
            };
            best = best.min(score);
            if best < alpha {
                break;
            }
            beta = beta.min(best);
        }
        best
    }
}
