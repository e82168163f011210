//! Per-turn move selection on top of the alpha-beta core.

pub mod alpha_beta;
pub mod history;
pub mod ordering;

use std::time::{Duration, Instant};

use rand::seq::SliceRandom;
use tracing::{debug, info};

use roque_core::{Color, GameState, Move};

use crate::eval::Evaluator;
use self::alpha_beta::{alpha_beta, MoveGuard, INF};
use self::history::HistoryTable;

/// Default number of plies searched per turn (root move included).
pub const DEFAULT_DEPTH: u8 = 4;

/// Initial alpha/beta window handed to each root child search.
const ROOT_WINDOW: i32 = 1_000;

/// The selector was invoked on a position with no legal moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SelectError {
    #[error("no legal moves to choose from")]
    NoLegalMoves,
}

/// Outcome of one decided turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    /// The move to play.
    pub best_move: Move,
    /// Search score of the chosen line, White-positive.
    pub score: i32,
    /// Static evaluation of the position before the move.
    pub static_eval: i32,
}

/// Per-match engine state: the outcome history plus the previous turn's
/// move and evaluation.
///
/// Constructed once per match, updated exactly once per real turn, and
/// read-only while a search is running.
#[derive(Debug, Clone)]
pub struct MoveSelector {
    depth: u8,
    history: HistoryTable,
    last_move: Option<Move>,
    last_eval: i32,
}

impl MoveSelector {
    /// Create a selector searching `depth` plies per turn (minimum 1: the
    /// root move itself).
    pub fn new(depth: u8) -> MoveSelector {
        MoveSelector {
            depth: depth.max(1),
            history: HistoryTable::new(),
            last_move: None,
            last_eval: 0,
        }
    }

    /// The accumulated outcome history.
    pub fn history(&self) -> &HistoryTable {
        &self.history
    }

    /// Pick one legal move for the side to move.
    ///
    /// The time budget is advisory only: it is logged for the host but the
    /// search always runs to the configured depth. Root moves are compared
    /// with `>=` (or `<=` when minimizing), so exact ties go to the
    /// later-enumerated move.
    pub fn choose_move<G: GameState>(
        &mut self,
        state: &mut G,
        budget: Duration,
    ) -> Result<Decision, SelectError> {
        let started = Instant::now();

        let moves = state.legal_moves();
        if moves.is_empty() {
            return Err(SelectError::NoLegalMoves);
        }

        // The engine's color for this turn, fixed for the whole search.
        let engine_color = state.side_to_move();
        let evaluator = Evaluator::new(engine_color);
        let static_eval = evaluator.evaluate(state);

        // Fold the previous real turn's outcome into the history before
        // searching. This is the only write the table ever sees.
        if let Some(last) = self.last_move {
            self.history.record(last.key(), self.last_eval - static_eval);
        }

        let maximizing = engine_color == Color::White;
        let mut best_move: Option<Move> = None;
        let mut best_score = if maximizing { -INF } else { INF };

        for &mv in &moves {
            let score = {
                let mut guard = MoveGuard::apply(state, mv);
                alpha_beta(
                    guard.position(),
                    self.depth - 1,
                    !maximizing,
                    -ROOT_WINDOW,
                    ROOT_WINDOW,
                    &evaluator,
                    &self.history,
                )
            };
            debug!(%mv, score, "root move scored");

            let improves = if maximizing {
                score >= best_score
            } else {
                score <= best_score
            };
            if improves {
                best_score = score;
                best_move = Some(mv);
            }
        }

        // Degenerate case: nothing beat the sentinel. Any legal move keeps
        // the game going.
        let best_move = match best_move {
            Some(mv) => mv,
            None => {
                let mut rng = rand::thread_rng();
                moves.choose(&mut rng).copied().unwrap_or(moves[0])
            }
        };

        self.last_move = Some(best_move);
        self.last_eval = static_eval;

        info!(
            color = %engine_color,
            static_eval,
            score = best_score,
            chosen = %best_move,
            elapsed_ms = started.elapsed().as_millis() as u64,
            budget_ms = budget.as_millis() as u64,
            "move selected"
        );

        Ok(Decision {
            best_move,
            score: best_score,
            static_eval,
        })
    }
}

impl Default for MoveSelector {
    fn default() -> MoveSelector {
        MoveSelector::new(DEFAULT_DEPTH)
    }
}
