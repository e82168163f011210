//! Move selection engine: static evaluation, history-ordered alpha-beta
//! search, and a per-match selector that owns the learned state.

pub mod eval;
pub mod search;

pub use crate::eval::{capture_threats, material, piece_value, Evaluator, MATE_BONUS, PIECE_VALUE};
pub use crate::search::alpha_beta::{alpha_beta, INF};
pub use crate::search::history::HistoryTable;
pub use crate::search::ordering::{order_moves, SortOrder};
pub use crate::search::{Decision, MoveSelector, SelectError, DEFAULT_DEPTH};
