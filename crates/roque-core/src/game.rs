//! The game-state interface consumed by the search layers.

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::piece::Piece;
use crate::square::Square;

/// Minimal contract a position service must satisfy for the search to run
/// on it.
///
/// The position is a single mutable resource: every [`GameState::make_move`]
/// must eventually be reverted by exactly one [`GameState::undo_move`], in
/// LIFO order, before control returns to the caller that applied it.
pub trait GameState {
    /// All legal moves for the side to move.
    fn legal_moves(&self) -> Vec<Move>;

    /// The capture-only subset of [`GameState::legal_moves`].
    fn capture_moves(&self) -> Vec<Move>;

    /// Apply a move in place.
    fn make_move(&mut self, mv: Move);

    /// Revert the most recently applied move in place (strict LIFO).
    fn undo_move(&mut self);

    /// The color whose turn it is.
    fn side_to_move(&self) -> Color;

    /// The piece occupying a square, if any.
    fn piece_at(&self, sq: Square) -> Option<Piece>;

    /// Return `true` if the side to move is checkmated.
    fn is_checkmate(&self) -> bool;

    /// Return `true` if the side to move has no legal moves
    /// (checkmate or stalemate).
    fn is_terminal(&self) -> bool;
}

impl GameState for Board {
    fn legal_moves(&self) -> Vec<Move> {
        Board::legal_moves(self)
    }

    fn capture_moves(&self) -> Vec<Move> {
        Board::capture_moves(self)
    }

    fn make_move(&mut self, mv: Move) {
        Board::make_move(self, mv);
    }

    fn undo_move(&mut self) {
        Board::undo_move(self);
    }

    fn side_to_move(&self) -> Color {
        Board::side_to_move(self)
    }

    fn piece_at(&self, sq: Square) -> Option<Piece> {
        Board::piece_at(self, sq)
    }

    fn is_checkmate(&self) -> bool {
        Board::is_checkmate(self)
    }

    fn is_terminal(&self) -> bool {
        Board::is_terminal(self)
    }
}

#[cfg(test)]
mod tests {
    use super::GameState;
    use crate::board::Board;

    #[test]
    fn board_satisfies_the_contract() {
        fn run<G: GameState>(state: &mut G) -> usize {
            let moves = state.legal_moves();
            for &mv in &moves {
                state.make_move(mv);
                state.undo_move();
            }
            moves.len()
        }

        let mut board = Board::starting_position();
        let before = board.clone();
        assert_eq!(run(&mut board), 20);
        assert_eq!(board, before);
    }
}
