//! Static position evaluation.
//!
//! Scores are White-positive signed integers: material balance, an optional
//! next-capture term, and an optional terminal mate adjustment. All terms
//! are additive, so their order never changes the result.

pub mod material;
pub mod threats;

pub use self::material::{material, piece_value, PIECE_VALUE};
pub use self::threats::capture_threats;

use roque_core::{Color, GameState, PieceKind};

/// Terminal bonus applied to checkmates: the king's nominal value.
pub const MATE_BONUS: i32 = PIECE_VALUE[PieceKind::King.index()];

/// Static evaluator with a fixed perspective.
///
/// The perspective is the color that initiated the root search call. It is
/// captured once per turn and threaded unchanged through every node, so the
/// mate adjustment always refers to the engine's own color rather than to
/// whichever side happens to move at the evaluated node.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator {
    perspective: Color,
    mate_adjustment: bool,
    capture_threats: bool,
}

impl Evaluator {
    /// Build an evaluator for the given root perspective with both optional
    /// terms enabled.
    pub fn new(perspective: Color) -> Evaluator {
        Evaluator {
            perspective,
            mate_adjustment: true,
            capture_threats: true,
        }
    }

    /// Enable or disable the terminal mate adjustment.
    pub fn mate_adjustment(mut self, enabled: bool) -> Evaluator {
        self.mate_adjustment = enabled;
        self
    }

    /// Enable or disable the next-capture heuristic.
    pub fn capture_threats(mut self, enabled: bool) -> Evaluator {
        self.capture_threats = enabled;
        self
    }

    /// The fixed root perspective.
    pub fn perspective(&self) -> Color {
        self.perspective
    }

    /// Score the position, White-positive.
    pub fn evaluate<G: GameState>(&self, state: &G) -> i32 {
        let mut total = material(state);

        if self.capture_threats {
            total += capture_threats(state);
        }

        if self.mate_adjustment && state.is_checkmate() {
            // The side to move is the side that got mated.
            let sign = self.perspective.sign();
            total += if state.side_to_move() == self.perspective {
                -(MATE_BONUS * sign)
            } else {
                MATE_BONUS * sign
            };
        }

        total
    }
}

#[cfg(test)]
mod tests {
    use super::{Evaluator, MATE_BONUS};
    use roque_core::{Board, Color};

    #[test]
    fn starting_position_scores_zero() {
        let board = Board::starting_position();
        assert_eq!(Evaluator::new(Color::White).evaluate(&board), 0);
        assert_eq!(Evaluator::new(Color::Black).evaluate(&board), 0);
    }

    #[test]
    fn mate_against_the_engine_scores_worse_than_any_quiet_position() {
        // Black is checkmated; identical material (king + king + white queen).
        let mated: Board = "7k/6Q1/5K2/8/8/8/8/8 b - - 0 1".parse().unwrap();
        let quiet: Board = "7k/8/5K2/8/8/8/8/6Q1 b - - 0 1".parse().unwrap();

        let evaluator = Evaluator::new(Color::Black);
        // Black-POV scores: negate the White-positive convention.
        let mated_pov = -evaluator.evaluate(&mated);
        let quiet_pov = -evaluator.evaluate(&quiet);
        assert!(
            mated_pov < quiet_pov,
            "being mated ({mated_pov}) must score worse than any quiet \
             position with the same material ({quiet_pov})"
        );
    }

    #[test]
    fn mate_bonus_magnitude() {
        let mated: Board = "7k/6Q1/5K2/8/8/8/8/8 b - - 0 1".parse().unwrap();
        let evaluator = Evaluator::new(Color::White);
        let with_mate = evaluator.evaluate(&mated);
        let without_mate = evaluator.mate_adjustment(false).evaluate(&mated);
        assert_eq!(with_mate - without_mate, MATE_BONUS);
    }

    #[test]
    fn capture_threats_toggle() {
        // White queen on d4, hanging black pawn on e5: material 80, threat 5.
        let board: Board = "4k3/8/8/4p3/3Q4/8/8/4K3 w - - 0 1".parse().unwrap();
        let evaluator = Evaluator::new(Color::White);
        assert_eq!(evaluator.evaluate(&board), 85);
        assert_eq!(evaluator.capture_threats(false).evaluate(&board), 80);
    }

    #[test]
    fn stalemate_gets_no_mate_adjustment() {
        let stalemated: Board = "k7/2K5/1Q6/8/8/8/8/8 b - - 0 1".parse().unwrap();
        let evaluator = Evaluator::new(Color::White);
        // Material only: the black king has no captures and no mate applies.
        assert_eq!(evaluator.evaluate(&stalemated), 90);
    }

    #[test]
    fn terms_are_additive() {
        let board: Board = "4k3/8/8/4p3/3Q4/8/8/4K3 w - - 0 1".parse().unwrap();
        let evaluator = Evaluator::new(Color::White);
        let bare = evaluator
            .capture_threats(false)
            .mate_adjustment(false)
            .evaluate(&board);
        let threats_only = evaluator.mate_adjustment(false).evaluate(&board) - bare;
        assert_eq!(bare + threats_only, evaluator.evaluate(&board));
    }
}
