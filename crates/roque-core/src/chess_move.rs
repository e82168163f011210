//! Move representation: an atomic transition between positions.

use std::fmt;

use crate::piece::PieceKind;
use crate::square::Square;

/// What a move does beyond relocating a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveFlag {
    /// Plain relocation, nothing captured.
    Quiet,
    /// Two-square pawn advance (sets the en passant target).
    DoublePush,
    /// Capture of the piece on the destination square.
    Capture,
    /// En passant capture; the victim pawn sits beside the destination.
    EnPassant,
    /// Castling, encoded by the king's source and destination squares.
    Castle,
    /// Pawn promotion without capture.
    Promotion(PieceKind),
    /// Pawn promotion that also captures on the destination square.
    PromotionCapture(PieceKind),
}

/// An atomic move: source, destination, and a flag for special effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    source: Square,
    dest: Square,
    flag: MoveFlag,
}

/// Canonical history key for a move: source, destination, and promotion
/// piece only.
///
/// Capture-ness and castling are deliberately excluded, so the same key can
/// describe structurally different moves in unrelated positions. That
/// collision is an accepted approximation of the outcome-history heuristic,
/// not a defect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveKey {
    pub source: Square,
    pub dest: Square,
    pub promotion: Option<PieceKind>,
}

impl Move {
    /// Build a move.
    #[inline]
    pub const fn new(source: Square, dest: Square, flag: MoveFlag) -> Move {
        Move { source, dest, flag }
    }

    /// The square the piece leaves.
    #[inline]
    pub const fn source(self) -> Square {
        self.source
    }

    /// The square the piece lands on.
    #[inline]
    pub const fn dest(self) -> Square {
        self.dest
    }

    /// The move's flag.
    #[inline]
    pub const fn flag(self) -> MoveFlag {
        self.flag
    }

    /// Return `true` if this move removes an enemy piece.
    #[inline]
    pub const fn is_capture(self) -> bool {
        matches!(
            self.flag,
            MoveFlag::Capture | MoveFlag::EnPassant | MoveFlag::PromotionCapture(_)
        )
    }

    /// Return `true` if this is an en passant capture.
    #[inline]
    pub const fn is_en_passant(self) -> bool {
        matches!(self.flag, MoveFlag::EnPassant)
    }

    /// Return `true` if this is a castling move.
    #[inline]
    pub const fn is_castle(self) -> bool {
        matches!(self.flag, MoveFlag::Castle)
    }

    /// The piece a promoting pawn turns into, if any.
    #[inline]
    pub const fn promotion(self) -> Option<PieceKind> {
        match self.flag {
            MoveFlag::Promotion(kind) | MoveFlag::PromotionCapture(kind) => Some(kind),
            _ => None,
        }
    }

    /// The canonical history key for this move.
    #[inline]
    pub const fn key(self) -> MoveKey {
        MoveKey {
            source: self.source,
            dest: self.dest,
            promotion: self.promotion(),
        }
    }
}

impl fmt::Display for Move {
    /// UCI-style text: `e2e4`, `e7e8q`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.source, self.dest)?;
        if let Some(kind) = self.promotion() {
            write!(f, "{}", kind.fen_char())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{Move, MoveFlag, MoveKey};
    use crate::piece::PieceKind;
    use crate::square::Square;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn accessors() {
        let mv = Move::new(sq("e2"), sq("e4"), MoveFlag::DoublePush);
        assert_eq!(mv.source(), sq("e2"));
        assert_eq!(mv.dest(), sq("e4"));
        assert_eq!(mv.flag(), MoveFlag::DoublePush);
        assert!(!mv.is_capture());
        assert_eq!(mv.promotion(), None);
    }

    #[test]
    fn capture_flags() {
        assert!(Move::new(sq("d4"), sq("e5"), MoveFlag::Capture).is_capture());
        assert!(Move::new(sq("e5"), sq("d6"), MoveFlag::EnPassant).is_capture());
        assert!(
            Move::new(sq("g7"), sq("h8"), MoveFlag::PromotionCapture(PieceKind::Queen))
                .is_capture()
        );
        assert!(!Move::new(sq("e1"), sq("g1"), MoveFlag::Castle).is_capture());
    }

    #[test]
    fn key_ignores_capture_distinction() {
        let quiet = Move::new(sq("d4"), sq("e5"), MoveFlag::Quiet);
        let capture = Move::new(sq("d4"), sq("e5"), MoveFlag::Capture);
        assert_eq!(quiet.key(), capture.key());
    }

    #[test]
    fn key_distinguishes_promotions() {
        let queen = Move::new(sq("e7"), sq("e8"), MoveFlag::Promotion(PieceKind::Queen));
        let knight = Move::new(sq("e7"), sq("e8"), MoveFlag::Promotion(PieceKind::Knight));
        assert_ne!(queen.key(), knight.key());

        let mut set = HashSet::new();
        set.insert(queen.key());
        set.insert(knight.key());
        set.insert(queen.key());
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn promotion_key_matches_capture_promotion() {
        let push = Move::new(sq("e7"), sq("e8"), MoveFlag::Promotion(PieceKind::Queen));
        let take = Move::new(
            sq("e7"),
            sq("e8"),
            MoveFlag::PromotionCapture(PieceKind::Queen),
        );
        assert_eq!(push.key(), take.key());
    }

    #[test]
    fn display_uci() {
        assert_eq!(
            Move::new(sq("e2"), sq("e4"), MoveFlag::Quiet).to_string(),
            "e2e4"
        );
        assert_eq!(
            Move::new(sq("e7"), sq("e8"), MoveFlag::Promotion(PieceKind::Queen)).to_string(),
            "e7e8q"
        );
        assert_eq!(
            Move::new(sq("e1"), sq("g1"), MoveFlag::Castle).to_string(),
            "e1g1"
        );
    }

    #[test]
    fn key_is_usable_as_map_key() {
        let mut set: HashSet<MoveKey> = HashSet::new();
        set.insert(Move::new(sq("e2"), sq("e4"), MoveFlag::Quiet).key());
        set.insert(Move::new(sq("e2"), sq("e4"), MoveFlag::DoublePush).key());
        // Same source/dest/promotion: one key.
        assert_eq!(set.len(), 1);
    }
}
