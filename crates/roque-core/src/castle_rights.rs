//! Castling rights, tracked as four independent flags.

use std::fmt;

use crate::color::Color;
use crate::square::Square;

/// Which wing a castle happens on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

const WHITE_KINGSIDE: u8 = 0b0001;
const WHITE_QUEENSIDE: u8 = 0b0010;
const BLACK_KINGSIDE: u8 = 0b0100;
const BLACK_QUEENSIDE: u8 = 0b1000;

/// The four castling rights packed into one byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastleRights(u8);

impl CastleRights {
    /// No castling allowed.
    pub const NONE: CastleRights = CastleRights(0);

    /// All four rights available.
    pub const ALL: CastleRights = CastleRights(0b1111);

    const fn bit(color: Color, side: CastleSide) -> u8 {
        match (color, side) {
            (Color::White, CastleSide::Kingside) => WHITE_KINGSIDE,
            (Color::White, CastleSide::Queenside) => WHITE_QUEENSIDE,
            (Color::Black, CastleSide::Kingside) => BLACK_KINGSIDE,
            (Color::Black, CastleSide::Queenside) => BLACK_QUEENSIDE,
        }
    }

    /// Return `true` if the given side may still castle on the given wing.
    #[inline]
    pub const fn allows(self, color: Color, side: CastleSide) -> bool {
        self.0 & Self::bit(color, side) != 0
    }

    /// Grant one right.
    #[inline]
    pub fn grant(&mut self, color: Color, side: CastleSide) {
        self.0 |= Self::bit(color, side);
    }

    /// Remove one right.
    #[inline]
    pub fn revoke(&mut self, color: Color, side: CastleSide) {
        self.0 &= !Self::bit(color, side);
    }

    /// Remove every right that depends on the given square: the king home
    /// squares clear both rights of that side, the rook home squares clear
    /// one. Called for both ends of every move, so rook captures revoke the
    /// victim's right too.
    pub(crate) fn discard_for_square(&mut self, sq: Square) {
        match (sq.file(), sq.rank()) {
            (4, 0) => self.0 &= !(WHITE_KINGSIDE | WHITE_QUEENSIDE),
            (7, 0) => self.0 &= !WHITE_KINGSIDE,
            (0, 0) => self.0 &= !WHITE_QUEENSIDE,
            (4, 7) => self.0 &= !(BLACK_KINGSIDE | BLACK_QUEENSIDE),
            (7, 7) => self.0 &= !BLACK_KINGSIDE,
            (0, 7) => self.0 &= !BLACK_QUEENSIDE,
            _ => {}
        }
    }
}

impl fmt::Display for CastleRights {
    /// FEN castling field: `KQkq`, a subset, or `-`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == CastleRights::NONE {
            return write!(f, "-");
        }
        if self.0 & WHITE_KINGSIDE != 0 {
            write!(f, "K")?;
        }
        if self.0 & WHITE_QUEENSIDE != 0 {
            write!(f, "Q")?;
        }
        if self.0 & BLACK_KINGSIDE != 0 {
            write!(f, "k")?;
        }
        if self.0 & BLACK_QUEENSIDE != 0 {
            write!(f, "q")?;
        }
        Ok(())
    }
}
