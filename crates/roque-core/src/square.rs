//! Board squares, indexed 0..64 with a1 = 0 and h8 = 63 (rank-major).

use std::fmt;
use std::str::FromStr;

use crate::error::FenError;

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// Build a square from file (0 = a) and rank (0 = 1).
    ///
    /// # Panics
    ///
    /// Debug-asserts that both coordinates are below 8.
    #[inline]
    pub const fn new(file: u8, rank: u8) -> Square {
        debug_assert!(file < 8 && rank < 8);
        Square(rank * 8 + file)
    }

    /// Build a square from a raw index, or `None` if out of range.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Square> {
        if index < 64 { Some(Square(index)) } else { None }
    }

    /// Return the raw index (0..64).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Return the file (0 = a, 7 = h).
    #[inline]
    pub const fn file(self) -> u8 {
        self.0 % 8
    }

    /// Return the rank (0 = first rank, 7 = eighth rank).
    #[inline]
    pub const fn rank(self) -> u8 {
        self.0 / 8
    }

    /// Iterate over all 64 squares in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square)
    }

    /// Offset this square by file and rank deltas, or `None` if the result
    /// leaves the board.
    #[inline]
    pub fn offset(self, file_delta: i8, rank_delta: i8) -> Option<Square> {
        let file = self.file() as i8 + file_delta;
        let rank = self.rank() as i8 + rank_delta;
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Square::new(file as u8, rank as u8))
        } else {
            None
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            (b'a' + self.file()) as char,
            (b'1' + self.rank()) as char
        )
    }
}

impl FromStr for Square {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Square, FenError> {
        let bytes = s.as_bytes();
        if bytes.len() == 2
            && (b'a'..=b'h').contains(&bytes[0])
            && (b'1'..=b'8').contains(&bytes[1])
        {
            Ok(Square::new(bytes[0] - b'a', bytes[1] - b'1'))
        } else {
            Err(FenError::InvalidSquare {
                found: s.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Square;

    #[test]
    fn index_layout() {
        assert_eq!(Square::new(0, 0).index(), 0); // a1
        assert_eq!(Square::new(7, 0).index(), 7); // h1
        assert_eq!(Square::new(0, 7).index(), 56); // a8
        assert_eq!(Square::new(7, 7).index(), 63); // h8
        assert_eq!(Square::new(4, 3).index(), 28); // e4
    }

    #[test]
    fn file_and_rank_roundtrip() {
        for sq in Square::all() {
            assert_eq!(Square::new(sq.file(), sq.rank()), sq);
        }
    }

    #[test]
    fn from_index_bounds() {
        assert_eq!(Square::from_index(0), Some(Square::new(0, 0)));
        assert_eq!(Square::from_index(63), Some(Square::new(7, 7)));
        assert_eq!(Square::from_index(64), None);
    }

    #[test]
    fn offset_inside_board() {
        let e4: Square = "e4".parse().unwrap();
        assert_eq!(e4.offset(0, 1), Some("e5".parse().unwrap()));
        assert_eq!(e4.offset(-1, -1), Some("d3".parse().unwrap()));
    }

    #[test]
    fn offset_off_the_edge() {
        let a1: Square = "a1".parse().unwrap();
        assert_eq!(a1.offset(-1, 0), None);
        assert_eq!(a1.offset(0, -1), None);
        let h8: Square = "h8".parse().unwrap();
        assert_eq!(h8.offset(1, 0), None);
        assert_eq!(h8.offset(0, 1), None);
    }

    #[test]
    fn display_and_parse() {
        for sq in Square::all() {
            let text = sq.to_string();
            assert_eq!(text.parse::<Square>().unwrap(), sq);
        }
        assert!("e9".parse::<Square>().is_err());
        assert!("i1".parse::<Square>().is_err());
        assert!("e44".parse::<Square>().is_err());
    }
}
