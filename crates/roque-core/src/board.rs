//! Mailbox board with strict in-place make/undo discipline.
//!
//! Every [`Board::make_move`] pushes an undo record; [`Board::undo_move`]
//! pops exactly one. Callers that interleave the two in any other order get
//! a corrupted position, so the search layers wrap each make in a guard that
//! guarantees the paired undo.

use std::fmt;

use crate::castle_rights::{CastleRights, CastleSide};
use crate::chess_move::{Move, MoveFlag};
use crate::color::Color;
use crate::fen::{self, STARTING_FEN};
use crate::movegen;
use crate::piece::{Piece, PieceKind};
use crate::square::Square;

/// Snapshot of the irreversible state clobbered by one move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Undo {
    mv: Move,
    captured: Option<Piece>,
    castling: CastleRights,
    ep_square: Option<Square>,
    halfmove: u16,
}

/// A full game position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
    side: Color,
    castling: CastleRights,
    ep_square: Option<Square>,
    halfmove: u16,
    fullmove: u16,
    undo_stack: Vec<Undo>,
}

impl Board {
    /// Build an empty board shell; used by the FEN parser.
    pub(crate) fn empty() -> Board {
        Board {
            squares: [None; 64],
            side: Color::White,
            castling: CastleRights::NONE,
            ep_square: None,
            halfmove: 0,
            fullmove: 1,
            undo_stack: Vec::new(),
        }
    }

    /// The standard starting position.
    pub fn starting_position() -> Board {
        STARTING_FEN
            .parse()
            .expect("starting FEN is well-formed")
    }

    /// The piece on a square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    pub(crate) fn set_piece(&mut self, sq: Square, piece: Option<Piece>) {
        self.squares[sq.index()] = piece;
    }

    /// The side to move.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side
    }

    pub(crate) fn set_side(&mut self, side: Color) {
        self.side = side;
    }

    /// Current castling rights.
    #[inline]
    pub fn castling(&self) -> CastleRights {
        self.castling
    }

    pub(crate) fn set_castling(&mut self, rights: CastleRights) {
        self.castling = rights;
    }

    /// The en passant capture square, if the last move was a double push.
    #[inline]
    pub fn ep_square(&self) -> Option<Square> {
        self.ep_square
    }

    pub(crate) fn set_ep_square(&mut self, sq: Option<Square>) {
        self.ep_square = sq;
    }

    pub(crate) fn set_clocks(&mut self, halfmove: u16, fullmove: u16) {
        self.halfmove = halfmove;
        self.fullmove = fullmove;
    }

    /// Halfmove clock (plies since the last pawn move or capture).
    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove
    }

    /// Fullmove number, starting at 1 and incremented after Black moves.
    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove
    }

    /// The square of the given side's king.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        Square::all().find(|&sq| {
            self.piece_at(sq) == Some(Piece::new(PieceKind::King, color))
        })
    }

    /// Return `true` if `by` attacks `target`.
    pub fn is_attacked(&self, target: Square, by: Color) -> bool {
        movegen::attacks(self, target, by)
    }

    /// Return `true` if the given side's king is attacked.
    pub fn in_check(&self, color: Color) -> bool {
        match self.king_square(color) {
            Some(king) => self.is_attacked(king, !color),
            None => false,
        }
    }

    /// All legal moves for the side to move.
    pub fn legal_moves(&self) -> Vec<Move> {
        let mover = self.side;
        let mut probe = self.clone();
        movegen::pseudo_legal(self)
            .into_iter()
            .filter(|&mv| {
                probe.make_move(mv);
                let legal = !probe.in_check(mover);
                probe.undo_move();
                legal
            })
            .collect()
    }

    /// The capture-only subset of [`Board::legal_moves`].
    pub fn capture_moves(&self) -> Vec<Move> {
        self.legal_moves()
            .into_iter()
            .filter(|mv| mv.is_capture())
            .collect()
    }

    /// Return `true` if the side to move is checkmated.
    pub fn is_checkmate(&self) -> bool {
        self.in_check(self.side) && self.legal_moves().is_empty()
    }

    /// Return `true` if the side to move is stalemated.
    pub fn is_stalemate(&self) -> bool {
        !self.in_check(self.side) && self.legal_moves().is_empty()
    }

    /// Return `true` if the side to move has no legal moves.
    pub fn is_terminal(&self) -> bool {
        self.legal_moves().is_empty()
    }

    /// Apply a move in place.
    ///
    /// The move must be (pseudo-)legal for the current position.
    ///
    /// # Panics
    ///
    /// Panics if the source square is empty.
    pub fn make_move(&mut self, mv: Move) {
        let source = mv.source();
        let dest = mv.dest();
        let piece = self.squares[source.index()]
            .take()
            .expect("make_move: source square is empty");
        debug_assert_eq!(piece.color, self.side, "make_move: moving out of turn");

        // Remove the victim first so the undo record carries it.
        let captured = match mv.flag() {
            MoveFlag::Capture | MoveFlag::PromotionCapture(_) => {
                self.squares[dest.index()].take()
            }
            MoveFlag::EnPassant => {
                let victim = Square::new(dest.file(), source.rank());
                self.squares[victim.index()].take()
            }
            _ => None,
        };

        self.undo_stack.push(Undo {
            mv,
            captured,
            castling: self.castling,
            ep_square: self.ep_square,
            halfmove: self.halfmove,
        });

        let placed = match mv.promotion() {
            Some(kind) => Piece::new(kind, piece.color),
            None => piece,
        };
        self.squares[dest.index()] = Some(placed);

        if mv.is_castle() {
            let rank = source.rank();
            let (rook_from, rook_to) = if dest.file() == 6 {
                (Square::new(7, rank), Square::new(5, rank))
            } else {
                (Square::new(0, rank), Square::new(3, rank))
            };
            let rook = self.squares[rook_from.index()].take();
            debug_assert!(rook.is_some(), "make_move: castling without a rook");
            self.squares[rook_to.index()] = rook;
        }

        self.castling.discard_for_square(source);
        self.castling.discard_for_square(dest);

        self.ep_square = if mv.flag() == MoveFlag::DoublePush {
            Some(Square::new(
                source.file(),
                (source.rank() + dest.rank()) / 2,
            ))
        } else {
            None
        };

        if piece.kind == PieceKind::Pawn || captured.is_some() {
            self.halfmove = 0;
        } else {
            self.halfmove += 1;
        }
        if self.side == Color::Black {
            self.fullmove += 1;
        }
        self.side = !self.side;
    }

    /// Revert the most recently applied move in place (strict LIFO).
    ///
    /// # Panics
    ///
    /// Panics if there is no move to undo.
    pub fn undo_move(&mut self) {
        let undo = self
            .undo_stack
            .pop()
            .expect("undo_move: no move to undo");
        let mv = undo.mv;

        self.side = !self.side;
        if self.side == Color::Black {
            self.fullmove -= 1;
        }
        self.halfmove = undo.halfmove;
        self.castling = undo.castling;
        self.ep_square = undo.ep_square;

        let source = mv.source();
        let dest = mv.dest();
        let placed = self.squares[dest.index()]
            .take()
            .expect("undo_move: destination square is empty");
        let original = if mv.promotion().is_some() {
            Piece::new(PieceKind::Pawn, placed.color)
        } else {
            placed
        };
        self.squares[source.index()] = Some(original);

        match mv.flag() {
            MoveFlag::Capture | MoveFlag::PromotionCapture(_) => {
                self.squares[dest.index()] = undo.captured;
            }
            MoveFlag::EnPassant => {
                let victim = Square::new(dest.file(), source.rank());
                self.squares[victim.index()] = undo.captured;
            }
            MoveFlag::Castle => {
                let rank = source.rank();
                let (rook_from, rook_to) = if dest.file() == 6 {
                    (Square::new(7, rank), Square::new(5, rank))
                } else {
                    (Square::new(0, rank), Square::new(3, rank))
                };
                let rook = self.squares[rook_to.index()].take();
                self.squares[rook_from.index()] = rook;
            }
            _ => {}
        }
    }

    /// Return `true` if castling on the given wing is currently legal for
    /// the side to move: right intact, path empty, rook at home, king not
    /// in or passing through check.
    pub(crate) fn can_castle(&self, side: CastleSide) -> bool {
        let us = self.side;
        if !self.castling.allows(us, side) {
            return false;
        }
        let rank = match us {
            Color::White => 0,
            Color::Black => 7,
        };
        if self.piece_at(Square::new(4, rank)) != Some(Piece::new(PieceKind::King, us)) {
            return false;
        }
        let (rook_file, empty_files, safe_files): (u8, &[u8], &[u8]) = match side {
            CastleSide::Kingside => (7, &[5, 6], &[5, 6]),
            CastleSide::Queenside => (0, &[1, 2, 3], &[2, 3]),
        };
        if self.piece_at(Square::new(rook_file, rank)) != Some(Piece::new(PieceKind::Rook, us)) {
            return false;
        }
        if empty_files
            .iter()
            .any(|&f| self.piece_at(Square::new(f, rank)).is_some())
        {
            return false;
        }
        if self.is_attacked(Square::new(4, rank), !us) {
            return false;
        }
        if safe_files
            .iter()
            .any(|&f| self.is_attacked(Square::new(f, rank), !us))
        {
            return false;
        }
        true
    }
}

impl fmt::Display for Board {
    /// The position as a FEN string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fen::write_fen(self, f)
    }
}
