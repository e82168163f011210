//! Pseudo-legal move generation and attack detection.
//!
//! Legality filtering (leaving one's own king in check) happens in
//! [`Board::legal_moves`] by playing each candidate and testing the king.

use crate::board::Board;
use crate::castle_rights::CastleSide;
use crate::chess_move::{Move, MoveFlag};
use crate::color::Color;
use crate::piece::{Piece, PieceKind};
use crate::square::Square;

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Promotion targets, strongest first.
const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// Generate all pseudo-legal moves for the side to move.
pub(crate) fn pseudo_legal(board: &Board) -> Vec<Move> {
    let us = board.side_to_move();
    let mut moves = Vec::with_capacity(48);
    for sq in Square::all() {
        let Some(piece) = board.piece_at(sq) else {
            continue;
        };
        if piece.color != us {
            continue;
        }
        match piece.kind {
            PieceKind::Pawn => pawn_moves(board, sq, us, &mut moves),
            PieceKind::Knight => leaper_moves(board, sq, us, &KNIGHT_OFFSETS, &mut moves),
            PieceKind::Bishop => slider_moves(board, sq, us, &BISHOP_DIRECTIONS, &mut moves),
            PieceKind::Rook => slider_moves(board, sq, us, &ROOK_DIRECTIONS, &mut moves),
            PieceKind::Queen => {
                slider_moves(board, sq, us, &BISHOP_DIRECTIONS, &mut moves);
                slider_moves(board, sq, us, &ROOK_DIRECTIONS, &mut moves);
            }
            PieceKind::King => {
                leaper_moves(board, sq, us, &KING_OFFSETS, &mut moves);
                castle_moves(board, sq, us, &mut moves);
            }
        }
    }
    moves
}

/// Return `true` if `by` attacks `target` on the current board.
pub(crate) fn attacks(board: &Board, target: Square, by: Color) -> bool {
    // Pawns attack one rank forward, so the attacker sits one rank behind
    // the target from its own point of view.
    let pawn_rank_delta = match by {
        Color::White => -1,
        Color::Black => 1,
    };
    for file_delta in [-1, 1] {
        if let Some(sq) = target.offset(file_delta, pawn_rank_delta) {
            if board.piece_at(sq) == Some(Piece::new(PieceKind::Pawn, by)) {
                return true;
            }
        }
    }

    for (df, dr) in KNIGHT_OFFSETS {
        if let Some(sq) = target.offset(df, dr) {
            if board.piece_at(sq) == Some(Piece::new(PieceKind::Knight, by)) {
                return true;
            }
        }
    }

    for (df, dr) in KING_OFFSETS {
        if let Some(sq) = target.offset(df, dr) {
            if board.piece_at(sq) == Some(Piece::new(PieceKind::King, by)) {
                return true;
            }
        }
    }

    for (df, dr) in BISHOP_DIRECTIONS {
        if let Some(piece) = first_piece_along(board, target, df, dr) {
            if piece.color == by
                && matches!(piece.kind, PieceKind::Bishop | PieceKind::Queen)
            {
                return true;
            }
        }
    }

    for (df, dr) in ROOK_DIRECTIONS {
        if let Some(piece) = first_piece_along(board, target, df, dr) {
            if piece.color == by && matches!(piece.kind, PieceKind::Rook | PieceKind::Queen) {
                return true;
            }
        }
    }

    false
}

/// Walk a ray from `start` (exclusive) and return the first piece met.
fn first_piece_along(board: &Board, start: Square, df: i8, dr: i8) -> Option<Piece> {
    let mut sq = start;
    while let Some(next) = sq.offset(df, dr) {
        if let Some(piece) = board.piece_at(next) {
            return Some(piece);
        }
        sq = next;
    }
    None
}

fn leaper_moves(
    board: &Board,
    source: Square,
    us: Color,
    offsets: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    for &(df, dr) in offsets {
        let Some(dest) = source.offset(df, dr) else {
            continue;
        };
        match board.piece_at(dest) {
            None => moves.push(Move::new(source, dest, MoveFlag::Quiet)),
            Some(piece) if piece.color != us => {
                moves.push(Move::new(source, dest, MoveFlag::Capture));
            }
            Some(_) => {}
        }
    }
}

fn slider_moves(
    board: &Board,
    source: Square,
    us: Color,
    directions: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    for &(df, dr) in directions {
        let mut sq = source;
        while let Some(dest) = sq.offset(df, dr) {
            match board.piece_at(dest) {
                None => {
                    moves.push(Move::new(source, dest, MoveFlag::Quiet));
                    sq = dest;
                }
                Some(piece) => {
                    if piece.color != us {
                        moves.push(Move::new(source, dest, MoveFlag::Capture));
                    }
                    break;
                }
            }
        }
    }
}

fn pawn_moves(board: &Board, source: Square, us: Color, moves: &mut Vec<Move>) {
    let (rank_delta, start_rank, promo_rank) = match us {
        Color::White => (1, 1, 7),
        Color::Black => (-1, 6, 0),
    };

    // Pushes.
    if let Some(one) = source.offset(0, rank_delta) {
        if board.piece_at(one).is_none() {
            if one.rank() == promo_rank {
                push_promotions(source, one, false, moves);
            } else {
                moves.push(Move::new(source, one, MoveFlag::Quiet));
                if source.rank() == start_rank {
                    if let Some(two) = source.offset(0, 2 * rank_delta) {
                        if board.piece_at(two).is_none() {
                            moves.push(Move::new(source, two, MoveFlag::DoublePush));
                        }
                    }
                }
            }
        }
    }

    // Captures, including en passant.
    for file_delta in [-1, 1] {
        let Some(dest) = source.offset(file_delta, rank_delta) else {
            continue;
        };
        match board.piece_at(dest) {
            Some(victim) if victim.color != us => {
                if dest.rank() == promo_rank {
                    push_promotions(source, dest, true, moves);
                } else {
                    moves.push(Move::new(source, dest, MoveFlag::Capture));
                }
            }
            None if board.ep_square() == Some(dest) => {
                moves.push(Move::new(source, dest, MoveFlag::EnPassant));
            }
            _ => {}
        }
    }
}

fn push_promotions(source: Square, dest: Square, is_capture: bool, moves: &mut Vec<Move>) {
    for kind in PROMOTION_KINDS {
        let flag = if is_capture {
            MoveFlag::PromotionCapture(kind)
        } else {
            MoveFlag::Promotion(kind)
        };
        moves.push(Move::new(source, dest, flag));
    }
}

fn castle_moves(board: &Board, king: Square, us: Color, moves: &mut Vec<Move>) {
    let rank = match us {
        Color::White => 0,
        Color::Black => 7,
    };
    if king != Square::new(4, rank) {
        return;
    }
    if board.can_castle(CastleSide::Kingside) {
        moves.push(Move::new(king, Square::new(6, rank), MoveFlag::Castle));
    }
    if board.can_castle(CastleSide::Queenside) {
        moves.push(Move::new(king, Square::new(2, rank), MoveFlag::Castle));
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::chess_move::MoveFlag;
    use crate::color::Color;
    use crate::square::Square;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn starting_position_move_mix() {
        let board = Board::starting_position();
        let moves = board.legal_moves();
        assert_eq!(moves.len(), 20);
        let double_pushes = moves
            .iter()
            .filter(|mv| mv.flag() == MoveFlag::DoublePush)
            .count();
        assert_eq!(double_pushes, 8);
        let knight_moves = moves
            .iter()
            .filter(|mv| mv.source() == sq("b1") || mv.source() == sq("g1"))
            .count();
        assert_eq!(knight_moves, 4);
    }

    #[test]
    fn en_passant_is_generated() {
        let board: Board = "rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3"
            .parse()
            .unwrap();
        assert!(
            board
                .legal_moves()
                .iter()
                .any(|mv| mv.is_en_passant() && mv.dest() == sq("d6")),
            "exd6 en passant should be available"
        );
    }

    #[test]
    fn promotions_come_in_four_kinds() {
        let board: Board = "7k/4P3/8/8/8/8/8/4K3 w - - 0 1".parse().unwrap();
        let promotions = board
            .legal_moves()
            .into_iter()
            .filter(|mv| mv.promotion().is_some())
            .count();
        assert_eq!(promotions, 4);
    }

    #[test]
    fn capture_promotion_is_generated() {
        let board: Board = "3r3k/4P3/8/8/8/8/8/4K3 w - - 0 1".parse().unwrap();
        let captures = board
            .legal_moves()
            .into_iter()
            .filter(|mv| mv.is_capture() && mv.promotion().is_some())
            .count();
        assert_eq!(captures, 4, "exd8 promotes four ways");
    }

    #[test]
    fn attack_detection_per_piece() {
        let board: Board = "4k3/8/8/8/3n4/8/4P3/4K3 w - - 0 1".parse().unwrap();
        // Pawn on e2 attacks d3 and f3.
        assert!(board.is_attacked(sq("d3"), Color::White));
        assert!(board.is_attacked(sq("f3"), Color::White));
        assert!(!board.is_attacked(sq("e3"), Color::White));
        // Knight on d4 attacks e2 and f3 among others.
        assert!(board.is_attacked(sq("e2"), Color::Black));
        assert!(board.is_attacked(sq("f3"), Color::Black));
        assert!(!board.is_attacked(sq("d5"), Color::Black));
    }

    #[test]
    fn slider_attacks_stop_at_blockers() {
        let board: Board = "4k3/8/8/8/4r3/8/4P3/4K3 w - - 0 1".parse().unwrap();
        // Rook on e4 attacks down to e3, but the pawn on e2 shields e1.
        assert!(board.is_attacked(sq("e3"), Color::Black));
        assert!(!board.is_attacked(sq("e1"), Color::Black));
    }

    #[test]
    fn double_push_blocked_by_intermediate_piece() {
        let board: Board = "4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1".parse().unwrap();
        assert!(
            !board
                .legal_moves()
                .iter()
                .any(|mv| mv.source() == sq("e2") && mv.dest() == sq("e4")),
            "a blocked pawn cannot jump the blocker"
        );
    }
}
