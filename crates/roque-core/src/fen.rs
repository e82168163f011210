//! FEN parsing and formatting.

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::castle_rights::{CastleRights, CastleSide};
use crate::color::Color;
use crate::error::FenError;
use crate::piece::{Piece, PieceKind};
use crate::square::Square;

/// The standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Board, FenError> {
        parse_fen(s)
    }
}

fn parse_fen(s: &str) -> Result<Board, FenError> {
    let fields: Vec<&str> = s.split_whitespace().collect();
    if fields.len() != 6 {
        return Err(FenError::WrongFieldCount {
            found: fields.len(),
        });
    }

    let mut board = Board::empty();

    // Piece placement, rank 8 first.
    let ranks: Vec<&str> = fields[0].split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }
    for (rank_index, rank_text) in ranks.iter().enumerate() {
        let rank = 7 - rank_index as u8;
        let mut file = 0u8;
        for c in rank_text.chars() {
            if let Some(skip) = c.to_digit(10) {
                if skip == 0 || skip > 8 {
                    return Err(FenError::InvalidPieceChar { character: c });
                }
                file += skip as u8;
            } else {
                let piece = Piece::from_fen_char(c)
                    .ok_or(FenError::InvalidPieceChar { character: c })?;
                if file >= 8 {
                    return Err(FenError::BadRankLength {
                        rank_index,
                        length: file as usize + 1,
                    });
                }
                board.set_piece(Square::new(file, rank), Some(piece));
                file += 1;
            }
        }
        if file != 8 {
            return Err(FenError::BadRankLength {
                rank_index,
                length: file as usize,
            });
        }
    }

    // Active color.
    board.set_side(match fields[1] {
        "w" => Color::White,
        "b" => Color::Black,
        other => {
            return Err(FenError::InvalidColor {
                found: other.to_string(),
            });
        }
    });

    // Castling rights.
    let mut rights = CastleRights::NONE;
    if fields[2] != "-" {
        for c in fields[2].chars() {
            match c {
                'K' => rights.grant(Color::White, CastleSide::Kingside),
                'Q' => rights.grant(Color::White, CastleSide::Queenside),
                'k' => rights.grant(Color::Black, CastleSide::Kingside),
                'q' => rights.grant(Color::Black, CastleSide::Queenside),
                _ => return Err(FenError::InvalidCastlingChar { character: c }),
            }
        }
    }
    board.set_castling(rights);

    // En passant target.
    board.set_ep_square(match fields[3] {
        "-" => None,
        text => Some(text.parse::<Square>()?),
    });

    // Clocks.
    let halfmove: u16 = fields[4]
        .parse()
        .map_err(|_| FenError::InvalidMoveCounter {
            field: "halfmove clock",
            found: fields[4].to_string(),
        })?;
    let fullmove: u16 = fields[5]
        .parse()
        .map_err(|_| FenError::InvalidMoveCounter {
            field: "fullmove number",
            found: fields[5].to_string(),
        })?;
    board.set_clocks(halfmove, fullmove);

    // A position without exactly one king per side breaks check detection.
    for color in Color::ALL {
        let kings = Square::all()
            .filter(|&sq| board.piece_at(sq) == Some(Piece::new(PieceKind::King, color)))
            .count();
        if kings != 1 {
            return Err(FenError::InvalidKingCount {
                color: match color {
                    Color::White => "white",
                    Color::Black => "black",
                },
                count: kings,
            });
        }
    }

    Ok(board)
}

/// Write the position as a FEN string; backs `Board`'s `Display` impl.
pub(crate) fn write_fen(board: &Board, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for rank in (0..8).rev() {
        let mut empty_run = 0;
        for file in 0..8 {
            match board.piece_at(Square::new(file, rank)) {
                Some(piece) => {
                    if empty_run > 0 {
                        write!(f, "{empty_run}")?;
                        empty_run = 0;
                    }
                    write!(f, "{}", piece.fen_char())?;
                }
                None => empty_run += 1,
            }
        }
        if empty_run > 0 {
            write!(f, "{empty_run}")?;
        }
        if rank > 0 {
            write!(f, "/")?;
        }
    }

    let side = match board.side_to_move() {
        Color::White => 'w',
        Color::Black => 'b',
    };
    write!(f, " {side} {}", board.castling())?;
    match board.ep_square() {
        Some(sq) => write!(f, " {sq}")?,
        None => write!(f, " -")?,
    }
    write!(
        f,
        " {} {}",
        board.halfmove_clock(),
        board.fullmove_number()
    )
}
