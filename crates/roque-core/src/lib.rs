//! Game-state service for roque: board representation, move generation,
//! game rules, and the [`GameState`] trait the search layers consume.

mod board;
mod castle_rights;
mod chess_move;
mod color;
mod error;
mod fen;
mod game;
mod movegen;
mod perft;
mod piece;
mod square;

pub use crate::board::Board;
pub use crate::castle_rights::{CastleRights, CastleSide};
pub use crate::chess_move::{Move, MoveFlag, MoveKey};
pub use crate::color::Color;
pub use crate::error::FenError;
pub use crate::fen::STARTING_FEN;
pub use crate::game::GameState;
pub use crate::perft::{divide, perft};
pub use crate::piece::{Piece, PieceKind};
pub use crate::square::Square;
