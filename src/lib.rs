pub mod alliance;
pub mod board;
pub mod board_builder;
pub mod board_utils;
pub mod errors;
pub mod move_generation;
pub mod moves;
pub mod piece;
pub mod square;

pub use alliance::Alliance;
pub use board::{Board, Tile};
pub use board_builder::BoardBuilder;
pub use errors::BoardError;
pub use move_generation::generate_moves;
pub use moves::{Move, MoveRecord};
pub use piece::{Piece, PieceKind};
pub use square::Square;
