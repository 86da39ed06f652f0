pub mod board;
pub mod error;
pub mod filter;
pub mod game;
pub mod moves;

pub use board::{
    Board, Castling, Color, Cord, EMPTY_FEN, EMPTY_PLACEMENT, Piece, PieceKind, START_FEN,
};
pub use error::{FenError, MoveError};
pub use filter::{FilterNode, FilterQuery, NodeKind, QueryKind};
pub use game::GameModel;
pub use moves::Move;
