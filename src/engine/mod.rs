pub mod model;
pub use model::{Color, Coordinate, Piece, PieceKind};

pub mod board;
pub use board::{AppliedMove, Board, BoardError};

pub mod move_generation;
pub use move_generation::valid_moves;

pub mod rules;
pub use rules::{is_checkmate, is_in_check};

pub mod game;
pub use game::{Game, LogEntry, MoveError, MoveOutcome, MoveRecord, MoveReport};

pub mod test_utils;
