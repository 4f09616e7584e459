//! A rule engine for two-player chess: board state, pseudo-legal move
//! generation, check and checkmate detection, and a turn controller that
//! commits moves atomically and journals every event.

pub mod engine;

pub use engine::{
    is_checkmate, is_in_check, valid_moves, Board, BoardError, Color, Coordinate, Game, LogEntry,
    MoveError, MoveOutcome, MoveRecord, MoveReport, Piece, PieceKind,
};
