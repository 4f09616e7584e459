use lazy_static::lazy_static;
use thiserror::Error;

use super::{Color, Coordinate, Piece, PieceKind};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    #[error("square {0} is already occupied")]
    SquareOccupied(Coordinate),
    #[error("no piece on square {0}")]
    EmptySquare(Coordinate),
    #[error("coordinate {0:?} is off the board")]
    OffBoard(Coordinate),
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

lazy_static! {
    static ref INITIAL_ARRANGEMENT: Vec<Piece> = initial_arrangement();
}

fn initial_arrangement() -> Vec<Piece> {
    let mut pieces = Vec::with_capacity(32);
    for color in [Color::White, Color::Black] {
        let home_row = match color {
            Color::White => 0,
            Color::Black => 7,
        };
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            pieces.push(Piece::new(kind, color, Coordinate::new(col as i8, home_row)));
        }
        let pawn_row = home_row + color.forward();
        for col in 0..8 {
            pieces.push(Piece::new(PieceKind::Pawn, color, Coordinate::new(col, pawn_row)));
        }
    }
    pieces
}

/// Inverse record of one `apply_move`. Hand it back to `undo_move` before
/// any other board mutation, in reverse order of application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    mover: usize,
    from: Coordinate,
    to: Coordinate,
    captured: Option<(usize, Piece)>,
}

impl AppliedMove {
    pub fn captured_piece(&self) -> Option<Piece> {
        self.captured.map(|(_, piece)| piece)
    }
}

/// The live pieces, insertion-ordered. Invariant: no two pieces share a
/// position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pieces: Vec<Piece>,
}

impl Board {
    pub fn empty() -> Self {
        Self { pieces: Vec::new() }
    }

    /// Standard initial chess arrangement, White on rows 0 and 1.
    pub fn standard() -> Self {
        Self { pieces: INITIAL_ARRANGEMENT.clone() }
    }

    pub fn piece_at(&self, at: Coordinate) -> Option<&Piece> {
        self.pieces.iter().find(|piece| piece.position == at)
    }

    /// Off-board coordinates answer as not empty.
    pub fn is_empty(&self, at: Coordinate) -> bool {
        at.in_bounds() && self.piece_at(at).is_none()
    }

    pub fn add(&mut self, piece: Piece) -> Result<(), BoardError> {
        if !piece.position.in_bounds() {
            return Err(BoardError::OffBoard(piece.position));
        }
        if self.piece_at(piece.position).is_some() {
            return Err(BoardError::SquareOccupied(piece.position));
        }
        self.pieces.push(piece);
        Ok(())
    }

    pub fn remove(&mut self, at: Coordinate) -> Result<Piece, BoardError> {
        let index = self
            .pieces
            .iter()
            .position(|piece| piece.position == at)
            .ok_or(BoardError::EmptySquare(at))?;
        Ok(self.pieces.remove(index))
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn pieces_of(&self, color: Color) -> Vec<Piece> {
        self.pieces.iter().filter(|piece| piece.color == color).copied().collect()
    }

    pub fn find_king(&self, color: Color) -> Option<Coordinate> {
        self.pieces
            .iter()
            .find(|piece| piece.kind == PieceKind::King && piece.color == color)
            .map(|piece| piece.position)
    }

    /// Relocates the piece on `from` to `to`, removing whatever stood on
    /// `to` first. Returns `None` (board untouched) if `from` is empty.
    /// `has_moved` is left alone; committing a move is the caller's concern.
    pub fn apply_move(&mut self, from: Coordinate, to: Coordinate) -> Option<AppliedMove> {
        let captured = match self.pieces.iter().position(|piece| piece.position == to) {
            Some(index) => Some((index, self.pieces.remove(index))),
            None => None,
        };
        let mover = match self.pieces.iter().position(|piece| piece.position == from) {
            Some(index) => index,
            None => {
                if let Some((index, piece)) = captured {
                    self.pieces.insert(index, piece);
                }
                return None;
            }
        };
        self.pieces[mover].position = to;
        Some(AppliedMove { mover, from, to, captured })
    }

    /// Exact inverse of `apply_move`: restores the mover and re-inserts any
    /// captured piece at its original slot, so the piece vector ends up
    /// identical to its pre-apply state.
    pub fn undo_move(&mut self, applied: AppliedMove) {
        self.pieces[applied.mover].position = applied.from;
        if let Some((index, piece)) = applied.captured {
            self.pieces.insert(index, piece);
        }
    }

    /// Marks the piece on `at` as having moved. Committing a move records
    /// this once the move is final; simulation never does.
    pub fn mark_moved(&mut self, at: Coordinate) {
        if let Some(piece) = self.pieces.iter_mut().find(|piece| piece.position == at) {
            piece.has_moved = true;
        }
    }

    /// Replaces the piece on `at` with a fresh piece of `kind` in the same
    /// color and the same list slot.
    pub fn promote(&mut self, at: Coordinate, kind: PieceKind) -> Result<(), BoardError> {
        let index = self
            .pieces
            .iter()
            .position(|piece| piece.position == at)
            .ok_or(BoardError::EmptySquare(at))?;
        self.pieces[index] = Piece::new(kind, self.pieces[index].color, at);
        Ok(())
    }

    pub fn render_to_string(&self) -> String {
        let mut board_representation = String::new();
        board_representation.push_str("    a   b   c   d   e   f   g   h  \n");
        board_representation.push_str("  ┌───┬───┬───┬───┬───┬───┬───┬───┐\n");

        for row in (0..8).rev() {
            // Rows rendered from rank 8 down to rank 1
            board_representation.push_str(&format!("{} │", row + 1));
            for col in 0..8 {
                let square = match self.piece_at(Coordinate::new(col, row)) {
                    Some(piece) => piece.to_char(),
                    None => ' ',
                };
                board_representation.push_str(&format!(" {} │", square));
            }
            board_representation.push_str(&format!(" {}\n", row + 1));

            if row > 0 {
                board_representation.push_str("  ├───┼───┼───┼───┼───┼───┼───┼───┤\n");
            }
        }

        board_representation.push_str("  └───┴───┴───┴───┴───┴───┴───┴───┘\n");
        board_representation.push_str("    a   b   c   d   e   f   g   h  \n");

        board_representation
    }
}
