use super::{Board, Coordinate, Piece, PieceKind};

const KNIGHT_OFFSETS: [(i8, i8); 8] = [(-2, -1), (-1, -2), (1, -2), (2, -1), (2, 1), (1, 2), (-1, 2), (-2, 1)];
const KING_OFFSETS: [(i8, i8); 8] = [(-1, -1), (-1, 0), (-1, 1), (0, -1), (0, 1), (1, -1), (1, 0), (1, 1)];
const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];
const QUEEN_DIRECTIONS: [(i8, i8); 8] =
    [(-1, -1), (-1, 1), (1, -1), (1, 1), (0, -1), (0, 1), (-1, 0), (1, 0)];

/// Pseudo-legal destinations of `piece` on `board`: movement geometry and
/// occupancy only. Whether a move exposes the own king is layered on top by
/// the turn controller.
pub fn valid_moves(piece: &Piece, board: &Board) -> Vec<Coordinate> {
    match piece.kind {
        PieceKind::Pawn => pawn_moves(piece, board),
        PieceKind::Knight => step_moves(piece, board, &KNIGHT_OFFSETS),
        PieceKind::Bishop => sliding_moves(piece, board, &BISHOP_DIRECTIONS),
        PieceKind::Rook => sliding_moves(piece, board, &ROOK_DIRECTIONS),
        PieceKind::Queen => sliding_moves(piece, board, &QUEEN_DIRECTIONS),
        PieceKind::King => step_moves(piece, board, &KING_OFFSETS),
    }
}

/// Fixed-offset movers (knight, king).
fn step_moves(piece: &Piece, board: &Board, offsets: &[(i8, i8)]) -> Vec<Coordinate> {
    let mut moves = Vec::new();
    for &(dc, dr) in offsets {
        let to = piece.position.offset(dc, dr);
        if !to.in_bounds() {
            continue;
        }
        match board.piece_at(to) {
            None => moves.push(to),
            Some(other) => {
                if other.color != piece.color {
                    moves.push(to);
                }
            }
        }
    }
    moves
}

/// Ray-cast movers (bishop, rook, queen). A ray ends at the first occupied
/// square, which counts as a destination only when it holds an enemy piece.
fn sliding_moves(piece: &Piece, board: &Board, directions: &[(i8, i8)]) -> Vec<Coordinate> {
    let mut moves = Vec::new();
    for &(dc, dr) in directions {
        let mut to = piece.position;
        loop {
            to = to.offset(dc, dr);
            if !to.in_bounds() {
                break;
            }
            match board.piece_at(to) {
                None => moves.push(to),
                Some(other) => {
                    if other.color != piece.color {
                        moves.push(to);
                    }
                    break; // ray blocked
                }
            }
        }
    }
    moves
}

fn pawn_moves(piece: &Piece, board: &Board) -> Vec<Coordinate> {
    let mut moves = Vec::new();
    let forward = piece.color.forward();

    // is_empty answers false off the board, so both pushes stay bounded
    let one_ahead = piece.position.offset(0, forward);
    if board.is_empty(one_ahead) {
        moves.push(one_ahead);

        let two_ahead = piece.position.offset(0, 2 * forward);
        if !piece.has_moved && board.is_empty(two_ahead) {
            moves.push(two_ahead);
        }
    }

    // Capture-only diagonals
    for dc in [-1, 1] {
        let diagonal = piece.position.offset(dc, forward);
        if let Some(other) = board.piece_at(diagonal) {
            if other.color != piece.color {
                moves.push(diagonal);
            }
        }
    }

    moves
}
