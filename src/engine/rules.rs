use super::{valid_moves, Board, Color};

/// True when `color`'s king stands on a square some enemy piece could move
/// to. Pure query over the board; a missing king reads as not in check.
pub fn is_in_check(color: Color, board: &Board) -> bool {
    let king = match board.find_king(color) {
        Some(coordinate) => coordinate,
        None => return false,
    };
    board
        .pieces_of(color.opposite())
        .iter()
        .any(|piece| valid_moves(piece, board).contains(&king))
}

/// True when `color` is in check and no own move escapes it. Every candidate
/// is probed through `apply_move` and rolled back with `undo_move`, so the
/// board comes out of the search exactly as it went in.
pub fn is_checkmate(color: Color, board: &mut Board) -> bool {
    if !is_in_check(color, board) {
        return false;
    }

    for piece in board.pieces_of(color) {
        for destination in valid_moves(&piece, board) {
            let applied = match board.apply_move(piece.position, destination) {
                Some(applied) => applied,
                None => continue,
            };
            let escaped = !is_in_check(color, board);
            board.undo_move(applied);
            if escaped {
                return false;
            }
        }
    }
    true
}
