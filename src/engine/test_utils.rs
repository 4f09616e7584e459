#[cfg(test)]
use super::{Board, Color, Coordinate, Piece, PieceKind};

/// Builds a board from an 8-line grid, top line = rank 8. Uppercase pieces
/// are White, `.` is an empty square; spaces are ignored. Pawns placed off
/// their starting rank are marked as having moved.
#[cfg(test)]
pub fn board_from_layout(layout: &str) -> Board {
    let rows: Vec<&str> = layout.trim().lines().map(str::trim).collect();
    assert_eq!(rows.len(), 8, "layout must have 8 rows");

    let mut board = Board::empty();
    for (i, line) in rows.iter().enumerate() {
        let row = 7 - i as i8;
        for (col, ch) in line.chars().filter(|c| !c.is_whitespace()).enumerate() {
            if ch == '.' {
                continue;
            }
            let color = if ch.is_ascii_uppercase() { Color::White } else { Color::Black };
            let kind = match ch.to_ascii_uppercase() {
                'P' => PieceKind::Pawn,
                'N' => PieceKind::Knight,
                'B' => PieceKind::Bishop,
                'R' => PieceKind::Rook,
                'Q' => PieceKind::Queen,
                'K' => PieceKind::King,
                _ => panic!("unknown piece letter {:?}", ch),
            };
            let mut piece = Piece::new(kind, color, Coordinate::new(col as i8, row));
            let pawn_start_row = match color {
                Color::White => 1,
                Color::Black => 6,
            };
            if kind == PieceKind::Pawn && row != pawn_start_row {
                piece.has_moved = true;
            }
            board.add(piece).unwrap();
        }
    }
    board
}

#[cfg(test)]
pub fn assert_squares(generated: Vec<Coordinate>, mut expected: Vec<&str>) {
    let mut generated_converted: Vec<_> = generated.iter().map(|c| c.as_algebraic()).collect();
    generated_converted.sort();
    expected.sort();

    assert_eq!(generated_converted, expected);
}
