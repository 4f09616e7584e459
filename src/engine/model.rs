use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(&self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a forward pawn step for this color.
    pub fn forward(&self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// The farthest rank for this color, where pawns promote.
    pub fn promotion_row(&self) -> i8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialOrd, Ord, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub fn name(&self) -> &'static str {
        match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceKind::Pawn => write!(f, "P"),
            PieceKind::Knight => write!(f, "N"),
            PieceKind::Bishop => write!(f, "B"),
            PieceKind::Rook => write!(f, "R"),
            PieceKind::Queen => write!(f, "Q"),
            PieceKind::King => write!(f, "K"),
        }
    }
}

/// A board square as a (column, row) pair. On-board values lie in
/// [0,7]x[0,7]; the type also holds off-board probes, which every board
/// query answers as empty.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone)]
pub struct Coordinate {
    pub col: i8,
    pub row: i8,
}

impl Coordinate {
    pub fn new(col: i8, row: i8) -> Self {
        Self { col, row }
    }

    pub fn offset(&self, dc: i8, dr: i8) -> Self {
        Self { col: self.col + dc, row: self.row + dr }
    }

    pub fn in_bounds(&self) -> bool {
        (0..8).contains(&self.col) && (0..8).contains(&self.row)
    }

    pub fn as_algebraic(&self) -> String {
        if !self.in_bounds() {
            return format!("({},{})", self.col, self.row);
        }
        let file = (b'a' + self.col as u8) as char;
        let rank = (self.row + 1).to_string();
        format!("{}{}", file, rank)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_algebraic())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub position: Coordinate,
    pub has_moved: bool,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color, position: Coordinate) -> Self {
        Self { kind, color, position, has_moved: false }
    }

    pub fn to_char(&self) -> char {
        let c = match self.kind {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        };
        if self.color == Color::White {
            c
        } else {
            c.to_ascii_lowercase()
        }
    }
}
