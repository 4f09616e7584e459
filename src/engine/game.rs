use std::fmt;

use thiserror::Error;
use tracing::{debug, info};

use super::{is_checkmate, is_in_check, valid_moves, Board, Color, Coordinate, Piece, PieceKind};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("the move is not legal for the selected piece")]
    IllegalMove,
    #[error("the move would leave the own king in check")]
    SelfCheckExposure,
    #[error("promotion requires a queen, rook, bishop or knight")]
    InvalidPromotionChoice,
}

/// What a committed move did, for the caller's display layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    pub captured: Option<Piece>,
    pub check: Option<Color>,
    pub checkmate: Option<Color>,
    pub promoted: Option<PieceKind>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Rejected(MoveError),
    Committed(MoveReport),
}

impl MoveOutcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, MoveOutcome::Committed(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub color: Color,
    pub kind: PieceKind,
    pub from: Coordinate,
    pub to: Coordinate,
    pub captured: Option<Piece>,
    pub check: bool,
    pub checkmate: bool,
    pub promotion: Option<PieceKind>,
}

/// One line of the game journal. The journal always opens with `NewGame`
/// and grows by exactly one `Move` entry per committed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogEntry {
    NewGame,
    Move(MoveRecord),
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogEntry::NewGame => write!(f, "New game"),
            LogEntry::Move(record) => {
                write!(f, "{} {} {} -> {}", record.color, record.kind.name(), record.from, record.to)?;
                if let Some(captured) = record.captured {
                    write!(f, " takes {} {}", captured.color, captured.kind.name())?;
                }
                if let Some(kind) = record.promotion {
                    write!(f, " promotes to {}", kind.name())?;
                }
                if record.checkmate {
                    write!(f, " checkmate!")?;
                } else if record.check {
                    write!(f, " check!")?;
                }
                Ok(())
            }
        }
    }
}

/// The turn controller and its state: board, side to move, terminal flag,
/// the checked king's square for highlighting, and the event journal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    active_color: Color,
    game_over: bool,
    king_in_check: Option<Coordinate>,
    events: Vec<LogEntry>,
}

impl Game {
    pub fn new() -> Self {
        Self {
            board: Board::standard(),
            active_color: Color::White,
            game_over: false,
            king_in_check: None,
            events: vec![LogEntry::NewGame],
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active_color(&self) -> Color {
        self.active_color
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Square of the king currently in check, if any.
    pub fn king_in_check(&self) -> Option<Coordinate> {
        self.king_in_check
    }

    pub fn events(&self) -> &[LogEntry] {
        &self.events
    }

    /// The journal as one text block, one entry per line.
    pub fn transcript(&self) -> String {
        self.events.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n")
    }

    /// Snapshot of the piece on `at`, only while the game is running and the
    /// piece belongs to the side to move.
    pub fn select(&self, at: Coordinate) -> Option<Piece> {
        if self.game_over {
            return None;
        }
        self.board.piece_at(at).filter(|piece| piece.color == self.active_color).copied()
    }

    /// Pseudo-legal destinations of a selected piece, for highlighting.
    pub fn candidate_moves(&self, piece: &Piece) -> Vec<Coordinate> {
        valid_moves(piece, &self.board)
    }

    /// Tries to play the active side's piece on `from` to `to`. Either the
    /// whole move commits, or the game is left exactly as it was.
    ///
    /// A pawn arriving on its farthest rank needs `promotion` to name one of
    /// the four replacement kinds; anything else, including `None` for a
    /// cancelled choice, rejects the move.
    pub fn commit_move(&mut self, from: Coordinate, to: Coordinate, promotion: Option<PieceKind>) -> MoveOutcome {
        let piece = match self.select(from) {
            Some(piece) => piece,
            None => {
                debug!("rejected {} -> {}: no piece of the active color on the source square", from, to);
                return MoveOutcome::Rejected(MoveError::IllegalMove);
            }
        };
        if !valid_moves(&piece, &self.board).contains(&to) {
            debug!("rejected {} -> {}: destination not reachable", from, to);
            return MoveOutcome::Rejected(MoveError::IllegalMove);
        }

        let applied = match self.board.apply_move(from, to) {
            Some(applied) => applied,
            None => return MoveOutcome::Rejected(MoveError::IllegalMove),
        };
        let captured = applied.captured_piece();

        if is_in_check(self.active_color, &self.board) {
            self.board.undo_move(applied);
            debug!("rejected {} -> {}: the move exposes the own king", from, to);
            return MoveOutcome::Rejected(MoveError::SelfCheckExposure);
        }

        // Resolve promotion before anything irreversible happens, so a bad
        // or cancelled choice still rolls back to the pre-move state.
        let promoting = piece.kind == PieceKind::Pawn && to.row == piece.color.promotion_row();
        let replacement = if promoting {
            match promotion {
                Some(kind)
                    if matches!(
                        kind,
                        PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop | PieceKind::Knight
                    ) =>
                {
                    Some(kind)
                }
                other => {
                    self.board.undo_move(applied);
                    debug!("rejected {} -> {}: unusable promotion choice {:?}", from, to, other);
                    return MoveOutcome::Rejected(MoveError::InvalidPromotionChoice);
                }
            }
        } else {
            None
        };

        self.board.mark_moved(to);
        let mut promoted = None;
        if let Some(kind) = replacement {
            if self.board.promote(to, kind).is_ok() {
                promoted = Some(kind);
                debug!("{} pawn on {} promoted to {}", piece.color, to, kind.name());
            }
        }

        let opponent = self.active_color.opposite();
        let check = is_in_check(opponent, &self.board);
        self.king_in_check = if check { self.board.find_king(opponent) } else { None };
        let checkmate = check && is_checkmate(opponent, &mut self.board);

        self.events.push(LogEntry::Move(MoveRecord {
            color: piece.color,
            kind: piece.kind,
            from,
            to,
            captured,
            check,
            checkmate,
            promotion: promoted,
        }));

        if checkmate {
            self.game_over = true;
            info!("checkmate, {} wins", self.active_color);
        } else {
            if check {
                info!("{} is in check", opponent);
            }
            self.active_color = opponent;
        }

        MoveOutcome::Committed(MoveReport {
            captured,
            check: check.then_some(opponent),
            checkmate: checkmate.then_some(opponent),
            promoted,
        })
    }

    /// Back to the standard arrangement; only the journal's opening entry
    /// survives.
    pub fn reset(&mut self) {
        self.board = Board::standard();
        self.active_color = Color::White;
        self.game_over = false;
        self.king_in_check = None;
        self.events.truncate(1);
        info!("game reset");
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
