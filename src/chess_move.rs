use crate::position::{CastlingRights, PieceCode, Square};

/// A move is only an origin and a destination; what kind of move it is follows
/// from the board at the time it is applied.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub const fn new(from: Square, to: Square) -> Move {
        Move { from, to }
    }
}

/// The special rule a move triggered, derived when it was made.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum MoveKind {
    Normal,
    DoublePawnPush,
    /// The captured pawn sat on `captured_at`, not on the destination.
    EnPassant { captured_at: Square },
    /// The rook travelled from `rook_from` to `rook_to` as part of this move.
    Castle { rook_from: Square, rook_to: Square },
    Promotion,
}

/// Everything needed to put a position back exactly as it was before a move.
///
/// Compound moves (castling, en passant) are a single record and are undone
/// as one unit.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct MoveRecord {
    pub mv: Move,
    /// Code of the piece that moved, before any promotion
    pub moved: PieceCode,
    /// Code of the captured piece, 0 if nothing was taken
    pub captured: PieceCode,
    pub kind: MoveKind,
    pub prior_en_passant: Option<Square>,
    pub prior_castling: CastlingRights,
}

impl MoveRecord {
    pub fn is_capture(&self) -> bool {
        self.captured != 0
    }
}
