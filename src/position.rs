//! Board state module.
//!
//! This module holds the pure state of a game: the 8x8 grid of signed piece
//! codes, the castling rights, the en passant target and the history of move
//! records. Behavior lives elsewhere; move execution owns all mutation during
//! play and search.

use bitflags::bitflags;
use crate::chess_move::MoveRecord;

/// Signed piece code stored in the grid: 0 is empty, magnitude is the piece
/// type, positive is white and negative is black.
pub type PieceCode = i8;

pub const EMPTY: PieceCode = 0;

/// Back rank order from the a-file to the h-file.
const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// A zero-based (file, rank) coordinate. `a1` is (0, 0) and `h8` is (7, 7).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Square {
    pub file: u8,
    pub rank: u8,
}

impl Square {
    /// Builds a square without checking bounds; callers are trusted to pass
    /// values in 0..8.
    pub const fn new(file: u8, rank: u8) -> Square {
        Square { file, rank }
    }

    /// Builds a square from signed coordinates, rejecting anything off the board.
    pub fn try_new(file: i8, rank: i8) -> Option<Square> {
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Square::new(file as u8, rank as u8))
        } else {
            None
        }
    }

    /// The square `df` files and `dr` ranks away, or `None` when that falls
    /// outside the grid.
    pub fn offset(self, df: i8, dr: i8) -> Option<Square> {
        Square::try_new(self.file as i8 + df, self.rank as i8 + dr)
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|rank| (0..8u8).map(move |file| Square::new(file, rank)))
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// The side owning a piece code, or `None` for an empty square.
    pub fn of(code: PieceCode) -> Option<Color> {
        match code {
            c if c > 0 => Some(Color::White),
            c if c < 0 => Some(Color::Black),
            _ => None,
        }
    }

    /// Sign applied to piece codes and scores for this side.
    pub fn sign(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Rank direction pawns of this side advance in.
    pub fn forward(self) -> i8 {
        self.sign()
    }

    pub fn home_rank(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    pub fn pawn_rank(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    /// Rank a pawn of this side must stand on to capture en passant.
    pub fn en_passant_rank(self) -> u8 {
        match self {
            Color::White => 4,
            Color::Black => 3,
        }
    }

    pub fn promotion_rank(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

#[derive(Debug, PartialEq, Copy, Clone, Eq, Hash)]
#[repr(i8)]
pub enum PieceType {
    Pawn = 1,
    Knight = 2,
    Bishop = 3,
    Rook = 4,
    Queen = 5,
    King = 6,
}

impl PieceType {
    pub fn of(code: PieceCode) -> Option<PieceType> {
        match code.abs() {
            1 => Some(PieceType::Pawn),
            2 => Some(PieceType::Knight),
            3 => Some(PieceType::Bishop),
            4 => Some(PieceType::Rook),
            5 => Some(PieceType::Queen),
            6 => Some(PieceType::King),
            _ => None,
        }
    }

    /// The grid code for this piece type on the given side.
    pub fn code(self, color: Color) -> PieceCode {
        self as i8 * color.sign()
    }

    pub(crate) fn symbol(self) -> char {
        match self {
            PieceType::Pawn => 'p',
            PieceType::Knight => 'n',
            PieceType::Bishop => 'b',
            PieceType::Rook => 'r',
            PieceType::Queen => 'q',
            PieceType::King => 'k',
        }
    }
}

bitflags! {
    pub struct CastlingRights: u8 {
        const NONE = 0;
        const WHITEKINGSIDE = 1 << 0;
        const WHITEQUEENSIDE = 1 << 1;
        const BLACKKINGSIDE = 1 << 2;
        const BLACKQUEENSIDE = 1 << 3;
        const ALL =
            Self::WHITEKINGSIDE.bits
            | Self::WHITEQUEENSIDE.bits
            | Self::BLACKKINGSIDE.bits
            | Self::BLACKQUEENSIDE.bits;
    }
}

impl CastlingRights {
    /// Both rights of one side.
    pub fn for_color(color: Color) -> CastlingRights {
        match color {
            Color::White => CastlingRights::WHITEKINGSIDE | CastlingRights::WHITEQUEENSIDE,
            Color::Black => CastlingRights::BLACKKINGSIDE | CastlingRights::BLACKQUEENSIDE,
        }
    }

    /// The right tied to a rook corner, or `NONE` for any other square.
    pub fn for_rook_corner(square: Square) -> CastlingRights {
        match (square.file, square.rank) {
            (7, 0) => CastlingRights::WHITEKINGSIDE,
            (0, 0) => CastlingRights::WHITEQUEENSIDE,
            (7, 7) => CastlingRights::BLACKKINGSIDE,
            (0, 7) => CastlingRights::BLACKQUEENSIDE,
            _ => CastlingRights::NONE,
        }
    }
}

/// Represents a complete chess position.
///
/// Positions are created once per game and mutated in place by move
/// execution; the search never clones them. The side to move is not stored
/// here, callers track it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    /// Piece codes indexed by `[rank][file]`
    pub(crate) grid: [[PieceCode; 8]; 8],
    /// Castling rights, only ever removed during play
    pub(crate) castling_rights: CastlingRights,
    /// Square skipped by the most recent double pawn step, if any
    pub(crate) en_passant: Option<Square>,
    /// One record per applied move, most recent last
    pub(crate) history: Vec<MoveRecord>,
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}

impl Position {
    /// Creates the standard 32-piece starting position with all castling rights.
    pub fn new() -> Position {
        let mut position = Position::empty();
        for (file, piece) in BACK_RANK.iter().enumerate() {
            let file = file as u8;
            for color in [Color::White, Color::Black] {
                position.set_piece(Square::new(file, color.home_rank()), piece.code(color));
                position.set_piece(Square::new(file, color.pawn_rank()), PieceType::Pawn.code(color));
            }
        }
        position.castling_rights = CastlingRights::ALL;
        position
    }

    /// An empty board with no castling rights, for building custom setups.
    pub fn empty() -> Position {
        Position {
            grid: [[EMPTY; 8]; 8],
            castling_rights: CastlingRights::NONE,
            en_passant: None,
            history: Vec::new(),
        }
    }

    pub fn piece_at(&self, square: Square) -> PieceCode {
        self.grid[square.rank as usize][square.file as usize]
    }

    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square) == EMPTY
    }

    /// Places a piece code on a square. Only for setting up positions; moves go
    /// through `make_move`.
    pub fn set_piece(&mut self, square: Square, code: PieceCode) {
        self.grid[square.rank as usize][square.file as usize] = code;
    }

    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    pub fn set_castling_rights(&mut self, rights: CastlingRights) {
        self.castling_rights = rights;
    }

    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    pub fn set_en_passant(&mut self, target: Option<Square>) {
        self.en_passant = target;
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Squares holding a piece of `color`, rank by rank from a1.
    pub fn occupied_by(&self, color: Color) -> impl Iterator<Item = Square> + '_ {
        Square::all().filter(move |&sq| Color::of(self.piece_at(sq)) == Some(color))
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = PieceType::King.code(color);
        Square::all().find(|&sq| self.piece_at(sq) == king)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_initial_back_ranks() {
        let position = Position::new();
        assert_eq!(position.grid[0], [4, 2, 3, 5, 6, 3, 2, 4]);
        assert_eq!(position.grid[7], [-4, -2, -3, -5, -6, -3, -2, -4]);
        assert_eq!(position.grid[1], [1; 8]);
        assert_eq!(position.grid[6], [-1; 8]);
        for rank in 2..6 {
            assert_eq!(position.grid[rank], [0; 8]);
        }
    }

    #[test]
    fn test_initial_state() {
        let position = Position::new();
        assert_eq!(position.castling_rights(), CastlingRights::ALL);
        assert_eq!(position.en_passant(), None);
        assert!(position.history().is_empty());
        assert_eq!(position.occupied_by(Color::White).count(), 16);
        assert_eq!(position.occupied_by(Color::Black).count(), 16);
    }

    #[test]
    fn test_king_squares() {
        let position = Position::new();
        assert_eq!(position.king_square(Color::White), Some(Square::new(4, 0)));
        assert_eq!(position.king_square(Color::Black), Some(Square::new(4, 7)));
        assert_eq!(Position::empty().king_square(Color::White), None);
    }

    #[test]
    fn test_offset_rejects_off_board() {
        let a1 = Square::new(0, 0);
        assert_eq!(a1.offset(-1, 0), None);
        assert_eq!(a1.offset(0, -1), None);
        assert_eq!(a1.offset(1, 2), Some(Square::new(1, 2)));
        assert_eq!(Square::new(7, 7).offset(1, 1), None);
        assert_eq!(Square::try_new(8, 0), None);
    }

    #[test]
    fn test_piece_codes() {
        assert_eq!(PieceType::Queen.code(Color::White), 5);
        assert_eq!(PieceType::Knight.code(Color::Black), -2);
        assert_eq!(PieceType::of(-6), Some(PieceType::King));
        assert_eq!(PieceType::of(EMPTY), None);
        assert_eq!(Color::of(-1), Some(Color::Black));
        assert_eq!(Color::of(EMPTY), None);
    }

    #[test]
    fn test_rook_corner_rights() {
        assert_eq!(CastlingRights::for_rook_corner(Square::new(7, 0)), CastlingRights::WHITEKINGSIDE);
        assert_eq!(CastlingRights::for_rook_corner(Square::new(0, 7)), CastlingRights::BLACKQUEENSIDE);
        assert_eq!(CastlingRights::for_rook_corner(Square::new(4, 0)), CastlingRights::NONE);
    }
}
