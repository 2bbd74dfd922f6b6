//! Chess move generation module.
//!
//! Generates destination squares per piece. "Legal" here means the move has
//! the right shape for the piece and respects board occupancy; moves that
//! leave the mover's own king attacked are still produced. Filtering those is
//! done by the check module's make/test/undo scans.

use crate::check::is_square_attacked;
use crate::chess_move::Move;
use crate::movegen_tables::{slider_directions, KING_OFFSETS, KNIGHT_OFFSETS};
use crate::position::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastlingSide {
    Kingside,
    Queenside,
}

impl CastlingSide {
    pub fn right(self, color: Color) -> CastlingRights {
        match (color, self) {
            (Color::White, CastlingSide::Kingside) => CastlingRights::WHITEKINGSIDE,
            (Color::White, CastlingSide::Queenside) => CastlingRights::WHITEQUEENSIDE,
            (Color::Black, CastlingSide::Kingside) => CastlingRights::BLACKKINGSIDE,
            (Color::Black, CastlingSide::Queenside) => CastlingRights::BLACKQUEENSIDE,
        }
    }

    pub fn rook_file(self) -> u8 {
        match self {
            CastlingSide::Kingside => 7,
            CastlingSide::Queenside => 0,
        }
    }

    /// File the king lands on.
    pub fn king_file(self) -> u8 {
        match self {
            CastlingSide::Kingside => 6,
            CastlingSide::Queenside => 2,
        }
    }

    /// File the rook lands on.
    pub fn rook_target_file(self) -> u8 {
        match self {
            CastlingSide::Kingside => 5,
            CastlingSide::Queenside => 3,
        }
    }

    /// Files between king and rook that must be empty.
    fn between_files(self) -> &'static [u8] {
        match self {
            CastlingSide::Kingside => &[5, 6],
            CastlingSide::Queenside => &[3, 2, 1],
        }
    }

    /// Files the king stands on or crosses, which must not be attacked.
    fn king_path_files(self) -> &'static [u8] {
        match self {
            CastlingSide::Kingside => &[4, 5, 6],
            CastlingSide::Queenside => &[4, 3, 2],
        }
    }
}

/// File every king starts on.
pub const KING_HOME_FILE: u8 = 4;

/// Generates the destinations of the piece on `square`, castling excluded.
///
/// Returns an empty vector for an empty square. This is also the attack set
/// used by the check module.
pub fn pseudo_legal_moves(position: &Position, square: Square) -> Vec<Square> {
    let code = position.piece_at(square);
    let (piece, color) = match (PieceType::of(code), Color::of(code)) {
        (Some(piece), Some(color)) => (piece, color),
        _ => return Vec::new(),
    };

    match piece {
        PieceType::Pawn => generate_pawn_moves(position, square, color),
        PieceType::Knight => generate_leaper_moves(position, square, color, &KNIGHT_OFFSETS),
        PieceType::King => generate_leaper_moves(position, square, color, &KING_OFFSETS),
        PieceType::Bishop | PieceType::Rook | PieceType::Queen => {
            generate_slider_moves(position, square, color, slider_directions(piece))
        }
    }
}

/// Generates the destinations of the piece on `square`, with castling
/// destinations appended for a king when `can_castle` allows them.
pub fn legal_moves(position: &Position, square: Square) -> Vec<Square> {
    let mut moves = pseudo_legal_moves(position, square);
    let code = position.piece_at(square);
    if let (Some(PieceType::King), Some(color)) = (PieceType::of(code), Color::of(code)) {
        for side in [CastlingSide::Kingside, CastlingSide::Queenside] {
            if can_castle(position, color, side) {
                moves.push(Square::new(side.king_file(), color.home_rank()));
            }
        }
    }
    moves
}

/// Every move available to `color`, origins scanned rank by rank from a1.
pub fn all_moves(position: &Position, color: Color) -> Vec<Move> {
    position
        .occupied_by(color)
        .flat_map(|from| {
            legal_moves(position, from)
                .into_iter()
                .map(move |to| Move::new(from, to))
        })
        .collect()
}

/// Single and double pushes onto empty squares, diagonal captures onto enemy
/// pieces, and the en passant target when the pawn stands beside it.
fn generate_pawn_moves(position: &Position, square: Square, color: Color) -> Vec<Square> {
    let mut moves = Vec::new();
    let forward = color.forward();

    if let Some(one_step) = square.offset(0, forward) {
        if position.is_empty(one_step) {
            moves.push(one_step);
            if square.rank == color.pawn_rank() {
                if let Some(two_step) = one_step.offset(0, forward) {
                    if position.is_empty(two_step) {
                        moves.push(two_step);
                    }
                }
            }
        }
    }

    for df in [-1, 1] {
        if let Some(target) = square.offset(df, forward) {
            if Color::of(position.piece_at(target)) == Some(color.opponent()) {
                moves.push(target);
            }
        }
    }

    if let Some(target) = position.en_passant() {
        let beside = (target.file as i8 - square.file as i8).abs() == 1;
        let ahead = target.rank as i8 == square.rank as i8 + forward;
        if square.rank == color.en_passant_rank() && beside && ahead && position.is_empty(target) {
            moves.push(target);
        }
    }

    moves
}

fn generate_leaper_moves(position: &Position, square: Square, color: Color, offsets: &[(i8, i8)]) -> Vec<Square> {
    offsets
        .iter()
        .filter_map(|&(df, dr)| square.offset(df, dr))
        .filter(|&target| Color::of(position.piece_at(target)) != Some(color))
        .collect()
}

/// Casts a ray per direction until the edge, an own piece (excluded) or an
/// enemy piece (included as a capture).
fn generate_slider_moves(position: &Position, square: Square, color: Color, directions: &[(i8, i8)]) -> Vec<Square> {
    let mut moves = Vec::new();
    for &(df, dr) in directions {
        let mut current = square;
        while let Some(target) = current.offset(df, dr) {
            match Color::of(position.piece_at(target)) {
                None => moves.push(target),
                Some(owner) => {
                    if owner != color {
                        moves.push(target);
                    }
                    break;
                }
            }
            current = target;
        }
    }
    moves
}

/// Checks if castling is legal in the current position.
///
/// # Arguments
///
/// * `position` - Reference to the current game state
/// * `color` - The color of the king
/// * `side` - The castling side
///
/// # Returns
///
/// * `true` if the right is still held, king and rook are on their home
///   squares, the squares between them are empty, and neither the king's
///   square nor the squares it crosses are attacked
pub fn can_castle(position: &Position, color: Color, side: CastlingSide) -> bool {
    if !position.castling_rights().contains(side.right(color)) {
        return false;
    }

    let rank = color.home_rank();
    if position.piece_at(Square::new(KING_HOME_FILE, rank)) != PieceType::King.code(color)
        || position.piece_at(Square::new(side.rook_file(), rank)) != PieceType::Rook.code(color)
    {
        return false;
    }

    if side
        .between_files()
        .iter()
        .any(|&file| !position.is_empty(Square::new(file, rank)))
    {
        return false;
    }

    let enemy = color.opponent();
    !side
        .king_path_files()
        .iter()
        .any(|&file| is_square_attacked(position, Square::new(file, rank), enemy))
}
