use crate::check::is_checkmate;
use crate::position::{Color, PieceType, Position, Square};

// Material values in centipawns (1 pawn = 100)
const PAWN_VALUE: i32 = 100;
const KNIGHT_VALUE: i32 = 320;
const BISHOP_VALUE: i32 = 330;
const ROOK_VALUE: i32 = 500;
const QUEEN_VALUE: i32 = 900;
const KING_VALUE: i32 = 20000;

/// Bonus for any piece standing in the central 4x4 region (c3 to f6).
const CENTER_BONUS: i32 = 10;

/// Score of a mated position, larger than any material sum can reach.
pub const MATE_SCORE: i32 = i32::MAX / 2;

pub fn piece_value(piece: PieceType) -> i32 {
    match piece {
        PieceType::Pawn => PAWN_VALUE,
        PieceType::Knight => KNIGHT_VALUE,
        PieceType::Bishop => BISHOP_VALUE,
        PieceType::Rook => ROOK_VALUE,
        PieceType::Queen => QUEEN_VALUE,
        PieceType::King => KING_VALUE,
    }
}

fn is_central(square: Square) -> bool {
    (2..=5).contains(&square.file) && (2..=5).contains(&square.rank)
}

/// Evaluates a position from White's perspective.
///
/// Returns `-MATE_SCORE` if white is checkmated, `MATE_SCORE` if black is,
/// and otherwise the material balance plus the central occupation bonus.
/// Needs `&mut` because the mate test tries moves on the board; the position
/// is restored before returning.
pub fn evaluate(position: &mut Position) -> i32 {
    if is_checkmate(position, Color::White) {
        return -MATE_SCORE;
    }
    if is_checkmate(position, Color::Black) {
        return MATE_SCORE;
    }
    material_score(position)
}

/// Material balance plus central occupation, positive for White advantage.
pub fn material_score(position: &Position) -> i32 {
    let mut score = 0;
    for square in Square::all() {
        let code = position.piece_at(square);
        let (piece, color) = match (PieceType::of(code), Color::of(code)) {
            (Some(piece), Some(color)) => (piece, color),
            _ => continue,
        };
        let mut value = piece_value(piece);
        if is_central(square) {
            value += CENTER_BONUS;
        }
        score += value * color.sign() as i32;
    }
    score
}
