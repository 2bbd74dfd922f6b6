//! Move generation lookup tables.
//!
//! Offsets and ray directions for each piece, expressed as (file, rank)
//! deltas. Leapers use the offsets once; sliders repeat a direction until
//! they leave the board or hit a piece.

use crate::position::PieceType;

/// The eight L-shaped knight jumps.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1), (1, 2), (-1, 2), (-2, 1),
    (-2, -1), (-1, -2), (1, -2), (2, -1),
];

/// The eight squares adjacent to a king.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0), (1, 1), (0, 1), (-1, 1),
    (-1, 0), (-1, -1), (0, -1), (1, -1),
];

pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub const STRAIGHT_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Ray directions for a sliding piece, empty for leapers and pawns.
///
/// The queen scans diagonals first, then files and ranks.
pub fn slider_directions(piece: PieceType) -> &'static [(i8, i8)] {
    const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
        (1, 1), (1, -1), (-1, 1), (-1, -1),
        (0, 1), (0, -1), (1, 0), (-1, 0),
    ];
    match piece {
        PieceType::Bishop => &DIAGONAL_DIRECTIONS,
        PieceType::Rook => &STRAIGHT_DIRECTIONS,
        PieceType::Queen => &QUEEN_DIRECTIONS,
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_are_distinct() {
        for table in [&KNIGHT_OFFSETS, &KING_OFFSETS] {
            for (i, a) in table.iter().enumerate() {
                assert!(table[i + 1..].iter().all(|b| a != b));
            }
        }
    }

    #[test]
    fn test_queen_combines_bishop_and_rook() {
        let queen = slider_directions(PieceType::Queen);
        assert_eq!(queen.len(), 8);
        assert!(DIAGONAL_DIRECTIONS.iter().all(|d| queen.contains(d)));
        assert!(STRAIGHT_DIRECTIONS.iter().all(|d| queen.contains(d)));
        assert!(slider_directions(PieceType::Knight).is_empty());
    }
}
