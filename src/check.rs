//! Check, checkmate and stalemate detection.
//!
//! Attacks are found by generating the pseudo-legal destinations of every
//! enemy piece, the same machinery used for move generation, rather than a
//! dedicated attack map. Mate and stalemate scans try every candidate move
//! with make / test / undo.

use crate::chess_move::Move;
use crate::movegeneration::{all_moves, legal_moves, pseudo_legal_moves};
use crate::position::{Color, Position, Square};

/// Returns true if any piece of `by` has `square` among its pseudo-legal
/// destinations.
pub fn is_square_attacked(position: &Position, square: Square, by: Color) -> bool {
    position
        .occupied_by(by)
        .any(|from| pseudo_legal_moves(position, from).contains(&square))
}

/// Returns true if the king of `color` is attacked.
///
/// A side without a king is never in check. That only happens inside a
/// search subtree after a pseudo-legal king capture, where material already
/// scores the loss.
pub fn is_in_check(position: &Position, color: Color) -> bool {
    match position.king_square(color) {
        Some(king) => is_square_attacked(position, king, color.opponent()),
        None => false,
    }
}

/// Returns true if some move of `color` leaves its king out of check.
pub fn has_safe_move(position: &mut Position, color: Color) -> bool {
    let origins: Vec<Square> = position.occupied_by(color).collect();
    for from in origins {
        for to in legal_moves(position, from) {
            let after = position.play(Move::new(from, to));
            if !is_in_check(&after, color) {
                return true;
            }
        }
    }
    false
}

/// Every move of `color` that leaves its king out of check, in `all_moves`
/// order.
pub fn safe_moves(position: &mut Position, color: Color) -> Vec<Move> {
    all_moves(position, color)
        .into_iter()
        .filter(|&mv| {
            let after = position.play(mv);
            !is_in_check(&after, color)
        })
        .collect()
}

pub fn is_checkmate(position: &mut Position, color: Color) -> bool {
    is_in_check(position, color) && !has_safe_move(position, color)
}

pub fn is_stalemate(position: &mut Position, color: Color) -> bool {
    !is_in_check(position, color) && !has_safe_move(position, color)
}
