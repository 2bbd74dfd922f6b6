use crate::chess_move::Move;
use crate::position::{Color, Square};

/// Errors raised at the boundary between a front end and the engine.
///
/// The engine core itself never fails: an illegal move handed to
/// `make_move` is a caller bug, so these checks live in the game session and
/// the notation helpers.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ChessError {
    #[error("invalid square notation: {0:?}")]
    InvalidSquare(String),

    #[error("invalid move notation: {0:?} (expected something like e2e4)")]
    InvalidMove(String),

    #[error("no piece on {0}")]
    EmptySquare(Square),

    #[error("the piece on {square} belongs to {owner:?}, but it is {to_move:?}'s turn")]
    WrongSide { square: Square, owner: Color, to_move: Color },

    #[error("{0} is not a legal move")]
    IllegalMove(Move),

    #[error("{0} would capture the king")]
    CapturesKing(Move),

    #[error("{0} would leave the king in check")]
    LeavesKingInCheck(Move),

    #[error("{0:?} has no king on the board")]
    MissingKing(Color),
}
