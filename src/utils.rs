//! Algebraic notation helpers.
//!
//! Conversion between the engine's zero-based (file, rank) squares and the
//! text a player types or reads, such as `e2` or `e2e4`. Only front ends and
//! log output use these; the engine works on `Square` values alone.

use std::fmt;

use crate::chess_move::Move;
use crate::errors::ChessError;
use crate::position::{PieceType, Position, Square};

static COL_MAP: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", COL_MAP[self.file as usize % 8], self.rank + 1)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// Renders the board from white's side, upper case for white pieces.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  a b c d e f g h")?;
        for rank in (0..8u8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8u8 {
                let code = self.piece_at(Square::new(file, rank));
                let symbol = match PieceType::of(code) {
                    None => '.',
                    Some(piece) if code > 0 => piece.symbol().to_ascii_uppercase(),
                    Some(piece) => piece.symbol(),
                };
                write!(f, "{} ", symbol)?;
            }
            writeln!(f, "{}", rank + 1)?;
        }
        writeln!(f, "  a b c d e f g h")
    }
}

/// Parses a square such as `e4`.
///
/// # Arguments
///
/// * `text` - A file letter a-h followed by a rank digit 1-8
///
/// # Returns
///
/// * The square, or `ChessError::InvalidSquare` for anything else
pub fn parse_square(text: &str) -> Result<Square, ChessError> {
    let invalid = || ChessError::InvalidSquare(text.to_string());
    let mut chars = text.chars();
    let (file, rank) = match (chars.next(), chars.next(), chars.next()) {
        (Some(file), Some(rank), None) => (file, rank),
        _ => return Err(invalid()),
    };

    let file = COL_MAP
        .iter()
        .position(|&c| c == file.to_ascii_lowercase())
        .ok_or_else(invalid)?;
    let rank = match rank.to_digit(10) {
        Some(number) if (1..=8).contains(&number) => number - 1,
        _ => return Err(invalid()),
    };

    Ok(Square::new(file as u8, rank as u8))
}

/// Parses a move written as origin then destination, e.g. `e2e4`.
pub fn parse_move(text: &str) -> Result<Move, ChessError> {
    let text = text.trim();
    if text.len() != 4 || !text.is_ascii() {
        return Err(ChessError::InvalidMove(text.to_string()));
    }
    let from = parse_square(&text[..2]).map_err(|_| ChessError::InvalidMove(text.to_string()))?;
    let to = parse_square(&text[2..]).map_err(|_| ChessError::InvalidMove(text.to_string()))?;
    Ok(Move::new(from, to))
}

/// Square from a name known to be valid. Test helper.
#[cfg(test)]
pub fn sq(name: &str) -> Square {
    parse_square(name).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_square() {
        assert_eq!(parse_square("a1"), Ok(Square::new(0, 0)));
        assert_eq!(parse_square("e4"), Ok(Square::new(4, 3)));
        assert_eq!(parse_square("H8"), Ok(Square::new(7, 7)));
    }

    #[test]
    fn test_parse_square_rejects_off_board() {
        for text in ["i1", "a0", "a9", "e", "e44", "", "4e"] {
            assert_eq!(parse_square(text), Err(ChessError::InvalidSquare(text.to_string())));
        }
    }

    #[test]
    fn test_parse_move() {
        assert_eq!(parse_move(" e2e4\n"), Ok(Move::new(Square::new(4, 1), Square::new(4, 3))));
        assert_eq!(parse_move("e2e9"), Err(ChessError::InvalidMove("e2e9".to_string())));
        assert_eq!(parse_move("e2-e4"), Err(ChessError::InvalidMove("e2-e4".to_string())));
    }

    #[test]
    fn test_display() {
        assert_eq!(Square::new(6, 0).to_string(), "g1");
        assert_eq!(Move::new(sq("e7"), sq("e8")).to_string(), "e7e8");
    }

    #[test]
    fn test_board_display_initial() {
        let board = Position::new().to_string();
        let lines: Vec<&str> = board.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "  a b c d e f g h");
        assert_eq!(lines[1], "8 r n b q k b n r 8");
        assert_eq!(lines[4], "5 . . . . . . . . 5");
        assert_eq!(lines[8], "1 R N B Q K B N R 1");
    }
}
