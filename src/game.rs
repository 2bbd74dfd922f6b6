//! Game session module.
//!
//! `Game` is what a front end talks to: it tracks whose turn it is, checks
//! player moves before they reach the board, reports check / mate /
//! stalemate, and asks the search for the engine's reply.

use clap::ValueEnum;
use log::{debug, info};

use crate::check::{is_checkmate, is_in_check, is_stalemate, safe_moves};
use crate::chess_move::{Move, MoveRecord};
use crate::errors::ChessError;
use crate::movegeneration::legal_moves;
use crate::position::{Color, PieceType, Position, Square};
use crate::search::Search;

/// Engine strength; each level looks one ply further ahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn depth(self) -> u32 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

/// A game from the standard starting position, white to move.
#[derive(Debug, Clone)]
pub struct Game {
    position: Position,
    to_move: Color,
    depth: u32,
    search: Search,
}

impl Game {
    pub fn new(depth: u32) -> Game {
        Game {
            position: Position::new(),
            to_move: Color::White,
            depth,
            search: Search::new(),
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn to_move(&self) -> Color {
        self.to_move
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Destinations to highlight for the piece on `square`. Empty unless the
    /// piece belongs to the side to move.
    pub fn legal_destinations(&self, square: Square) -> Vec<Square> {
        if Color::of(self.position.piece_at(square)) != Some(self.to_move) {
            return Vec::new();
        }
        legal_moves(&self.position, square)
    }

    /// Plays a move chosen by a person after checking it belongs to the side
    /// to move, is among the piece's legal moves, does not take a king, and
    /// does not leave that side's king in check.
    pub fn apply_player_move(&mut self, mv: Move) -> Result<MoveRecord, ChessError> {
        let owner = Color::of(self.position.piece_at(mv.from)).ok_or(ChessError::EmptySquare(mv.from))?;
        if owner != self.to_move {
            return Err(ChessError::WrongSide {
                square: mv.from,
                owner,
                to_move: self.to_move,
            });
        }
        if !legal_moves(&self.position, mv.from).contains(&mv.to) {
            return Err(ChessError::IllegalMove(mv));
        }
        if PieceType::of(self.position.piece_at(mv.to)) == Some(PieceType::King) {
            return Err(ChessError::CapturesKing(mv));
        }
        {
            let after = self.position.play(mv);
            if is_in_check(&after, owner) {
                return Err(ChessError::LeavesKingInCheck(mv));
            }
        }

        let record = self.commit(mv);
        info!("{:?} plays {}", owner, mv);
        Ok(record)
    }

    /// Lets the engine pick and play a move for the side to move.
    ///
    /// Only moves that leave the engine's king out of check are considered
    /// at the root. Returns `None` when there is no such move, which the
    /// caller reports as the end of the game.
    pub fn engine_move(&mut self) -> Option<MoveRecord> {
        let color = self.to_move;
        let candidates = safe_moves(&mut self.position, color);
        let mv = self
            .search
            .choose_best_move_from(&mut self.position, color, self.depth, candidates)?;
        debug!("searched {} nodes", self.search.nodes_searched());
        let record = self.commit(mv);
        info!("engine ({:?}) plays {}", color, mv);
        Some(record)
    }

    /// Check / mate / stalemate status of `color`.
    pub fn status(&mut self, color: Color) -> Result<GameStatus, ChessError> {
        if self.position.king_square(color).is_none() {
            return Err(ChessError::MissingKing(color));
        }
        let status = if is_checkmate(&mut self.position, color) {
            GameStatus::Checkmate
        } else if is_stalemate(&mut self.position, color) {
            GameStatus::Stalemate
        } else if is_in_check(&self.position, color) {
            GameStatus::Check
        } else {
            GameStatus::Ongoing
        };
        Ok(status)
    }

    /// Takes back the most recent move and hands the turn back.
    pub fn take_back(&mut self) -> Option<MoveRecord> {
        let record = self.position.undo_move()?;
        self.to_move = self.to_move.opponent();
        Some(record)
    }

    fn commit(&mut self, mv: Move) -> MoveRecord {
        let record = self.position.make_move(mv);
        self.to_move = self.to_move.opponent();
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{parse_move, sq};
    use pretty_assertions::assert_eq;

    fn player(game: &mut Game, text: &str) -> Result<MoveRecord, ChessError> {
        game.apply_player_move(parse_move(text).unwrap())
    }

    #[test]
    fn test_difficulty_depths() {
        assert_eq!(Difficulty::Easy.depth(), 1);
        assert_eq!(Difficulty::Medium.depth(), 2);
        assert_eq!(Difficulty::Hard.depth(), 3);
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = Game::new(1);
        assert!(player(&mut game, "e2e4").is_ok());
        assert_eq!(game.to_move(), Color::Black);
        assert_eq!(
            player(&mut game, "d2d4"),
            Err(ChessError::WrongSide { square: sq("d2"), owner: Color::White, to_move: Color::Black })
        );
        assert!(player(&mut game, "e7e5").is_ok());
        assert_eq!(game.to_move(), Color::White);
    }

    #[test]
    fn test_rejects_bad_moves() {
        let mut game = Game::new(1);
        assert_eq!(player(&mut game, "e4e5"), Err(ChessError::EmptySquare(sq("e4"))));
        assert_eq!(player(&mut game, "e2e5"), Err(ChessError::IllegalMove(parse_move("e2e5").unwrap())));
        assert_eq!(game.position(), &Position::new());
    }

    #[test]
    fn test_rejects_self_check() {
        let mut game = Game::new(1);
        for text in ["e2e4", "e7e5", "f2f4", "d8h4"] {
            player(&mut game, text).unwrap();
        }
        assert_eq!(game.status(Color::White), Ok(GameStatus::Check));
        let before = game.position().clone();
        assert_eq!(
            player(&mut game, "a2a3"),
            Err(ChessError::LeavesKingInCheck(parse_move("a2a3").unwrap()))
        );
        assert_eq!(game.position(), &before);
        assert!(player(&mut game, "g2g3").is_ok());
    }

    #[test]
    fn test_highlights_only_side_to_move() {
        let game = Game::new(1);
        assert_eq!(game.legal_destinations(sq("g1")).len(), 2);
        assert!(game.legal_destinations(sq("g8")).is_empty());
        assert!(game.legal_destinations(sq("e4")).is_empty());
    }

    #[test]
    fn test_status_after_fools_mate() {
        let mut game = Game::new(1);
        for text in ["f2f3", "e7e5", "g2g4", "d8h4"] {
            player(&mut game, text).unwrap();
        }
        assert_eq!(game.status(Color::White), Ok(GameStatus::Checkmate));
        assert_eq!(game.status(Color::Black), Ok(GameStatus::Ongoing));
        assert!(game.status(Color::White).unwrap().is_over());
    }

    #[test]
    fn test_status_stalemate() {
        let mut game = Game::new(1);
        let mut position = Position::empty();
        position.set_piece(sq("a8"), PieceType::King.code(Color::Black));
        position.set_piece(sq("c7"), PieceType::Queen.code(Color::White));
        position.set_piece(sq("e1"), PieceType::King.code(Color::White));
        game.position = position;
        game.to_move = Color::Black;
        assert_eq!(game.status(Color::Black), Ok(GameStatus::Stalemate));
        assert!(game.status(Color::Black).unwrap().is_over());
        assert_eq!(game.engine_move(), None);
    }

    #[test]
    fn test_engine_finds_mate() {
        let mut game = Game::new(1);
        for text in ["f2f3", "e7e5", "g2g4"] {
            player(&mut game, text).unwrap();
        }
        let record = game.engine_move().unwrap();
        assert_eq!(record.mv, parse_move("d8h4").unwrap());
        assert_eq!(game.to_move(), Color::White);
        assert_eq!(game.status(Color::White), Ok(GameStatus::Checkmate));
    }

    #[test]
    fn test_engine_replies_from_start() {
        let mut game = Game::new(Difficulty::Easy.depth());
        player(&mut game, "e2e4").unwrap();
        assert!(game.engine_move().is_some());
        assert_eq!(game.position().history().len(), 2);
        assert_eq!(game.to_move(), Color::White);
    }

    #[test]
    fn test_take_back() {
        let mut game = Game::new(1);
        player(&mut game, "e2e4").unwrap();
        assert!(game.take_back().is_some());
        assert_eq!(game.to_move(), Color::White);
        assert_eq!(game.position(), &Position::new());
        assert!(game.take_back().is_none());
    }

    /// Black bishop pinned to its king on the e-file, white queen hanging
    /// on the bishop's diagonal.
    fn pinned_bishop_game() -> Game {
        let mut game = Game::new(1);
        let mut position = Position::empty();
        position.set_piece(sq("e8"), PieceType::King.code(Color::Black));
        position.set_piece(sq("e7"), PieceType::Bishop.code(Color::Black));
        position.set_piece(sq("e1"), PieceType::Rook.code(Color::White));
        position.set_piece(sq("g1"), PieceType::King.code(Color::White));
        position.set_piece(sq("a3"), PieceType::Queen.code(Color::White));
        game.position = position;
        game.to_move = Color::Black;
        game
    }

    #[test]
    fn test_engine_keeps_pinned_piece() {
        let mut game = pinned_bishop_game();
        let record = game.engine_move().unwrap();
        assert_ne!(record.mv, parse_move("e7a3").unwrap());
        assert_eq!(record.moved, PieceType::King.code(Color::Black));
        assert!(!is_in_check(game.position(), Color::Black));
        assert_eq!(game.status(Color::White), Ok(GameStatus::Ongoing));
        assert!(game.position().king_square(Color::Black).is_some());
    }

    #[test]
    fn test_engine_without_safe_move_returns_none() {
        let mut game = Game::new(1);
        for text in ["f2f3", "e7e5", "g2g4", "d8h4"] {
            player(&mut game, text).unwrap();
        }
        assert_eq!(game.engine_move(), None);
        assert_eq!(game.position().history().len(), 4);
    }

    #[test]
    fn test_rejects_king_capture() {
        let mut game = pinned_bishop_game();
        game.position.set_piece(sq("e7"), crate::position::EMPTY);
        game.to_move = Color::White;
        let before = game.position().clone();
        assert_eq!(
            player(&mut game, "e1e8"),
            Err(ChessError::CapturesKing(parse_move("e1e8").unwrap()))
        );
        assert_eq!(game.position(), &before);
        assert_eq!(game.to_move(), Color::White);
    }

    #[test]
    fn test_missing_king_is_reported() {
        let mut game = Game::new(1);
        game.position.set_piece(sq("e8"), crate::position::EMPTY);
        assert_eq!(game.status(Color::Black), Err(ChessError::MissingKing(Color::Black)));
    }
}
