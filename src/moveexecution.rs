//! Making and unmaking moves.
//!
//! `make_move` applies a move in place and pushes one `MoveRecord`;
//! `undo_move` pops it and restores the position exactly. Castling moves the
//! rook inside the same record, so undo never has to pair up separate
//! entries. `MoveGuard` ties an undo to a scope so a search cannot return or
//! prune without restoring the board.

use std::ops::{Deref, DerefMut};

use crate::chess_move::{Move, MoveKind, MoveRecord};
use crate::movegeneration::CastlingSide;
use crate::position::*;

impl Position {
    /// Applies a move and records how to invert it.
    ///
    /// The move is not checked for legality; callers pick it from
    /// `legal_moves`. Panics if the origin square is empty.
    pub fn make_move(&mut self, mv: Move) -> MoveRecord {
        let moved = self.piece_at(mv.from);
        let (piece, color) = match (PieceType::of(moved), Color::of(moved)) {
            (Some(piece), Some(color)) => (piece, color),
            _ => panic!("No piece at source square {:?}", mv.from),
        };
        let captured = self.piece_at(mv.to);
        let file_delta = mv.to.file as i8 - mv.from.file as i8;
        let rank_delta = mv.to.rank as i8 - mv.from.rank as i8;

        let mut record = MoveRecord {
            mv,
            moved,
            captured,
            kind: MoveKind::Normal,
            prior_en_passant: self.en_passant,
            prior_castling: self.castling_rights,
        };

        self.set_piece(mv.to, moved);
        self.set_piece(mv.from, EMPTY);

        match piece {
            PieceType::King if file_delta.abs() == 2 => {
                let side = if file_delta > 0 {
                    CastlingSide::Kingside
                } else {
                    CastlingSide::Queenside
                };
                let rook_from = Square::new(side.rook_file(), mv.from.rank);
                let rook_to = Square::new(side.rook_target_file(), mv.from.rank);
                self.set_piece(rook_to, self.piece_at(rook_from));
                self.set_piece(rook_from, EMPTY);
                record.kind = MoveKind::Castle { rook_from, rook_to };
            }
            PieceType::Pawn if mv.to.rank == color.promotion_rank() => {
                self.set_piece(mv.to, PieceType::Queen.code(color));
                record.kind = MoveKind::Promotion;
            }
            PieceType::Pawn if rank_delta.abs() == 2 => {
                record.kind = MoveKind::DoublePawnPush;
            }
            PieceType::Pawn if file_delta != 0 && captured == EMPTY => {
                let captured_at = Square::new(mv.to.file, mv.from.rank);
                record.captured = self.piece_at(captured_at);
                self.set_piece(captured_at, EMPTY);
                record.kind = MoveKind::EnPassant { captured_at };
            }
            _ => {}
        }

        // Set only on a double step, cleared by every other move.
        self.en_passant = match record.kind {
            MoveKind::DoublePawnPush => mv.from.offset(0, color.forward()),
            _ => None,
        };

        let mut revoked = CastlingRights::for_rook_corner(mv.from) | CastlingRights::for_rook_corner(mv.to);
        if piece == PieceType::King {
            revoked |= CastlingRights::for_color(color);
        }
        self.castling_rights.remove(revoked);

        self.history.push(record);
        record
    }

    /// Reverts the most recent move. Returns `None` and leaves the position
    /// untouched when there is nothing to undo.
    pub fn undo_move(&mut self) -> Option<MoveRecord> {
        let record = self.history.pop()?;
        let mv = record.mv;

        self.set_piece(mv.from, record.moved);
        match record.kind {
            MoveKind::EnPassant { captured_at } => {
                self.set_piece(mv.to, EMPTY);
                self.set_piece(captured_at, record.captured);
            }
            MoveKind::Castle { rook_from, rook_to } => {
                self.set_piece(mv.to, EMPTY);
                self.set_piece(rook_from, self.piece_at(rook_to));
                self.set_piece(rook_to, EMPTY);
            }
            _ => self.set_piece(mv.to, record.captured),
        }

        self.en_passant = record.prior_en_passant;
        self.castling_rights = record.prior_castling;
        Some(record)
    }

    /// Makes `mv` and returns a guard that undoes it when dropped.
    ///
    /// The guard dereferences to the position, so deeper moves are played
    /// through it and are necessarily undone first.
    pub fn play(&mut self, mv: Move) -> MoveGuard<'_> {
        let record = self.make_move(mv);
        MoveGuard { position: self, record }
    }
}

/// A move that stays on the board for as long as the guard lives.
pub struct MoveGuard<'a> {
    position: &'a mut Position,
    record: MoveRecord,
}

impl MoveGuard<'_> {
    pub fn record(&self) -> &MoveRecord {
        &self.record
    }
}

impl Deref for MoveGuard<'_> {
    type Target = Position;

    fn deref(&self) -> &Position {
        self.position
    }
}

impl DerefMut for MoveGuard<'_> {
    fn deref_mut(&mut self) -> &mut Position {
        self.position
    }
}

impl Drop for MoveGuard<'_> {
    fn drop(&mut self) {
        let undone = self.position.undo_move();
        debug_assert_eq!(undone, Some(self.record), "move guard undid a different move");
    }
}
