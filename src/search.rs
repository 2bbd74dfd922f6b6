use log::{debug, trace};

use crate::chess_move::Move;
use crate::evaluation::evaluate;
use crate::movegeneration::all_moves;
use crate::position::{Color, Position};

/// Bound for alpha and beta, beyond every evaluation including mates.
pub const INFINITY: i32 = i32::MAX;

/// Fixed-depth minimax with alpha-beta pruning.
///
/// White maximizes and black minimizes; scores are always from White's
/// perspective. Every move is made on the shared position through a
/// `MoveGuard`, so each return path leaves the board as it found it.
#[derive(Debug, Default, Clone)]
pub struct Search {
    nodes_searched: u64,
}

impl Search {
    pub fn new() -> Self {
        Self { nodes_searched: 0 }
    }

    /// Nodes visited since the last `choose_best_move`.
    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }

    /// Find the best move for `color` looking `depth` plies ahead.
    ///
    /// Returns `None` when `color` has no move at all; callers treat that as
    /// the end of the game.
    pub fn choose_best_move(&mut self, position: &mut Position, color: Color, depth: u32) -> Option<Move> {
        let candidates = all_moves(position, color);
        self.choose_best_move_from(position, color, depth, candidates)
    }

    /// Same as `choose_best_move`, but only the given root moves are tried.
    /// Deeper plies still search every generated move.
    pub fn choose_best_move_from(
        &mut self,
        position: &mut Position,
        color: Color,
        depth: u32,
        candidates: Vec<Move>,
    ) -> Option<Move> {
        self.nodes_searched = 0;
        let maximizing = color == Color::White;
        let mut best: Option<(Move, i32)> = None;

        for mov in candidates {
            let score = {
                let mut child = position.play(mov);
                self.minimax(&mut child, depth.saturating_sub(1), -INFINITY, INFINITY, !maximizing)
            };
            trace!("root move {} scored {}", mov, score);

            let improves = match best {
                None => true,
                Some((_, best_score)) if maximizing => score > best_score,
                Some((_, best_score)) => score < best_score,
            };
            if improves {
                best = Some((mov, score));
            }
        }

        debug!(
            "best move for {:?} at depth {}: {:?} ({} nodes)",
            color, depth, best, self.nodes_searched
        );
        best.map(|(mov, _)| mov)
    }

    /// Alpha-beta search implementation
    ///
    /// Stops expanding a node's moves once `beta <= alpha`. A node whose side
    /// to move has no moves is scored by the static evaluation.
    pub fn minimax(&mut self, position: &mut Position, depth: u32, mut alpha: i32, mut beta: i32, maximizing: bool) -> i32 {
        self.nodes_searched += 1;

        if depth == 0 {
            return evaluate(position);
        }

        let color = if maximizing { Color::White } else { Color::Black };
        let moves = all_moves(position, color);
        if moves.is_empty() {
            return evaluate(position);
        }

        if maximizing {
            let mut max_eval = -INFINITY;
            for mov in moves {
                let eval = {
                    let mut child = position.play(mov);
                    self.minimax(&mut child, depth - 1, alpha, beta, false)
                };
                max_eval = max_eval.max(eval);
                alpha = alpha.max(eval);
                if beta <= alpha {
                    break;
                }
            }
            max_eval
        } else {
            let mut min_eval = INFINITY;
            for mov in moves {
                let eval = {
                    let mut child = position.play(mov);
                    self.minimax(&mut child, depth - 1, alpha, beta, true)
                };
                min_eval = min_eval.min(eval);
                beta = beta.min(eval);
                if beta <= alpha {
                    break;
                }
            }
            min_eval
        }
    }
}
