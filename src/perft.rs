use crate::chess_move::MoveKind;
use crate::movegeneration::all_moves;
use crate::position::{Color, Position};

/// Counts the leaves of the move tree to a fixed depth, tallying the special
/// moves made on the last ply. Walks every generated move, including those
/// that leave the mover's king attacked.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Perft {
    pub nodes: u64,
    pub captures: u64,
    pub en_passants: u64,
    pub castles: u64,
    pub promotions: u64,
}

impl Perft {
    pub fn new() -> Self {
        Perft::default()
    }

    pub fn run(&mut self, position: &mut Position, color: Color, depth: u32) -> u64 {
        if depth == 0 {
            self.nodes += 1;
            return 1;
        }

        let mut nodes = 0;
        for mov in all_moves(position, color) {
            let mut child = position.play(mov);
            if depth == 1 {
                let record = *child.record();
                if record.is_capture() {
                    self.captures += 1;
                }
                match record.kind {
                    MoveKind::EnPassant { .. } => self.en_passants += 1,
                    MoveKind::Castle { .. } => self.castles += 1,
                    MoveKind::Promotion => self.promotions += 1,
                    _ => {}
                }
            }
            nodes += self.run(&mut child, color.opponent(), depth - 1);
        }
        nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::{PieceType, EMPTY};
    use crate::utils::sq;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_initial_position_node_counts() {
        let expected = [1, 20, 400, 8902];
        for (depth, &nodes) in expected.iter().enumerate() {
            let mut position = Position::new();
            let mut perft = Perft::new();
            assert_eq!(perft.run(&mut position, Color::White, depth as u32), nodes);
            assert_eq!(perft.nodes, nodes);
            assert_eq!(position, Position::new());
        }
    }

    #[test]
    fn test_depth_three_captures() {
        let mut position = Position::new();
        let mut perft = Perft::new();
        perft.run(&mut position, Color::White, 3);
        assert_eq!(
            perft,
            Perft { nodes: 8902, captures: 34, en_passants: 0, castles: 0, promotions: 0 }
        );
    }

    #[test]
    fn test_special_move_tallies() {
        let mut position = Position::new();
        for name in ["b1", "c1", "d1", "f1", "g1"] {
            position.set_piece(sq(name), EMPTY);
        }
        position.set_piece(sq("e5"), PieceType::Pawn.code(Color::White));
        position.set_piece(sq("d7"), EMPTY);
        position.set_piece(sq("d5"), PieceType::Pawn.code(Color::Black));
        position.set_en_passant(Some(sq("d6")));
        position.set_piece(sq("b7"), PieceType::Pawn.code(Color::White));

        let mut perft = Perft::new();
        perft.run(&mut position, Color::White, 1);
        assert_eq!(perft.castles, 2);
        assert_eq!(perft.en_passants, 1);
        // b8 is blocked, so only the captures on a8 and c8 promote
        assert_eq!(perft.promotions, 2);
    }
}
