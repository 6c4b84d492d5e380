//! 随机 AI 策略

use super::AIStrategy;
use crate::board::Board;
use crate::types::Move;
use rand::prelude::*;

/// 随机 AI - 在全部合法走法中均匀选择
pub struct RandomAI {
    rng: StdRng,
}

impl RandomAI {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        RandomAI { rng }
    }
}

impl AIStrategy for RandomAI {
    fn select_move(&mut self, _board: &Board, moves: &[Move]) -> Option<Move> {
        moves.choose(&mut self.rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movegen::generate;
    use crate::types::Player;

    #[test]
    fn test_same_seed_same_choices() {
        let board = Board::initial();
        let moves = generate(&board, Player::B);
        let mut a = RandomAI::new(Some(3));
        let mut b = RandomAI::new(Some(3));

        for _ in 0..10 {
            assert_eq!(a.select_move(&board, &moves), b.select_move(&board, &moves));
        }
    }

    #[test]
    fn test_covers_several_moves() {
        let board = Board::initial();
        let moves = generate(&board, Player::A);
        let mut ai = RandomAI::new(Some(11));

        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(ai.select_move(&board, &moves).unwrap());
        }
        assert!(seen.len() > 1);
    }
}
