//! 贪婪 AI 策略

use super::AIStrategy;
use crate::board::Board;
use crate::types::Move;
use rand::prelude::*;

/// 贪婪 AI - 有吃子就吃（取生成顺序中的第一个），否则随机走
pub struct GreedyAI {
    rng: StdRng,
}

impl GreedyAI {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        GreedyAI { rng }
    }
}

impl AIStrategy for GreedyAI {
    fn select_move(&mut self, _board: &Board, moves: &[Move]) -> Option<Move> {
        if let Some(capture) = moves.iter().find(|m| m.is_capture()) {
            return Some(*capture);
        }
        moves.choose(&mut self.rng).copied()
    }
}
