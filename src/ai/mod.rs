//! AI 策略模块
//!
//! 电脑一方的选步策略：随机、贪婪（优先吃子）

mod greedy;
mod random;

pub use greedy::GreedyAI;
pub use random::RandomAI;

use crate::board::Board;
use crate::error::EngineError;
use crate::types::Move;

/// 可用策略名称
pub const AVAILABLE_STRATEGIES: &[&str] = &["random", "greedy"];

/// 默认策略
pub const DEFAULT_STRATEGY: &str = "greedy";

/// AI 配置
#[derive(Debug, Clone, Default)]
pub struct AIConfig {
    /// 随机种子，None 时使用系统熵
    pub seed: Option<u64>,
}

/// AI 策略接口
pub trait AIStrategy {
    /// 从给定的合法走法中选一步；列表为空时返回 None
    fn select_move(&mut self, board: &Board, moves: &[Move]) -> Option<Move>;
}

/// AI 引擎 - 统一的 AI 接口
pub struct AIEngine {
    name: &'static str,
    strategy: Box<dyn AIStrategy>,
}

impl AIEngine {
    /// 创建随机 AI
    pub fn random(config: &AIConfig) -> Self {
        AIEngine {
            name: "random",
            strategy: Box::new(RandomAI::new(config.seed)),
        }
    }

    /// 创建贪婪 AI
    pub fn greedy(config: &AIConfig) -> Self {
        AIEngine {
            name: "greedy",
            strategy: Box::new(GreedyAI::new(config.seed)),
        }
    }

    /// 从策略名称创建
    pub fn from_strategy(name: &str, config: &AIConfig) -> Result<Self, EngineError> {
        match name.to_lowercase().as_str() {
            "random" => Ok(Self::random(config)),
            "greedy" => Ok(Self::greedy(config)),
            _ => Err(EngineError::UnknownStrategy(format!(
                "{}. Available: {}",
                name,
                AVAILABLE_STRATEGIES.join(", ")
            ))),
        }
    }

    pub fn name(&self) -> &str {
        self.name
    }

    pub fn select_move(&mut self, board: &Board, moves: &[Move]) -> Option<Move> {
        self.strategy.select_move(board, moves)
    }
}
