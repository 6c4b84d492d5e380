//! 引擎错误类型

use crate::types::Move;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// 坐标超出棋盘范围
    #[error("Coordinate out of range: ({row}, {col})")]
    OutOfRange { row: i8, col: i8 },

    /// 走法与当前棋盘不符（过期或伪造的走法）
    #[error("Illegal move applied {mv}: {reason}")]
    IllegalMoveApplied { mv: Move, reason: &'static str },

    /// 人类输入无法解析或不是合法走法
    #[error("Invalid input: {0}")]
    InvalidHumanInput(String),

    /// 代理在有合法走法时没有给出走法
    #[error("Agent {0} returned no move")]
    NoMoveSelected(String),

    #[error("Invalid notation: {0}")]
    InvalidNotation(String),

    #[error("Unknown strategy: {0}")]
    UnknownStrategy(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
