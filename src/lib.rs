//! Checkers Engine
//!
//! 跳棋规则引擎 - 走法生成、走法执行、回合循环

pub mod agent;
pub mod ai;
pub mod board;
pub mod error;
pub mod game;
pub mod movegen;
pub mod notation;
pub mod rules;
pub mod test_positions;
pub mod types;

pub use agent::{parse_move_input, Agent, BotAgent, Decision, HumanAgent, STOP_TOKEN};
pub use ai::{AIConfig, AIEngine, AIStrategy, AVAILABLE_STRATEGIES, DEFAULT_STRATEGY};
pub use board::Board;
pub use error::EngineError;
pub use game::{Game, GameConfig, GameState};
pub use movegen::{generate, has_moves, legal_moves, CaptureRule, DIRECTIONS};
pub use notation::{parse_notation, to_notation, Setup};
pub use rules::{is_capture, is_simple_move};
pub use types::{GameResult, Move, Piece, Player, Position, Rank, BOARD_SIZE};
