//! 走法生成
//!
//! `generate` 返回普通走法与吃子走法的混合列表，顺序确定：
//! 行优先扫描棋子，每个棋子按 `DIRECTIONS` 顺序，每个方向先普通后吃子。
//! 是否强制吃子由 `CaptureRule` 在 `legal_moves` 中决定。

use crate::board::Board;
use crate::rules::{is_capture, is_simple_move};
use crate::types::{Move, Player};
use log::debug;

/// 斜向探测顺序
pub const DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// 吃子规则
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptureRule {
    /// 吃子可选：合法走法即生成的全部走法
    #[default]
    Optional,
    /// 强制吃子：存在吃子时只保留吃子走法
    Mandatory,
}

impl CaptureRule {
    pub fn from_name(name: &str) -> Option<CaptureRule> {
        match name.to_lowercase().as_str() {
            "optional" => Some(CaptureRule::Optional),
            "mandatory" | "forced" => Some(CaptureRule::Mandatory),
            _ => None,
        }
    }
}

/// 生成某方的全部走法（不施加吃子规则）
pub fn generate(board: &Board, player: Player) -> Vec<Move> {
    let mut moves = Vec::with_capacity(16);

    for (from, piece) in board.pieces(player) {
        for (dr, dc) in DIRECTIONS {
            let to = from.offset(dr, dc);
            if is_simple_move(board, from, to, player) {
                moves.push(Move::simple(from, to, piece));
            }

            let jump = from.offset(2 * dr, 2 * dc);
            if is_capture(board, from, jump, player) {
                moves.push(Move::capture(from, jump, piece));
            }
        }
    }

    moves
}

/// 按吃子规则过滤后的合法走法
pub fn legal_moves(board: &Board, player: Player, rule: CaptureRule) -> Vec<Move> {
    let mut moves = generate(board, player);
    if rule == CaptureRule::Mandatory && moves.iter().any(Move::is_capture) {
        moves.retain(Move::is_capture);
    }
    debug!("{} has {} legal moves ({:?})", player, moves.len(), rule);
    moves
}

/// 某方是否还有走法
pub fn has_moves(board: &Board, player: Player) -> bool {
    !generate(board, player).is_empty()
}
