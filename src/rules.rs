//! 走法规则判定
//!
//! 纯函数：只读棋盘，不合法时返回 false，不报错。

use crate::board::Board;
use crate::types::{Piece, Player, Position};

/// 源格上属于 `player` 的棋子
#[inline]
fn own_piece(board: &Board, from: Position, player: Player) -> Option<Piece> {
    board.piece_at(from).filter(|p| p.player == player)
}

/// 普通走法：斜向一格落到空格，普通子只能向前，王可前后
pub fn is_simple_move(board: &Board, from: Position, to: Position, player: Player) -> bool {
    let piece = match own_piece(board, from, player) {
        Some(p) => p,
        None => return false,
    };
    if !board.is_empty_at(to) {
        return false;
    }
    let dr = to.row - from.row;
    let dc = to.col - from.col;
    dr.abs() == 1 && dc.abs() == 1 && piece.can_step(dr)
}

/// 吃子走法：斜向跳两格落到空格，中间格为对方棋子（普通子或王）
pub fn is_capture(board: &Board, from: Position, to: Position, player: Player) -> bool {
    let piece = match own_piece(board, from, player) {
        Some(p) => p,
        None => return false,
    };
    if !board.is_empty_at(to) {
        return false;
    }
    let dr = to.row - from.row;
    let dc = to.col - from.col;
    if dr.abs() != 2 || dc.abs() != 2 || !piece.can_step(dr) {
        return false;
    }
    matches!(
        board.piece_at(from.midpoint(to)),
        Some(victim) if victim.player == player.opposite()
    )
}
