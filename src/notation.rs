//! 局面记谱解析和生成
//!
//! 格式: `<棋盘> <回合>`
//!
//! - 棋盘：8 行，第 0 行在前，用 `/` 分隔
//! - 棋子符号：A 方 U(普通) K(王)，B 方 B(普通) Q(王)
//! - 空格：数字 (1-8)
//! - 回合：`a` 或 `b`
//!
//! 例：标准开局为 `1U1U1U1U/U1U1U1U1/1U1U1U1U/8/8/B1B1B1B1/1B1B1B1B/B1B1B1B1 a`

use crate::board::Board;
use crate::error::EngineError;
use crate::types::{Piece, Player, Position, BOARD_SIZE};

/// 解析后的局面
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setup {
    pub board: Board,
    pub turn: Player,
}

impl Default for Setup {
    fn default() -> Self {
        Setup {
            board: Board::initial(),
            turn: Player::A,
        }
    }
}

/// 解析记谱字符串
pub fn parse_notation(text: &str) -> Result<Setup, EngineError> {
    let parts: Vec<&str> = text.split_whitespace().collect();
    if parts.len() != 2 {
        return Err(EngineError::InvalidNotation(format!(
            "expected '<board> <turn>', got: {}",
            text
        )));
    }

    let board = parse_board(parts[0])?;
    let turn = match parts[1] {
        t if t.chars().count() == 1 => t.chars().next().and_then(Player::from_char),
        _ => None,
    }
    .ok_or_else(|| EngineError::InvalidNotation(format!("invalid turn: {}", parts[1])))?;

    Ok(Setup { board, turn })
}

fn parse_board(board_str: &str) -> Result<Board, EngineError> {
    let ranks: Vec<&str> = board_str.split('/').collect();
    if ranks.len() != BOARD_SIZE as usize {
        return Err(EngineError::InvalidNotation(format!(
            "expected {} ranks, got {}",
            BOARD_SIZE,
            ranks.len()
        )));
    }

    let mut board = Board::empty();
    for (row, rank) in ranks.iter().enumerate() {
        let row = row as i8;
        let mut col: i8 = 0;
        for c in rank.chars() {
            if let Some(n) = c.to_digit(10) {
                if n == 0 {
                    return Err(EngineError::InvalidNotation(format!(
                        "zero run in rank {}",
                        row
                    )));
                }
                col += n as i8;
            } else {
                let piece = Piece::from_symbol(c).ok_or_else(|| {
                    EngineError::InvalidNotation(format!("unknown symbol '{}' in rank {}", c, row))
                })?;
                let pos = Position::new(row, col);
                if !pos.is_valid() {
                    return Err(EngineError::InvalidNotation(format!(
                        "rank {} is too long",
                        row
                    )));
                }
                if !pos.is_playable() {
                    return Err(EngineError::InvalidNotation(format!(
                        "piece on light square {}",
                        pos
                    )));
                }
                board.set(pos, Some(piece))?;
                col += 1;
            }
            if col > BOARD_SIZE {
                return Err(EngineError::InvalidNotation(format!(
                    "rank {} is too long",
                    row
                )));
            }
        }
        if col != BOARD_SIZE {
            return Err(EngineError::InvalidNotation(format!(
                "rank {} has {} cells, expected {}",
                row, col, BOARD_SIZE
            )));
        }
    }

    Ok(board)
}

/// 生成记谱字符串
pub fn to_notation(board: &Board, turn: Player) -> String {
    let mut ranks = Vec::with_capacity(BOARD_SIZE as usize);

    for row in 0..BOARD_SIZE {
        let mut rank = String::new();
        let mut empty = 0;
        for col in 0..BOARD_SIZE {
            match board.piece_at(Position::new(row, col)) {
                Some(piece) => {
                    if empty > 0 {
                        rank.push_str(&empty.to_string());
                        empty = 0;
                    }
                    rank.push(piece.symbol());
                }
                None => empty += 1,
            }
        }
        if empty > 0 {
            rank.push_str(&empty.to_string());
        }
        ranks.push(rank);
    }

    format!("{} {}", ranks.join("/"), turn.to_char())
}
