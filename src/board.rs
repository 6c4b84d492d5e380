//! 跳棋棋盘
//!
//! 8x8 数组存储格子状态，负责走法执行（移动、吃子、升变）与文本渲染。

use crate::error::EngineError;
use crate::types::{Move, Piece, Player, Position, BOARD_SIZE};
use log::debug;
use std::fmt;

const SQUARES: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// 棋盘：每格为空或某方的棋子
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; SQUARES],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// 空棋盘
    pub fn empty() -> Self {
        Board {
            squares: [None; SQUARES],
        }
    }

    /// 标准开局：A 方占第 0-2 行，B 方占第 5-7 行的深色格
    pub fn initial() -> Self {
        let mut board = Board::empty();
        board.reset();
        board
    }

    /// 重置为标准开局
    pub fn reset(&mut self) {
        for (idx, square) in self.squares.iter_mut().enumerate() {
            let pos = Position::from_index(idx);
            *square = if !pos.is_playable() {
                None
            } else if pos.row < 3 {
                Some(Piece::man(Player::A))
            } else if pos.row > 4 {
                Some(Piece::man(Player::B))
            } else {
                None
            };
        }
    }

    #[inline]
    pub fn in_bounds(&self, row: i8, col: i8) -> bool {
        Position::new(row, col).is_valid()
    }

    fn check(pos: Position) -> Result<usize, EngineError> {
        if pos.is_valid() {
            Ok(pos.to_index())
        } else {
            Err(EngineError::OutOfRange {
                row: pos.row,
                col: pos.col,
            })
        }
    }

    /// 读取格子；越界返回 `OutOfRange`
    pub fn get(&self, pos: Position) -> Result<Option<Piece>, EngineError> {
        Ok(self.squares[Self::check(pos)?])
    }

    /// 写入格子；越界返回 `OutOfRange`
    pub fn set(&mut self, pos: Position, cell: Option<Piece>) -> Result<(), EngineError> {
        self.squares[Self::check(pos)?] = cell;
        Ok(())
    }

    /// 获取某位置的棋子，越界视为空
    #[inline]
    pub fn piece_at(&self, pos: Position) -> Option<Piece> {
        if !pos.is_valid() {
            return None;
        }
        self.squares[pos.to_index()]
    }

    /// 某位置是否为空（越界返回 false）
    #[inline]
    pub fn is_empty_at(&self, pos: Position) -> bool {
        pos.is_valid() && self.squares[pos.to_index()].is_none()
    }

    /// 按行优先顺序列出某方所有棋子
    pub fn pieces(&self, player: Player) -> Vec<(Position, Piece)> {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(idx, sq)| sq.map(|p| (Position::from_index(idx), p)))
            .filter(|(_, p)| p.player == player)
            .collect()
    }

    /// 某方棋子数
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .flatten()
            .filter(|p| p.player == player)
            .count()
    }

    /// 棋盘上的棋子总数
    pub fn total_pieces(&self) -> usize {
        self.squares.iter().flatten().count()
    }

    /// 执行走法
    ///
    /// 走法应来自当前局面的走法生成；执行前会重新校验源格、目标格与被吃格，
    /// 不符时返回 `IllegalMoveApplied`，棋盘保持不变。
    pub fn apply_move(&mut self, mv: &Move) -> Result<(), EngineError> {
        let from_idx = Self::check(mv.from)?;
        let to_idx = Self::check(mv.to)?;

        if self.squares[from_idx] != Some(mv.piece) {
            return Err(EngineError::IllegalMoveApplied {
                mv: *mv,
                reason: "source cell does not hold the moving piece",
            });
        }
        if self.squares[to_idx].is_some() {
            return Err(EngineError::IllegalMoveApplied {
                mv: *mv,
                reason: "destination cell is occupied",
            });
        }
        let captured_idx = match mv.captured {
            Some(cap) => {
                let idx = Self::check(cap)?;
                match self.squares[idx] {
                    Some(p) if p.player != mv.piece.player => Some(idx),
                    _ => {
                        return Err(EngineError::IllegalMoveApplied {
                            mv: *mv,
                            reason: "no opponent piece on the captured cell",
                        })
                    }
                }
            }
            None => None,
        };

        let mut piece = mv.piece;
        self.squares[from_idx] = None;
        if let Some(idx) = captured_idx {
            self.squares[idx] = None;
        }
        if mv.to.row == piece.player.promotion_row() {
            piece = piece.promoted();
        }
        self.squares[to_idx] = Some(piece);

        debug!("applied {} ({} -> {})", mv, mv.piece, piece);
        Ok(())
    }
}

/// 文本渲染：带行列号，每格两个字符
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for col in 0..BOARD_SIZE {
            write!(f, "{} ", col)?;
        }
        writeln!(f)?;
        for row in 0..BOARD_SIZE {
            write!(f, "{} ", row)?;
            for col in 0..BOARD_SIZE {
                let ch = match self.piece_at(Position::new(row, col)) {
                    Some(p) => p.symbol(),
                    None => '.',
                };
                write!(f, "{} ", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
