//! 跳棋核心类型定义
//!
//! 定义跳棋中所有基础数据类型

use serde::{Deserialize, Serialize};
use std::fmt;

/// 棋盘边长
pub const BOARD_SIZE: i8 = 8;

/// 玩家
///
/// A 方从第 0 行出发向第 7 行推进，B 方相反。A 方先行。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    A,
    B,
}

impl Player {
    /// 获取对方
    pub fn opposite(&self) -> Player {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// 前进方向（行增量）
    pub fn forward(&self) -> i8 {
        match self {
            Player::A => 1,
            Player::B => -1,
        }
    }

    /// 升变行（对方底线）
    pub fn promotion_row(&self) -> i8 {
        match self {
            Player::A => BOARD_SIZE - 1,
            Player::B => 0,
        }
    }

    /// 从记谱字符解析
    pub fn from_char(c: char) -> Option<Player> {
        match c.to_ascii_lowercase() {
            'a' => Some(Player::A),
            'b' => Some(Player::B),
            _ => None,
        }
    }

    /// 转换为记谱字符
    pub fn to_char(&self) -> char {
        match self {
            Player::A => 'a',
            Player::B => 'b',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::A => write!(f, "Player A"),
            Player::B => write!(f, "Player B"),
        }
    }
}

/// 棋子等级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// 普通子，只能向前斜走
    Man,
    /// 王，可前后斜走一格
    King,
}

/// 棋子 = 所属玩家 + 等级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub player: Player,
    pub rank: Rank,
}

impl Piece {
    pub fn man(player: Player) -> Self {
        Piece {
            player,
            rank: Rank::Man,
        }
    }

    pub fn king(player: Player) -> Self {
        Piece {
            player,
            rank: Rank::King,
        }
    }

    #[inline]
    pub fn is_king(&self) -> bool {
        self.rank == Rank::King
    }

    /// 该棋子能否沿给定行增量移动（吃子同样适用）
    #[inline]
    pub fn can_step(&self, row_delta: i8) -> bool {
        match self.rank {
            Rank::King => row_delta != 0,
            Rank::Man => row_delta.signum() == self.player.forward(),
        }
    }

    /// 升变后的棋子；王保持不变
    pub fn promoted(&self) -> Piece {
        Piece::king(self.player)
    }

    /// 从棋盘符号解析
    pub fn from_symbol(c: char) -> Option<Piece> {
        match c {
            'U' => Some(Piece::man(Player::A)),
            'K' => Some(Piece::king(Player::A)),
            'B' => Some(Piece::man(Player::B)),
            'Q' => Some(Piece::king(Player::B)),
            _ => None,
        }
    }

    /// 棋盘符号
    pub fn symbol(&self) -> char {
        match (self.player, self.rank) {
            (Player::A, Rank::Man) => 'U',
            (Player::A, Rank::King) => 'K',
            (Player::B, Rank::Man) => 'B',
            (Player::B, Rank::King) => 'Q',
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// 棋盘位置 (row, col)
///
/// 使用有符号坐标，便于表示越界的候选落点
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

impl Position {
    pub fn new(row: i8, col: i8) -> Self {
        Position { row, col }
    }

    /// 检查位置是否在棋盘范围内
    #[inline]
    pub fn is_valid(&self) -> bool {
        (0..BOARD_SIZE).contains(&self.row) && (0..BOARD_SIZE).contains(&self.col)
    }

    /// 是否为可落子的深色格
    #[inline]
    pub fn is_playable(&self) -> bool {
        (self.row + self.col).rem_euclid(2) == 1
    }

    /// 位置加偏移量
    #[inline]
    pub fn offset(&self, row_delta: i8, col_delta: i8) -> Position {
        Position {
            row: self.row + row_delta,
            col: self.col + col_delta,
        }
    }

    /// 两点的中点（用于求被吃子的位置）
    pub fn midpoint(&self, other: Position) -> Position {
        Position {
            row: (self.row + other.row) / 2,
            col: (self.col + other.col) / 2,
        }
    }

    /// 转换为一维下标，调用前需保证 `is_valid()`
    #[inline]
    pub fn to_index(&self) -> usize {
        self.row as usize * BOARD_SIZE as usize + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Position {
        Position {
            row: (idx / BOARD_SIZE as usize) as i8,
            col: (idx % BOARD_SIZE as usize) as i8,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// 走法
///
/// `piece` 记录生成时源格上的棋子，执行时据此校验走法是否过期。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Position,
    pub to: Position,
    pub piece: Piece,
    /// 吃子走法时为被吃子的位置（起点与终点的中点）
    pub captured: Option<Position>,
}

impl Move {
    /// 创建普通走法
    pub fn simple(from: Position, to: Position, piece: Piece) -> Self {
        Move {
            from,
            to,
            piece,
            captured: None,
        }
    }

    /// 创建吃子走法
    pub fn capture(from: Position, to: Position, piece: Piece) -> Self {
        Move {
            from,
            to,
            piece,
            captured: Some(from.midpoint(to)),
        }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// 是否与输入的四个坐标一致
    pub fn matches(&self, from: Position, to: Position) -> bool {
        self.from == from && self.to == to
    }

    /// 输入格式 `fromRow fromCol toRow toCol`
    pub fn to_input_str(&self) -> String {
        format!(
            "{} {} {} {}",
            self.from.row, self.from.col, self.to.row, self.to.col
        )
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)?;
        if let Some(cap) = self.captured {
            write!(f, " x {}", cap)?;
        }
        Ok(())
    }
}

/// 游戏结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    PlayerAWins,
    PlayerBWins,
    /// 达到回合上限
    Draw,
    /// 用户中止
    Stopped,
}

impl GameResult {
    /// 某方获胜
    pub fn win_for(player: Player) -> GameResult {
        match player {
            Player::A => GameResult::PlayerAWins,
            Player::B => GameResult::PlayerBWins,
        }
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            GameResult::PlayerAWins => Some(Player::A),
            GameResult::PlayerBWins => Some(Player::B),
            GameResult::Draw | GameResult::Stopped => None,
        }
    }
}
