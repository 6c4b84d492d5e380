//! 对局代理
//!
//! 代理只做一件事：从合法走法列表中选一步。人类代理从文本输入读取坐标，
//! 电脑代理委托给 `AIEngine`。

use crate::ai::AIEngine;
use crate::board::Board;
use crate::error::EngineError;
use crate::types::{Move, Position};
use log::warn;
use std::io::{self, BufRead, Write};

/// 结束对局的输入
pub const STOP_TOKEN: &str = "stop";

/// 代理的决定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Play(Move),
    /// 用户中止对局
    Stop,
}

/// 对局代理接口
pub trait Agent {
    fn name(&self) -> &str;

    /// 从非空的合法走法列表中选一步
    fn choose_move(&mut self, board: &Board, moves: &[Move]) -> Result<Decision, EngineError>;
}

/// 解析 `fromRow fromCol toRow toCol` 并在合法走法中查找
pub fn parse_move_input(line: &str, moves: &[Move]) -> Result<Move, EngineError> {
    let coords: Vec<i8> = line
        .split_whitespace()
        .map(|tok| tok.parse::<i8>())
        .collect::<Result<_, _>>()
        .map_err(|_| EngineError::InvalidHumanInput(format!("not four integers: {}", line)))?;

    if coords.len() != 4 {
        return Err(EngineError::InvalidHumanInput(format!(
            "expected 4 numbers, got {}",
            coords.len()
        )));
    }

    let from = Position::new(coords[0], coords[1]);
    let to = Position::new(coords[2], coords[3]);
    moves
        .iter()
        .find(|m| m.matches(from, to))
        .copied()
        .ok_or_else(|| EngineError::InvalidHumanInput(format!("{} -> {} is not a legal move", from, to)))
}

/// 人类代理：从输入流读取走法，非法输入时重新提示
pub struct HumanAgent<R, W> {
    name: String,
    input: R,
    output: W,
}

impl HumanAgent<io::StdinLock<'static>, io::Stdout> {
    /// 绑定标准输入输出
    pub fn stdio(name: &str) -> Self {
        HumanAgent::new(name, io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> HumanAgent<R, W> {
    pub fn new(name: &str, input: R, output: W) -> Self {
        HumanAgent {
            name: name.to_string(),
            input,
            output,
        }
    }

    /// 取回输出流（测试用）
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Agent for HumanAgent<R, W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&mut self, _board: &Board, moves: &[Move]) -> Result<Decision, EngineError> {
        loop {
            write!(
                self.output,
                "Enter your move (fromRow fromCol toRow toCol) or type '{}' to end: ",
                STOP_TOKEN
            )?;
            self.output.flush()?;

            let mut buf = Vec::new();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                // 输入流结束按中止处理
                return Ok(Decision::Stop);
            }

            let parsed = match std::str::from_utf8(&buf) {
                Ok(text) => {
                    let line = text.trim();
                    if line.is_empty() {
                        continue;
                    }
                    if line.eq_ignore_ascii_case(STOP_TOKEN) {
                        return Ok(Decision::Stop);
                    }
                    parse_move_input(line, moves)
                }
                Err(_) => Err(EngineError::InvalidHumanInput(
                    "input is not valid UTF-8".to_string(),
                )),
            };

            match parsed {
                Ok(mv) => return Ok(Decision::Play(mv)),
                Err(e) => {
                    warn!("{}: {}", self.name, e);
                    writeln!(self.output, "Invalid move. Try again.")?;
                }
            }
        }
    }
}

/// 电脑代理
pub struct BotAgent {
    name: String,
    engine: AIEngine,
}

impl BotAgent {
    pub fn new(name: &str, engine: AIEngine) -> Self {
        BotAgent {
            name: name.to_string(),
            engine,
        }
    }
}

impl Agent for BotAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&mut self, board: &Board, moves: &[Move]) -> Result<Decision, EngineError> {
        self.engine
            .select_move(board, moves)
            .map(Decision::Play)
            .ok_or_else(|| EngineError::NoMoveSelected(self.name.clone()))
    }
}
