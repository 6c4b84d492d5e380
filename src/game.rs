//! 回合循环
//!
//! 状态机：`AwaitingMove(A) -> AwaitingMove(B) -> ...`，终止于 `Finished(GameResult)`。
//! 每回合开始先生成当前一方的合法走法，为空则对方获胜。

use crate::agent::{Agent, Decision};
use crate::board::Board;
use crate::error::EngineError;
use crate::movegen::{legal_moves, CaptureRule};
use crate::notation::Setup;
use crate::types::{GameResult, Move, Player};
use log::{debug, info};
use std::io::Write;

/// 对局配置
#[derive(Debug, Clone, Copy, Default)]
pub struct GameConfig {
    pub capture_rule: CaptureRule,
    /// 双方累计走满该步数（单步计）判和；None 表示不限
    pub max_moves: Option<usize>,
}

/// 对局状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    AwaitingMove(Player),
    Finished(GameResult),
}

/// 一局跳棋
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    state: GameState,
    config: GameConfig,
    history: Vec<Move>,
}

impl Game {
    /// 标准开局，A 先行
    pub fn new(config: GameConfig) -> Self {
        Self::from_setup(Setup::default(), config)
    }

    /// 从指定局面开始
    pub fn from_setup(setup: Setup, config: GameConfig) -> Self {
        Game {
            board: setup.board,
            state: GameState::AwaitingMove(setup.turn),
            config,
            history: Vec::new(),
        }
    }

    /// 重新开局
    pub fn reset(&mut self) {
        self.board.reset();
        self.state = GameState::AwaitingMove(Player::A);
        self.history.clear();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// 当前轮到的一方（已结束时为 None）
    pub fn turn(&self) -> Option<Player> {
        match self.state {
            GameState::AwaitingMove(player) => Some(player),
            GameState::Finished(_) => None,
        }
    }

    pub fn result(&self) -> Option<GameResult> {
        match self.state {
            GameState::Finished(result) => Some(result),
            GameState::AwaitingMove(_) => None,
        }
    }

    /// 当前一方的合法走法
    pub fn legal_moves(&self) -> Vec<Move> {
        match self.state {
            GameState::AwaitingMove(player) => {
                legal_moves(&self.board, player, self.config.capture_rule)
            }
            GameState::Finished(_) => Vec::new(),
        }
    }

    /// 进行一个回合
    ///
    /// 无合法走法时直接判负，不再询问代理。代理返回的走法必须在合法列表中，
    /// 否则返回 `IllegalMoveApplied` 且棋盘不变。
    pub fn play_turn(&mut self, agent: &mut dyn Agent) -> Result<GameState, EngineError> {
        let player = match self.state {
            GameState::AwaitingMove(player) => player,
            GameState::Finished(_) => return Ok(self.state),
        };

        // 无路可走优先于步数上限
        let moves = legal_moves(&self.board, player, self.config.capture_rule);
        if moves.is_empty() {
            debug!("{} has no legal moves", player);
            self.state = GameState::Finished(GameResult::win_for(player.opposite()));
            return Ok(self.state);
        }

        if let Some(limit) = self.config.max_moves {
            if self.history.len() >= limit {
                self.state = GameState::Finished(GameResult::Draw);
                return Ok(self.state);
            }
        }

        let mv = match agent.choose_move(&self.board, &moves)? {
            Decision::Play(mv) => mv,
            Decision::Stop => {
                info!("{} stopped the game", agent.name());
                self.state = GameState::Finished(GameResult::Stopped);
                return Ok(self.state);
            }
        };

        if !moves.contains(&mv) {
            return Err(EngineError::IllegalMoveApplied {
                mv,
                reason: "move is not in the legal move list",
            });
        }

        self.board.apply_move(&mv)?;
        self.history.push(mv);
        self.state = GameState::AwaitingMove(player.opposite());
        Ok(self.state)
    }

    /// 对弈到结束，过程写入 `out`
    pub fn play(
        &mut self,
        agent_a: &mut dyn Agent,
        agent_b: &mut dyn Agent,
        out: &mut impl Write,
    ) -> Result<GameResult, EngineError> {
        info!(
            "game start: {} (A) vs {} (B), {:?}",
            agent_a.name(),
            agent_b.name(),
            self.config
        );

        loop {
            let player = match self.state {
                GameState::AwaitingMove(player) => player,
                GameState::Finished(result) => {
                    self.announce(result, agent_a, agent_b, out)?;
                    return Ok(result);
                }
            };
            let agent: &mut dyn Agent = match player {
                Player::A => &mut *agent_a,
                Player::B => &mut *agent_b,
            };

            write!(out, "{}", self.board)?;
            writeln!(out, "{}'s turn ({}).", agent.name(), player)?;

            if let GameState::AwaitingMove(_) = self.play_turn(agent)? {
                if let Some(mv) = self.history.last() {
                    let verb = if mv.is_capture() { "captures" } else { "moves" };
                    writeln!(
                        out,
                        "{} {} from {} to {}",
                        agent.name(),
                        verb,
                        mv.from,
                        mv.to
                    )?;
                }
            }
        }
    }

    fn announce(
        &self,
        result: GameResult,
        agent_a: &dyn Agent,
        agent_b: &dyn Agent,
        out: &mut impl Write,
    ) -> Result<(), EngineError> {
        info!("game over: {:?} after {} moves", result, self.move_count());
        match result {
            GameResult::PlayerAWins => {
                write!(out, "{}", self.board)?;
                writeln!(out, "{} ({}) wins!", agent_a.name(), Player::A)?;
            }
            GameResult::PlayerBWins => {
                write!(out, "{}", self.board)?;
                writeln!(out, "{} ({}) wins!", agent_b.name(), Player::B)?;
            }
            GameResult::Draw => {
                write!(out, "{}", self.board)?;
                writeln!(out, "Draw after {} moves.", self.move_count())?;
            }
            GameResult::Stopped => writeln!(out, "Game stopped by user.")?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::{BotAgent, HumanAgent};
    use crate::ai::{AIConfig, AIEngine};
    use crate::notation::parse_notation;
    use crate::test_positions;
    use crate::types::Position;
    use std::io::Cursor;

    /// 按脚本出步的代理；脚本用完后总选第一步
    struct ScriptedAgent {
        name: String,
        script: Vec<Decision>,
        calls: usize,
    }

    impl ScriptedAgent {
        fn new(name: &str, script: Vec<Decision>) -> Self {
            ScriptedAgent {
                name: name.to_string(),
                script,
                calls: 0,
            }
        }

        fn first_move(name: &str) -> Self {
            Self::new(name, Vec::new())
        }
    }

    impl Agent for ScriptedAgent {
        fn name(&self) -> &str {
            &self.name
        }

        fn choose_move(&mut self, _board: &Board, moves: &[Move]) -> Result<Decision, EngineError> {
            self.calls += 1;
            if self.script.is_empty() {
                Ok(Decision::Play(moves[0]))
            } else {
                Ok(self.script.remove(0))
            }
        }
    }

    fn game_at(notation: &str, config: GameConfig) -> Game {
        Game::from_setup(parse_notation(notation).unwrap(), config)
    }

    #[test]
    fn test_new_game_state() {
        let game = Game::new(GameConfig::default());
        assert_eq!(game.state(), GameState::AwaitingMove(Player::A));
        assert_eq!(game.turn(), Some(Player::A));
        assert_eq!(game.legal_moves().len(), 7);
        assert_eq!(game.move_count(), 0);
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = Game::new(GameConfig::default());
        let mut a = ScriptedAgent::first_move("a");
        let mut b = ScriptedAgent::first_move("b");

        assert_eq!(
            game.play_turn(&mut a).unwrap(),
            GameState::AwaitingMove(Player::B)
        );
        assert_eq!(
            game.play_turn(&mut b).unwrap(),
            GameState::AwaitingMove(Player::A)
        );
        assert_eq!(game.move_count(), 2);
        assert_eq!(game.history()[0].piece.player, Player::A);
        assert_eq!(game.history()[1].piece.player, Player::B);
    }

    #[test]
    fn test_no_moves_loses_without_prompt() {
        let mut game = game_at(test_positions::END_A_BLOCKED, GameConfig::default());
        let mut a = ScriptedAgent::first_move("a");

        let state = game.play_turn(&mut a).unwrap();
        assert_eq!(state, GameState::Finished(GameResult::PlayerBWins));
        assert_eq!(a.calls, 0);
        assert_eq!(game.result(), Some(GameResult::PlayerBWins));
        assert_eq!(game.turn(), None);
        assert!(game.legal_moves().is_empty());
    }

    #[test]
    fn test_capture_of_last_piece_wins() {
        let mut game = game_at(test_positions::CAPTURE_1, GameConfig::default());
        let mut a = ScriptedAgent::first_move("a");
        let mut b = ScriptedAgent::first_move("b");
        let mut out = Vec::new();

        // 第一步是 (3,2) 普通走法，改用脚本指定吃子
        let capture = game
            .legal_moves()
            .into_iter()
            .find(|m| m.is_capture())
            .unwrap();
        a.script.push(Decision::Play(capture));

        let result = game.play(&mut a, &mut b, &mut out).unwrap();
        assert_eq!(result, GameResult::PlayerAWins);
        assert_eq!(b.calls, 0);
        assert_eq!(game.board().total_pieces(), 1);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("a captures from (2, 3) to (4, 5)"));
        assert!(text.contains("a (Player A) wins!"));
    }

    #[test]
    fn test_stop_ends_game_cleanly() {
        let mut game = Game::new(GameConfig::default());
        let mut a = ScriptedAgent::new("a", vec![Decision::Stop]);
        let mut b = ScriptedAgent::first_move("b");
        let mut out = Vec::new();

        let result = game.play(&mut a, &mut b, &mut out).unwrap();
        assert_eq!(result, GameResult::Stopped);
        assert_eq!(game.board(), &Board::initial());
        assert!(String::from_utf8(out)
            .unwrap()
            .ends_with("Game stopped by user.\n"));
    }

    #[test]
    fn test_forged_move_rejected() {
        let mut game = Game::new(GameConfig::default());
        let forged = Move::simple(
            Position::new(1, 0),
            Position::new(2, 1),
            crate::types::Piece::man(Player::A),
        );
        let mut a = ScriptedAgent::new("a", vec![Decision::Play(forged)]);

        let err = game.play_turn(&mut a).unwrap_err();
        assert!(matches!(err, EngineError::IllegalMoveApplied { .. }));
        assert_eq!(game.board(), &Board::initial());
        assert_eq!(game.state(), GameState::AwaitingMove(Player::A));
    }

    #[test]
    fn test_mandatory_capture_rule() {
        let config = GameConfig {
            capture_rule: CaptureRule::Mandatory,
            max_moves: None,
        };
        let game = game_at(test_positions::CAPTURE_3, config);
        let moves = game.legal_moves();
        assert_eq!(moves.len(), 1);
        assert!(moves[0].is_capture());

        let game = game_at(test_positions::CAPTURE_3, GameConfig::default());
        assert_eq!(game.legal_moves().len(), 3);
    }

    #[test]
    fn test_max_moves_draw() {
        let config = GameConfig {
            capture_rule: CaptureRule::Optional,
            max_moves: Some(4),
        };
        let mut game = Game::new(config);
        let mut a = BotAgent::new("a", AIEngine::random(&AIConfig { seed: Some(1) }));
        let mut b = BotAgent::new("b", AIEngine::random(&AIConfig { seed: Some(2) }));
        let mut out = Vec::new();

        let result = game.play(&mut a, &mut b, &mut out).unwrap();
        assert_eq!(result, GameResult::Draw);
        assert_eq!(game.move_count(), 4);
    }

    #[test]
    fn test_no_moves_wins_over_move_limit() {
        // 吃掉 B 最后一子时恰好走满上限，仍判 A 胜
        let config = GameConfig {
            capture_rule: CaptureRule::Optional,
            max_moves: Some(1),
        };
        let mut game = game_at(test_positions::CAPTURE_1, config);
        let mut a = BotAgent::new("a", AIEngine::greedy(&AIConfig { seed: Some(3) }));
        let mut b = BotAgent::new("b", AIEngine::greedy(&AIConfig { seed: Some(4) }));
        let mut out = Vec::new();

        let result = game.play(&mut a, &mut b, &mut out).unwrap();
        assert_eq!(game.board().count(Player::B), 0);
        assert_eq!(result, GameResult::PlayerAWins);
        assert_eq!(game.move_count(), 1);
    }

    #[test]
    fn test_human_vs_bot_promotion() {
        let mut game = game_at(test_positions::PROMO_1, GameConfig::default());
        let mut human = HumanAgent::new(
            "Human",
            Cursor::new(b"6 1 5 0\n6 1 7 2\nstop\n".to_vec()),
            Vec::new(),
        );
        let mut bot = BotAgent::new("Bot", AIEngine::greedy(&AIConfig { seed: Some(9) }));
        let mut out = Vec::new();

        // B 无棋子，A 走完后立即获胜
        let result = game.play(&mut human, &mut bot, &mut out).unwrap();
        assert_eq!(result, GameResult::PlayerAWins);
        let king = game.board().piece_at(Position::new(7, 2)).unwrap();
        assert!(king.is_king());
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Human's turn (Player A)."));

        let prompts = String::from_utf8(human.into_output()).unwrap();
        assert_eq!(prompts.matches("Invalid move. Try again.").count(), 1);
    }

    #[test]
    fn test_bot_self_play_terminates() {
        for seed in 0..10 {
            let mut game = Game::new(GameConfig {
                capture_rule: CaptureRule::Optional,
                max_moves: Some(300),
            });
            let mut a = BotAgent::new("a", AIEngine::greedy(&AIConfig { seed: Some(seed) }));
            let mut b = BotAgent::new("b", AIEngine::greedy(&AIConfig { seed: Some(seed + 100) }));
            let mut out = Vec::new();

            let result = game.play(&mut a, &mut b, &mut out).unwrap();
            assert_ne!(result, GameResult::Stopped);
            if let Some(winner) = result.winner() {
                // 负方此时确实无路可走
                assert!(legal_moves(game.board(), winner.opposite(), CaptureRule::Optional)
                    .is_empty());
            }
        }
    }

    #[test]
    fn test_reset() {
        let mut game = game_at(test_positions::END_B_EMPTY, GameConfig::default());
        let mut b = ScriptedAgent::first_move("b");
        game.play_turn(&mut b).unwrap();
        assert_eq!(game.result(), Some(GameResult::PlayerAWins));

        game.reset();
        assert_eq!(game.state(), GameState::AwaitingMove(Player::A));
        assert_eq!(game.board(), &Board::initial());
    }
}
