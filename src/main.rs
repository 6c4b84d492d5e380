//! Checkers CLI
//!
//! 命令行界面
//!
//! 支持三个子命令：
//! 1. play：人机或机机对弈（默认）
//! 2. moves：列出某局面的合法走法
//! 3. show：渲染某局面

use checkers_engine::{
    legal_moves, parse_notation, AIConfig, AIEngine, Agent, BotAgent, CaptureRule, Game,
    GameConfig, GameResult, HumanAgent, Move, Player, Setup, DEFAULT_STRATEGY, STOP_TOKEN,
};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::io;

#[derive(Parser)]
#[command(name = "checkers")]
#[command(about = "Checkers rule engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// 对弈
    Play(PlayArgs),

    /// 获取合法走法
    Moves {
        /// 局面记谱
        #[arg(long)]
        position: String,

        /// 走棋方 (a, b)，默认取记谱中的回合
        #[arg(long)]
        player: Option<String>,

        /// 吃子规则 (optional, mandatory)
        #[arg(long, default_value = "optional")]
        capture_rule: String,

        /// JSON 输出
        #[arg(long)]
        json: bool,
    },

    /// 显示棋盘
    Show {
        /// 局面记谱
        #[arg(long)]
        position: String,
    },
}

#[derive(Args)]
struct PlayArgs {
    /// 人类执哪一方 (a, b, none)
    #[arg(long, default_value = "a")]
    human: String,

    /// 电脑策略 (random, greedy)
    #[arg(long, default_value = DEFAULT_STRATEGY)]
    strategy: String,

    /// 随机种子
    #[arg(long)]
    seed: Option<u64>,

    /// 吃子规则 (optional, mandatory)
    #[arg(long, default_value = "optional")]
    capture_rule: String,

    /// 总步数上限（双方各走一步记两步），达到后判和
    #[arg(long)]
    max_moves: Option<usize>,

    /// 起始局面记谱，默认标准开局
    #[arg(long)]
    position: Option<String>,
}

impl Default for PlayArgs {
    fn default() -> Self {
        PlayArgs {
            human: "a".to_string(),
            strategy: DEFAULT_STRATEGY.to_string(),
            seed: None,
            capture_rule: "optional".to_string(),
            max_moves: None,
            position: None,
        }
    }
}

#[derive(Serialize)]
struct MovesResponse {
    player: Player,
    moves: Vec<Move>,
    total: usize,
}

fn fail(msg: &str) -> ! {
    eprintln!("Error: {}", msg);
    std::process::exit(1);
}

fn parse_capture_rule(name: &str) -> CaptureRule {
    CaptureRule::from_name(name)
        .unwrap_or_else(|| fail(&format!("Unknown capture rule: {}", name)))
}

fn parse_setup(position: &str) -> Setup {
    parse_notation(position).unwrap_or_else(|e| fail(&e.to_string()))
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Play(args)) => run_play(args),
        None => run_play(PlayArgs::default()),

        Some(Commands::Moves {
            position,
            player,
            capture_rule,
            json,
        }) => {
            let setup = parse_setup(&position);
            let player = match player {
                Some(p) => p
                    .chars()
                    .next()
                    .and_then(Player::from_char)
                    .unwrap_or_else(|| fail(&format!("Invalid player: {}", p))),
                None => setup.turn,
            };
            let moves = legal_moves(&setup.board, player, parse_capture_rule(&capture_rule));

            if json {
                let response = MovesResponse {
                    player,
                    total: moves.len(),
                    moves,
                };
                match serde_json::to_string_pretty(&response) {
                    Ok(text) => println!("{}", text),
                    Err(e) => fail(&e.to_string()),
                }
            } else {
                println!("Legal moves for {} ({}):", player, moves.len());
                for mv in &moves {
                    println!("  {}  [{}]", mv.to_input_str(), mv);
                }
            }
        }

        Some(Commands::Show { position }) => {
            let setup = parse_setup(&position);
            print!("{}", setup.board);
            println!("{} to move.", setup.turn);
        }
    }
}

fn bot(name: &str, strategy: &str, seed: Option<u64>) -> Box<dyn Agent> {
    let engine = AIEngine::from_strategy(strategy, &AIConfig { seed })
        .unwrap_or_else(|e| fail(&e.to_string()));
    Box::new(BotAgent::new(name, engine))
}

fn human_agent() -> Box<dyn Agent> {
    Box::new(HumanAgent::stdio("Human"))
}

/// 对弈主循环；胜负与用户中止都以 0 退出
fn run_play(args: PlayArgs) {
    let config = GameConfig {
        capture_rule: parse_capture_rule(&args.capture_rule),
        max_moves: args.max_moves,
    };
    let setup = match &args.position {
        Some(p) => parse_setup(p),
        None => Setup::default(),
    };

    // 两个电脑使用不同的种子
    let seed_b = args.seed.map(|s| s.wrapping_add(1));
    let human = args.human.to_lowercase();
    let (mut agent_a, mut agent_b): (Box<dyn Agent>, Box<dyn Agent>) =
        match human.as_str() {
            "a" => (
                human_agent(),
                bot("Bot", &args.strategy, args.seed),
            ),
            "b" => (
                bot("Bot", &args.strategy, args.seed),
                human_agent(),
            ),
            "none" => (
                bot("Bot A", &args.strategy, args.seed),
                bot("Bot B", &args.strategy, seed_b),
            ),
            other => fail(&format!("Invalid human side: {} (expected a, b or none)", other)),
        };

    if human != "none" {
        println!(
            "Welcome to Checkers! Type '{}' anytime to end the game.",
            STOP_TOKEN
        );
    }

    let mut game = Game::from_setup(setup, config);
    let mut stdout = io::stdout();
    match game.play(agent_a.as_mut(), agent_b.as_mut(), &mut stdout) {
        Ok(GameResult::Stopped) => log::info!("stopped after {} moves", game.move_count()),
        Ok(result) => log::info!("finished: {:?}", result),
        Err(e) => fail(&e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_agent_name() {
        // 回合提示为 "<name>'s turn (Player X)."
        assert_eq!(human_agent().name(), "Human");
    }

    #[test]
    fn test_play_args_parse() {
        let cli = Cli::parse_from(["checkers", "play", "--human", "none", "--max-moves", "40"]);
        match cli.command {
            Some(Commands::Play(args)) => {
                assert_eq!(args.human, "none");
                assert_eq!(args.max_moves, Some(40));
            }
            _ => panic!("expected play"),
        }
    }
}
