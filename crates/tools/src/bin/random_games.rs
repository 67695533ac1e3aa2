/// ランダム対局の生成ツール
///
/// 合法手から一様に選んで指し進め、1局ごとに JSON を1行出力する。
///
/// 使い方:
///   random_games --games 100 --seed 1 --max-plies 200 --out runs/random.jsonl
///   random_games --games 10 --rules rules.toml --out -
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::Local;
use clap::Parser;
use rand::Rng;
use rand_xoshiro::Xoshiro256PlusPlus;
use rand_xoshiro::rand_core::SeedableRng;
use rxiangqi_core::{GameResult, Position, Rules, STARTPOS_FEN, init_all_tables_once};
use serde::Serialize;
use tools::common::io::open_writer;
use tools::common::rules::load_rules;

#[derive(Parser)]
#[command(about = "ランダム対局の生成")]
struct Cli {
    /// 対局数
    #[arg(long, default_value_t = 10)]
    games: u32,

    /// 乱数シード
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// 1局の最大手数（超えたら駒割で裁定）
    #[arg(long, default_value_t = 300)]
    max_plies: u32,

    /// 開始局面（FEN）
    #[arg(long, default_value = STARTPOS_FEN)]
    fen: String,

    /// ルール設定ファイル（TOML）
    #[arg(long)]
    rules: Option<PathBuf>,

    /// 出力先（`-` で標準出力）。省略時は runs/random/<日時>-random.jsonl
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Serialize)]
struct MetaLog<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    timestamp: String,
    games: u32,
    seed: u64,
    max_plies: u32,
    rules: &'a Rules,
}

#[derive(Serialize)]
struct GameLog {
    #[serde(rename = "type")]
    kind: &'static str,
    game_id: u32,
    start_fen: String,
    moves: Vec<String>,
    result: GameResult,
    /// 終局理由
    reason: &'static str,
    final_fen: String,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    if cli.games == 0 {
        bail!("--games must be >= 1");
    }

    let rules = load_rules(cli.rules.as_deref())?;
    init_all_tables_once();
    let start = Position::from_fen(&cli.fen)
        .with_context(|| format!("invalid --fen {:?}", cli.fen))?
        .with_rules(rules);

    let timestamp = Local::now();
    let out = cli.out.clone().unwrap_or_else(|| {
        PathBuf::from("runs/random")
            .join(format!("{}-random.jsonl", timestamp.format("%Y%m%d-%H%M%S")))
    });
    let mut writer =
        open_writer(&out).with_context(|| format!("failed to open {}", out.display()))?;

    let meta = MetaLog {
        kind: "meta",
        timestamp: timestamp.to_rfc3339(),
        games: cli.games,
        seed: cli.seed,
        max_plies: cli.max_plies,
        rules: &rules,
    };
    writeln!(writer, "{}", serde_json::to_string(&meta)?)?;

    let mut rng = Xoshiro256PlusPlus::seed_from_u64(cli.seed);
    let mut tally = [0u32; 3];
    for game_id in 0..cli.games {
        let log = play_random_game(&start, game_id, cli.max_plies, &mut rng);
        match log.result {
            GameResult::RedWins => tally[0] += 1,
            GameResult::BlackWins => tally[1] += 1,
            _ => tally[2] += 1,
        }
        log::debug!(
            "game {game_id}: {} after {} plies ({})",
            log.result,
            log.moves.len(),
            log.reason
        );
        writeln!(writer, "{}", serde_json::to_string(&log)?)?;
    }
    writer
        .close()
        .with_context(|| format!("failed to write {}", out.display()))?;

    log::info!(
        "{} games: red {} / black {} / draw {} -> {}",
        cli.games,
        tally[0],
        tally[1],
        tally[2],
        out.display()
    );
    Ok(())
}

fn play_random_game(
    start: &Position,
    game_id: u32,
    max_plies: u32,
    rng: &mut impl Rng,
) -> GameLog {
    let mut pos = start.clone();
    let mut moves = Vec::new();

    let (result, reason) = loop {
        if pos.is_game_over() {
            let reason = if pos.is_king_captured() {
                "king_captured"
            } else if pos.is_no_progress_draw() {
                "no_progress"
            } else if pos.is_checkmate() {
                "checkmate"
            } else {
                "stalemate"
            };
            break (pos.result(), reason);
        }
        if moves.len() >= max_plies as usize {
            break (pos.adjudicate(), "adjudicated");
        }

        let legal = pos.legal_move_list();
        let mv = legal[rng.random_range(0..legal.len())];
        moves.push(mv.to_ucci());
        pos.push(mv);
    };

    GameLog {
        kind: "game",
        game_id,
        start_fen: start.to_fen(),
        moves,
        result,
        reason,
        final_fen: pos.to_fen(),
    }
}
