/// perft（合法手の木の末端数）の計測ツール
///
/// 使い方:
///   # 初期局面から深さ3
///   perft --depth 3
///
///   # 局面とルールを指定し、初手ごとに分けて表示
///   perft --fen "<FEN>" --depth 4 --divide --rules rules.toml
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;
use rxiangqi_core::{Position, STARTPOS_FEN, init_all_tables_once, perft, perft_divide};
use tools::common::rules::load_rules;

#[derive(Parser)]
#[command(about = "perft の計測")]
struct Cli {
    /// 開始局面（FEN）
    #[arg(long, default_value = STARTPOS_FEN)]
    fen: String,

    /// 探索深さ
    #[arg(long, default_value_t = 3)]
    depth: u32,

    /// 初手ごとの内訳を表示
    #[arg(long)]
    divide: bool,

    /// ルール設定ファイル（TOML）
    #[arg(long)]
    rules: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    if cli.depth == 0 {
        bail!("--depth must be >= 1");
    }

    let rules = load_rules(cli.rules.as_deref())?;
    init_all_tables_once();
    let mut pos = Position::from_fen(&cli.fen)
        .with_context(|| format!("invalid --fen {:?}", cli.fen))?
        .with_rules(rules);
    log::info!("perft depth {} from {}", cli.depth, pos.to_fen());

    let start = Instant::now();
    let nodes = if cli.divide {
        let divide = perft_divide(&mut pos, cli.depth);
        for (mv, n) in &divide {
            println!("{mv}: {n}");
        }
        divide.iter().map(|(_, n)| n).sum::<u64>()
    } else {
        perft(&mut pos, cli.depth)
    };
    let elapsed = start.elapsed();

    let nps = nodes as f64 / elapsed.as_secs_f64().max(1e-9);
    println!("nodes {nodes}");
    println!("time {} ms ({nps:.0} nodes/s)", elapsed.as_millis());
    Ok(())
}
