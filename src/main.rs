use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::info;

use term_2048::config::Config;
use term_2048::driver;
use term_2048::engine::{History, Spawner};
use term_2048::game::Game;
use term_2048::trace::BoardLog;

#[derive(Debug, Parser)]
#[command(name = "term-2048", version, about = "Play 2048 in the terminal")]
struct Args {
    /// Path to a TOML configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Seed for tile spawns (overrides config; random when unset)
    #[arg(long)]
    seed: Option<u64>,

    /// Keep at most this many undo steps (overrides config; unbounded when unset)
    #[arg(long, value_name = "N")]
    history_limit: Option<usize>,

    /// Write the board log to this CSV file (overrides config)
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Do not write the board log
    #[arg(long)]
    no_log: bool,

    /// Log filter, e.g. "info", "debug" (RUST_LOG takes precedence)
    #[arg(long, default_value = "warn")]
    log: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or(args.log.as_str())).init();

    let mut config = match &args.config {
        Some(path) => Config::from_toml(path)?,
        None => Config::default(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if args.history_limit.is_some() {
        config.history_limit = args.history_limit;
    }
    if let Some(path) = args.log_file {
        config.log.path = path;
    }
    if args.no_log {
        config.log.enabled = false;
    }

    let spawner = match config.seed {
        Some(seed) => Spawner::seeded(seed),
        None => Spawner::from_entropy(),
    };
    let history = match config.history_limit {
        Some(limit) => History::with_limit(limit),
        None => History::new(),
    };
    let mut game = Game::new(spawner, history);

    let mut board_log = if config.log.enabled {
        Some(BoardLog::create(&config.log.path).context("failed to open board log")?)
    } else {
        None
    };
    info!(
        "starting session: seed {:?}, history limit {:?}, board log {}",
        config.seed,
        config.history_limit,
        board_log
            .as_ref()
            .map(|l| l.path().display().to_string())
            .unwrap_or_else(|| "off".to_string())
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let summary = driver::run(&mut game, stdin.lock(), &mut stdout, board_log.as_mut())?;
    println!(
        "Moves: {} | Undos: {} | Score: {} | Highest tile: {}",
        summary.moves, summary.undos, summary.score, summary.highest_tile
    );
    Ok(())
}
