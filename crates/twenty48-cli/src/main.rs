use std::io;

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use twenty48_cli::args::Args;
use twenty48_cli::board::load_board;
use twenty48_cli::config::SessionConfig;
use twenty48_cli::session;
use twenty48_engine::GameState;

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or(args.log.as_str())).init();

    let mut cfg = match &args.config {
        Some(path) => SessionConfig::from_toml(path)?,
        None => SessionConfig::default(),
    };
    args.apply_to(&mut cfg);

    let rng = match cfg.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut state = match &cfg.board {
        Some(path) => {
            let grid = load_board(path)?;
            info!(
                "Loaded {}x{} board from {}",
                grid.width(),
                grid.height(),
                path.display()
            );
            GameState::from_grid(grid, rng)
        }
        None => GameState::with_rng(cfg.width, cfg.height, rng)?,
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let summary = session::run(&mut state, stdin.lock(), &mut stdout)?;
    println!("final score: {}", summary.score);
    Ok(())
}
