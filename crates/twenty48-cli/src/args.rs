use std::path::PathBuf;

use clap::Parser;

use crate::config::SessionConfig;

#[derive(Parser, Debug)]
#[command(author, version, about = "Play 2048 in the terminal (cells show exponents)")]
pub struct Args {
    /// Optional TOML session config; flags below override its values.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Board width (default 4).
    #[arg(long, value_name = "N")]
    pub width: Option<usize>,
    /// Board height (default 4).
    #[arg(long, value_name = "N")]
    pub height: Option<usize>,
    /// Seed for tile spawns; omit for an entropy-seeded game.
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,
    /// Start from a board file: whitespace-separated exponents, one row per line.
    #[arg(long, value_name = "FILE")]
    pub board: Option<PathBuf>,
    /// Log filter, e.g. "warn", "debug". `RUST_LOG` takes precedence.
    #[arg(long, default_value = "warn")]
    pub log: String,
}

impl Args {
    /// Layer command-line values over `cfg`.
    pub fn apply_to(&self, cfg: &mut SessionConfig) {
        if let Some(width) = self.width {
            cfg.width = width;
        }
        if let Some(height) = self.height {
            cfg.height = height;
        }
        if self.seed.is_some() {
            cfg.seed = self.seed;
        }
        if self.board.is_some() {
            cfg.board = self.board.clone();
        }
    }
}
