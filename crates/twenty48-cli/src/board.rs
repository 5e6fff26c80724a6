use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use twenty48_engine::{Exponent, Grid};

/// Load a starting board: one row per line, exponents separated by whitespace.
/// Blank lines are skipped.
pub fn load_board(path: &Path) -> Result<Grid> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read board {}", path.display()))?;
    parse_board(&text).with_context(|| format!("invalid board in {}", path.display()))
}

pub fn parse_board(text: &str) -> Result<Grid> {
    let rows = text
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(lineno, line)| {
            line.split_whitespace()
                .map(|tok| {
                    tok.parse::<Exponent>()
                        .map_err(|err| anyhow!("line {}: '{tok}': {err}", lineno + 1))
                })
                .collect::<Result<Vec<_>>>()
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Grid::from_rows(rows)?)
}
