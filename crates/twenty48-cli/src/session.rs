use std::io::{BufRead, Write};

use anyhow::Result;
use log::{debug, info};
use twenty48_engine::{GameState, Score};

use crate::input::{Command, parse_command};

const PROMPT: &str = "direction (0=left 1=down 2=right 3=up, q=quit): ";

/// How an interactive session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The requested move changed nothing.
    IllegalMove,
    /// No move can change the board any more.
    GameOver,
    Quit,
    EndOfInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub outcome: Outcome,
    pub moves: u64,
    pub score: Score,
}

/// Drive `state` from line-oriented `input`, echoing the board and score to `out`
/// after every accepted move.
pub fn run<R: BufRead, W: Write>(
    state: &mut GameState,
    mut input: R,
    out: &mut W,
) -> Result<SessionSummary> {
    let mut moves = 0u64;
    write!(out, "{state}")?;
    writeln!(out, "score: {}", state.score())?;

    let outcome = loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;
        let mut raw = Vec::new();
        if input.read_until(b'\n', &mut raw)? == 0 {
            break Outcome::EndOfInput;
        }
        let line = String::from_utf8_lossy(&raw);
        let direction = match parse_command(&line) {
            Ok(Command::Move(direction)) => direction,
            Ok(Command::Quit) => break Outcome::Quit,
            Err(err) => {
                writeln!(out, "{err}")?;
                continue;
            }
        };
        if !state.make_move(direction) {
            debug!("move {direction} left the board unchanged");
            break Outcome::IllegalMove;
        }
        moves += 1;
        write!(out, "{state}")?;
        writeln!(out, "score: {}", state.score())?;
        if state.is_over() {
            break Outcome::GameOver;
        }
    };

    if matches!(outcome, Outcome::IllegalMove | Outcome::GameOver) {
        writeln!(out, "game over")?;
    }
    info!(
        "session ended ({outcome:?}) after {moves} moves, score {}",
        state.score()
    );
    Ok(SessionSummary {
        outcome,
        moves,
        score: state.score(),
    })
}
