use anyhow::{Result, bail};
use twenty48_engine::Direction;

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Quit,
}

/// Parse a direction index (`0..=3`), a direction word or letter, or a quit request.
///
/// Out-of-range indices surface the engine's invalid-direction error.
pub fn parse_command(line: &str) -> Result<Command> {
    let token = line.trim().to_ascii_lowercase();
    if token.is_empty() {
        bail!("no direction given");
    }
    if let Ok(index) = token.parse::<u8>() {
        return Ok(Command::Move(Direction::try_from(index)?));
    }
    let command = match token.as_str() {
        "left" | "l" | "a" => Command::Move(Direction::Left),
        "down" | "d" | "s" => Command::Move(Direction::Down),
        "right" | "r" => Command::Move(Direction::Right),
        "up" | "u" | "w" => Command::Move(Direction::Up),
        "q" | "quit" | "exit" => Command::Quit,
        other => bail!("unrecognised input '{other}'"),
    };
    Ok(command)
}
