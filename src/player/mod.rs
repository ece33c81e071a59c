//! Player trait and implementations
//!
//! A player turns outside input into [`Command`]s for a [`GameSession`]:
//! - CliPlayer: interactive line-based terminal player
//! - ScriptedPlayer: replays a fixed list of commands

use alloc::string::{String, ToString};

use crate::core::{Direction, VehicleId};
use crate::session::{Command, GameResult, GameSession, SessionError, SessionEvent};

/// Interface implemented by the different input sources.
pub trait Player {
    /// Next command for the session, or `None` once input has run out.
    fn next_command(&mut self, session: &GameSession) -> Option<Command>;

    /// Inform the player of what the session made of its last command.
    fn handle_report(
        &mut self,
        _session: &GameSession,
        _report: &Result<SessionEvent, SessionError>,
    ) {
    }
}

/// Input that does not map to any command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    Empty,
    Unknown(String),
}

impl core::fmt::Display for InputError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InputError::Empty => write!(f, "Empty input"),
            InputError::Unknown(s) => write!(f, "Unknown command '{}'", s),
        }
    }
}

/// Map one line of input to a command.
///
/// A single letter selects a vehicle, direction words (or the terminal's
/// arrow-key escape sequences) move it, and `quit`/`exit`/`esc` abort.
pub fn parse_command(input: &str) -> Result<Command, InputError> {
    let raw = input.trim_matches(|c: char| c.is_whitespace());
    match raw {
        "\u{1b}[A" => return Ok(Command::Move(Direction::Up)),
        "\u{1b}[B" => return Ok(Command::Move(Direction::Down)),
        "\u{1b}[C" => return Ok(Command::Move(Direction::Right)),
        "\u{1b}[D" => return Ok(Command::Move(Direction::Left)),
        "\u{1b}" => return Ok(Command::Abort),
        _ => {}
    }

    let word = raw.to_ascii_lowercase();
    match word.as_str() {
        "" => Err(InputError::Empty),
        "up" => Ok(Command::Move(Direction::Up)),
        "down" => Ok(Command::Move(Direction::Down)),
        "left" => Ok(Command::Move(Direction::Left)),
        "right" => Ok(Command::Move(Direction::Right)),
        "quit" | "exit" | "esc" | "escape" | "abort" => Ok(Command::Abort),
        _ => {
            let mut chars = raw.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => VehicleId::from_letter(c)
                    .map(Command::Select)
                    .ok_or_else(|| InputError::Unknown(raw.to_string())),
                _ => Err(InputError::Unknown(raw.to_string())),
            }
        }
    }
}

/// Feed commands from `player` into `session` until the game ends.
/// Running out of input counts as an abort.
pub fn run<P: Player + ?Sized>(session: &mut GameSession, player: &mut P) -> GameResult {
    loop {
        if let Some(result) = session.result() {
            return result;
        }
        let command = player.next_command(session).unwrap_or(Command::Abort);
        let report = session.handle(command);
        player.handle_report(session, &report);
    }
}

pub mod scripted;
pub use scripted::ScriptedPlayer;

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub use cli::CliPlayer;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_select() {
        assert_eq!(parse_command("b"), Ok(Command::Select(VehicleId::new(1))));
        assert_eq!(parse_command(" D \n"), Ok(Command::Select(VehicleId::new(3))));
    }

    #[test]
    fn directions_and_arrows() {
        assert_eq!(parse_command("UP"), Ok(Command::Move(Direction::Up)));
        assert_eq!(parse_command("right"), Ok(Command::Move(Direction::Right)));
        assert_eq!(parse_command("\u{1b}[D"), Ok(Command::Move(Direction::Left)));
        assert_eq!(parse_command("\u{1b}[B\n"), Ok(Command::Move(Direction::Down)));
    }

    #[test]
    fn abort_words() {
        for word in ["quit", "Exit", "ESC", "\u{1b}"] {
            assert_eq!(parse_command(word), Ok(Command::Abort));
        }
    }

    #[test]
    fn rejects_noise() {
        assert_eq!(parse_command("   "), Err(InputError::Empty));
        assert_eq!(parse_command("7"), Err(InputError::Unknown("7".to_string())));
        assert_eq!(parse_command("jump"), Err(InputError::Unknown("jump".to_string())));
    }
}
