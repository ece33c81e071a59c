#![cfg(feature = "std")]

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use super::{parse_command, InputError, Player};
use crate::core::{Direction, MoveError, VehicleId};
use crate::render::{render, RenderOptions};
use crate::session::{Command, GameSession, SessionError, SessionEvent, SessionState};

/// Interactive player reading one command per line.
///
/// An empty line repeats the last direction for the selected vehicle, so a
/// vehicle can be pushed along with repeated ENTER presses.
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
    render: RenderOptions,
    last_direction: Option<Direction>,
}

impl CliPlayer<StdinLock<'static>, Stdout> {
    /// Player on the process's stdin and stdout.
    pub fn stdio(render: RenderOptions) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), render)
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, output: W, render: RenderOptions) -> Self {
        Self {
            input,
            output,
            render,
            last_direction: None,
        }
    }

    /// Consume the player and hand back its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print the current board.
    pub fn show(&mut self, session: &GameSession) -> io::Result<()> {
        write!(self.output, "\n{}", render(&session.snapshot(), &self.render))
    }

    fn prompt(&mut self, session: &GameSession) -> io::Result<()> {
        let last_letter = VehicleId::new(session.board().vehicles().len() - 1);
        match session.state() {
            SessionState::AwaitingDirection(id) => write!(
                self.output,
                "Vehicle {}: up/down/left/right, A-{} to switch, ENTER repeats, 'quit' gives up: ",
                id, last_letter
            )?,
            _ => write!(
                self.output,
                "Select a vehicle (A-{}) or 'quit': ",
                last_letter
            )?,
        }
        self.output.flush()
    }

    fn read_command(&mut self, session: &GameSession) -> io::Result<Option<Command>> {
        loop {
            self.prompt(session)?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            let parsed = match parse_command(&line) {
                Err(InputError::Empty) if session.selected().is_some() => {
                    match self.last_direction {
                        Some(d) => Ok(Command::Move(d)),
                        None => Err(InputError::Empty),
                    }
                }
                other => other,
            };
            match parsed {
                Ok(command) => {
                    if let Command::Move(d) = command {
                        self.last_direction = Some(d);
                    }
                    return Ok(Some(command));
                }
                Err(e) => writeln!(self.output, "✗ {}", e)?,
            }
        }
    }
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn next_command(&mut self, session: &GameSession) -> Option<Command> {
        // A broken terminal ends input the same way EOF does.
        self.read_command(session).ok().flatten()
    }

    fn handle_report(
        &mut self,
        session: &GameSession,
        report: &Result<SessionEvent, SessionError>,
    ) {
        let _ = match report {
            Ok(SessionEvent::Selected(id)) => {
                self.last_direction = None;
                writeln!(self.output, "Vehicle {} selected.", id)
            }
            Ok(SessionEvent::Moved { applied, .. }) => {
                let _ = writeln!(
                    self.output,
                    "Vehicle {} moved {}.",
                    applied.vehicle, applied.direction
                );
                self.show(session)
            }
            Ok(SessionEvent::Ended(_)) => Ok(()),
            Err(e) => {
                if matches!(e, SessionError::Rejected(MoveError::WrongAxis(_))) {
                    self.last_direction = None;
                }
                writeln!(self.output, "✗ {}", e)
            }
        };
    }
}
