use alloc::collections::VecDeque;
use alloc::vec::Vec;

use super::Player;
use crate::session::{Command, GameSession, SessionError, SessionEvent};

/// Replays a fixed list of commands and keeps every report it was given.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPlayer {
    commands: VecDeque<Command>,
    reports: Vec<Result<SessionEvent, SessionError>>,
}

impl ScriptedPlayer {
    pub fn new(commands: impl IntoIterator<Item = Command>) -> Self {
        Self {
            commands: commands.into_iter().collect(),
            reports: Vec::new(),
        }
    }

    /// Session replies in the order the commands were handled.
    pub fn reports(&self) -> &[Result<SessionEvent, SessionError>] {
        &self.reports
    }

    /// Commands not yet handed out.
    pub fn remaining(&self) -> usize {
        self.commands.len()
    }
}

impl Player for ScriptedPlayer {
    fn next_command(&mut self, _session: &GameSession) -> Option<Command> {
        self.commands.pop_front()
    }

    fn handle_report(
        &mut self,
        _session: &GameSession,
        report: &Result<SessionEvent, SessionError>,
    ) {
        self.reports.push(*report);
    }
}
