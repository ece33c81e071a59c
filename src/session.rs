//! Turn sequencing on top of the puzzle engine.
//!
//! The session owns the board, remembers the selected vehicle and stops on a
//! win, an exhausted move budget or an explicit abort. All rule checks are
//! delegated to [`crate::core`].

use log::{debug, info};

use crate::core::{AppliedMove, Board, BoardState, Direction, MoveError, Outcome, VehicleId};

/// One logical input from the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Select(VehicleId),
    Move(Direction),
    Abort,
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameResult {
    Won,
    LostBudget,
    Aborted,
}

impl GameResult {
    /// Process exit code: 0 won, 1 out of moves, 2 aborted.
    pub fn exit_code(self) -> i32 {
        match self {
            GameResult::Won => 0,
            GameResult::LostBudget => 1,
            GameResult::Aborted => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingSelection,
    AwaitingDirection(VehicleId),
    Won,
    LostBudget,
    Aborted,
}

impl SessionState {
    pub fn result(self) -> Option<GameResult> {
        match self {
            SessionState::Won => Some(GameResult::Won),
            SessionState::LostBudget => Some(GameResult::LostBudget),
            SessionState::Aborted => Some(GameResult::Aborted),
            SessionState::AwaitingSelection | SessionState::AwaitingDirection(_) => None,
        }
    }
}

/// What an accepted command did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    Selected(VehicleId),
    Moved {
        applied: AppliedMove,
        outcome: Outcome,
    },
    Ended(GameResult),
}

/// Rejected commands. None of them change the board or end the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// The id does not name a vehicle on this board.
    InvalidSelection(VehicleId),
    /// A direction arrived before any vehicle was selected.
    NothingSelected,
    /// The move engine refused the move.
    Rejected(MoveError),
    /// The game is over; no more commands are taken.
    Finished(GameResult),
}

impl From<MoveError> for SessionError {
    fn from(err: MoveError) -> Self {
        SessionError::Rejected(err)
    }
}

impl core::fmt::Display for SessionError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SessionError::InvalidSelection(id) => write!(f, "No vehicle named {}", id),
            SessionError::NothingSelected => write!(f, "Select a vehicle first"),
            SessionError::Rejected(e) => write!(f, "Move rejected: {}", e),
            SessionError::Finished(result) => write!(f, "Game already over ({:?})", result),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SessionError {}

/// A single game from the starting board to one of the three endings.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    state: SessionState,
}

impl GameSession {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            state: SessionState::AwaitingSelection,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snapshot(&self) -> BoardState {
        self.board.state()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Currently selected vehicle, if any.
    pub fn selected(&self) -> Option<VehicleId> {
        match self.state {
            SessionState::AwaitingDirection(id) => Some(id),
            _ => None,
        }
    }

    /// Final result once the game has ended.
    pub fn result(&self) -> Option<GameResult> {
        self.state.result()
    }

    pub fn is_over(&self) -> bool {
        self.result().is_some()
    }

    /// Process one command to completion.
    pub fn handle(&mut self, command: Command) -> Result<SessionEvent, SessionError> {
        if let Some(result) = self.result() {
            return Err(SessionError::Finished(result));
        }
        match command {
            Command::Abort => {
                info!("game aborted after {} moves", self.board.moves_used());
                self.state = SessionState::Aborted;
                Ok(SessionEvent::Ended(GameResult::Aborted))
            }
            Command::Select(id) => self.select(id),
            Command::Move(direction) => match self.state {
                SessionState::AwaitingDirection(id) => self.step(id, direction),
                _ => Err(SessionError::NothingSelected),
            },
        }
    }

    fn select(&mut self, id: VehicleId) -> Result<SessionEvent, SessionError> {
        if self.board.vehicle(id).is_none() {
            debug!("selection of unknown vehicle {} ignored", id);
            return Err(SessionError::InvalidSelection(id));
        }
        debug!("vehicle {} selected", id);
        self.state = SessionState::AwaitingDirection(id);
        Ok(SessionEvent::Selected(id))
    }

    fn step(&mut self, id: VehicleId, direction: Direction) -> Result<SessionEvent, SessionError> {
        let applied = self.board.apply_move(id, direction).map_err(|e| {
            debug!("move {} {} rejected: {}", id, direction, e);
            SessionError::from(e)
        })?;
        let outcome = self.board.outcome();
        debug!(
            "vehicle {} moved {} to {} ({}/{})",
            id,
            direction,
            applied.to,
            applied.moves_used,
            self.board.move_budget()
        );
        match outcome {
            Outcome::Won => {
                info!("exit reached in {} moves", applied.moves_used);
                self.state = SessionState::Won;
            }
            Outcome::MovesExhausted => {
                info!("move budget of {} exhausted", self.board.move_budget());
                self.state = SessionState::LostBudget;
            }
            Outcome::InProgress => {}
        }
        Ok(SessionEvent::Moved { applied, outcome })
    }
}
