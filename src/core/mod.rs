//! Puzzle state engine (no_std compatible)
//!
//! Vehicles, the board that owns them, move legality, move application and
//! outcome evaluation. Only `alloc` and the `log` facade are required, so the
//! engine can be embedded without the terminal front end.

pub mod board;
pub mod common;
pub mod config;
pub mod legality;
pub mod moves;
pub mod outcome;
pub mod vehicle;

// Re-export commonly used types
pub use board::{Board, BoardState};
pub use common::{BoardError, MoveError};
pub use config::*;
pub use legality::{check_step, is_legal_step, Footprint};
pub use moves::{apply_move, AppliedMove};
pub use outcome::{evaluate, is_won, Outcome};
pub use vehicle::{Cell, Direction, Orientation, Step, Vehicle, VehicleId};
