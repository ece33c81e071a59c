#![cfg_attr(not(feature = "std"), no_std)]

//! Sliding-block puzzle engine: vehicles slide along their own axis on a
//! rectangular grid until the exit vehicle reaches the right edge or the
//! move budget runs out.

extern crate alloc;

pub mod core;
#[cfg(feature = "std")]
mod logging;
pub mod player;
#[cfg(feature = "std")]
pub mod puzzle;
#[cfg(feature = "std")]
pub mod render;
pub mod session;

pub use crate::core::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use player::{parse_command, run, InputError, Player, ScriptedPlayer};
#[cfg(feature = "std")]
pub use player::CliPlayer;
#[cfg(feature = "std")]
pub use puzzle::{load_puzzle, parse_puzzle, Puzzle, PuzzleError};
#[cfg(feature = "std")]
pub use render::{render, RenderOptions};
pub use session::{Command, GameResult, GameSession, SessionError, SessionEvent, SessionState};
