//! Common types for the puzzle engine: construction and move errors.

use super::vehicle::{Cell, Orientation, VehicleId};

/// Errors returned when building a board from an initial-state description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Width or height is zero.
    EmptyGrid,
    /// Move budget is zero.
    NoMoveBudget,
    /// No vehicles supplied; the exit vehicle is mandatory.
    NoVehicles,
    /// More vehicles than there are letters to name them.
    TooManyVehicles(usize),
    /// Vehicle shorter than the minimum length.
    VehicleTooShort(VehicleId),
    /// The exit vehicle must be horizontal.
    ExitNotHorizontal,
    /// A vehicle has a cell outside the grid.
    VehicleOutOfBounds(VehicleId),
    /// Two vehicles share a cell.
    VehiclesOverlap(VehicleId, VehicleId, Cell),
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::EmptyGrid => write!(f, "Grid must be at least one cell wide and high"),
            BoardError::NoMoveBudget => write!(f, "Move budget must be positive"),
            BoardError::NoVehicles => write!(f, "Board needs at least the exit vehicle"),
            BoardError::TooManyVehicles(n) => write!(f, "Too many vehicles: {}", n),
            BoardError::VehicleTooShort(id) => write!(f, "Vehicle {} is too short", id),
            BoardError::ExitNotHorizontal => write!(f, "Exit vehicle must be horizontal"),
            BoardError::VehicleOutOfBounds(id) => write!(f, "Vehicle {} lies outside the grid", id),
            BoardError::VehiclesOverlap(a, b, cell) => {
                write!(f, "Vehicles {} and {} overlap at {}", a, b, cell)
            }
        }
    }
}

/// Reasons a move is rejected. A rejected move never touches the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// No vehicle with that id.
    UnknownVehicle(VehicleId),
    /// Direction does not run along the vehicle's axis.
    WrongAxis(Orientation),
    /// The vehicle would leave the grid.
    OutOfBounds,
    /// Another vehicle is in the way.
    Blocked { by: VehicleId },
}

impl MoveError {
    /// `true` for the failures the player sees as "blocked": the edge of the
    /// grid or another vehicle.
    pub fn is_blocked(&self) -> bool {
        matches!(self, MoveError::OutOfBounds | MoveError::Blocked { .. })
    }
}

impl core::fmt::Display for MoveError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MoveError::UnknownVehicle(id) => write!(f, "No vehicle {}", id),
            MoveError::WrongAxis(Orientation::Horizontal) => {
                write!(f, "Wrong axis: vehicle only moves left and right")
            }
            MoveError::WrongAxis(Orientation::Vertical) => {
                write!(f, "Wrong axis: vehicle only moves up and down")
            }
            MoveError::OutOfBounds => write!(f, "Blocked by the edge of the grid"),
            MoveError::Blocked { by } => write!(f, "Blocked by vehicle {}", by),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

#[cfg(feature = "std")]
impl std::error::Error for MoveError {}
