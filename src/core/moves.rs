//! Move application. A move is either applied in full or not at all.

use super::board::Board;
use super::common::MoveError;
use super::legality::check_step;
use super::vehicle::{Cell, Direction, VehicleId};

/// Effect of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    pub vehicle: VehicleId,
    pub direction: Direction,
    /// Anchor before the move.
    pub from: Cell,
    /// Anchor after the move.
    pub to: Cell,
    /// Counter value after this move.
    pub moves_used: usize,
}

/// Slide vehicle `id` one cell towards `direction`.
///
/// Up and down are only accepted for vertical vehicles, left and right only
/// for horizontal ones. On any error the board is untouched.
pub fn apply_move(
    board: &mut Board,
    id: VehicleId,
    direction: Direction,
) -> Result<AppliedMove, MoveError> {
    let vehicle = board.vehicle(id).ok_or(MoveError::UnknownVehicle(id))?;
    if vehicle.orientation() != direction.axis() {
        return Err(MoveError::WrongAxis(vehicle.orientation()));
    }
    let from = vehicle.anchor();
    let footprint = check_step(board, id, direction.step())?;
    let to = footprint.anchor();
    board.commit_step(id, to);
    Ok(AppliedMove {
        vehicle: id,
        direction,
        from,
        to,
        moves_used: board.moves_used(),
    })
}
