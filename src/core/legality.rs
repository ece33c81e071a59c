//! Move legality: grid bounds and collisions with the other vehicles.
//!
//! Everything here is read-only; the board is only ever changed by
//! [`apply_move`](super::moves::apply_move) once a step has passed these checks.

use alloc::vec::Vec;

use super::board::Board;
use super::common::MoveError;
use super::vehicle::{cells_from, Cell, Step, VehicleId};

/// Cells a vehicle would cover after a legal step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Footprint {
    cells: Vec<Cell>,
}

impl Footprint {
    /// New anchor: the first candidate cell.
    pub fn anchor(&self) -> Cell {
        self.cells[0]
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

/// Test a one-cell step of vehicle `id` along its own axis.
///
/// Returns the candidate cells when the step keeps the vehicle on the grid
/// and clear of every other vehicle. The vehicle's own current cells are not
/// considered an obstacle.
pub fn check_step(board: &Board, id: VehicleId, step: Step) -> Result<Footprint, MoveError> {
    let vehicle = board.vehicle(id).ok_or(MoveError::UnknownVehicle(id))?;
    let anchor = vehicle
        .anchor()
        .stepped(vehicle.orientation(), step)
        .ok_or(MoveError::OutOfBounds)?;
    let cells: Vec<Cell> = cells_from(anchor, vehicle.orientation(), vehicle.length()).collect();

    if !cells.iter().all(|c| board.contains(*c)) {
        return Err(MoveError::OutOfBounds);
    }
    if let Some(by) = blocker(board, id, &cells) {
        return Err(MoveError::Blocked { by });
    }
    Ok(Footprint { cells })
}

/// `true` when [`check_step`] accepts the step.
pub fn is_legal_step(board: &Board, id: VehicleId, step: Step) -> bool {
    check_step(board, id, step).is_ok()
}

/// First vehicle other than `mover` that covers any of `cells`.
fn blocker(board: &Board, mover: VehicleId, cells: &[Cell]) -> Option<VehicleId> {
    board
        .ids()
        .filter(|other| *other != mover)
        .find(|other| {
            board
                .vehicle(*other)
                .is_some_and(|v| cells.iter().any(|c| v.occupies(*c)))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::vehicle::{Orientation, Vehicle};
    use alloc::vec;

    fn board() -> Board {
        // A A . C
        // . . . C
        // B B . .
        Board::new(
            4,
            3,
            10,
            vec![
                Vehicle::new(Cell::new(0, 0), Orientation::Horizontal, 2),
                Vehicle::new(Cell::new(0, 2), Orientation::Horizontal, 2),
                Vehicle::new(Cell::new(3, 0), Orientation::Vertical, 2),
            ],
        )
        .unwrap()
    }

    #[test]
    fn legal_step_reports_candidate_cells() {
        let board = board();
        let fp = check_step(&board, VehicleId::new(0), Step::Forward).unwrap();
        assert_eq!(fp.anchor(), Cell::new(1, 0));
        assert_eq!(fp.cells(), [Cell::new(1, 0), Cell::new(2, 0)]);
    }

    #[test]
    fn grid_edges_are_out_of_bounds() {
        let board = board();
        assert_eq!(
            check_step(&board, VehicleId::new(0), Step::Back),
            Err(MoveError::OutOfBounds)
        );
        assert_eq!(
            check_step(&board, VehicleId::new(2), Step::Back),
            Err(MoveError::OutOfBounds)
        );
    }

    #[test]
    fn other_vehicles_block() {
        let mut board = board();
        board.apply_move(VehicleId::new(0), crate::core::Direction::Right).unwrap();
        assert_eq!(
            check_step(&board, VehicleId::new(0), Step::Forward),
            Err(MoveError::Blocked { by: VehicleId::new(2) })
        );
        assert!(!is_legal_step(&board, VehicleId::new(0), Step::Forward));
    }

    #[test]
    fn unknown_vehicle() {
        let board = board();
        assert_eq!(
            check_step(&board, VehicleId::new(7), Step::Forward),
            Err(MoveError::UnknownVehicle(VehicleId::new(7)))
        );
    }
}
