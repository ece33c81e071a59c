//! Board state: grid dimensions, the ordered vehicle list and the move budget.

use alloc::vec::Vec;

use super::common::{BoardError, MoveError};
use super::config::{EXIT_VEHICLE, MAX_VEHICLES, MIN_VEHICLE_LENGTH};
use super::moves::{self, AppliedMove};
use super::outcome::{self, Outcome};
use super::vehicle::{Cell, Direction, Orientation, Vehicle, VehicleId};

/// Read-only copy of the board handed to renderers.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardState {
    pub width: usize,
    pub height: usize,
    pub move_budget: usize,
    pub moves_used: usize,
    pub vehicles: Vec<Vehicle>,
}

impl BoardState {
    pub fn moves_remaining(&self) -> usize {
        self.move_budget.saturating_sub(self.moves_used)
    }

    /// Vehicle covering `cell`, if any.
    pub fn vehicle_at(&self, cell: Cell) -> Option<VehicleId> {
        self.vehicles
            .iter()
            .position(|v| v.occupies(cell))
            .map(VehicleId::new)
    }
}

/// The puzzle board. Every vehicle stays inside the grid and no two vehicles
/// share a cell; all mutation goes through [`Board::apply_move`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    move_budget: usize,
    moves_used: usize,
    vehicles: Vec<Vehicle>,
}

impl Board {
    /// Build a board, rejecting any initial layout that breaks the grid
    /// bounds or has overlapping vehicles.
    pub fn new(
        width: usize,
        height: usize,
        move_budget: usize,
        vehicles: Vec<Vehicle>,
    ) -> Result<Self, BoardError> {
        if width == 0 || height == 0 {
            return Err(BoardError::EmptyGrid);
        }
        if move_budget == 0 {
            return Err(BoardError::NoMoveBudget);
        }
        if vehicles.is_empty() {
            return Err(BoardError::NoVehicles);
        }
        if vehicles.len() > MAX_VEHICLES {
            return Err(BoardError::TooManyVehicles(vehicles.len()));
        }
        if vehicles[EXIT_VEHICLE.index()].orientation() != Orientation::Horizontal {
            return Err(BoardError::ExitNotHorizontal);
        }
        let board = Board {
            width,
            height,
            move_budget,
            moves_used: 0,
            vehicles,
        };
        board.check_invariants()?;
        Ok(board)
    }

    /// Verify vehicle lengths, grid bounds and that no two vehicles overlap.
    pub fn check_invariants(&self) -> Result<(), BoardError> {
        for (i, vehicle) in self.vehicles.iter().enumerate() {
            let id = VehicleId::new(i);
            if vehicle.length() < MIN_VEHICLE_LENGTH {
                return Err(BoardError::VehicleTooShort(id));
            }
            if !self.fits(vehicle) {
                return Err(BoardError::VehicleOutOfBounds(id));
            }
        }
        for (i, a) in self.vehicles.iter().enumerate() {
            for (j, b) in self.vehicles.iter().enumerate().skip(i + 1) {
                if let Some(cell) = a.cells().find(|c| b.occupies(*c)) {
                    return Err(BoardError::VehiclesOverlap(
                        VehicleId::new(i),
                        VehicleId::new(j),
                        cell,
                    ));
                }
            }
        }
        Ok(())
    }

    // Checked so a far-away anchor cannot wrap around.
    fn fits(&self, vehicle: &Vehicle) -> bool {
        let anchor = vehicle.anchor();
        let reach = vehicle.length() - 1;
        match vehicle.orientation() {
            Orientation::Horizontal => {
                anchor.y < self.height
                    && anchor.x.checked_add(reach).is_some_and(|x| x < self.width)
            }
            Orientation::Vertical => {
                anchor.x < self.width
                    && anchor.y.checked_add(reach).is_some_and(|y| y < self.height)
            }
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn move_budget(&self) -> usize {
        self.move_budget
    }

    pub fn moves_used(&self) -> usize {
        self.moves_used
    }

    pub fn moves_remaining(&self) -> usize {
        self.move_budget.saturating_sub(self.moves_used)
    }

    /// Immutable view of all vehicles, exit vehicle first.
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn vehicle(&self, id: VehicleId) -> Option<&Vehicle> {
        self.vehicles.get(id.index())
    }

    pub fn exit_vehicle(&self) -> &Vehicle {
        &self.vehicles[EXIT_VEHICLE.index()]
    }

    /// Ids of every vehicle in board order.
    pub fn ids(&self) -> impl Iterator<Item = VehicleId> {
        (0..self.vehicles.len()).map(VehicleId::new)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x < self.width && cell.y < self.height
    }

    /// Vehicle covering `cell`, if any.
    pub fn vehicle_at(&self, cell: Cell) -> Option<VehicleId> {
        self.vehicles
            .iter()
            .position(|v| v.occupies(cell))
            .map(VehicleId::new)
    }

    /// Slide one vehicle a single cell. See [`moves::apply_move`].
    pub fn apply_move(
        &mut self,
        id: VehicleId,
        direction: Direction,
    ) -> Result<AppliedMove, MoveError> {
        moves::apply_move(self, id, direction)
    }

    /// Classify the current position. See [`outcome::evaluate`].
    pub fn outcome(&self) -> Outcome {
        outcome::evaluate(self)
    }

    /// Snapshot for rendering.
    pub fn state(&self) -> BoardState {
        BoardState::from(self)
    }

    /// Record an already validated step: move the anchor and count the move.
    pub(crate) fn commit_step(&mut self, id: VehicleId, anchor: Cell) {
        self.vehicles[id.index()].set_anchor(anchor);
        self.moves_used += 1;
    }
}

impl From<&Board> for BoardState {
    fn from(b: &Board) -> Self {
        BoardState {
            width: b.width,
            height: b.height,
            move_budget: b.move_budget,
            moves_used: b.moves_used,
            vehicles: b.vehicles.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn h(x: usize, y: usize, len: usize) -> Vehicle {
        Vehicle::new(Cell::new(x, y), Orientation::Horizontal, len)
    }

    fn v(x: usize, y: usize, len: usize) -> Vehicle {
        Vehicle::new(Cell::new(x, y), Orientation::Vertical, len)
    }

    #[test]
    fn rejects_degenerate_input() {
        assert_eq!(Board::new(0, 3, 5, vec![h(0, 0, 2)]), Err(BoardError::EmptyGrid));
        assert_eq!(Board::new(3, 3, 0, vec![h(0, 0, 2)]), Err(BoardError::NoMoveBudget));
        assert_eq!(Board::new(3, 3, 5, vec![]), Err(BoardError::NoVehicles));
        assert_eq!(
            Board::new(3, 3, 5, vec![v(0, 0, 2)]),
            Err(BoardError::ExitNotHorizontal)
        );
        assert_eq!(
            Board::new(3, 3, 5, vec![h(0, 0, 2), v(2, 1, 1)]),
            Err(BoardError::VehicleTooShort(VehicleId::new(1)))
        );
    }

    #[test]
    fn rejects_out_of_bounds() {
        assert_eq!(
            Board::new(3, 3, 5, vec![h(2, 0, 2)]),
            Err(BoardError::VehicleOutOfBounds(VehicleId::new(0)))
        );
        assert_eq!(
            Board::new(3, 3, 5, vec![h(0, 0, 2), v(0, 2, 2)]),
            Err(BoardError::VehicleOutOfBounds(VehicleId::new(1)))
        );
        assert_eq!(
            Board::new(3, 3, 5, vec![h(usize::MAX, 0, 2)]),
            Err(BoardError::VehicleOutOfBounds(VehicleId::new(0)))
        );
    }

    #[test]
    fn rejects_overlap() {
        assert_eq!(
            Board::new(4, 4, 5, vec![h(0, 1, 3), v(2, 0, 3)]),
            Err(BoardError::VehiclesOverlap(
                VehicleId::new(0),
                VehicleId::new(1),
                Cell::new(2, 1)
            ))
        );
    }

    #[test]
    fn lookups() {
        let board = Board::new(4, 4, 10, vec![h(0, 1, 2), v(3, 0, 3)]).unwrap();
        assert_eq!(board.vehicle_at(Cell::new(1, 1)), Some(VehicleId::new(0)));
        assert_eq!(board.vehicle_at(Cell::new(3, 2)), Some(VehicleId::new(1)));
        assert_eq!(board.vehicle_at(Cell::new(3, 3)), None);
        assert!(board.contains(Cell::new(3, 3)));
        assert!(!board.contains(Cell::new(4, 0)));
        assert_eq!(board.ids().count(), 2);
        assert_eq!(board.moves_remaining(), 10);
        assert_eq!(board.state().vehicles, board.vehicles());
    }
}
