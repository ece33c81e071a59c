//! Win and loss detection.

use super::board::Board;

/// Classification of a board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    InProgress,
    /// The exit vehicle touches the right edge.
    Won,
    /// Budget spent without reaching the exit.
    MovesExhausted,
}

impl Outcome {
    pub fn is_over(self) -> bool {
        self != Outcome::InProgress
    }
}

/// `true` when the exit vehicle's rightmost cell sits in the last column.
pub fn is_won(board: &Board) -> bool {
    board.exit_vehicle().tail().x + 1 == board.width()
}

/// Evaluate the current status. A win takes priority over an exhausted budget.
pub fn evaluate(board: &Board) -> Outcome {
    if is_won(board) {
        Outcome::Won
    } else if board.moves_used() >= board.move_budget() {
        Outcome::MovesExhausted
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::vehicle::{Cell, Direction, Orientation, Vehicle, VehicleId};
    use alloc::vec;

    #[test]
    fn win_beats_exhausted_budget() {
        let mut board = Board::new(
            3,
            1,
            1,
            vec![Vehicle::new(Cell::new(0, 0), Orientation::Horizontal, 2)],
        )
        .unwrap();
        assert_eq!(evaluate(&board), Outcome::InProgress);
        board.apply_move(VehicleId::new(0), Direction::Right).unwrap();
        assert_eq!(board.moves_used(), board.move_budget());
        assert_eq!(evaluate(&board), Outcome::Won);
        assert!(evaluate(&board).is_over());
    }

    #[test]
    fn start_on_exit_is_won() {
        let board = Board::new(
            4,
            2,
            3,
            vec![Vehicle::new(Cell::new(2, 1), Orientation::Horizontal, 2)],
        )
        .unwrap();
        assert_eq!(board.outcome(), Outcome::Won);
    }
}
