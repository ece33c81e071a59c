//! Vehicle definitions: orientation, direction and the occupied-cell geometry.

use core::fmt;

/// A grid cell, `x` grows to the right and `y` grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub x: usize,
    pub y: usize,
}

impl Cell {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Neighbouring cell one step along `orientation`, or `None` when the
    /// step would go below zero.
    pub fn stepped(self, orientation: Orientation, step: Step) -> Option<Cell> {
        let offset = step.offset();
        match orientation {
            Orientation::Horizontal => self.x.checked_add_signed(offset).map(|x| Cell::new(x, self.y)),
            Orientation::Vertical => self.y.checked_add_signed(offset).map(|y| Cell::new(self.x, y)),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Axis a vehicle lies on, fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Signed unit step along a vehicle's own axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// Towards the top or the left (-1).
    Back,
    /// Towards the bottom or the right (+1).
    Forward,
}

impl Step {
    pub fn offset(self) -> isize {
        match self {
            Step::Back => -1,
            Step::Forward => 1,
        }
    }
}

/// Logical direction requested by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Orientation a vehicle needs to move this way.
    pub fn axis(self) -> Orientation {
        match self {
            Direction::Up | Direction::Down => Orientation::Vertical,
            Direction::Left | Direction::Right => Orientation::Horizontal,
        }
    }

    pub fn step(self) -> Step {
        match self {
            Direction::Up | Direction::Left => Step::Back,
            Direction::Down | Direction::Right => Step::Forward,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        })
    }
}

/// Position of a vehicle in the board's ordered list. Index 0 is the exit
/// vehicle; the letter view is `A` for index 0, `B` for index 1 and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct VehicleId(usize);

impl VehicleId {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }

    /// Map a letter (either case) to an id. Only the range of the letter is
    /// checked here; whether the board holds that many vehicles is not.
    pub fn from_letter(letter: char) -> Option<Self> {
        let upper = letter.to_ascii_uppercase();
        if upper.is_ascii_uppercase() {
            Some(Self((upper as u8 - b'A') as usize))
        } else {
            None
        }
    }

    /// Letter of this id, `None` past `Z`.
    pub fn letter(self) -> Option<char> {
        if self.0 < 26 {
            Some((b'A' + self.0 as u8) as char)
        } else {
            None
        }
    }
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.letter() {
            Some(c) => write!(f, "{}", c),
            None => write!(f, "#{}", self.0),
        }
    }
}

/// A vehicle on the grid. Orientation and length never change; only the
/// anchor (topmost or leftmost cell) moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Vehicle {
    anchor: Cell,
    orientation: Orientation,
    length: usize,
}

impl Vehicle {
    /// Describe a vehicle. Shape rules (length, bounds) are enforced when it
    /// is handed to [`Board::new`](super::board::Board::new).
    pub const fn new(anchor: Cell, orientation: Orientation, length: usize) -> Self {
        Self {
            anchor,
            orientation,
            length,
        }
    }

    pub fn anchor(&self) -> Cell {
        self.anchor
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Cells covered by the vehicle, starting at the anchor.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        cells_from(self.anchor, self.orientation, self.length)
    }

    /// Last occupied cell (rightmost or bottommost).
    pub fn tail(&self) -> Cell {
        let reach = self.length.saturating_sub(1);
        match self.orientation {
            Orientation::Horizontal => Cell::new(self.anchor.x + reach, self.anchor.y),
            Orientation::Vertical => Cell::new(self.anchor.x, self.anchor.y + reach),
        }
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        let tail = self.tail();
        match self.orientation {
            Orientation::Horizontal => {
                cell.y == self.anchor.y && cell.x >= self.anchor.x && cell.x <= tail.x
            }
            Orientation::Vertical => {
                cell.x == self.anchor.x && cell.y >= self.anchor.y && cell.y <= tail.y
            }
        }
    }

    pub(crate) fn set_anchor(&mut self, anchor: Cell) {
        self.anchor = anchor;
    }
}

pub(crate) fn cells_from(
    anchor: Cell,
    orientation: Orientation,
    length: usize,
) -> impl Iterator<Item = Cell> {
    (0..length).map(move |i| match orientation {
        Orientation::Horizontal => Cell::new(anchor.x + i, anchor.y),
        Orientation::Vertical => Cell::new(anchor.x, anchor.y + i),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn cells_follow_orientation() {
        let h = Vehicle::new(Cell::new(1, 2), Orientation::Horizontal, 3);
        let cells: Vec<_> = h.cells().collect();
        assert_eq!(cells, [Cell::new(1, 2), Cell::new(2, 2), Cell::new(3, 2)]);
        assert_eq!(h.tail(), Cell::new(3, 2));

        let v = Vehicle::new(Cell::new(0, 0), Orientation::Vertical, 2);
        let cells: Vec<_> = v.cells().collect();
        assert_eq!(cells, [Cell::new(0, 0), Cell::new(0, 1)]);
    }

    #[test]
    fn occupies_matches_cells() {
        let v = Vehicle::new(Cell::new(4, 1), Orientation::Vertical, 3);
        for y in 0..6 {
            for x in 0..6 {
                let cell = Cell::new(x, y);
                assert_eq!(v.occupies(cell), v.cells().any(|c| c == cell));
            }
        }
    }

    #[test]
    fn step_below_zero_is_none() {
        let origin = Cell::new(0, 0);
        assert_eq!(origin.stepped(Orientation::Horizontal, Step::Back), None);
        assert_eq!(origin.stepped(Orientation::Vertical, Step::Back), None);
        assert_eq!(
            origin.stepped(Orientation::Vertical, Step::Forward),
            Some(Cell::new(0, 1))
        );
    }

    #[test]
    fn vehicle_id_letters() {
        assert_eq!(VehicleId::from_letter('a'), Some(VehicleId::new(0)));
        assert_eq!(VehicleId::from_letter('C'), Some(VehicleId::new(2)));
        assert_eq!(VehicleId::from_letter('3'), None);
        assert_eq!(VehicleId::new(25).letter(), Some('Z'));
        assert_eq!(VehicleId::new(26).letter(), None);
    }

    #[test]
    fn direction_axis_and_step() {
        assert_eq!(Direction::Up.axis(), Orientation::Vertical);
        assert_eq!(Direction::Right.axis(), Orientation::Horizontal);
        assert_eq!(Direction::Left.step(), Step::Back);
        assert_eq!(Direction::Down.step().offset(), 1);
    }
}
