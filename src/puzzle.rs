#![cfg(feature = "std")]

//! Puzzle files: a boxed text grid followed by the move budget.
//!
//! ```text
//! +------+
//! |..B...|
//! |AAB...>
//! |..B.C.|
//! |....C.|
//! +------+
//! 12
//! ```
//!
//! Lines holding `+` are ignored, lines holding `|` are grid rows. The first
//! character of a row is its border; the last one is too unless it is a cell
//! character. `.` is a free cell and any ASCII letter or digit marks a
//! vehicle. Markers are sorted and the first one becomes the exit vehicle.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use log::warn;

use crate::core::vehicle::cells_from;
use crate::core::{Board, BoardError, Cell, Orientation, Vehicle, EMPTY_CELL, MIN_VEHICLE_LENGTH};

/// Errors from reading or parsing a puzzle file.
#[derive(Debug)]
pub enum PuzzleError {
    Io(std::io::Error),
    /// No grid rows found.
    MissingGrid,
    /// Row (0-based) whose width differs from the first row.
    RaggedRow(usize),
    /// Character inside the grid that is neither `.` nor a marker.
    UnexpectedChar { row: usize, col: usize, ch: char },
    /// The last line is not a move budget.
    MissingMoveBudget,
    InvalidMoveBudget(String),
    /// A marker's cells are not one straight run of at least two cells.
    MalformedVehicle(char),
    /// The grid parsed but breaks the board rules.
    Board(BoardError),
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PuzzleError::Io(e) => write!(f, "I/O error: {}", e),
            PuzzleError::MissingGrid => write!(f, "No grid rows found"),
            PuzzleError::RaggedRow(row) => write!(f, "Row {} has a different width", row + 1),
            PuzzleError::UnexpectedChar { row, col, ch } => {
                write!(f, "Unexpected '{}' at row {}, column {}", ch, row + 1, col + 1)
            }
            PuzzleError::MissingMoveBudget => write!(f, "Last line must hold the move budget"),
            PuzzleError::InvalidMoveBudget(s) => write!(f, "Invalid move budget '{}'", s),
            PuzzleError::MalformedVehicle(c) => {
                write!(f, "Vehicle '{}' is not a straight line of at least {} cells", c, MIN_VEHICLE_LENGTH)
            }
            PuzzleError::Board(e) => write!(f, "Invalid board: {}", e),
        }
    }
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PuzzleError::Io(e) => Some(e),
            PuzzleError::Board(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PuzzleError {
    fn from(err: std::io::Error) -> Self {
        PuzzleError::Io(err)
    }
}

impl From<BoardError> for PuzzleError {
    fn from(err: BoardError) -> Self {
        PuzzleError::Board(err)
    }
}

/// Initial state read from a puzzle file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub width: usize,
    pub height: usize,
    pub move_budget: usize,
    /// Exit vehicle first, then in marker order.
    pub vehicles: Vec<Vehicle>,
    /// Marker character each vehicle had in the file.
    pub markers: Vec<char>,
}

impl Puzzle {
    /// Validate and build the playing board.
    pub fn build(&self) -> Result<Board, PuzzleError> {
        Ok(Board::new(
            self.width,
            self.height,
            self.move_budget,
            self.vehicles.clone(),
        )?)
    }
}

impl FromStr for Puzzle {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_puzzle(s)
    }
}

/// Read and parse a puzzle file.
pub fn load_puzzle(path: impl AsRef<Path>) -> Result<Puzzle, PuzzleError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    parse_puzzle(&text).inspect_err(|e| warn!("rejected puzzle {}: {}", path.display(), e))
}

fn is_marker(ch: char) -> bool {
    ch.is_ascii_alphanumeric()
}

/// Strip the border characters off a grid row.
fn row_cells(line: &str) -> Vec<char> {
    let mut chars: Vec<char> = line.chars().skip(1).collect();
    if chars.last().is_some_and(|c| *c != EMPTY_CELL && !is_marker(*c)) {
        chars.pop();
    }
    chars
}

/// Parse the text of a puzzle file.
pub fn parse_puzzle(text: &str) -> Result<Puzzle, PuzzleError> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let rows: Vec<Vec<char>> = lines
        .iter()
        .filter(|l| !l.contains('+') && l.contains('|'))
        .map(|l| row_cells(l))
        .collect();
    if rows.is_empty() {
        return Err(PuzzleError::MissingGrid);
    }
    let width = rows[0].len();
    if let Some(row) = rows.iter().position(|r| r.len() != width) {
        return Err(PuzzleError::RaggedRow(row));
    }

    let budget_line = lines.last().ok_or(PuzzleError::MissingMoveBudget)?;
    if budget_line.contains('|') || budget_line.contains('+') {
        return Err(PuzzleError::MissingMoveBudget);
    }
    let move_budget: usize = budget_line
        .parse()
        .map_err(|_| PuzzleError::InvalidMoveBudget(budget_line.to_string()))?;

    let mut cells_by_marker: BTreeMap<char, Vec<Cell>> = BTreeMap::new();
    for (y, row) in rows.iter().enumerate() {
        for (x, &ch) in row.iter().enumerate() {
            if ch == EMPTY_CELL {
                continue;
            }
            if !is_marker(ch) {
                return Err(PuzzleError::UnexpectedChar { row: y, col: x, ch });
            }
            cells_by_marker.entry(ch).or_default().push(Cell::new(x, y));
        }
    }

    let mut vehicles = Vec::with_capacity(cells_by_marker.len());
    let mut markers = Vec::with_capacity(cells_by_marker.len());
    for (marker, cells) in cells_by_marker {
        vehicles.push(vehicle_from_cells(marker, cells)?);
        markers.push(marker);
    }

    Ok(Puzzle {
        width,
        height: rows.len(),
        move_budget,
        vehicles,
        markers,
    })
}

fn vehicle_from_cells(marker: char, mut cells: Vec<Cell>) -> Result<Vehicle, PuzzleError> {
    if cells.len() < MIN_VEHICLE_LENGTH {
        return Err(PuzzleError::MalformedVehicle(marker));
    }
    cells.sort();
    let orientation = if cells[0].x == cells[1].x {
        Orientation::Vertical
    } else {
        Orientation::Horizontal
    };
    let anchor = cells[0];
    if !cells_from(anchor, orientation, cells.len()).eq(cells.iter().copied()) {
        return Err(PuzzleError::MalformedVehicle(marker));
    }
    Ok(Vehicle::new(anchor, orientation, cells.len()))
}
