#![cfg(feature = "std")]

//! Terminal rendering of a board snapshot.

use std::fmt::Write;

use crate::core::{BoardState, Cell, VehicleId, EMPTY_CELL, EXIT_VEHICLE};

const RESET: &str = "\u{1b}[0m";
const EXIT_COLOR: &str = "\u{1b}[47;30m";
const COLORS: [&str; 6] = [
    "\u{1b}[41m", // red
    "\u{1b}[42m", // green
    "\u{1b}[43m", // yellow
    "\u{1b}[44m", // blue
    "\u{1b}[45m", // magenta
    "\u{1b}[46m", // cyan
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Paint vehicles with ANSI background colors.
    pub color: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { color: true }
    }
}

fn color_of(id: VehicleId) -> &'static str {
    if id == EXIT_VEHICLE {
        EXIT_COLOR
    } else {
        COLORS[(id.index() - 1) % COLORS.len()]
    }
}

/// Draw the grid with an exit marker on the exit vehicle's row, followed by
/// the move counters.
pub fn render(state: &BoardState, opts: &RenderOptions) -> String {
    let mut out = String::new();
    let exit_row = state.vehicles.get(EXIT_VEHICLE.index()).map(|v| v.anchor().y);
    let rule = "─".repeat(state.width);

    let _ = writeln!(out, "┌{}┐", rule);
    for y in 0..state.height {
        out.push('│');
        for x in 0..state.width {
            match state.vehicle_at(Cell::new(x, y)) {
                Some(id) => {
                    let letter = id.letter().unwrap_or('?');
                    if opts.color {
                        let _ = write!(out, "{}{}{}", color_of(id), letter, RESET);
                    } else {
                        out.push(letter);
                    }
                }
                None => out.push(EMPTY_CELL),
            }
        }
        if Some(y) == exit_row {
            out.push_str(" -> EXIT\n");
        } else {
            out.push_str("│\n");
        }
    }
    let _ = writeln!(out, "└{}┘", rule);
    let _ = writeln!(out, "Max moves:       {}", state.move_budget);
    let _ = writeln!(out, "Moves used:      {}", state.moves_used);
    let _ = writeln!(out, "Moves remaining: {}", state.moves_remaining());
    out
}
