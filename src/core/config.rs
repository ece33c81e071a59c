use super::vehicle::VehicleId;

/// Vehicles are named by a single letter, `A` through `Z`.
pub const MAX_VEHICLES: usize = 26;
pub const MIN_VEHICLE_LENGTH: usize = 2;

/// The vehicle that has to reach the right edge.
pub const EXIT_VEHICLE: VehicleId = VehicleId::new(0);

/// Marker for a free cell in puzzle files.
pub const EMPTY_CELL: char = '.';

/// Environment variable holding the log level filter.
pub const LOG_ENV: &str = "GRIDLOCK_LOG";
