//! Stable exit codes for quarry CLI commands.

/// Command succeeded; `run` finished at home.
pub const OK: i32 = 0;
/// Invalid config, arguments or other errors.
pub const INVALID: i32 = 1;
/// Fuel stayed below the operating minimum after resupply.
pub const FUEL_EXHAUSTED: i32 = 2;
/// The homing or return path was blocked; the agent's position is uncertain.
pub const STRANDED: i32 = 3;
