//! Conservative round-trip fuel check.

use crate::core::displacement::Displacement;

/// Whether the agent may keep working with `fuel` units left at `position`.
///
/// The homing path is axis-aligned, so the Manhattan distance bounds the steps
/// needed to get home. One unit of margin is kept on each side of the
/// comparison: `(fuel - 1) > (distance + 1)`.
pub fn can_continue(fuel: u32, position: &Displacement) -> bool {
    let distance = position.manhattan();
    i64::from(fuel) - 1 > distance + 1
}

/// Smallest fuel level for which [`can_continue`] holds at `position`.
pub fn minimum_fuel_for(position: &Displacement) -> i64 {
    position.manhattan() + 3
}
