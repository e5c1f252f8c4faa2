//! Serpentine row planning for one layer.
//!
//! Rows run along the x axis. Each layer advances row by row along z, toward
//! the north boundary (z decreasing) or back toward the start row (z = 0). Row
//! index is `-z`, so the start row is 0 and the far row is `side_length - 1`.

use serde::{Deserialize, Serialize};

use crate::core::facing::{Facing, Turn};

/// Direction in which the current layer advances from row to row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SweepDirection {
    North,
    South,
}

impl SweepDirection {
    pub fn heading(self) -> Facing {
        match self {
            SweepDirection::North => Facing::North,
            SweepDirection::South => Facing::South,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            SweepDirection::North => SweepDirection::South,
            SweepDirection::South => SweepDirection::North,
        }
    }

    /// Last row reached when sweeping in this direction.
    pub fn boundary_row(self, side_length: u32) -> i64 {
        match self {
            SweepDirection::North => i64::from(side_length) - 1,
            SweepDirection::South => 0,
        }
    }
}

/// Row index for a z offset.
pub fn row_index(z: i32) -> i64 {
    -i64::from(z)
}

/// Turn-around maneuver at the end of a row.
///
/// The same `turn` is issued twice; `advance` says whether a forward step into
/// the next row sits between the two turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnAround {
    pub turn: Turn,
    pub advance: bool,
}

/// Plan the turn-around for an agent facing `facing` at row offset `z`.
///
/// On the boundary row the maneuver is a pure direction flip and consumes no
/// cell.
pub fn plan_turn_around(
    facing: Facing,
    direction: SweepDirection,
    z: i32,
    side_length: u32,
) -> TurnAround {
    TurnAround {
        turn: facing.turn_toward(direction.heading()),
        advance: row_index(z) != direction.boundary_row(side_length),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn north_sweep_advances_until_far_row() {
        for row in 0..15 {
            let plan = plan_turn_around(Facing::East, SweepDirection::North, -row, 16);
            assert_eq!(plan.turn, Turn::Left);
            assert!(plan.advance, "row {row}");
        }
        let last = plan_turn_around(Facing::East, SweepDirection::North, -15, 16);
        assert!(!last.advance);
    }

    #[test]
    fn south_sweep_stops_at_start_row() {
        let plan = plan_turn_around(Facing::West, SweepDirection::South, -3, 4);
        assert_eq!(plan, TurnAround { turn: Turn::Left, advance: true });
        let plan = plan_turn_around(Facing::East, SweepDirection::South, -1, 4);
        assert_eq!(plan, TurnAround { turn: Turn::Right, advance: true });
        let plan = plan_turn_around(Facing::West, SweepDirection::South, 0, 4);
        assert!(!plan.advance);
    }

    #[test]
    fn double_turn_reverses_row_direction() {
        for (facing, direction) in [
            (Facing::East, SweepDirection::North),
            (Facing::West, SweepDirection::North),
            (Facing::East, SweepDirection::South),
            (Facing::West, SweepDirection::South),
        ] {
            let plan = plan_turn_around(facing, direction, -1, 16);
            assert_eq!(facing.turned(plan.turn), direction.heading());
            let (dx, dz) = facing.delta();
            assert_eq!(facing.turned(plan.turn).turned(plan.turn).delta(), (-dx, -dz));
        }
    }

    #[test]
    fn flip_alternates() {
        assert_eq!(SweepDirection::North.flipped(), SweepDirection::South);
        assert_eq!(SweepDirection::South.flipped().flipped(), SweepDirection::South);
    }
}
