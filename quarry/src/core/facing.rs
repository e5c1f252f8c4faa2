//! Cardinal orientation and relative turns.
//!
//! Facings cycle in the order North, West, South, East. A left turn advances
//! one step through that order and a right turn steps back, both wrapping.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Absolute orientation of the agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facing {
    North,
    West,
    South,
    East,
}

/// A quarter turn relative to the current facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Turn {
    Left,
    Right,
}

const ORDER: [Facing; 4] = [Facing::North, Facing::West, Facing::South, Facing::East];

impl Facing {
    fn index(self) -> usize {
        match self {
            Facing::North => 0,
            Facing::West => 1,
            Facing::South => 2,
            Facing::East => 3,
        }
    }

    /// Facing after one left turn.
    pub fn left(self) -> Facing {
        ORDER[(self.index() + 1) % ORDER.len()]
    }

    /// Facing after one right turn.
    pub fn right(self) -> Facing {
        ORDER[(self.index() + ORDER.len() - 1) % ORDER.len()]
    }

    pub fn turned(self, turn: Turn) -> Facing {
        match turn {
            Turn::Left => self.left(),
            Turn::Right => self.right(),
        }
    }

    /// Horizontal `(dx, dz)` covered by one forward step.
    ///
    /// x grows eastward and z grows southward.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Facing::North => (0, -1),
            Facing::West => (-1, 0),
            Facing::South => (0, 1),
            Facing::East => (1, 0),
        }
    }

    /// Turn side that swings a row-aligned facing onto `heading`.
    ///
    /// Left when a single left turn lands on `heading` (East while heading
    /// north, West while heading south), Right in every other case.
    pub fn turn_toward(self, heading: Facing) -> Turn {
        if self.left() == heading {
            Turn::Left
        } else {
            Turn::Right
        }
    }

    /// Shortest sequence of quarter turns that ends facing `target`.
    pub fn turns_to(self, target: Facing) -> Vec<Turn> {
        let steps_left = (target.index() + ORDER.len() - self.index()) % ORDER.len();
        match steps_left {
            0 => Vec::new(),
            1 => vec![Turn::Left],
            2 => vec![Turn::Right, Turn::Right],
            _ => vec![Turn::Right],
        }
    }
}

impl fmt::Display for Facing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Facing::North => "north",
            Facing::West => "west",
            Facing::South => "south",
            Facing::East => "east",
        };
        f.write_str(name)
    }
}
