//! Shared deterministic types for the excavation core.
//!
//! These types define the contract between the controller and whatever backend
//! implements [`crate::io::turtle::Turtle`]. They carry no I/O and must stay
//! deterministic across runs.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of inventory slots carried by the agent.
pub const INVENTORY_SLOTS: usize = 16;

/// Largest stack a single inventory slot holds.
pub const MAX_STACK: u32 = 64;

/// A stack of items held in one inventory slot or container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub count: u32,
}

impl Item {
    pub fn new(name: impl Into<String>, count: u32) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

/// Why a backend refused to move the agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(rename_all = "snake_case")]
pub enum MoveFailure {
    /// Something solid still occupies the target cell.
    #[error("movement obstructed")]
    Obstructed,
    /// The fuel reserve is empty.
    #[error("out of fuel")]
    OutOfFuel,
}

/// Why a backend refused to dig.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(rename_all = "snake_case")]
pub enum DigFailure {
    /// The target cell was already empty.
    #[error("nothing to dig")]
    NothingToDig,
    /// The target block cannot be broken (bedrock, protected containers).
    #[error("unbreakable block detected")]
    Unbreakable,
}

/// Expected failure of a dig-then-move motion.
///
/// `dig` records the failure of the preceding dig attempt, if one was made
/// and did not succeed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blocked {
    pub movement: MoveFailure,
    pub dig: Option<DigFailure>,
}

impl Blocked {
    pub fn new(movement: MoveFailure) -> Self {
        Self {
            movement,
            dig: None,
        }
    }
}

impl fmt::Display for Blocked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.dig {
            Some(dig) => write!(f, "{} ({dig})", self.movement),
            None => write!(f, "{}", self.movement),
        }
    }
}

impl std::error::Error for Blocked {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocked_display_includes_dig_reason() {
        let blocked = Blocked {
            movement: MoveFailure::Obstructed,
            dig: Some(DigFailure::Unbreakable),
        };
        assert_eq!(
            blocked.to_string(),
            "movement obstructed (unbreakable block detected)"
        );
        assert_eq!(Blocked::new(MoveFailure::OutOfFuel).to_string(), "out of fuel");
    }
}
