//! Dead-reckoning session: the agent's capability backend plus the model of
//! where it is and which way it faces.
//!
//! Displacement is private to this module tree and only [`motion`] writes it,
//! once per confirmed motion. Everything else reads it through
//! [`Session::position`].

pub mod motion;

use tracing::trace;

use crate::core::displacement::Displacement;
use crate::core::facing::{Facing, Turn};
use crate::core::fuel;
use crate::core::types::Item;
use crate::io::turtle::Turtle;

/// Facing the agent is placed in at home before a run.
pub const START_FACING: Facing = Facing::East;

/// Position and facing captured before a homing maneuver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Waypoint {
    pub position: Displacement,
    pub facing: Facing,
}

pub struct Session<T: Turtle> {
    turtle: T,
    position: Displacement,
    facing: Facing,
    waypoint: Option<Waypoint>,
}

impl<T: Turtle> Session<T> {
    /// Start a session with the agent at home facing [`START_FACING`].
    pub fn new(turtle: T) -> Self {
        Self::with_facing(turtle, START_FACING)
    }

    pub fn with_facing(turtle: T, facing: Facing) -> Self {
        Self {
            turtle,
            position: Displacement::HOME,
            facing,
            waypoint: None,
        }
    }

    pub fn position(&self) -> Displacement {
        self.position
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn turtle(&self) -> &T {
        &self.turtle
    }

    /// Direct backend access for test setup. Motions issued through it bypass
    /// the model.
    #[cfg(any(test, feature = "test-support"))]
    pub fn turtle_mut(&mut self) -> &mut T {
        &mut self.turtle
    }

    pub fn into_turtle(self) -> T {
        self.turtle
    }

    pub fn turn_left(&mut self) {
        self.turtle.turn_left();
        self.facing = self.facing.left();
        trace!(facing = %self.facing, "turned left");
    }

    pub fn turn_right(&mut self) {
        self.turtle.turn_right();
        self.facing = self.facing.right();
        trace!(facing = %self.facing, "turned right");
    }

    pub fn turn(&mut self, turn: Turn) {
        match turn {
            Turn::Left => self.turn_left(),
            Turn::Right => self.turn_right(),
        }
    }

    /// Rotate until facing `target`.
    pub fn face(&mut self, target: Facing) {
        for turn in self.facing.turns_to(target) {
            self.turn(turn);
        }
    }

    pub fn fuel_level(&self) -> u32 {
        self.turtle.fuel_level()
    }

    /// Fuel guard at the current position.
    pub fn can_continue(&self) -> bool {
        fuel::can_continue(self.turtle.fuel_level(), &self.position)
    }

    pub fn item_at(&self, slot: usize) -> Option<Item> {
        self.turtle.item_at(slot)
    }

    pub fn select(&mut self, slot: usize) {
        self.turtle.select(slot);
    }

    pub fn drop_selected(&mut self) -> bool {
        self.turtle.drop_selected()
    }

    pub fn suck(&mut self) -> bool {
        self.turtle.suck()
    }

    pub fn refuel_selected(&mut self) -> bool {
        self.turtle.refuel()
    }

    /// Overwrite the cached waypoint with the current position and facing.
    pub(crate) fn cache_waypoint(&mut self) -> Waypoint {
        let waypoint = Waypoint {
            position: self.position,
            facing: self.facing,
        };
        self.waypoint = Some(waypoint);
        waypoint
    }

    pub(crate) fn take_waypoint(&mut self) -> Option<Waypoint> {
        self.waypoint.take()
    }

    pub fn waypoint(&self) -> Option<Waypoint> {
        self.waypoint
    }
}
