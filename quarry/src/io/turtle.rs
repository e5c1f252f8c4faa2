//! Capability interface for the excavating agent.
//!
//! The [`Turtle`] trait decouples the controller from the actuation backend.
//! Every call blocks until the backend reports a definite result. Tests and the
//! CLI use [`crate::io::sim::SimTurtle`], an in-memory world.

use crate::core::types::{DigFailure, Item, MoveFailure};

/// Motion, digging, inventory and fuel primitives the controller relies on.
///
/// Slots are addressed `0..INVENTORY_SLOTS`. Turns always succeed.
pub trait Turtle {
    fn forward(&mut self) -> Result<(), MoveFailure>;
    fn up(&mut self) -> Result<(), MoveFailure>;
    fn down(&mut self) -> Result<(), MoveFailure>;

    fn turn_left(&mut self);
    fn turn_right(&mut self);

    /// `true` if a block occupies the cell in front.
    fn detect(&self) -> bool;
    /// `true` if a block occupies the cell below.
    fn detect_down(&self) -> bool;

    fn dig(&mut self) -> Result<(), DigFailure>;
    fn dig_down(&mut self) -> Result<(), DigFailure>;

    fn fuel_level(&self) -> u32;
    /// Consume fuel items from the selected slot. `false` if nothing burned.
    fn refuel(&mut self) -> bool;

    /// Pull one stack from the container in front. `false` if nothing moved.
    fn suck(&mut self) -> bool;

    fn select(&mut self, slot: usize);
    /// Drop the selected stack forward (into a container when one is in front).
    fn drop_selected(&mut self) -> bool;
    fn item_at(&self, slot: usize) -> Option<Item>;
}
