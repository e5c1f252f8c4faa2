//! Dead-reckoning excavation controller.
//!
//! Drives a mining agent that can only move one block at a time, dig what is
//! in front of or below it, and carry 16 inventory slots. The controller clears
//! a square area layer by layer in a serpentine pattern, tracking position and
//! facing purely from the motions it issues, and returns home to unload and
//! refuel whenever the fuel left could no longer cover the trip back.
//!
//! - **[`core`]**: Pure, deterministic logic (facing, displacement, fuel guard,
//!   row planning, item classification). No I/O.
//! - **[`io`]**: The [`io::turtle::Turtle`] capability interface, the
//!   simulated backend, configuration and run reports.
//! - **[`session`]**: The dead-reckoning model and the motion primitives that
//!   alone update it.
//!
//! Maneuvers ([`homing`], [`refuel`], [`triage`]) extend [`session::Session`];
//! [`excavate`] drives them layer by layer.

pub mod core;
pub mod error;
pub mod excavate;
pub mod exit_codes;
pub mod homing;
pub mod io;
pub mod logging;
pub mod refuel;
pub mod session;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod triage;
