//! Deterministic, pure logic shared by the excavation controller.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! values and return deterministic outputs suitable for tests.

pub mod classifier;
pub mod displacement;
pub mod facing;
pub mod fuel;
pub mod sweep;
pub mod types;
