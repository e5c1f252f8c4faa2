//! I/O boundary of the controller: the agent capability interface, the
//! simulated backend, configuration and run reports.

pub mod config;
pub mod report;
pub mod sim;
pub mod turtle;
