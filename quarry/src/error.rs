//! Fatal controller errors.
//!
//! Blocked digs and moves during work are expected and never surface here;
//! they end the run through [`crate::excavate::StopReason`].

use thiserror::Error;

use crate::core::displacement::Displacement;
use crate::core::types::Blocked;

#[derive(Debug, Error)]
pub enum QuarryError {
    /// Fuel stayed below the operating minimum after a resupply attempt.
    #[error("fuel level {fuel} is below the operating minimum of {minimum}")]
    FuelBelowThreshold { fuel: u32, minimum: u32 },

    /// A motion failed on the way home; the model is only valid up to `position`.
    #[error("path home blocked at {position}: {blocked}")]
    HomingBlocked {
        position: Displacement,
        blocked: Blocked,
    },

    /// A motion failed on the way back to the work point.
    #[error("return path blocked at {position}: {blocked}")]
    ReturnBlocked {
        position: Displacement,
        blocked: Blocked,
    },

    /// The homing path ran out at `position` without reaching home, which
    /// happens when the agent was outside the work quadrant.
    #[error("homing ended at {position} instead of home")]
    OffCourse { position: Displacement },

    #[error("no cached waypoint to return to")]
    MissingWaypoint,
}
