//! Go-home / go-back maneuvers.
//!
//! The work area lies east (x >= 0) and north (z <= 0) of home, so the homing
//! path is: climb to the surface, head south to z = 0, head west to x = 0. The
//! return path replays it in reverse from the cached [`Waypoint`].
//!
//! [`Waypoint`]: crate::session::Waypoint

use tracing::{debug, info, instrument};

use crate::core::classifier::{Deposit, ItemClassifier};
use crate::core::facing::Facing;
use crate::core::types::Blocked;
use crate::error::QuarryError;
use crate::io::turtle::Turtle;
use crate::session::Session;

impl<T: Turtle> Session<T> {
    /// Return to home, emptying cargo into the west chest and fuel into the
    /// south chest. Ends at home facing south.
    #[instrument(skip_all, fields(from = %self.position(), facing = %self.facing()))]
    pub fn go_home(&mut self, classifier: &ItemClassifier) -> Result<(), QuarryError> {
        self.cache_waypoint();

        while self.position().y < 0 {
            self.move_up().map_err(|blocked| self.homing_blocked(blocked))?;
        }
        self.face(Facing::South);
        while self.position().z < 0 {
            self.move_dig_forward()
                .map_err(|blocked| self.homing_blocked(blocked))?;
        }
        self.turn_right();
        while self.position().x > 0 {
            self.move_dig_forward()
                .map_err(|blocked| self.homing_blocked(blocked))?;
        }
        if !self.position().is_home() {
            return Err(QuarryError::OffCourse {
                position: self.position(),
            });
        }

        self.deposit(classifier, Deposit::Cargo);
        self.turn_left();
        self.deposit(classifier, Deposit::Fuel);
        info!("arrived home");
        Ok(())
    }

    /// Return to the waypoint cached by the last [`Session::go_home`].
    #[instrument(skip_all)]
    pub fn go_back(&mut self) -> Result<(), QuarryError> {
        let waypoint = self.take_waypoint().ok_or(QuarryError::MissingWaypoint)?;
        debug!(to = %waypoint.position, facing = %waypoint.facing, "returning to work");

        self.face(Facing::East);
        while self.position().x < waypoint.position.x {
            self.move_dig_forward()
                .map_err(|blocked| self.return_blocked(blocked))?;
        }
        self.turn_left();
        while self.position().z > waypoint.position.z {
            self.move_dig_forward()
                .map_err(|blocked| self.return_blocked(blocked))?;
        }
        self.face(waypoint.facing);
        while self.position().y > waypoint.position.y {
            self.move_dig_down()
                .map_err(|blocked| self.return_blocked(blocked))?;
        }
        Ok(())
    }

    fn homing_blocked(&self, blocked: Blocked) -> QuarryError {
        QuarryError::HomingBlocked {
            position: self.position(),
            blocked,
        }
    }

    fn return_blocked(&self, blocked: Blocked) -> QuarryError {
        QuarryError::ReturnBlocked {
            position: self.position(),
            blocked,
        }
    }
}
