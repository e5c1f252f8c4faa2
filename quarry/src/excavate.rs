//! Layer-by-layer serpentine excavation driver.
//!
//! Each layer: descend one block, sweep `side_length` rows of `side_length`
//! cells alternating east/west, turning around at every row end, then flip the
//! row-advance direction for the next layer. The run ends, after returning
//! home, when a descent or forward step is blocked.

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::core::classifier::ItemClassifier;
use crate::core::displacement::Displacement;
use crate::core::sweep::{SweepDirection, plan_turn_around};
use crate::core::types::Blocked;
use crate::error::QuarryError;
use crate::io::config::QuarryConfig;
use crate::io::turtle::Turtle;
use crate::session::Session;

/// Reason why `Excavator::run` stopped working.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StopReason {
    /// Descending into the next layer was blocked (bedrock or the like).
    FloorReached { blocked: Blocked },
    /// A step along a row, or into the next row, was blocked.
    WallReached { blocked: Blocked },
    /// The configured `max_layers` was reached.
    LayerLimit { layers: u32 },
}

/// Whether the driver may keep going after a stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    Continue,
    Stop(StopReason),
}

/// Counters accumulated over a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    pub layers_completed: u32,
    pub rows_swept: u32,
    pub descents: u32,
    pub forward_steps: u32,
    pub refuel_trips: u32,
}

/// Summary of a finished run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunOutcome {
    pub stop: StopReason,
    pub stats: RunStats,
    /// Model position at the end of the run (home unless homing failed).
    pub position: Displacement,
    pub fuel: u32,
}

pub struct Excavator<T: Turtle> {
    session: Session<T>,
    classifier: ItemClassifier,
    side_length: u32,
    min_fuel: u32,
    max_layers: Option<u32>,
    sweep: SweepDirection,
    stats: RunStats,
}

impl<T: Turtle> Excavator<T> {
    pub fn new(session: Session<T>, cfg: &QuarryConfig) -> Self {
        Self {
            session,
            classifier: cfg.classifier(),
            side_length: cfg.side_length,
            min_fuel: cfg.min_fuel,
            max_layers: cfg.max_layers,
            sweep: SweepDirection::North,
            stats: RunStats::default(),
        }
    }

    pub fn with_sweep_direction(mut self, sweep: SweepDirection) -> Self {
        self.sweep = sweep;
        self
    }

    pub fn session(&self) -> &Session<T> {
        &self.session
    }

    pub fn into_session(self) -> Session<T> {
        self.session
    }

    pub fn sweep_direction(&self) -> SweepDirection {
        self.sweep
    }

    pub fn stats(&self) -> RunStats {
        self.stats
    }

    /// Excavate layer after layer until blocked, then return home.
    ///
    /// Blocked motions end the run normally. Errors are fatal: fuel exhausted
    /// after resupply, or a blocked homing path.
    #[instrument(skip_all, fields(side_length = self.side_length))]
    pub fn run(&mut self) -> Result<RunOutcome, QuarryError> {
        self.session.ensure_startup_fuel(self.min_fuel)?;
        info!(fuel = self.session.fuel_level(), "starting excavation");

        let stop = loop {
            match self.max_layers {
                Some(limit) if self.stats.layers_completed >= limit => {
                    break StopReason::LayerLimit { layers: limit };
                }
                _ => {}
            }
            if let Progress::Stop(reason) = self.run_layer()? {
                break reason;
            }
        };
        self.shutdown(stop)
    }

    /// Descend one block and sweep the whole layer.
    ///
    /// Does not go home on a blocked motion; the caller decides.
    pub fn run_layer(&mut self) -> Result<Progress, QuarryError> {
        if let Err(blocked) = self.session.move_dig_down() {
            return Ok(Progress::Stop(StopReason::FloorReached { blocked }));
        }
        self.stats.descents += 1;
        self.guard_fuel()?;

        for _ in 0..self.side_length {
            if let Progress::Stop(reason) = self.sweep_row()? {
                return Ok(Progress::Stop(reason));
            }
            self.triage_row()?;
            if let Progress::Stop(reason) = self.turn_around()? {
                return Ok(Progress::Stop(reason));
            }
            self.stats.rows_swept += 1;
        }

        self.sweep = self.sweep.flipped();
        self.stats.layers_completed += 1;
        info!(
            layer = self.stats.layers_completed,
            depth = -self.session.position().y,
            next_sweep = ?self.sweep,
            "layer complete"
        );
        Ok(Progress::Continue)
    }

    /// Walk the rest of the current row; entering it counted as its first cell.
    pub fn sweep_row(&mut self) -> Result<Progress, QuarryError> {
        for _ in 1..self.side_length {
            if let Err(blocked) = self.session.move_dig_forward() {
                return Ok(Progress::Stop(StopReason::WallReached { blocked }));
            }
            self.stats.forward_steps += 1;
            self.guard_fuel()?;
        }
        Ok(Progress::Continue)
    }

    /// Reverse row direction, stepping into the next row unless this row is
    /// the last one for the current sweep direction.
    pub fn turn_around(&mut self) -> Result<Progress, QuarryError> {
        let plan = plan_turn_around(
            self.session.facing(),
            self.sweep,
            self.session.position().z,
            self.side_length,
        );
        debug!(?plan, sweep = ?self.sweep, at = %self.session.position(), "turning around");

        self.session.turn(plan.turn);
        if plan.advance {
            if let Err(blocked) = self.session.move_dig_forward() {
                return Ok(Progress::Stop(StopReason::WallReached { blocked }));
            }
            self.stats.forward_steps += 1;
        }
        self.session.turn(plan.turn);
        self.guard_fuel()?;
        Ok(Progress::Continue)
    }

    fn triage_row(&mut self) -> Result<(), QuarryError> {
        let has_room = self.session.drop_junk(&self.classifier);
        if !has_room || !self.session.can_continue() {
            debug!(has_room, "row-end resupply");
            self.refuel_trip()?;
        }
        Ok(())
    }

    fn guard_fuel(&mut self) -> Result<(), QuarryError> {
        if !self.session.can_continue() {
            self.refuel_trip()?;
        }
        Ok(())
    }

    fn refuel_trip(&mut self) -> Result<(), QuarryError> {
        info!(
            at = %self.session.position(),
            fuel = self.session.fuel_level(),
            "heading home to resupply"
        );
        self.session.refresh(&self.classifier, self.min_fuel)?;
        self.stats.refuel_trips += 1;
        Ok(())
    }

    fn shutdown(&mut self, stop: StopReason) -> Result<RunOutcome, QuarryError> {
        match stop {
            StopReason::LayerLimit { layers } => info!(layers, "layer limit reached"),
            StopReason::FloorReached { blocked } | StopReason::WallReached { blocked } => {
                warn!(at = %self.session.position(), %blocked, "cannot continue, going home");
            }
        }
        self.session.go_home(&self.classifier)?;
        info!(stats = ?self.stats, "excavation finished");
        Ok(RunOutcome {
            stop,
            stats: self.stats,
            position: self.session.position(),
            fuel: self.session.fuel_level(),
        })
    }
}
