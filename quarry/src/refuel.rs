//! Refuel cycle and the startup fuel check.

use tracing::{info, instrument, warn};

use crate::core::classifier::ItemClassifier;
use crate::core::fuel::minimum_fuel_for;
use crate::core::types::INVENTORY_SLOTS;
use crate::error::QuarryError;
use crate::io::turtle::Turtle;
use crate::session::Session;

impl<T: Turtle> Session<T> {
    /// Burn every fuel item held. Returns the number of slots that burned.
    pub fn refuel_from_inventory(&mut self) -> usize {
        let mut burned = 0;
        for slot in 0..INVENTORY_SLOTS {
            if self.item_at(slot).is_none() {
                continue;
            }
            self.select(slot);
            if self.refuel_selected() {
                burned += 1;
            }
        }
        self.select(0);
        burned
    }

    /// Go home, unload, draw one stack from the fuel chest, refuel and return.
    ///
    /// Fails at home, without returning to work, when fuel stays below
    /// `min_fuel` or cannot cover the trip back plus the trip home from there.
    #[instrument(skip_all, fields(from = %self.position(), fuel = self.fuel_level()))]
    pub fn refresh(
        &mut self,
        classifier: &ItemClassifier,
        min_fuel: u32,
    ) -> Result<(), QuarryError> {
        self.go_home(classifier)?;
        // Home leaves the agent facing the fuel chest.
        if !self.suck() {
            warn!("fuel chest is empty");
        }
        self.refuel_from_inventory();
        let fuel = self.fuel_level();
        let minimum = self.return_fuel_needed().max(min_fuel);
        if fuel < minimum {
            return Err(QuarryError::FuelBelowThreshold { fuel, minimum });
        }
        info!(fuel, "refueled");
        self.go_back()
    }

    /// Fuel to reach the cached waypoint and still pass the fuel guard there.
    fn return_fuel_needed(&self) -> u32 {
        let needed = self.waypoint().map_or(0, |waypoint| {
            waypoint.position.manhattan() + minimum_fuel_for(&waypoint.position)
        });
        u32::try_from(needed).unwrap_or(u32::MAX)
    }

    /// Make sure a run starts with at least `min_fuel`.
    ///
    /// At home facing the start direction, the fuel chest sits to the right.
    #[instrument(skip_all, fields(fuel = self.fuel_level()))]
    pub fn ensure_startup_fuel(&mut self, min_fuel: u32) -> Result<(), QuarryError> {
        if self.fuel_level() >= min_fuel {
            return Ok(());
        }
        info!(min_fuel, "drawing fuel before start");
        self.turn_right();
        self.suck();
        self.turn_left();
        self.refuel_from_inventory();
        let fuel = self.fuel_level();
        if fuel < min_fuel {
            return Err(QuarryError::FuelBelowThreshold {
                fuel,
                minimum: min_fuel,
            });
        }
        Ok(())
    }
}
