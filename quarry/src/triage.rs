//! Inventory triage: discard junk during work, split fuel from cargo at home.

use tracing::debug;

use crate::core::classifier::{Deposit, ItemClassifier};
use crate::core::types::INVENTORY_SLOTS;
use crate::io::turtle::Turtle;
use crate::session::Session;

impl<T: Turtle> Session<T> {
    /// Drop every item that is not valuable.
    ///
    /// Returns `true` if at least one slot is empty after the pass, either
    /// because it already was or because its junk was dropped. `false` means
    /// the inventory is full of valuables.
    pub fn drop_junk(&mut self, classifier: &ItemClassifier) -> bool {
        let mut has_room = false;
        for slot in 0..INVENTORY_SLOTS {
            match self.item_at(slot) {
                None => has_room = true,
                Some(item) if classifier.is_valuable(&item.name) => {}
                Some(item) => {
                    self.select(slot);
                    if self.drop_selected() {
                        debug!(slot, item = %item.name, count = item.count, "dropped junk");
                        has_room = true;
                    }
                }
            }
        }
        self.select(0);
        has_room
    }

    /// Drop the half of the cargo selected by `deposit` into whatever is in front.
    ///
    /// Returns the number of stacks dropped.
    pub fn deposit(&mut self, classifier: &ItemClassifier, deposit: Deposit) -> usize {
        let mut dropped = 0;
        for slot in 0..INVENTORY_SLOTS {
            let Some(item) = self.item_at(slot) else {
                continue;
            };
            if !classifier.matches_deposit(&item, deposit) {
                continue;
            }
            self.select(slot);
            if self.drop_selected() {
                dropped += 1;
            }
        }
        self.select(0);
        debug!(?deposit, stacks = dropped, "deposited");
        dropped
    }
}

#[cfg(test)]
mod tests {
    use crate::core::classifier::{Deposit, ItemClassifier};
    use crate::core::types::{INVENTORY_SLOTS, Item};
    use crate::io::sim::{COAL, COBBLESTONE, SimTurtle};
    use crate::session::Session;

    #[test]
    fn junk_is_dropped_and_ore_kept() {
        let mut sim = SimTurtle::new(0);
        sim.give(Item::new("minecraft:diamond_ore", 1));
        sim.give(Item::new(COBBLESTONE, 12));
        let mut session = Session::new(sim);

        assert!(session.drop_junk(&ItemClassifier::default()));
        assert_eq!(session.item_at(0), Some(Item::new("minecraft:diamond_ore", 1)));
        assert_eq!(session.item_at(1), None);
        assert_eq!(session.turtle().discarded(), &[Item::new(COBBLESTONE, 12)]);
    }

    #[test]
    fn full_inventory_of_valuables_reports_no_room() {
        let mut sim = SimTurtle::new(0);
        for index in 0..INVENTORY_SLOTS {
            sim.give(Item::new(format!("minecraft:ore_{index}_ore"), 64));
        }
        let mut session = Session::new(sim);
        assert!(!session.drop_junk(&ItemClassifier::default()));
    }

    #[test]
    fn emptying_one_junk_slot_makes_room() {
        let mut sim = SimTurtle::new(0);
        for index in 0..INVENTORY_SLOTS - 1 {
            sim.give(Item::new(format!("minecraft:ore_{index}_ore"), 64));
        }
        sim.give(Item::new(COBBLESTONE, 64));
        let mut session = Session::new(sim);
        assert!(session.drop_junk(&ItemClassifier::default()));
        assert_eq!(session.item_at(INVENTORY_SLOTS - 1), None);
    }

    #[test]
    fn deposit_splits_fuel_and_cargo() {
        let mut sim = SimTurtle::new(0);
        sim.give(Item::new(COAL, 5));
        sim.give(Item::new("minecraft:iron_ore", 3));
        sim.give(Item::new(COBBLESTONE, 2));
        let mut session = Session::new(sim);
        let classifier = ItemClassifier::default();

        assert_eq!(session.deposit(&classifier, Deposit::Cargo), 2);
        assert_eq!(session.item_at(0), Some(Item::new(COAL, 5)));
        assert_eq!(session.item_at(1), None);
        assert_eq!(session.item_at(2), None);

        assert_eq!(session.deposit(&classifier, Deposit::Fuel), 1);
        assert_eq!(session.item_at(0), None);
    }
}
