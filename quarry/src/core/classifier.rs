//! Deterministic classification of held items.

use crate::core::types::Item;

/// Default substrings marking an item as worth keeping.
pub const DEFAULT_VALUABLE_PATTERNS: [&str; 6] =
    ["_ore", "coal", "diamond", "emerald", "redstone", "lapis"];

/// Default substring marking an item as fuel stock.
pub const DEFAULT_FUEL_PATTERN: &str = "coal";

/// Which half of the cargo a home deposit drops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deposit {
    /// Items matching the fuel pattern.
    Fuel,
    /// Everything that does not match the fuel pattern.
    Cargo,
}

/// Classify item names by case-sensitive substring match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemClassifier {
    valuable: Vec<String>,
    fuel: String,
}

impl Default for ItemClassifier {
    fn default() -> Self {
        Self::new(
            DEFAULT_VALUABLE_PATTERNS.iter().map(|s| s.to_string()).collect(),
            DEFAULT_FUEL_PATTERN.to_string(),
        )
    }
}

impl ItemClassifier {
    pub fn new(valuable: Vec<String>, fuel: String) -> Self {
        Self { valuable, fuel }
    }

    /// `true` if the name contains any valuable pattern.
    pub fn is_valuable(&self, name: &str) -> bool {
        self.valuable.iter().any(|pattern| name.contains(pattern.as_str()))
    }

    pub fn is_fuel(&self, name: &str) -> bool {
        name.contains(self.fuel.as_str())
    }

    /// Whether `item` belongs to the half of the cargo selected by `deposit`.
    pub fn matches_deposit(&self, item: &Item, deposit: Deposit) -> bool {
        match deposit {
            Deposit::Fuel => self.is_fuel(&item.name),
            Deposit::Cargo => !self.is_fuel(&item.name),
        }
    }
}
