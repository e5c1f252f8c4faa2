//! In-memory world implementing [`Turtle`].
//!
//! The simulator keeps its own ground-truth position and facing, independent
//! of the controller's dead-reckoning model, so tests can compare the two.
//! Coordinates share the controller's frame: home is the origin, x grows east,
//! z grows south and y grows up.

use std::collections::{HashMap, HashSet};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::core::displacement::Displacement;
use crate::core::facing::Facing;
use crate::core::types::{DigFailure, INVENTORY_SLOTS, Item, MAX_STACK, MoveFailure};
use crate::io::config::SimConfig;
use crate::io::turtle::Turtle;

/// Container west of home receiving mined cargo.
pub const CARGO_CHEST: Displacement = Displacement { x: -1, y: 0, z: 0 };
/// Container south of home holding fuel stock.
pub const FUEL_CHEST: Displacement = Displacement { x: 0, y: 0, z: 1 };

pub const COBBLESTONE: &str = "minecraft:cobblestone";
pub const DIRT: &str = "minecraft:dirt";
pub const COAL: &str = "minecraft:coal";

const ORE_DROPS: [&str; 7] = [
    COAL,
    "minecraft:iron_ore",
    "minecraft:gold_ore",
    "minecraft:redstone",
    "minecraft:lapis_lazuli",
    "minecraft:diamond",
    "minecraft:emerald",
];

const DEFAULT_FUEL_LIMIT: u32 = 20_000;

fn fuel_value(name: &str) -> Option<u32> {
    match name {
        "minecraft:coal" | "minecraft:charcoal" => Some(80),
        "minecraft:coal_block" => Some(800),
        _ => None,
    }
}

/// Contents of one world cell. Empty cells are absent from the map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Breakable block yielding one `drop` item.
    Solid { drop: String },
    Bedrock,
    Chest(Vec<Item>),
}

impl Block {
    pub fn solid(drop: &str) -> Self {
        Block::Solid {
            drop: drop.to_string(),
        }
    }
}

/// Counts of primitives the backend carried out successfully.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionCounters {
    pub forward: u32,
    pub up: u32,
    pub down: u32,
    pub turns: u32,
    pub digs: u32,
}

#[derive(Debug, Clone)]
pub struct SimTurtle {
    blocks: HashMap<Displacement, Block>,
    position: Displacement,
    facing: Facing,
    fuel: u32,
    fuel_limit: u32,
    slots: Vec<Option<Item>>,
    selected: usize,
    visited: HashSet<Displacement>,
    discarded: Vec<Item>,
    counters: ActionCounters,
}

impl SimTurtle {
    /// Empty world with both home chests, the agent at home facing east.
    pub fn new(fuel: u32) -> Self {
        let mut blocks = HashMap::new();
        blocks.insert(CARGO_CHEST, Block::Chest(Vec::new()));
        blocks.insert(FUEL_CHEST, Block::Chest(Vec::new()));
        let mut visited = HashSet::new();
        visited.insert(Displacement::HOME);
        Self {
            blocks,
            position: Displacement::HOME,
            facing: Facing::East,
            fuel: fuel.min(DEFAULT_FUEL_LIMIT),
            fuel_limit: DEFAULT_FUEL_LIMIT,
            slots: vec![None; INVENTORY_SLOTS],
            selected: 0,
            visited,
            discarded: Vec::new(),
            counters: ActionCounters::default(),
        }
    }

    pub fn with_fuel_limit(mut self, limit: u32) -> Self {
        self.fuel_limit = limit;
        self.fuel = self.fuel.min(limit);
        self
    }

    /// Seeded world: stone, dirt and scattered ores over a bedrock floor.
    pub fn generate(cfg: &SimConfig, side_length: u32) -> Self {
        let mut rng = StdRng::seed_from_u64(cfg.seed);
        let mut sim = SimTurtle::new(cfg.starting_fuel).with_fuel_limit(cfg.fuel_limit);
        sim.fuel = cfg.starting_fuel.min(cfg.fuel_limit);
        sim.stock_fuel_chest(cfg.fuel_stock);

        let side = side_length as i32;
        let depth = cfg.depth as i32;
        for y in -depth..=-1 {
            for x in 0..side {
                for z in -(side - 1)..=0 {
                    let drop = if rng.gen_bool(cfg.ore_chance) {
                        ORE_DROPS[rng.gen_range(0..ORE_DROPS.len())]
                    } else if rng.gen_bool(0.1) {
                        DIRT
                    } else {
                        COBBLESTONE
                    };
                    sim.set_block(Displacement::new(x, y, z), Block::solid(drop));
                }
            }
        }
        sim.set_floor(side_length, -depth - 1);
        debug!(side_length, depth = cfg.depth, seed = cfg.seed, "generated world");
        sim
    }

    /// Fill the square area with `drop` blocks for `depth` layers below home,
    /// resting on a bedrock floor.
    pub fn fill_pit(&mut self, side_length: u32, depth: u32, drop: &str) {
        let side = side_length as i32;
        let depth = depth as i32;
        for y in -depth..=-1 {
            for x in 0..side {
                for z in -(side - 1)..=0 {
                    self.set_block(Displacement::new(x, y, z), Block::solid(drop));
                }
            }
        }
        self.set_floor(side_length, -depth - 1);
    }

    fn set_floor(&mut self, side_length: u32, y: i32) {
        let side = side_length as i32;
        for x in 0..side {
            for z in -(side - 1)..=0 {
                self.set_block(Displacement::new(x, y, z), Block::Bedrock);
            }
        }
    }

    pub fn set_block(&mut self, pos: Displacement, block: Block) {
        self.blocks.insert(pos, block);
    }

    pub fn block_at(&self, pos: Displacement) -> Option<&Block> {
        self.blocks.get(&pos)
    }

    /// Put `count` coal into the fuel chest, in full stacks.
    pub fn stock_fuel_chest(&mut self, count: u32) {
        let mut remaining = count;
        let mut stacks = Vec::new();
        while remaining > 0 {
            let stack = remaining.min(MAX_STACK);
            stacks.push(Item::new(COAL, stack));
            remaining -= stack;
        }
        if let Some(Block::Chest(items)) = self.blocks.get_mut(&FUEL_CHEST) {
            items.extend(stacks);
        }
    }

    pub fn chest_contents(&self, pos: Displacement) -> &[Item] {
        match self.blocks.get(&pos) {
            Some(Block::Chest(items)) => items,
            _ => &[],
        }
    }

    /// Add items to the inventory; returns whatever did not fit.
    pub fn give(&mut self, item: Item) -> Option<Item> {
        let mut remaining = item.count;
        for stack in self.slots.iter_mut().flatten() {
            if remaining == 0 {
                break;
            }
            if stack.name == item.name && stack.count < MAX_STACK {
                let moved = remaining.min(MAX_STACK - stack.count);
                stack.count += moved;
                remaining -= moved;
            }
        }
        for slot in &mut self.slots {
            if remaining == 0 {
                break;
            }
            if slot.is_none() {
                let moved = remaining.min(MAX_STACK);
                *slot = Some(Item::new(item.name.clone(), moved));
                remaining -= moved;
            }
        }
        (remaining > 0).then(|| Item::new(item.name, remaining))
    }

    /// Ground-truth position.
    pub fn position(&self) -> Displacement {
        self.position
    }

    /// Ground-truth facing.
    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn fuel(&self) -> u32 {
        self.fuel
    }

    pub fn set_fuel(&mut self, fuel: u32) {
        self.fuel = fuel.min(self.fuel_limit);
    }

    /// Distinct `(x, z)` cells visited at height `y`.
    pub fn visited_at_level(&self, y: i32) -> HashSet<(i32, i32)> {
        self.visited
            .iter()
            .filter(|pos| pos.y == y)
            .map(|pos| (pos.x, pos.z))
            .collect()
    }

    /// Items dropped outside any container, or lost to a full inventory.
    pub fn discarded(&self) -> &[Item] {
        &self.discarded
    }

    pub fn counters(&self) -> ActionCounters {
        self.counters
    }

    pub fn slots(&self) -> &[Option<Item>] {
        &self.slots
    }

    fn front(&self) -> Displacement {
        let (dx, dz) = self.facing.delta();
        self.position.offset(dx, 0, dz)
    }

    fn below(&self) -> Displacement {
        self.position.offset(0, -1, 0)
    }

    fn move_to(&mut self, target: Displacement) -> Result<(), MoveFailure> {
        if self.fuel == 0 {
            return Err(MoveFailure::OutOfFuel);
        }
        if self.blocks.contains_key(&target) {
            return Err(MoveFailure::Obstructed);
        }
        self.fuel -= 1;
        self.position = target;
        self.visited.insert(target);
        Ok(())
    }

    fn dig_at(&mut self, target: Displacement) -> Result<(), DigFailure> {
        match self.blocks.get(&target) {
            None => return Err(DigFailure::NothingToDig),
            Some(Block::Bedrock | Block::Chest(_)) => return Err(DigFailure::Unbreakable),
            Some(Block::Solid { .. }) => {}
        }
        if let Some(Block::Solid { drop }) = self.blocks.remove(&target) {
            if let Some(lost) = self.give(Item::new(drop, 1)) {
                self.discarded.push(lost);
            }
        }
        self.counters.digs += 1;
        Ok(())
    }
}

impl Turtle for SimTurtle {
    fn forward(&mut self) -> Result<(), MoveFailure> {
        self.move_to(self.front())?;
        self.counters.forward += 1;
        Ok(())
    }

    fn up(&mut self) -> Result<(), MoveFailure> {
        self.move_to(self.position.offset(0, 1, 0))?;
        self.counters.up += 1;
        Ok(())
    }

    fn down(&mut self) -> Result<(), MoveFailure> {
        self.move_to(self.below())?;
        self.counters.down += 1;
        Ok(())
    }

    fn turn_left(&mut self) {
        self.facing = self.facing.left();
        self.counters.turns += 1;
    }

    fn turn_right(&mut self) {
        self.facing = self.facing.right();
        self.counters.turns += 1;
    }

    fn detect(&self) -> bool {
        self.blocks.contains_key(&self.front())
    }

    fn detect_down(&self) -> bool {
        self.blocks.contains_key(&self.below())
    }

    fn dig(&mut self) -> Result<(), DigFailure> {
        self.dig_at(self.front())
    }

    fn dig_down(&mut self) -> Result<(), DigFailure> {
        self.dig_at(self.below())
    }

    fn fuel_level(&self) -> u32 {
        self.fuel
    }

    fn refuel(&mut self) -> bool {
        let headroom = self.fuel_limit.saturating_sub(self.fuel);
        let Some(stack) = self.slots[self.selected].as_mut() else {
            return false;
        };
        let Some(value) = fuel_value(&stack.name) else {
            return false;
        };
        let burned = stack.count.min(headroom.div_ceil(value));
        if burned == 0 {
            return false;
        }
        stack.count -= burned;
        if stack.count == 0 {
            self.slots[self.selected] = None;
        }
        self.fuel = (self.fuel + burned * value).min(self.fuel_limit);
        true
    }

    fn suck(&mut self) -> bool {
        let front = self.front();
        let stack = match self.blocks.get_mut(&front) {
            Some(Block::Chest(items)) if !items.is_empty() => items.remove(0),
            _ => return false,
        };
        let taken = stack.count;
        let leftover = self.give(stack);
        let returned = leftover.as_ref().map_or(0, |item| item.count);
        if let Some(item) = leftover {
            if let Some(Block::Chest(items)) = self.blocks.get_mut(&front) {
                items.insert(0, item);
            }
        }
        returned < taken
    }

    fn select(&mut self, slot: usize) {
        self.selected = slot.min(INVENTORY_SLOTS - 1);
    }

    fn drop_selected(&mut self) -> bool {
        let Some(stack) = self.slots[self.selected].take() else {
            return false;
        };
        let front = self.front();
        match self.blocks.get_mut(&front) {
            Some(Block::Chest(items)) => items.push(stack),
            _ => self.discarded.push(stack),
        }
        true
    }

    fn item_at(&self, slot: usize) -> Option<Item> {
        self.slots.get(slot).cloned().flatten()
    }
}
