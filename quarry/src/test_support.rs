//! Test-only helpers for building simulated worlds and positioned sessions.

use crate::core::displacement::Displacement;
use crate::core::facing::Facing;
use crate::io::config::QuarryConfig;
use crate::io::sim::{COBBLESTONE, SimTurtle};
use crate::session::Session;

/// Fuel given to test agents unless a test sets its own.
pub const TEST_FUEL: u32 = 10_000;

/// A `side_length` square of cobblestone, `depth` layers deep, over bedrock.
pub fn pit(side_length: u32, depth: u32) -> SimTurtle {
    let mut sim = SimTurtle::new(TEST_FUEL);
    sim.fill_pit(side_length, depth, COBBLESTONE);
    sim
}

/// Dig from home to `target` (east, then north, then down) and face `facing`.
///
/// Goes through the motion primitives, so the returned session's model
/// matches the simulator.
pub fn dig_to(sim: SimTurtle, target: Displacement, facing: Facing) -> Session<SimTurtle> {
    assert!(
        target.x >= 0 && target.y <= 0 && target.z <= 0,
        "target {target} outside the work quadrant"
    );
    let mut session = Session::new(sim);
    session.face(Facing::East);
    for _ in 0..target.x {
        session.move_dig_forward().expect("dig east");
    }
    session.face(Facing::North);
    for _ in 0..-target.z {
        session.move_dig_forward().expect("dig north");
    }
    for _ in 0..-target.y {
        session.move_dig_down().expect("dig down");
    }
    session.face(facing);
    assert_eq!(session.position(), target);
    session
}

/// Default config with a different square size.
pub fn config_with_side(side_length: u32) -> QuarryConfig {
    QuarryConfig {
        side_length,
        ..QuarryConfig::default()
    }
}
