//! Dig-then-move primitives.
//!
//! These are the only writers of the session displacement. A blocked motion is
//! an expected outcome reported as [`Blocked`]; the model is left untouched.

use tracing::debug;

use crate::core::types::Blocked;
use crate::io::turtle::Turtle;
use crate::session::Session;

impl<T: Turtle> Session<T> {
    /// Clear the cell below if occupied, then descend one block.
    pub fn move_dig_down(&mut self) -> Result<(), Blocked> {
        let dig = if self.turtle.detect_down() {
            self.turtle.dig_down().err()
        } else {
            None
        };
        match self.turtle.down() {
            Ok(()) => {
                self.position.y -= 1;
                Ok(())
            }
            Err(movement) => {
                let blocked = Blocked { movement, dig };
                debug!(position = %self.position, %blocked, "descent blocked");
                Err(blocked)
            }
        }
    }

    /// Clear the cell in front if occupied, then step forward one block.
    pub fn move_dig_forward(&mut self) -> Result<(), Blocked> {
        let dig = if self.turtle.detect() {
            self.turtle.dig().err()
        } else {
            None
        };
        match self.turtle.forward() {
            Ok(()) => {
                let (dx, dz) = self.facing.delta();
                self.position = self.position.offset(dx, 0, dz);
                Ok(())
            }
            Err(movement) => {
                let blocked = Blocked { movement, dig };
                debug!(position = %self.position, facing = %self.facing, %blocked, "forward blocked");
                Err(blocked)
            }
        }
    }

    /// Climb one block. The agent has no upward dig, so this never clears.
    pub fn move_up(&mut self) -> Result<(), Blocked> {
        match self.turtle.up() {
            Ok(()) => {
                self.position.y += 1;
                Ok(())
            }
            Err(movement) => Err(Blocked::new(movement)),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crate::core::displacement::Displacement;
    use crate::core::types::{DigFailure, MoveFailure};
    use crate::io::sim::{Block, COBBLESTONE, SimTurtle};
    use crate::session::Session;

    #[test]
    fn forward_digs_through_and_tracks_delta() {
        let mut sim = SimTurtle::new(10);
        sim.set_block(Displacement::new(1, 0, 0), Block::solid(COBBLESTONE));
        let mut session = Session::new(sim);

        session.move_dig_forward().expect("forward");
        assert_eq!(session.position(), Displacement::new(1, 0, 0));
        session.turn_left();
        session.move_dig_forward().expect("forward");
        assert_eq!(session.position(), Displacement::new(1, 0, -1));
    }

    #[test]
    fn blocked_descent_leaves_model_unchanged() {
        let mut sim = SimTurtle::new(10);
        sim.set_block(Displacement::new(0, -1, 0), Block::Bedrock);
        let mut session = Session::new(sim);

        let blocked = session.move_dig_down().unwrap_err();
        assert_eq!(blocked.movement, MoveFailure::Obstructed);
        assert_eq!(blocked.dig, Some(DigFailure::Unbreakable));
        assert_eq!(session.position(), Displacement::HOME);
    }

    #[test]
    fn out_of_fuel_is_reported_without_moving() {
        let mut session = Session::new(SimTurtle::new(0));
        let blocked = session.move_dig_forward().unwrap_err();
        assert_eq!(blocked.movement, MoveFailure::OutOfFuel);
        assert_eq!(blocked.dig, None);
        assert_eq!(session.position(), Displacement::HOME);
    }

    #[test]
    fn up_after_down_returns_to_surface() {
        let mut sim = SimTurtle::new(10);
        sim.set_block(Displacement::new(0, -1, 0), Block::solid(COBBLESTONE));
        let mut session = Session::new(sim);
        session.move_dig_down().expect("down");
        assert_eq!(session.position().y, -1);
        session.move_up().expect("up");
        assert!(session.position().is_home());
    }

    /// Replays a seeded random mix of motions through a world sprinkled with
    /// bedrock and checks the dead-reckoning model against the simulator's
    /// ground truth after every motion.
    #[test]
    fn model_matches_ground_truth_over_random_motions() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut sim = SimTurtle::new(5_000);
        for x in -6..=6 {
            for y in -6..=0 {
                for z in -6..=6 {
                    let pos = Displacement::new(x, y, z);
                    if sim.block_at(pos).is_some() {
                        continue;
                    }
                    if rng.gen_bool(0.15) {
                        sim.set_block(pos, Block::Bedrock);
                    } else if rng.gen_bool(0.5) {
                        sim.set_block(pos, Block::solid(COBBLESTONE));
                    }
                }
            }
        }
        let mut session = Session::new(sim);
        let mut expected = Displacement::HOME;

        for _ in 0..400 {
            match rng.gen_range(0..5) {
                0 => session.turn_left(),
                1 => session.turn_right(),
                2 => {
                    if session.move_dig_down().is_ok() {
                        expected.y -= 1;
                    }
                }
                3 => {
                    if session.move_up().is_ok() {
                        expected.y += 1;
                    }
                }
                _ => {
                    let (dx, dz) = session.facing().delta();
                    if session.move_dig_forward().is_ok() {
                        expected = expected.offset(dx, 0, dz);
                    }
                }
            }
            assert_eq!(session.position(), expected);
            assert_eq!(session.position(), session.turtle().position());
            assert_eq!(session.facing(), session.turtle().facing());
        }
    }
}
