//! Integer offset of the agent from its home point.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Offset from home: x east, y up (negative below the start), z south.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Displacement {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Displacement {
    pub const HOME: Displacement = Displacement { x: 0, y: 0, z: 0 };

    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    pub fn is_home(&self) -> bool {
        *self == Self::HOME
    }

    /// Manhattan distance to home: the step count of the axis-aligned homing path.
    pub fn manhattan(&self) -> i64 {
        i64::from(self.x).abs() + i64::from(self.y).abs() + i64::from(self.z).abs()
    }

    pub fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            z: self.z + dz,
        }
    }
}

impl fmt::Display for Displacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_sums_absolute_axes() {
        assert_eq!(Displacement::new(3, -4, -5).manhattan(), 12);
        assert_eq!(Displacement::HOME.manhattan(), 0);
    }

    #[test]
    fn offset_accumulates() {
        let pos = Displacement::HOME.offset(1, 0, 0).offset(0, -1, -1);
        assert_eq!(pos, Displacement::new(1, -1, -1));
        assert!(!pos.is_home());
        assert!(pos.offset(-1, 1, 1).is_home());
    }
}
