//! Rotation axes and quarter-turn directions.

use std::fmt::{self, Display};

/// A world-space rotation axis.
///
/// Layer rotations and whole-cube view rotations are always expressed
/// about one of the three coordinate axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The X axis (Right/Left direction).
    X,
    /// The Y axis (Up/Down direction).
    Y,
    /// The Z axis (Front/Back direction).
    Z,
}

impl Axis {
    /// Array containing all three axes.
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];
}

impl Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
        };
        f.write_str(name)
    }
}

/// The direction of a quarter-turn.
///
/// Clockwise corresponds to a +90° rotation about the axis, counter-
/// clockwise to -90° (right-hand rule, looking down the positive axis).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// A +90° quarter-turn.
    Clockwise,
    /// A -90° quarter-turn.
    CounterClockwise,
}

impl Direction {
    /// Returns the signed angle factor of this direction (`1.0` or `-1.0`).
    #[must_use]
    pub const fn sign(self) -> f32 {
        match self {
            Self::Clockwise => 1.0,
            Self::CounterClockwise => -1.0,
        }
    }

    /// Returns the opposite direction.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Clockwise => Self::CounterClockwise,
            Self::CounterClockwise => Self::Clockwise,
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = match self {
            Self::Clockwise => "+",
            Self::CounterClockwise => "-",
        };
        f.write_str(sign)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_signs_are_opposite() {
        assert_eq!(Direction::Clockwise.sign(), 1.0);
        assert_eq!(Direction::CounterClockwise.sign(), -1.0);
        for direction in [Direction::Clockwise, Direction::CounterClockwise] {
            assert_eq!(direction.reversed().sign(), -direction.sign());
        }
    }
}
