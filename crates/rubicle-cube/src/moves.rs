//! Quarter-turn layer moves.

use std::fmt::{self, Display};

use nalgebra::{Matrix3, Rotation3, Unit, Vector3};
use rand::{Rng, RngExt as _};
use rubicle_core::{Axis, Direction};

/// Tolerance used when selecting the cubelets of a layer by coordinate.
///
/// Positions are snapped to the lattice after every rotation, but the
/// comparison still allows this much round-off so a cubelet mid-drift can
/// never silently fall out of its layer.
pub const LAYER_TOLERANCE: f32 = 0.1;

/// A quarter-turn of one layer: the 9 cubelets sharing one coordinate
/// value along an axis.
///
/// # Examples
///
/// ```
/// use rubicle_core::{Axis, Direction};
/// use rubicle_cube::LayerMove;
///
/// let right_face_turn = LayerMove::new(Axis::X, 1, Direction::Clockwise);
/// assert_eq!(right_face_turn.to_string(), "x[1]+");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerMove {
    /// The rotation axis.
    pub axis: Axis,
    /// The layer coordinate along the axis (-1, 0, or 1).
    pub layer: i8,
    /// The turn direction.
    pub direction: Direction,
}

impl LayerMove {
    /// Creates a layer move.
    #[must_use]
    pub const fn new(axis: Axis, layer: i8, direction: Direction) -> Self {
        Self {
            axis,
            layer,
            direction,
        }
    }

    /// Returns the ±90° rotation matrix of this move.
    #[must_use]
    pub fn rotation(&self) -> Matrix3<f32> {
        let axis = match self.axis {
            Axis::X => Vector3::x_axis(),
            Axis::Y => Vector3::y_axis(),
            Axis::Z => Vector3::z_axis(),
        };
        rotation_about(&axis, self.direction)
    }

    /// Returns whether a coordinate along this move's axis selects into
    /// the move's layer, within [`LAYER_TOLERANCE`].
    #[must_use]
    pub fn selects(&self, coordinate: f32) -> bool {
        (coordinate - f32::from(self.layer)).abs() < LAYER_TOLERANCE
    }

    /// Returns the move undoing this one.
    #[must_use]
    pub const fn inverse(&self) -> Self {
        Self {
            axis: self.axis,
            layer: self.layer,
            direction: self.direction.reversed(),
        }
    }

    /// Draws a uniformly random quarter-turn: any axis, any of the three
    /// layers, either direction.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let axis = Axis::ALL[rng.random_range(0..3)];
        let layer = rng.random_range(-1_i8..=1);
        let direction = if rng.random_bool(0.5) {
            Direction::Clockwise
        } else {
            Direction::CounterClockwise
        };
        Self::new(axis, layer, direction)
    }
}

impl Display for LayerMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]{}", self.axis, self.layer, self.direction)
    }
}

/// Builds a quarter-turn rotation matrix about a unit axis.
pub(crate) fn rotation_about(axis: &Unit<Vector3<f32>>, direction: Direction) -> Matrix3<f32> {
    Rotation3::from_axis_angle(axis, std::f32::consts::FRAC_PI_2 * direction.sign()).into_inner()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn test_selects_uses_tolerance() {
        let mv = LayerMove::new(Axis::Y, 1, Direction::Clockwise);
        assert!(mv.selects(1.0));
        assert!(mv.selects(1.05));
        assert!(mv.selects(0.95));
        assert!(!mv.selects(0.0));
        assert!(!mv.selects(-1.0));
    }

    #[test]
    fn test_rotation_is_a_proper_quarter_turn() {
        let mv = LayerMove::new(Axis::Z, 1, Direction::Clockwise);
        let rotation = mv.rotation();
        let rotated = rotation * Vector3::new(1.0, 0.0, 0.0);
        // +90° about Z maps +X to +Y.
        assert!((rotated - Vector3::new(0.0, 1.0, 0.0)).norm() < 1e-6);
    }

    #[test]
    fn test_inverse_composes_to_identity() {
        let mv = LayerMove::new(Axis::X, -1, Direction::CounterClockwise);
        let product = mv.rotation() * mv.inverse().rotation();
        assert!((product - Matrix3::identity()).norm() < 1e-6);
    }

    #[test]
    fn test_random_moves_are_in_range() {
        let mut rng = Pcg64Mcg::seed_from_u64(7);
        for _ in 0..100 {
            let mv = LayerMove::random(&mut rng);
            assert!((-1..=1).contains(&mv.layer));
        }
    }
}
