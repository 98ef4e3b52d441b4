//! The 27-cubelet assembly and its move engine.

use log::debug;
use nalgebra::Vector3;
use rand::Rng;
use rubicle_core::{Axis, CubeColor, FaceGrid};

use crate::{
    cubelet::{Cubelet, CubeletId, LocalFace},
    moves::LayerMove,
    project::derive_face_grid,
};

/// Errors from targeted cube operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum CubeError {
    /// No cubelet carries the given identity.
    #[display("no cubelet with id {id}")]
    UnknownCubelet {
        /// The identity that did not match any cubelet.
        id: CubeletId,
    },
}

/// The full 3×3×3 cube: 27 cubelets plus a view-level rotation.
///
/// All mutation goes through the move engine ([`rotate_layer`],
/// [`rotate_whole`]) or face painting ([`paint`]); the canonical face
/// grid is always derived fresh from the cubelets with [`face_grid`],
/// never stored.
///
/// [`rotate_layer`]: Cube::rotate_layer
/// [`rotate_whole`]: Cube::rotate_whole
/// [`paint`]: Cube::paint
/// [`face_grid`]: Cube::face_grid
///
/// # Examples
///
/// ```
/// use rubicle_core::{Axis, Direction};
/// use rubicle_cube::{Cube, LayerMove};
///
/// let mut cube = Cube::new();
/// assert!(cube.face_grid().validate().is_ok());
///
/// cube.rotate_layer(LayerMove::new(Axis::X, 1, Direction::Clockwise));
/// assert!(cube.face_grid().validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Cube {
    cubelets: Vec<Cubelet>,
    view_rotation: Vector3<f32>,
}

impl Cube {
    /// Creates the cube in the solved configuration: one cubelet per
    /// lattice point in `{-1,0,1}³`, identity orientations, solved
    /// sticker colors.
    #[must_use]
    pub fn new() -> Self {
        let mut cubelets = Vec::with_capacity(27);
        for x in -1..=1 {
            for y in -1..=1 {
                for z in -1..=1 {
                    cubelets.push(Cubelet::at_lattice(x, y, z));
                }
            }
        }
        Self {
            cubelets,
            view_rotation: Vector3::zeros(),
        }
    }

    /// Resets to the solved configuration, recreating all 27 cubelets and
    /// zeroing the view rotation.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Returns the cubelets for projection or rendering.
    #[must_use]
    pub fn cubelets(&self) -> &[Cubelet] {
        &self.cubelets
    }

    /// Applies a quarter-turn to one layer.
    ///
    /// Every cubelet whose coordinate along the move's axis matches the
    /// layer (within [`LAYER_TOLERANCE`]) gets the rotation composed onto
    /// its orientation and applied to its position, with a lattice snap to
    /// cancel float drift. Cubelets outside the layer are untouched. The
    /// operation is synchronous and atomic: no partial-layer state is
    /// observable.
    ///
    /// [`LAYER_TOLERANCE`]: crate::LAYER_TOLERANCE
    pub fn rotate_layer(&mut self, mv: LayerMove) {
        debug!("rotate layer {mv}");
        let rotation = mv.rotation();
        for cubelet in &mut self.cubelets {
            if mv.selects(axis_coordinate(mv.axis, cubelet.position())) {
                cubelet.apply_rotation(&rotation);
            }
        }
    }

    /// Rotates the *view* of the whole assembly by Euler angle deltas
    /// (radians).
    ///
    /// This is a camera/group-level transform: it never touches cubelet
    /// positions or orientations, and therefore never changes the derived
    /// face grid. Accumulated angles are wrapped into `[0, 2π)` so they
    /// stay bounded over long sessions.
    pub fn rotate_whole(&mut self, x: f32, y: f32, z: f32) {
        use std::f32::consts::TAU;
        self.view_rotation.x = (self.view_rotation.x + x).rem_euclid(TAU);
        self.view_rotation.y = (self.view_rotation.y + y).rem_euclid(TAU);
        self.view_rotation.z = (self.view_rotation.z + z).rem_euclid(TAU);
    }

    /// Returns the accumulated view rotation as Euler angles (radians),
    /// each in `[0, 2π)`.
    #[must_use]
    pub const fn view_rotation(&self) -> Vector3<f32> {
        self.view_rotation
    }

    /// Applies a sequence of moves strictly in order, with no pacing.
    pub fn apply_moves(&mut self, moves: &[LayerMove]) {
        for &mv in moves {
            self.rotate_layer(mv);
        }
    }

    /// Scrambles the cube with `count` random quarter-turns and returns
    /// the moves that were applied, in order.
    pub fn scramble<R: Rng + ?Sized>(&mut self, rng: &mut R, count: usize) -> Vec<LayerMove> {
        let moves: Vec<LayerMove> = (0..count).map(|_| LayerMove::random(rng)).collect();
        self.apply_moves(&moves);
        moves
    }

    /// Paints the sticker of one local face of one cubelet.
    ///
    /// # Errors
    ///
    /// Returns [`CubeError::UnknownCubelet`] if no cubelet carries `id`.
    pub fn paint(
        &mut self,
        id: CubeletId,
        face: LocalFace,
        color: CubeColor,
    ) -> Result<(), CubeError> {
        let cubelet = self
            .cubelets
            .iter_mut()
            .find(|c| c.id() == id)
            .ok_or(CubeError::UnknownCubelet { id })?;
        cubelet.set_sticker(face, color);
        Ok(())
    }

    /// Derives the canonical face grid from the current cubelet state.
    ///
    /// Pure recomputation: calling this twice without an intervening
    /// mutation yields identical grids.
    #[must_use]
    pub fn face_grid(&self) -> FaceGrid {
        derive_face_grid(&self.cubelets)
    }
}

impl Default for Cube {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the component of a position along an axis.
fn axis_coordinate(axis: Axis, position: Vector3<f32>) -> f32 {
    match axis {
        Axis::X => position.x,
        Axis::Y => position.y,
        Axis::Z => position.z,
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64Mcg;
    use rubicle_core::{Direction, Face};

    use super::*;

    #[test]
    fn test_new_cube_has_27_cubelets() {
        let cube = Cube::new();
        assert_eq!(cube.cubelets().len(), 27);
    }

    #[test]
    fn test_new_cube_derives_solved_grid() {
        let cube = Cube::new();
        assert_eq!(cube.face_grid(), FaceGrid::solved());
    }

    #[test]
    fn test_rotate_layer_only_touches_selected_layer() {
        let mut cube = Cube::new();
        let before: Vec<_> = cube.cubelets().to_vec();
        cube.rotate_layer(LayerMove::new(Axis::X, 1, Direction::Clockwise));

        for (old, new) in before.iter().zip(cube.cubelets()) {
            let (x, _, _) = old.lattice_position();
            if x == 1 {
                assert_ne!(old.orientation(), new.orientation());
            } else {
                assert_eq!(old, new);
            }
        }
    }

    #[test]
    fn test_four_quarter_turns_are_identity() {
        let mut cube = Cube::new();
        let reference = cube.clone();
        let mv = LayerMove::new(Axis::X, 1, Direction::Clockwise);
        for _ in 0..4 {
            cube.rotate_layer(mv);
        }
        // Positions snap back exactly; orientations accumulate float
        // error, so compare the derived grids and the lattice positions.
        assert_eq!(cube.face_grid(), reference.face_grid());
        for (a, b) in reference.cubelets().iter().zip(cube.cubelets()) {
            assert_eq!(a.lattice_position(), b.lattice_position());
            assert!((a.orientation() - b.orientation()).norm() < 1e-5);
        }
    }

    #[test]
    fn test_rotate_whole_never_changes_grid() {
        let mut cube = Cube::new();
        cube.rotate_layer(LayerMove::new(Axis::Y, -1, Direction::CounterClockwise));
        let before = cube.face_grid();
        cube.rotate_whole(0.3, -1.7, 42.0);
        cube.rotate_whole(std::f32::consts::PI, 0.0, -0.5);
        assert_eq!(cube.face_grid(), before);
    }

    #[test]
    fn test_rotate_whole_wraps_angles() {
        use std::f32::consts::TAU;
        let mut cube = Cube::new();
        for _ in 0..1000 {
            cube.rotate_whole(1.0, -2.5, 10.0);
        }
        let view = cube.view_rotation();
        for angle in [view.x, view.y, view.z] {
            assert!((0.0..TAU).contains(&angle));
        }
    }

    #[test]
    fn test_reset_restores_solved_state() {
        let mut rng = Pcg64Mcg::seed_from_u64(99);
        let mut cube = Cube::new();
        cube.scramble(&mut rng, 20);
        cube.rotate_whole(1.0, 1.0, 1.0);
        cube.reset();
        assert_eq!(cube, Cube::new());
    }

    #[test]
    fn test_scramble_returns_applied_moves() {
        let mut rng = Pcg64Mcg::seed_from_u64(3);
        let mut cube = Cube::new();
        let moves = cube.scramble(&mut rng, 12);
        assert_eq!(moves.len(), 12);

        // Undoing the moves in reverse order restores the solved grid.
        let undo: Vec<LayerMove> = moves.iter().rev().map(LayerMove::inverse).collect();
        cube.apply_moves(&undo);
        assert_eq!(cube.face_grid(), FaceGrid::solved());
    }

    #[test]
    fn test_paint_recolors_target_cubelet() {
        let mut cube = Cube::new();
        let id = CubeletId::new(0, 0, 1);
        cube.paint(id, LocalFace::Front, CubeColor::Red).unwrap();
        let grid = cube.face_grid();
        // The front-center sticker is now red; the grid fails center
        // uniqueness (red is also the Right center).
        assert_eq!(grid.color_at(Face::Front, 1, 1), Some(CubeColor::Red));
        assert!(grid.validate().is_err());
    }

    #[test]
    fn test_paint_unknown_id_errors() {
        let mut cube = Cube::new();
        let id = CubeletId::new(2, 0, 0);
        assert_eq!(
            cube.paint(id, LocalFace::Front, CubeColor::Red),
            Err(CubeError::UnknownCubelet { id })
        );
    }

    #[test]
    fn test_failed_paint_leaves_cube_unchanged() {
        let mut cube = Cube::new();
        let reference = cube.clone();
        let _ = cube.paint(CubeletId::new(3, 3, 3), LocalFace::Top, CubeColor::Blue);
        assert_eq!(cube, reference);
    }
}
