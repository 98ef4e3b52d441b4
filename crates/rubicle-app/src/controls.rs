//! The imperative cube control surface.
//!
//! The interactive front-end exposes the cube through a handle of plain
//! methods — rotate a face, rotate the whole assembly, run a move
//! sequence, paint a sticker, solve. [`CubeControls`] owns the live cube
//! model and the solver client and is that handle, with no coupling to
//! any rendering tree.

use std::{thread, time::Duration};

use log::{debug, info};

use rubicle_client::{ClientError, Solution, SolverClient};
use rubicle_core::{Axis, CubeColor, Direction, Face, FaceGrid};
use rubicle_cube::{Cube, CubeError, CubeletId, LayerMove, LocalFace};

/// Default pause between moves of an executed sequence, for visual
/// legibility.
pub const MOVE_PACING: Duration = Duration::from_millis(200);

/// Owns the live cube and drives every user-triggered operation.
pub struct CubeControls {
    cube: Cube,
    client: SolverClient,
    pacing: Duration,
}

impl CubeControls {
    /// Creates a control surface over a solved cube.
    #[must_use]
    pub fn new(client: SolverClient) -> Self {
        Self {
            cube: Cube::new(),
            client,
            pacing: MOVE_PACING,
        }
    }

    /// Overrides the inter-move pacing delay (use `Duration::ZERO` for
    /// headless runs).
    #[must_use]
    pub fn with_pacing(mut self, pacing: Duration) -> Self {
        self.pacing = pacing;
        self
    }

    /// Read access to the underlying cube.
    #[must_use]
    pub fn cube(&self) -> &Cube {
        &self.cube
    }

    /// Mutable access to the underlying cube (scramble, direct moves).
    pub fn cube_mut(&mut self) -> &mut Cube {
        &mut self.cube
    }

    /// Applies one quarter-turn to a layer.
    pub fn rotate_face(&mut self, axis: Axis, layer: i8, direction: Direction) {
        self.cube
            .rotate_layer(LayerMove::new(axis, layer, direction));
    }

    /// Rotates the view of the whole assembly; the derived grid is
    /// unaffected.
    pub fn rotate_cube(&mut self, x: f32, y: f32, z: f32) {
        self.cube.rotate_whole(x, y, z);
    }

    /// Executes a move sequence strictly in order, pausing for the
    /// configured pacing delay after each move.
    ///
    /// There is no cancellation: each move is an independent commit, and
    /// ordering guarantees nothing beyond "move *i* completes before move
    /// *i+1* begins".
    pub fn execute_sequence(&mut self, moves: &[LayerMove]) {
        for &mv in moves {
            self.cube.rotate_layer(mv);
            if !self.pacing.is_zero() {
                thread::sleep(self.pacing);
            }
        }
    }

    /// Paints one sticker of one cubelet.
    ///
    /// # Errors
    ///
    /// Returns [`CubeError::UnknownCubelet`] if no cubelet carries `id`.
    pub fn paint_face(
        &mut self,
        id: CubeletId,
        face: LocalFace,
        color: CubeColor,
    ) -> Result<(), CubeError> {
        self.cube.paint(id, face, color)
    }

    /// Resets the cube to the solved configuration.
    pub fn reset(&mut self) {
        self.cube.reset();
    }

    /// Derives the current canonical face grid, logging a per-face
    /// summary.
    #[must_use]
    pub fn current_state(&self) -> FaceGrid {
        let grid = self.cube.face_grid();
        for face in Face::ALL {
            debug!(
                "{face} ({}): {:?}",
                face.solved_color(),
                grid.to_nested()[face.index()]
            );
        }
        grid
    }

    /// Derives, validates, and submits the current cube state to the
    /// solver service.
    ///
    /// Takes `&self`: a solve, failed or successful, never mutates the
    /// cube.
    ///
    /// # Errors
    ///
    /// Returns any [`ClientError`] from validation or the request.
    pub fn solve(&self) -> Result<Solution, ClientError> {
        let grid = self.cube.face_grid();
        let solution = self.client.solve(&grid)?;
        info!(
            "solution found: {} moves in {} ms",
            solution.move_count, solution.solve_time_ms
        );
        Ok(solution)
    }
}
