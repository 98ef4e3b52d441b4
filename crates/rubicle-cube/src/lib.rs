//! The live Rubik's Cube model: 27 cubelets, the move engine, and the
//! projection from cubelet transforms to the canonical face grid.
//!
//! All state lives in [`Cube`]. Mutations are synchronous and atomic;
//! the face grid is never stored, only derived on demand with
//! [`Cube::face_grid`] (or [`derive_face_grid`] directly), so the visual
//! state and the solver input cannot drift apart.

mod cube;
mod cubelet;
mod moves;
mod project;

pub use self::{
    cube::{Cube, CubeError},
    cubelet::{Cubelet, CubeletId, LocalFace},
    moves::{LAYER_TOLERANCE, LayerMove},
    project::derive_face_grid,
};
