//! Core domain types for the Rubicle cube front-end.
//!
//! This crate defines the primitive vocabulary shared by the rest of the
//! workspace: sticker colors, the six canonical faces, rotation axes and
//! directions, and the [`FaceGrid`] — the canonical 6×3×3 color-index
//! representation consumed by the external solver. It has no I/O and no
//! knowledge of the live 27-cubelet model.

mod axis;
mod color;
mod face;
mod grid;
mod validate;

pub use self::{
    axis::{Axis, Direction},
    color::CubeColor,
    face::Face,
    grid::{FaceGrid, UNSET_CELL},
    validate::GridError,
};
