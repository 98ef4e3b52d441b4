//! A single sub-cube of the 3×3×3 assembly.

use std::fmt::{self, Display};

use nalgebra::{Matrix3, Vector3};
use rubicle_core::CubeColor;

/// Stable identity of a cubelet, derived from its lattice coordinates at
/// creation time.
///
/// The identity never changes, even as the cubelet moves through the
/// lattice; it is how targeted operations (face painting) address a
/// specific cubelet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CubeletId {
    x: i8,
    y: i8,
    z: i8,
}

impl CubeletId {
    /// Creates an identity from original lattice coordinates.
    #[must_use]
    pub const fn new(x: i8, y: i8, z: i8) -> Self {
        Self { x, y, z }
    }

    /// Returns the original lattice coordinates.
    #[must_use]
    pub const fn coords(self) -> (i8, i8, i8) {
        (self.x, self.y, self.z)
    }
}

impl Display for CubeletId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cube-{}-{}-{}", self.x, self.y, self.z)
    }
}

/// One of the six local face directions of a cubelet, aligned to its
/// untransformed local axes.
///
/// Local faces label stickers; they do not move when the cubelet rotates.
/// The cubelet's cumulative orientation maps a local face's normal to its
/// current world-space direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum LocalFace {
    /// The +Z local face.
    Front = 0,
    /// The -Z local face.
    Back = 1,
    /// The +X local face.
    Right = 2,
    /// The -X local face.
    Left = 3,
    /// The +Y local face.
    Top = 4,
    /// The -Y local face.
    Bottom = 5,
}

impl LocalFace {
    /// Array containing all six local faces.
    pub const ALL: [Self; 6] = [
        Self::Front,
        Self::Back,
        Self::Right,
        Self::Left,
        Self::Top,
        Self::Bottom,
    ];

    /// Returns the outward unit normal of this face in local coordinates.
    #[must_use]
    pub fn normal(self) -> Vector3<f32> {
        match self {
            Self::Front => Vector3::new(0.0, 0.0, 1.0),
            Self::Back => Vector3::new(0.0, 0.0, -1.0),
            Self::Right => Vector3::new(1.0, 0.0, 0.0),
            Self::Left => Vector3::new(-1.0, 0.0, 0.0),
            Self::Top => Vector3::new(0.0, 1.0, 0.0),
            Self::Bottom => Vector3::new(0.0, -1.0, 0.0),
        }
    }
}

impl Display for LocalFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Front => "front",
            Self::Back => "back",
            Self::Right => "right",
            Self::Left => "left",
            Self::Top => "top",
            Self::Bottom => "bottom",
        };
        f.write_str(name)
    }
}

/// One of the 27 unit cubes composing the 3×3×3 assembly.
///
/// A cubelet carries a world position (always on the `{-1,0,1}³` lattice
/// after snapping), a cumulative rotation since creation, and a sticker
/// table mapping each local face to a color or `None` (no sticker —
/// interior faces, rendered black).
#[derive(Debug, Clone, PartialEq)]
pub struct Cubelet {
    id: CubeletId,
    position: Vector3<f32>,
    orientation: Matrix3<f32>,
    stickers: [Option<CubeColor>; 6],
}

impl Cubelet {
    /// Creates a cubelet at a lattice point in the solved configuration:
    /// exterior faces carry the solved color of the canonical face they
    /// point at, interior faces carry no sticker.
    #[must_use]
    pub fn at_lattice(x: i8, y: i8, z: i8) -> Self {
        let mut stickers = [None; 6];
        stickers[LocalFace::Front as usize] = (z == 1).then_some(CubeColor::Green);
        stickers[LocalFace::Back as usize] = (z == -1).then_some(CubeColor::Blue);
        stickers[LocalFace::Right as usize] = (x == 1).then_some(CubeColor::Red);
        stickers[LocalFace::Left as usize] = (x == -1).then_some(CubeColor::Orange);
        stickers[LocalFace::Top as usize] = (y == 1).then_some(CubeColor::White);
        stickers[LocalFace::Bottom as usize] = (y == -1).then_some(CubeColor::Yellow);
        Self {
            id: CubeletId::new(x, y, z),
            position: Vector3::new(f32::from(x), f32::from(y), f32::from(z)),
            orientation: Matrix3::identity(),
            stickers,
        }
    }

    /// Returns this cubelet's stable identity.
    #[must_use]
    pub const fn id(&self) -> CubeletId {
        self.id
    }

    /// Returns the current world position.
    #[must_use]
    pub const fn position(&self) -> Vector3<f32> {
        self.position
    }

    /// Returns the cumulative rotation applied since creation.
    #[must_use]
    pub const fn orientation(&self) -> &Matrix3<f32> {
        &self.orientation
    }

    /// Returns the position rounded to the nearest lattice point.
    #[must_use]
    pub fn lattice_position(&self) -> (i8, i8, i8) {
        #[expect(clippy::cast_possible_truncation)]
        let round = |v: f32| v.round() as i8;
        (
            round(self.position.x),
            round(self.position.y),
            round(self.position.z),
        )
    }

    /// Returns the sticker color on a local face, or `None` if the face
    /// carries no sticker.
    #[must_use]
    pub fn sticker(&self, face: LocalFace) -> Option<CubeColor> {
        self.stickers[face as usize]
    }

    /// Replaces the sticker on a local face.
    ///
    /// Painting is unrestricted, as in the interactive editor this models:
    /// it can recolor an existing sticker or place a color on a face that
    /// had none. Validation of the resulting overall state happens at
    /// solve time, not here.
    pub fn set_sticker(&mut self, face: LocalFace, color: CubeColor) {
        self.stickers[face as usize] = Some(color);
    }

    /// Applies a rotation to this cubelet: the orientation is
    /// pre-multiplied and the position is rotated, then snapped back to
    /// the nearest lattice point to cancel floating-point drift from
    /// repeated matrix composition.
    pub(crate) fn apply_rotation(&mut self, rotation: &Matrix3<f32>) {
        self.orientation = rotation * self.orientation;
        self.position = rotation * self.position;
        self.position = snap_to_lattice(self.position);
    }
}

/// Rounds each component to the nearest integer lattice coordinate.
fn snap_to_lattice(v: Vector3<f32>) -> Vector3<f32> {
    Vector3::new(v.x.round(), v.y.round(), v.z.round())
}
