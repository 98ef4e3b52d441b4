//! Canonical face identification.

use std::fmt::{self, Display};

use crate::CubeColor;

/// One of the six canonical faces of the assembled cube.
///
/// The discriminant fixes the face order used everywhere a grid is
/// serialized: Up, Right, Front, Down, Left, Back. This matches the order
/// the solve endpoint expects and the order of the facelet string.
///
/// # Examples
///
/// ```
/// use rubicle_core::{CubeColor, Face};
///
/// assert_eq!(Face::Front.index(), 2);
/// assert_eq!(Face::Front.solved_color(), CubeColor::Green);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Face {
    /// The Up face (+Y), white when solved.
    Up = 0,
    /// The Right face (+X), red when solved.
    Right = 1,
    /// The Front face (+Z), green when solved.
    Front = 2,
    /// The Down face (-Y), yellow when solved.
    Down = 3,
    /// The Left face (-X), orange when solved.
    Left = 4,
    /// The Back face (-Z), blue when solved.
    Back = 5,
}

impl Face {
    /// Array containing all faces in serialization order.
    pub const ALL: [Self; 6] = [
        Self::Up,
        Self::Right,
        Self::Front,
        Self::Down,
        Self::Left,
        Self::Back,
    ];

    /// Returns the position of this face in the serialization order (0-5).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the sticker color this face carries in the solved state.
    ///
    /// The solved color of a face is also its canonical color: in a valid
    /// grid, the center cell of each face determines which face it is.
    #[must_use]
    pub const fn solved_color(self) -> CubeColor {
        match self {
            Self::Up => CubeColor::White,
            Self::Right => CubeColor::Red,
            Self::Front => CubeColor::Green,
            Self::Down => CubeColor::Yellow,
            Self::Left => CubeColor::Orange,
            Self::Back => CubeColor::Blue,
        }
    }

    /// Returns the single-letter face label (`U`, `R`, `F`, `D`, `L`, `B`).
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Up => 'U',
            Self::Right => 'R',
            Self::Front => 'F',
            Self::Down => 'D',
            Self::Left => 'L',
            Self::Back => 'B',
        }
    }
}

impl Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Up => "Up",
            Self::Right => "Right",
            Self::Front => "Front",
            Self::Down => "Down",
            Self::Left => "Left",
            Self::Back => "Back",
        };
        f.write_str(name)
    }
}
