//! Sticker color representation.

use std::fmt::{self, Display};

/// A Rubik's Cube sticker color.
///
/// The discriminant of each variant is the color index used on the wire:
/// the solve endpoint consumes faces as 3×3 grids of these indices. The
/// numbering follows the solved-face convention (White is the Up face,
/// Red the Right face, and so on).
///
/// # Examples
///
/// ```
/// use rubicle_core::CubeColor;
///
/// assert_eq!(CubeColor::Green.index(), 2);
/// assert_eq!(CubeColor::from_index(5), Some(CubeColor::Blue));
/// assert_eq!(CubeColor::from_index(6), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum CubeColor {
    /// White, index 0 (solved Up face).
    White = 0,
    /// Red, index 1 (solved Right face).
    Red = 1,
    /// Green, index 2 (solved Front face).
    Green = 2,
    /// Yellow, index 3 (solved Down face).
    Yellow = 3,
    /// Orange, index 4 (solved Left face).
    Orange = 4,
    /// Blue, index 5 (solved Back face).
    Blue = 5,
}

impl CubeColor {
    /// Array containing all six colors in index order.
    pub const ALL: [Self; 6] = [
        Self::White,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Orange,
        Self::Blue,
    ];

    /// Returns the wire color index of this color (0-5).
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Creates a color from a wire index, or `None` if the index is not
    /// in the range 0-5.
    ///
    /// # Examples
    ///
    /// ```
    /// use rubicle_core::CubeColor;
    ///
    /// assert_eq!(CubeColor::from_index(0), Some(CubeColor::White));
    /// assert_eq!(CubeColor::from_index(42), None);
    /// ```
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::White),
            1 => Some(Self::Red),
            2 => Some(Self::Green),
            3 => Some(Self::Yellow),
            4 => Some(Self::Orange),
            5 => Some(Self::Blue),
            _ => None,
        }
    }

    /// Returns the wire color index as a signed grid cell value.
    ///
    /// Grid cells are `i8` so they can also hold the unset marker; a
    /// color's cell value is always 0-5.
    #[must_use]
    pub const fn cell_value(self) -> i8 {
        self as i8
    }

    /// Returns the facelet letter of the solved face this color belongs to.
    ///
    /// The letters follow the solver's facelet-string convention:
    /// `U`, `R`, `F`, `D`, `L`, `B` for White, Red, Green, Yellow, Orange
    /// and Blue respectively.
    #[must_use]
    pub const fn facelet_letter(self) -> char {
        match self {
            Self::White => 'U',
            Self::Red => 'R',
            Self::Green => 'F',
            Self::Yellow => 'D',
            Self::Orange => 'L',
            Self::Blue => 'B',
        }
    }

    /// Returns the lowercase English name of this color.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Orange => "orange",
            Self::Blue => "blue",
        }
    }
}

impl Display for CubeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<CubeColor> for u8 {
    fn from(color: CubeColor) -> u8 {
        color.index()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for color in CubeColor::ALL {
            assert_eq!(CubeColor::from_index(color.index()), Some(color));
        }
    }

    #[test]
    fn test_all_is_in_index_order() {
        for (i, color) in CubeColor::ALL.into_iter().enumerate() {
            assert_eq!(usize::from(color.index()), i);
        }
    }

    #[test]
    fn test_facelet_letters_are_distinct() {
        let letters: Vec<char> = CubeColor::ALL
            .into_iter()
            .map(CubeColor::facelet_letter)
            .collect();
        assert_eq!(letters, vec!['U', 'R', 'F', 'D', 'L', 'B']);
    }

    #[test]
    fn test_display_uses_name() {
        assert_eq!(CubeColor::Orange.to_string(), "orange");
    }
}
