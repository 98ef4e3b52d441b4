//! Structural and combinatorial grid validation.

use crate::{CubeColor, Face, FaceGrid};

/// A defect that makes a face grid unfit to send to the solver.
///
/// The shape variants (`FaceCount`, `RowCount`, `CellCount`) are produced
/// by [`FaceGrid::from_nested`]; the remaining variants by
/// [`FaceGrid::validate`]. Every message names the offending value so the
/// failure can be surfaced to the user verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// The nested input did not contain exactly 6 faces.
    #[display("cube must have exactly 6 faces, got {count}")]
    FaceCount {
        /// Number of faces present.
        count: usize,
    },
    /// A face did not contain exactly 3 rows.
    #[display("face {face} must have 3 rows, got {count}")]
    RowCount {
        /// Index of the offending face.
        face: usize,
        /// Number of rows present.
        count: usize,
    },
    /// A row did not contain exactly 3 cells.
    #[display("face {face}, row {row} must have 3 cells, got {count}")]
    CellCount {
        /// Index of the offending face.
        face: usize,
        /// Index of the offending row.
        row: usize,
        /// Number of cells present.
        count: usize,
    },
    /// A cell held a value outside the valid color range 0-5.
    #[display("invalid color value: {value}, must be 0-5")]
    InvalidColorValue {
        /// The offending cell value.
        value: i8,
    },
    /// A color did not appear exactly 9 times across the grid.
    #[display("color {color} appears {count} times, should be 9")]
    ColorCount {
        /// The offending color.
        color: CubeColor,
        /// How many times it appeared.
        count: usize,
    },
    /// Two or more faces shared the same center color.
    #[display("center squares must be unique colors, found centers: {centers:?}")]
    DuplicateCenters {
        /// The six center cell values in face order.
        centers: [i8; 6],
    },
}

impl FaceGrid {
    /// Checks that this grid is well-formed enough to send to the solver.
    ///
    /// Checks run in order and stop at the first failure:
    ///
    /// 1. every cell is within the valid color range 0-5;
    /// 2. each color appears exactly 9 times across the whole grid;
    /// 3. the six center cells are pairwise distinct.
    ///
    /// This is a necessary but not sufficient precondition for
    /// solvability: a structurally valid grid can still describe a
    /// permutation no move sequence reaches. That determination is
    /// delegated to the external solver.
    ///
    /// # Errors
    ///
    /// Returns the [`GridError`] describing the first failed check.
    ///
    /// # Examples
    ///
    /// ```
    /// use rubicle_core::{Face, FaceGrid, GridError};
    ///
    /// let mut grid = FaceGrid::solved();
    /// assert!(grid.validate().is_ok());
    ///
    /// grid.set(Face::Up, 0, 0, 6);
    /// assert_eq!(
    ///     grid.validate(),
    ///     Err(GridError::InvalidColorValue { value: 6 })
    /// );
    /// ```
    pub fn validate(&self) -> Result<(), GridError> {
        let mut color_counts = [0_usize; 6];
        for face in Face::ALL {
            for row in 0..3 {
                for col in 0..3 {
                    let value = self.get(face, row, col);
                    if !(0..=5).contains(&value) {
                        return Err(GridError::InvalidColorValue { value });
                    }
                    color_counts[usize::from(value.unsigned_abs())] += 1;
                }
            }
        }

        for color in CubeColor::ALL {
            let count = color_counts[usize::from(color.index())];
            if count != 9 {
                return Err(GridError::ColorCount { color, count });
            }
        }

        let mut seen = [false; 6];
        for face in Face::ALL {
            // Range was checked above, so the index is safe.
            let center = usize::from(self.center(face).unsigned_abs());
            if seen[center] {
                return Err(GridError::DuplicateCenters {
                    centers: self.all_centers(),
                });
            }
            seen[center] = true;
        }

        Ok(())
    }

    fn all_centers(&self) -> [i8; 6] {
        let mut centers = [0_i8; 6];
        for face in Face::ALL {
            centers[face.index()] = self.center(face);
        }
        centers
    }
}
