//! The canonical 6×3×3 face grid.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::{CubeColor, Face, GridError};

/// Cell value of a grid position no sticker projected onto.
///
/// A freshly derived grid starts with every cell unset; a well-formed
/// cubelet collection fills all 54 cells, and validation rejects any grid
/// where an unset cell survives.
pub const UNSET_CELL: i8 = -1;

/// The canonical face grid: six faces, each a 3×3 grid of color indices.
///
/// Faces are ordered Up, Right, Front, Down, Left, Back (see [`Face`]);
/// cells hold raw color indices 0-5, or [`UNSET_CELL`] for a position no
/// sticker was projected onto. The grid is a *derived* view of the live
/// cubelet collection — it is recomputed in full after every mutation and
/// never edited independently, so the visual state and the solver input
/// cannot diverge.
///
/// Serialization is the nested-array wire shape the solve endpoint
/// expects: `[[[i8; 3]; 3]; 6]`.
///
/// # Examples
///
/// ```
/// use rubicle_core::{CubeColor, Face, FaceGrid};
///
/// let grid = FaceGrid::solved();
/// assert_eq!(grid.color_at(Face::Front, 1, 1), Some(CubeColor::Green));
/// assert!(grid.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FaceGrid {
    cells: [[[i8; 3]; 3]; 6],
}

impl FaceGrid {
    /// Creates a grid with every cell unset.
    #[must_use]
    pub const fn unset() -> Self {
        Self {
            cells: [[[UNSET_CELL; 3]; 3]; 6],
        }
    }

    /// Creates the solved grid: each face uniformly filled with its
    /// solved color.
    #[must_use]
    pub fn solved() -> Self {
        let mut grid = Self::unset();
        for face in Face::ALL {
            let index = face.solved_color().cell_value();
            grid.cells[face.index()] = [[index; 3]; 3];
        }
        grid
    }

    /// Returns the raw cell value at `(face, row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-2.
    #[must_use]
    pub fn get(&self, face: Face, row: usize, col: usize) -> i8 {
        self.cells[face.index()][row][col]
    }

    /// Sets the raw cell value at `(face, row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-2.
    pub fn set(&mut self, face: Face, row: usize, col: usize, value: i8) {
        self.cells[face.index()][row][col] = value;
    }

    /// Returns the typed color at `(face, row, col)`, or `None` if the
    /// cell is unset or out of range.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-2.
    #[must_use]
    pub fn color_at(&self, face: Face, row: usize, col: usize) -> Option<CubeColor> {
        u8::try_from(self.get(face, row, col))
            .ok()
            .and_then(CubeColor::from_index)
    }

    /// Returns the center cell value of a face.
    ///
    /// In a valid grid the center defines the face's canonical color.
    #[must_use]
    pub fn center(&self, face: Face) -> i8 {
        self.cells[face.index()][1][1]
    }

    /// Builds a grid from dynamically shaped nested arrays, checking the
    /// 6-face / 3-row / 3-cell structure.
    ///
    /// This is the entry point for grids that arrive from outside the
    /// deriver (for example a state file): the fixed-size representation
    /// makes shape defects unrepresentable internally, so they are caught
    /// here at the boundary.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::FaceCount`], [`GridError::RowCount`], or
    /// [`GridError::CellCount`] naming the first structural mismatch.
    pub fn from_nested(faces: &[Vec<Vec<i8>>]) -> Result<Self, GridError> {
        if faces.len() != 6 {
            return Err(GridError::FaceCount { count: faces.len() });
        }
        let mut grid = Self::unset();
        for (face_index, face) in faces.iter().enumerate() {
            if face.len() != 3 {
                return Err(GridError::RowCount {
                    face: face_index,
                    count: face.len(),
                });
            }
            for (row_index, row) in face.iter().enumerate() {
                if row.len() != 3 {
                    return Err(GridError::CellCount {
                        face: face_index,
                        row: row_index,
                        count: row.len(),
                    });
                }
                for (col_index, &value) in row.iter().enumerate() {
                    grid.cells[face_index][row_index][col_index] = value;
                }
            }
        }
        Ok(grid)
    }

    /// Returns the nested-array wire shape of this grid.
    #[must_use]
    pub const fn to_nested(&self) -> [[[i8; 3]; 3]; 6] {
        self.cells
    }

    /// Encodes this grid as a 54-character facelet string.
    ///
    /// Faces are emitted in Up, Right, Front, Down, Left, Back order, each
    /// cell as its color's facelet letter, matching the encoding the solver
    /// service reports back for cross-checking.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidColorValue`] if any cell is unset or
    /// outside the valid color range.
    pub fn facelet_string(&self) -> Result<String, GridError> {
        let mut facelets = String::with_capacity(54);
        for face in Face::ALL {
            for row in 0..3 {
                for col in 0..3 {
                    let value = self.get(face, row, col);
                    let color = u8::try_from(value)
                        .ok()
                        .and_then(CubeColor::from_index)
                        .ok_or(GridError::InvalidColorValue { value })?;
                    facelets.push(color.facelet_letter());
                }
            }
        }
        Ok(facelets)
    }
}

impl Default for FaceGrid {
    fn default() -> Self {
        Self::solved()
    }
}

impl Display for FaceGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for face in Face::ALL {
            writeln!(f, "{face}:")?;
            for row in 0..3 {
                write!(f, " ")?;
                for col in 0..3 {
                    write!(f, " {}", self.get(face, row, col))?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solved_grid_is_uniform_per_face() {
        let grid = FaceGrid::solved();
        for face in Face::ALL {
            for row in 0..3 {
                for col in 0..3 {
                    assert_eq!(grid.color_at(face, row, col), Some(face.solved_color()));
                }
            }
        }
    }

    #[test]
    fn test_unset_grid_has_no_colors() {
        let grid = FaceGrid::unset();
        assert_eq!(grid.get(Face::Up, 0, 0), UNSET_CELL);
        assert_eq!(grid.color_at(Face::Up, 0, 0), None);
    }

    #[test]
    fn test_from_nested_accepts_well_shaped_input() {
        let nested: Vec<Vec<Vec<i8>>> = FaceGrid::solved()
            .to_nested()
            .iter()
            .map(|face| face.iter().map(|row| row.to_vec()).collect())
            .collect();
        let grid = FaceGrid::from_nested(&nested).unwrap();
        assert_eq!(grid, FaceGrid::solved());
    }

    #[test]
    fn test_from_nested_rejects_wrong_face_count() {
        let nested = vec![vec![vec![0; 3]; 3]; 5];
        assert_eq!(
            FaceGrid::from_nested(&nested),
            Err(GridError::FaceCount { count: 5 })
        );
    }

    #[test]
    fn test_from_nested_rejects_missing_row() {
        let mut nested = vec![vec![vec![0; 3]; 3]; 6];
        nested[2].pop();
        assert_eq!(
            FaceGrid::from_nested(&nested),
            Err(GridError::RowCount { face: 2, count: 2 })
        );
    }

    #[test]
    fn test_from_nested_rejects_short_row() {
        let mut nested = vec![vec![vec![0; 3]; 3]; 6];
        nested[4][1].pop();
        assert_eq!(
            FaceGrid::from_nested(&nested),
            Err(GridError::CellCount {
                face: 4,
                row: 1,
                count: 2
            })
        );
    }

    #[test]
    fn test_solved_facelet_string() {
        let grid = FaceGrid::solved();
        assert_eq!(
            grid.facelet_string().unwrap(),
            "UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB"
        );
    }

    #[test]
    fn test_facelet_string_rejects_unset_cell() {
        let mut grid = FaceGrid::solved();
        grid.set(Face::Back, 2, 2, UNSET_CELL);
        assert_eq!(
            grid.facelet_string(),
            Err(GridError::InvalidColorValue { value: -1 })
        );
    }

    #[test]
    fn test_serde_wire_shape_is_nested_arrays() {
        let grid = FaceGrid::solved();
        let json = serde_json::to_string(&grid).unwrap();
        assert!(json.starts_with("[[[0,0,0],[0,0,0],[0,0,0]],"));
        let back: FaceGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, grid);
    }

    mod props {
        use proptest::prelude::*;

        use super::*;

        fn arbitrary_cells() -> impl Strategy<Value = Vec<Vec<Vec<i8>>>> {
            prop::collection::vec(
                prop::collection::vec(prop::collection::vec(-1_i8..=6, 3), 3),
                6,
            )
        }

        proptest! {
            /// `from_nested` / `to_nested` preserve every cell value,
            /// valid or not.
            #[test]
            fn prop_nested_round_trip(cells in arbitrary_cells()) {
                let grid = FaceGrid::from_nested(&cells).unwrap();
                let nested = grid.to_nested();
                for (f, face) in cells.iter().enumerate() {
                    for (r, row) in face.iter().enumerate() {
                        for (c, &value) in row.iter().enumerate() {
                            prop_assert_eq!(nested[f][r][c], value);
                        }
                    }
                }
            }

            /// The facelet string exists exactly when every cell holds a
            /// valid color, and is always 54 letters long.
            #[test]
            fn prop_facelet_string_matches_cell_validity(cells in arbitrary_cells()) {
                let grid = FaceGrid::from_nested(&cells).unwrap();
                let all_valid = cells
                    .iter()
                    .flatten()
                    .flatten()
                    .all(|value| (0..=5).contains(value));
                match grid.facelet_string() {
                    Ok(facelets) => {
                        prop_assert!(all_valid);
                        prop_assert_eq!(facelets.len(), 54);
                    }
                    Err(GridError::InvalidColorValue { value }) => {
                        prop_assert!(!(0..=5).contains(&value));
                    }
                    Err(other) => prop_assert!(false, "unexpected error: {other}"),
                }
            }
        }
    }
}
