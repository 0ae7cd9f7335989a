//! # Grid
//!
//! Coordinates and topology of the terrain grid. Cells are connected to their 4 axis-adjacent
//! neighbours only, there is no diagonal movement.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use std::fmt;

use serde::{Deserialize, Serialize};

// ------------------------------------------------------------------------------------------------
// CONSTANTS
// ------------------------------------------------------------------------------------------------

/// Width in cells of the deployed terrain grid.
pub const DEPLOYED_WIDTH: usize = 395;

/// Height in cells of the deployed terrain grid.
pub const DEPLOYED_HEIGHT: usize = 500;

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// A cell of the grid, `x` being the column and `y` the row of the terrain image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridCoord {
    pub x: usize,
    pub y: usize,
}

/// Size of a grid in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridDims {
    pub width: usize,
    pub height: usize,
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl GridCoord {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl From<(usize, usize)> for GridCoord {
    fn from(tuple: (usize, usize)) -> Self {
        Self::new(tuple.0, tuple.1)
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl GridDims {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Total number of cells in the grid
    pub fn num_cells(&self) -> usize {
        self.width * self.height
    }

    /// True if the cell lies within the grid.
    pub fn contains(&self, coord: GridCoord) -> bool {
        coord.x < self.width && coord.y < self.height
    }

    /// Get the in-grid neighbours of a cell, in the order left, right, up, down.
    ///
    /// Cells on the edge of the grid have 3 neighbours and corners 2.
    pub fn neighbours(&self, coord: GridCoord) -> Vec<GridCoord> {
        let GridCoord { x, y } = coord;

        let candidates = [
            x.checked_sub(1).map(|x| GridCoord::new(x, y)),
            Some(GridCoord::new(x + 1, y)),
            y.checked_sub(1).map(|y| GridCoord::new(x, y)),
            Some(GridCoord::new(x, y + 1)),
        ];

        candidates
            .iter()
            .flatten()
            .copied()
            .filter(|n| self.contains(*n))
            .collect()
    }
}

impl Default for GridDims {
    fn default() -> Self {
        Self::new(DEPLOYED_WIDTH, DEPLOYED_HEIGHT)
    }
}

impl fmt::Display for GridDims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

// ------------------------------------------------------------------------------------------------
// TESTS
// ------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_neighbours() {
        let dims = GridDims::new(5, 4);

        assert_eq!(
            dims.neighbours(GridCoord::new(2, 2)),
            vec![
                GridCoord::new(1, 2),
                GridCoord::new(3, 2),
                GridCoord::new(2, 1),
                GridCoord::new(2, 3),
            ]
        );

        // Corners
        assert_eq!(
            dims.neighbours(GridCoord::new(0, 0)),
            vec![GridCoord::new(1, 0), GridCoord::new(0, 1)]
        );
        assert_eq!(
            dims.neighbours(GridCoord::new(4, 3)),
            vec![GridCoord::new(3, 3), GridCoord::new(4, 2)]
        );

        // Edge
        assert_eq!(dims.neighbours(GridCoord::new(4, 1)).len(), 3);
    }

    #[test]
    fn test_neighbours_in_bounds() {
        let dims = GridDims::new(6, 3);

        for x in 0..dims.width {
            for y in 0..dims.height {
                let coord = GridCoord::new(x, y);
                let neighbours = dims.neighbours(coord);

                let on_x_edge = x == 0 || x == dims.width - 1;
                let on_y_edge = y == 0 || y == dims.height - 1;
                let expected = 4 - on_x_edge as usize - on_y_edge as usize;
                assert_eq!(neighbours.len(), expected, "at {}", coord);

                for n in neighbours {
                    assert!(dims.contains(n));
                    // Always exactly one step along one axis
                    let dx = (n.x as i64 - x as i64).abs();
                    let dy = (n.y as i64 - y as i64).abs();
                    assert_eq!(dx + dy, 1);
                }
            }
        }
    }

    #[test]
    fn test_outside_cell_neighbours() {
        let dims = GridDims::new(3, 3);

        // Only the neighbour stepping back into the grid is returned
        assert_eq!(
            dims.neighbours(GridCoord::new(3, 1)),
            vec![GridCoord::new(2, 1)]
        );
        assert!(dims.neighbours(GridCoord::new(10, 10)).is_empty());
    }

    #[test]
    fn test_default_dims() {
        assert_eq!(GridDims::default(), GridDims::new(395, 500));
        assert_eq!(GridDims::default().num_cells(), 197_500);
        assert_eq!(GridDims::default().to_string(), "395x500");
    }
}
