//! # Elevation Map
//!
//! Elevation files are whitespace separated text, one row of values per line. The raw data
//! carries some extra trailing columns on every row which aren't part of the grid. These are
//! dropped, and the remaining values are read in row-major order and reshaped into a
//! `(width, height)` array indexed `[x, y]`.

// ------------------------------------------------------------------------------------------------
// INCLUDES
// ------------------------------------------------------------------------------------------------

use std::{fs, path::Path};

use ndarray::Array2;

use super::MapError;
use crate::nav::{GridCoord, GridDims};

// ------------------------------------------------------------------------------------------------
// CONSTANTS
// ------------------------------------------------------------------------------------------------

/// Number of trailing columns on each row of the deployed elevation data which aren't part of
/// the grid.
pub const DEFAULT_TRAILING_COLUMNS: usize = 5;

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Elevation Map, the height in meters of every cell of the grid.
#[derive(Clone, Debug)]
pub struct ElevationMap {
    /// Heights, indexed `[x, y]`
    heights: Array2<f64>,
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl ElevationMap {
    /// Create a flat map, all cells at zero elevation.
    pub fn flat(dims: GridDims) -> Self {
        Self {
            heights: Array2::zeros((dims.width, dims.height)),
        }
    }

    /// Create a map by evaluating `f` at every cell.
    pub fn from_fn<F: Fn(GridCoord) -> f64>(dims: GridDims, f: F) -> Self {
        Self {
            heights: Array2::from_shape_fn((dims.width, dims.height), |(x, y)| {
                f(GridCoord::new(x, y))
            }),
        }
    }

    /// Load the map from the elevation file at the given path.
    pub fn load<P: AsRef<Path>>(
        path: P,
        dims: GridDims,
        trailing_columns: usize,
    ) -> Result<Self, MapError> {
        let text = fs::read_to_string(path).map_err(MapError::ElevationIo)?;

        Self::parse(&text, dims, trailing_columns)
    }

    /// Parse the text of an elevation file.
    ///
    /// Blank lines are skipped. Every remaining line must have the same number of values, of
    /// which the last `trailing_columns` are dropped.
    pub fn parse(text: &str, dims: GridDims, trailing_columns: usize) -> Result<Self, MapError> {
        let mut values = Vec::with_capacity(dims.num_cells());
        let mut row_len = None;

        for (line_idx, line) in text.lines().enumerate() {
            let line_num = line_idx + 1;

            let row = line
                .split_whitespace()
                .enumerate()
                .map(|(col_idx, token)| {
                    token.parse::<f64>().map_err(|_| MapError::ElevationParse {
                        line: line_num,
                        column: col_idx + 1,
                        value: token.to_string(),
                    })
                })
                .collect::<Result<Vec<f64>, MapError>>()?;

            if row.is_empty() {
                continue;
            }

            // All rows must match the first
            match row_len {
                None => row_len = Some(row.len()),
                Some(expected) if expected != row.len() => {
                    return Err(MapError::RaggedElevation {
                        line: line_num,
                        expected,
                        found: row.len(),
                    })
                }
                Some(_) => (),
            }

            if row.len() <= trailing_columns {
                return Err(MapError::TooFewElevationColumns {
                    line: line_num,
                    found: row.len(),
                    trailing: trailing_columns,
                });
            }

            values.extend_from_slice(&row[..row.len() - trailing_columns]);
        }

        let found = values.len();
        let expected = dims.num_cells();
        if found != expected {
            return Err(MapError::ElevationCount {
                dims,
                expected,
                found,
            });
        }

        let heights = Array2::from_shape_vec((dims.width, dims.height), values).map_err(|_| {
            MapError::ElevationCount {
                dims,
                expected,
                found,
            }
        })?;

        Ok(Self { heights })
    }

    /// Dimensions of the map in cells
    pub fn dims(&self) -> GridDims {
        let (width, height) = self.heights.dim();
        GridDims::new(width, height)
    }

    /// Get the elevation of the given cell
    pub fn get(&self, coord: GridCoord) -> Result<f64, MapError> {
        self.heights
            .get([coord.x, coord.y])
            .copied()
            .ok_or(MapError::OutsideMap(coord))
    }
}

// ------------------------------------------------------------------------------------------------
// TESTS
// ------------------------------------------------------------------------------------------------
