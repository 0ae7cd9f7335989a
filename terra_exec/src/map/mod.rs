//! # Map
//!
//! This module implements the [`TerrainMap`] and [`ElevationMap`] fields, which are co-registered
//! cell-for-cell, and the [`CostMap`] which combines the two into the weight of a single step
//! between adjacent cells.
//!
//! All maps are indexed `[x, y]`, matching pixel coordinates of the terrain image.

// ------------------------------------------------------------------------------------------------
// MODS
// ------------------------------------------------------------------------------------------------

/// Implements the [`TerrainMap`] type
mod terrain_map;

/// Implements the [`ElevationMap`] type
mod elevation_map;

/// Implements the [`CostMap`] type
mod cost_map;

// ------------------------------------------------------------------------------------------------
// EXPORTS
// ------------------------------------------------------------------------------------------------

pub use cost_map::CostMap;
pub use elevation_map::{ElevationMap, DEFAULT_TRAILING_COLUMNS};
pub use terrain_map::{TerrainClass, TerrainMap};

use crate::nav::{GridCoord, GridDims};

// ------------------------------------------------------------------------------------------------
// ENUMS
// ------------------------------------------------------------------------------------------------

/// Errors that can arise from loading or querying maps.
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("Requested cell {0} is outside the map")]
    OutsideMap(GridCoord),

    #[error("Terrain at {0} has colour {1:?}, which matches no known terrain class")]
    UnclassifiedTerrain(GridCoord, [u8; 3]),

    #[error("Cannot process {0}, since the map is of shape {1}, but the target is of shape {2}")]
    ShapeMismatch(String, GridDims, GridDims),

    #[error("Couldn't load the terrain image: {0}")]
    ImageLoad(image::ImageError),

    #[error("Couldn't read the elevation file: {0}")]
    ElevationIo(std::io::Error),

    #[error("Elevation value {value:?} on line {line}, column {column} is not a number")]
    ElevationParse {
        line: usize,
        column: usize,
        value: String,
    },

    #[error("Elevation line {line} has {found} values, expected {expected} like the first line")]
    RaggedElevation {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Elevation line {line} has {found} values, can't drop {trailing} trailing columns")]
    TooFewElevationColumns {
        line: usize,
        found: usize,
        trailing: usize,
    },

    #[error("Expected {expected} elevation values for a {dims} grid, found {found}")]
    ElevationCount {
        dims: GridDims,
        expected: usize,
        found: usize,
    },
}
