//! # Terrain Map
//!
//! Terrain is classified by colour. Every [`TerrainClass`] owns exactly one RGB triple in the
//! palette, and a pixel whose colour isn't in the palette has no class at all, which is an error
//! rather than a default.

// ------------------------------------------------------------------------------------------------
// INCLUDES
// ------------------------------------------------------------------------------------------------

use std::{fmt, path::Path};

use image::DynamicImage;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use super::MapError;
use crate::nav::{GridCoord, GridDims};

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Terrain Map, the RGB colour of every cell of the grid.
#[derive(Clone, Debug)]
pub struct TerrainMap {
    /// Pixel colours, indexed `[x, y]`
    pixels: Array2<[u8; 3]>,
}

// ------------------------------------------------------------------------------------------------
// ENUMS
// ------------------------------------------------------------------------------------------------

/// Possible classes of terrain in a [`TerrainMap`]
#[derive(PartialEq, Eq, Clone, Copy, Hash, Debug, Serialize, Deserialize)]
pub enum TerrainClass {
    OpenLand,
    RoughMeadow,
    EasyMovementForest,
    SlowRunForest,
    WalkForest,
    ImpassibleVegetation,
    LakeSwampMarsh,
    PavedRoad,
    Footpath,
    OutOfBounds,
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl TerrainClass {
    /// Every terrain class, in palette order.
    pub const ALL: [TerrainClass; 10] = [
        TerrainClass::OpenLand,
        TerrainClass::RoughMeadow,
        TerrainClass::EasyMovementForest,
        TerrainClass::SlowRunForest,
        TerrainClass::WalkForest,
        TerrainClass::ImpassibleVegetation,
        TerrainClass::LakeSwampMarsh,
        TerrainClass::PavedRoad,
        TerrainClass::Footpath,
        TerrainClass::OutOfBounds,
    ];

    /// The friction coefficient of this class, i.e. the cost of stepping into a cell of it.
    ///
    /// Water, impassible vegetation and out of bounds areas get penalties so large that no
    /// optimal route crosses them unless there's no alternative.
    pub fn friction(&self) -> f64 {
        use TerrainClass::*;

        match self {
            PavedRoad => 0.5,
            Footpath => 0.8,
            OpenLand => 1.0,
            EasyMovementForest => 1.2,
            RoughMeadow => 1.5,
            SlowRunForest => 2.0,
            WalkForest => 2.5,
            LakeSwampMarsh => 1000.0,
            ImpassibleVegetation => 10000.0,
            OutOfBounds => 100000.0,
        }
    }

    /// The canonical colour of this class in the terrain image.
    pub fn rgb(&self) -> [u8; 3] {
        use TerrainClass::*;

        match self {
            OpenLand => [248, 148, 18],
            RoughMeadow => [255, 192, 0],
            EasyMovementForest => [255, 255, 255],
            SlowRunForest => [2, 208, 60],
            WalkForest => [2, 136, 40],
            ImpassibleVegetation => [5, 73, 24],
            LakeSwampMarsh => [0, 0, 255],
            PavedRoad => [71, 51, 3],
            Footpath => [0, 0, 0],
            OutOfBounds => [205, 0, 101],
        }
    }

    /// Human readable name of the class
    pub fn name(&self) -> &'static str {
        use TerrainClass::*;

        match self {
            OpenLand => "Open land",
            RoughMeadow => "Rough meadow",
            EasyMovementForest => "Easy movement forest",
            SlowRunForest => "Slow run forest",
            WalkForest => "Walk forest",
            ImpassibleVegetation => "Impassible vegetation",
            LakeSwampMarsh => "Lake/Swamp/Marsh",
            PavedRoad => "Paved road",
            Footpath => "Footpath",
            OutOfBounds => "Out of bounds",
        }
    }

    /// Find the class whose colour exactly matches `rgb`, if there is one.
    pub fn from_rgb(rgb: [u8; 3]) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.rgb() == rgb)
    }
}

impl fmt::Display for TerrainClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl TerrainMap {
    /// Create a terrain map from raw pixel colours indexed `[x, y]`.
    pub fn from_pixels(pixels: Array2<[u8; 3]>) -> Self {
        Self { pixels }
    }

    /// Create a terrain map covering `dims` with a single class.
    pub fn filled(dims: GridDims, class: TerrainClass) -> Self {
        Self {
            pixels: Array2::from_elem((dims.width, dims.height), class.rgb()),
        }
    }

    /// Build the map from a decoded image. Any alpha channel is ignored.
    pub fn from_image(image: &DynamicImage) -> Self {
        let rgb = image.to_rgb8();
        let (width, height) = rgb.dimensions();

        let pixels = Array2::from_shape_fn((width as usize, height as usize), |(x, y)| {
            rgb.get_pixel(x as u32, y as u32).0
        });

        Self { pixels }
    }

    /// Load the map from the image at the given path.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, MapError> {
        let image = image::open(path).map_err(MapError::ImageLoad)?;

        Ok(Self::from_image(&image))
    }

    /// Dimensions of the map in cells
    pub fn dims(&self) -> GridDims {
        let (width, height) = self.pixels.dim();
        GridDims::new(width, height)
    }

    /// Get the raw colour of the given cell.
    pub fn rgb(&self, coord: GridCoord) -> Result<[u8; 3], MapError> {
        self.pixels
            .get([coord.x, coord.y])
            .copied()
            .ok_or(MapError::OutsideMap(coord))
    }

    /// Get the terrain class of the given cell.
    pub fn classify(&self, coord: GridCoord) -> Result<TerrainClass, MapError> {
        let rgb = self.rgb(coord)?;

        TerrainClass::from_rgb(rgb).ok_or(MapError::UnclassifiedTerrain(coord, rgb))
    }

    /// Set the colour of the given cell to that of `class`.
    pub fn set_class(&mut self, coord: GridCoord, class: TerrainClass) -> Result<(), MapError> {
        let pixel = self
            .pixels
            .get_mut([coord.x, coord.y])
            .ok_or(MapError::OutsideMap(coord))?;

        *pixel = class.rgb();

        Ok(())
    }

    /// Check that every cell in the map has a terrain class, returning the first one that doesn't
    /// as an error.
    pub fn validate_palette(&self) -> Result<(), MapError> {
        for ((x, y), rgb) in self.pixels.indexed_iter() {
            if TerrainClass::from_rgb(*rgb).is_none() {
                return Err(MapError::UnclassifiedTerrain(GridCoord::new(x, y), *rgb));
            }
        }

        Ok(())
    }
}

// ------------------------------------------------------------------------------------------------
// TESTS
// ------------------------------------------------------------------------------------------------
