//! # Metric
//!
//! Grid cells aren't square, so distances are measured with each axis scaled by its own cell size
//! in meters. The same metric drives both the A* heuristic and the reported route distance.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use super::GridCoord;

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Size of a grid cell along each axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellScale {
    /// Meters per cell along x
    pub x_m: f64,

    /// Meters per cell along y
    pub y_m: f64,
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl CellScale {
    pub fn new(x_m: f64, y_m: f64) -> Self {
        Self { x_m, y_m }
    }

    /// Scaled euclidean distance between two cells, in meters.
    pub fn distance(&self, a: GridCoord, b: GridCoord) -> f64 {
        let delta = Vector2::new(
            (a.x as f64 - b.x as f64) * self.x_m,
            (a.y as f64 - b.y as f64) * self.y_m,
        );

        delta.norm()
    }

    /// Total length of a sequence of cells, summing the distance between each consecutive pair.
    pub fn path_length<'a, I>(&self, points: I) -> f64
    where
        I: IntoIterator<Item = &'a GridCoord>,
    {
        let mut total = 0.0;
        let mut previous: Option<GridCoord> = None;

        for &point in points {
            if let Some(prev) = previous {
                total += self.distance(prev, point);
            }
            previous = Some(point);
        }

        total
    }
}

impl Default for CellScale {
    fn default() -> Self {
        Self::new(10.29, 7.55)
    }
}

// ------------------------------------------------------------------------------------------------
// TESTS
// ------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_distance() {
        let scale = CellScale::default();
        let a = GridCoord::new(3, 7);

        assert_eq!(scale.distance(a, a), 0.0);
        assert!((scale.distance(GridCoord::new(0, 0), GridCoord::new(1, 0)) - 10.29).abs() < 1e-9);
        assert!((scale.distance(GridCoord::new(0, 0), GridCoord::new(0, 1)) - 7.55).abs() < 1e-9);

        let expected = ((2.0 * 10.29f64).powi(2) + (5.0 * 7.55f64).powi(2)).sqrt();
        assert!((scale.distance(GridCoord::new(1, 2), GridCoord::new(3, 7)) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_distance_symmetric() {
        let scale = CellScale::default();

        for &(a, b) in [
            ((0, 0), (4, 4)),
            ((10, 2), (3, 9)),
            ((394, 499), (0, 0)),
        ]
        .iter()
        {
            let (a, b) = (GridCoord::from(a), GridCoord::from(b));
            assert_eq!(scale.distance(a, b), scale.distance(b, a));
            assert!(scale.distance(a, b) >= 0.0);
        }
    }

    #[test]
    fn test_path_length() {
        let scale = CellScale::default();

        let points: Vec<GridCoord> = (0..5).map(|y| GridCoord::new(0, y)).collect();
        assert!((scale.path_length(&points) - 30.2).abs() < 1e-9);

        assert_eq!(scale.path_length(Vec::<GridCoord>::new().iter()), 0.0);
        assert_eq!(scale.path_length(&[GridCoord::new(1, 1)]), 0.0);
    }
}
