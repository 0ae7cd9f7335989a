//! # Cost Map
//!
//! The cost of stepping from a cell into an adjacent one is the friction of the destination's
//! terrain plus the absolute change in elevation between the two:
//!
//! ```text
//! cost(dest, pred) = friction(class(dest)) + |elev(dest) - elev(pred)|
//! ```
//!
//! Climbing and descending cost the same.

// ------------------------------------------------------------------------------------------------
// INCLUDES
// ------------------------------------------------------------------------------------------------

use super::{ElevationMap, MapError, TerrainMap};
use crate::nav::{GridCoord, GridDims};

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Cost Map, a read-only view over co-registered terrain and elevation maps.
#[derive(Clone, Copy, Debug)]
pub struct CostMap<'a> {
    terrain: &'a TerrainMap,
    elevation: &'a ElevationMap,
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl<'a> CostMap<'a> {
    /// Create a cost map over the given terrain and elevation, which must be of the same shape.
    pub fn new(terrain: &'a TerrainMap, elevation: &'a ElevationMap) -> Result<Self, MapError> {
        if terrain.dims() != elevation.dims() {
            return Err(MapError::ShapeMismatch(
                "ElevationMap".into(),
                terrain.dims(),
                elevation.dims(),
            ));
        }

        Ok(Self { terrain, elevation })
    }

    /// Dimensions of the map in cells
    pub fn dims(&self) -> GridDims {
        self.terrain.dims()
    }

    /// The friction of the terrain in the given cell.
    pub fn friction_at(&self, coord: GridCoord) -> Result<f64, MapError> {
        Ok(self.terrain.classify(coord)?.friction())
    }

    /// Weight of the step into `dest` from the adjacent cell `pred`.
    ///
    /// Fails if either cell is outside the map or if `dest` has no terrain class.
    pub fn edge_cost(&self, dest: GridCoord, pred: GridCoord) -> Result<f64, MapError> {
        let friction = self.friction_at(dest)?;

        let gradient = (self.elevation.get(dest)? - self.elevation.get(pred)?).abs();

        Ok(friction + gradient)
    }
}

// ------------------------------------------------------------------------------------------------
// TESTS
// ------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use crate::map::TerrainClass;

    fn sloped_maps() -> (TerrainMap, ElevationMap) {
        let dims = GridDims::new(4, 4);

        let mut terrain = TerrainMap::filled(dims, TerrainClass::OpenLand);
        terrain
            .set_class(GridCoord::new(1, 0), TerrainClass::PavedRoad)
            .unwrap();
        terrain
            .set_class(GridCoord::new(0, 1), TerrainClass::WalkForest)
            .unwrap();

        // Rises 3 meters per cell in x, 1 per cell in y
        let elevation = ElevationMap::from_fn(dims, |c| 3.0 * c.x as f64 + c.y as f64);

        (terrain, elevation)
    }

    #[test]
    fn test_edge_cost() {
        let (terrain, elevation) = sloped_maps();
        let cost_map = CostMap::new(&terrain, &elevation).unwrap();

        let origin = GridCoord::new(0, 0);

        // Road, climbing 3
        assert_eq!(cost_map.edge_cost(GridCoord::new(1, 0), origin).unwrap(), 3.5);

        // Walk forest, climbing 1
        assert_eq!(cost_map.edge_cost(GridCoord::new(0, 1), origin).unwrap(), 3.5);

        // Open land, descending 3
        assert_eq!(
            cost_map
                .edge_cost(origin, GridCoord::new(1, 0))
                .unwrap(),
            4.0
        );
    }

    #[test]
    fn test_edge_cost_properties() {
        let (terrain, elevation) = sloped_maps();
        let cost_map = CostMap::new(&terrain, &elevation).unwrap();
        let dims = cost_map.dims();

        for x in 0..dims.width {
            for y in 0..dims.height {
                let a = GridCoord::new(x, y);
                for b in dims.neighbours(a) {
                    let ab = cost_map.edge_cost(b, a).unwrap();
                    assert!(ab >= 0.0);

                    // Only the destination's terrain and the size of the gradient matter
                    let gradient = (elevation.get(b).unwrap() - elevation.get(a).unwrap()).abs();
                    assert_eq!(ab, terrain.classify(b).unwrap().friction() + gradient);

                    let ba = cost_map.edge_cost(a, b).unwrap();
                    assert_eq!(
                        ab - terrain.classify(b).unwrap().friction(),
                        ba - terrain.classify(a).unwrap().friction()
                    );
                }
            }
        }
    }

    #[test]
    fn test_edge_cost_errors() {
        let (terrain, elevation) = sloped_maps();
        let cost_map = CostMap::new(&terrain, &elevation).unwrap();

        assert!(matches!(
            cost_map.edge_cost(GridCoord::new(4, 0), GridCoord::new(3, 0)),
            Err(MapError::OutsideMap(_))
        ));
        assert!(matches!(
            cost_map.edge_cost(GridCoord::new(3, 3), GridCoord::new(3, 4)),
            Err(MapError::OutsideMap(_))
        ));

        let mut pixels = ndarray::Array2::from_elem((2, 1), TerrainClass::OpenLand.rgb());
        pixels[[1, 0]] = [1, 1, 1];
        let terrain = TerrainMap::from_pixels(pixels);
        let elevation = ElevationMap::flat(GridDims::new(2, 1));
        let cost_map = CostMap::new(&terrain, &elevation).unwrap();

        assert!(matches!(
            cost_map.edge_cost(GridCoord::new(1, 0), GridCoord::new(0, 0)),
            Err(MapError::UnclassifiedTerrain(..))
        ));
        // Only the destination is classified
        assert_eq!(
            cost_map
                .edge_cost(GridCoord::new(0, 0), GridCoord::new(1, 0))
                .unwrap(),
            1.0
        );
    }

    #[test]
    fn test_shape_mismatch() {
        let terrain = TerrainMap::filled(GridDims::new(3, 3), TerrainClass::OpenLand);
        let elevation = ElevationMap::flat(GridDims::new(3, 4));

        assert!(matches!(
            CostMap::new(&terrain, &elevation),
            Err(MapError::ShapeMismatch(..))
        ));
    }
}
