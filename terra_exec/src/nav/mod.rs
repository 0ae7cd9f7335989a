//! # Navigation
//!
//! This module plans routes across the terrain grid.
//!
//! - [`PathPlanner`] - finds a minimum cost path between two cells with an A* search over the
//!   4-connected grid, weighting each step with the [`CostMap`](crate::map::CostMap).
//! - [`RoutePlanner`] - chains path plans across an ordered list of waypoints and measures the
//!   resulting route.

// ------------------------------------------------------------------------------------------------
// MODS
// ------------------------------------------------------------------------------------------------

/// Grid coordinates and topology
mod grid;

/// Anisotropic distance metric
mod metric;

/// A* path planner
mod path_planner;

/// Multi-waypoint route planner
mod route_planner;

// ------------------------------------------------------------------------------------------------
// EXPORTS
// ------------------------------------------------------------------------------------------------

pub use grid::{GridCoord, GridDims, DEPLOYED_HEIGHT, DEPLOYED_WIDTH};
pub use metric::CellScale;
pub use path_planner::{GridPath, PathPlanner, PathPlannerParams, SearchOutcome, SearchResult};
pub use route_planner::{route_distance, Route, RoutePlanner, SegmentReport};

use crate::map::MapError;

// ------------------------------------------------------------------------------------------------
// ENUMS
// ------------------------------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum NavError {
    #[error("{0} {1} is outside the map")]
    PointOutsideMap(String, GridCoord),

    #[error("A route needs at least 2 waypoints, found {0}")]
    TooFewWaypoints(usize),

    #[error("Couldn't evaluate the cost of a step: {0}")]
    Map(#[from] MapError),
}
