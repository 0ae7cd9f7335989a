//! # Terrain route planner library
//!
//! Plans least-cost walking routes across a terrain grid. Traversal cost comes from a terrain
//! classification image and a co-registered elevation field, see [`map`]. Routes are planned
//! with an A* search over the 4-connected grid, see [`nav`].

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

/// Terrain, elevation and cost maps
pub mod map;

/// Grid search and route planning
pub mod nav;

/// Parameters for the terrain route planner executable
pub mod params;

/// Draws planned routes onto the terrain image
pub mod render;

/// Loads waypoint lists
pub mod waypoints;
