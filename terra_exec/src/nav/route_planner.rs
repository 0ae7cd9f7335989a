//! Plans routes through an ordered list of waypoints.
//!
//! Each pair of consecutive waypoints is planned separately, in order, by the [`PathPlanner`]. A
//! segment whose goal can't be reached is left out of the route rather than failing it.
//!
//! Two totals are kept. `search_cost` sums the cost each search reported, and so becomes infinite
//! if any segment failed. `distance_m` is the one reported to the user: the scaled length of every
//! point of every planned segment walked in order, including the jump from the end of one segment
//! to the start of the next.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use log::{info, warn};
use serde::Serialize;

use crate::map::CostMap;

use super::{CellScale, GridCoord, GridPath, NavError, PathPlanner, SearchOutcome};

// -----------------------------------------------------------------------------------------------
// STRUCTS
// -----------------------------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct RoutePlanner {
    path_planner: PathPlanner,
}

/// A planned route
#[derive(Debug, Clone, Serialize)]
pub struct Route {
    /// Paths of the segments which reached their goal, in waypoint order.
    pub segments: Vec<GridPath>,

    /// Sum of the search costs of all segments.
    pub search_cost: f64,

    /// Length of the route in meters.
    pub distance_m: f64,

    /// One report per waypoint pair, including those which failed.
    pub reports: Vec<SegmentReport>,
}

/// Summary of the planning of one segment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentReport {
    pub start: GridCoord,
    pub goal: GridCoord,
    pub reached: bool,
    pub cost: f64,
    pub num_points: usize,
    pub num_expanded: usize,
}

// -----------------------------------------------------------------------------------------------
// IMPLS
// -----------------------------------------------------------------------------------------------

impl RoutePlanner {
    pub fn new(path_planner: PathPlanner) -> Self {
        Self { path_planner }
    }

    /// Plan a route visiting each of the waypoints in turn.
    pub fn plan(&self, cost_map: &CostMap, waypoints: &[GridCoord]) -> Result<Route, NavError> {
        if waypoints.len() < 2 {
            return Err(NavError::TooFewWaypoints(waypoints.len()));
        }

        let mut segments = Vec::with_capacity(waypoints.len() - 1);
        let mut reports = Vec::with_capacity(waypoints.len() - 1);
        let mut search_cost = 0.0;

        for (i, pair) in waypoints.windows(2).enumerate() {
            let (start, goal) = (pair[0], pair[1]);

            let result = self.path_planner.plan(cost_map, start, goal)?;
            let cost = result.outcome.cost();
            search_cost += cost;

            let mut report = SegmentReport {
                start,
                goal,
                reached: false,
                cost,
                num_points: 0,
                num_expanded: result.num_expanded,
            };

            match result.outcome {
                SearchOutcome::Found { path, .. } => {
                    info!(
                        "Segment {}: {} -> {}, {} points, cost {:.3}",
                        i,
                        start,
                        goal,
                        path.len(),
                        cost
                    );
                    report.reached = true;
                    report.num_points = path.len();
                    segments.push(path);
                }
                SearchOutcome::Unreachable => {
                    warn!(
                        "Segment {}: {} -> {} is unreachable, leaving it out of the route",
                        i, start, goal
                    );
                }
            }

            reports.push(report);
        }

        let distance_m = route_distance(&segments, &self.path_planner.params().cell_scale);

        info!(
            "Route planned: {} of {} segments, {:.3} m",
            segments.len(),
            reports.len(),
            distance_m
        );

        Ok(Route {
            segments,
            search_cost,
            distance_m,
            reports,
        })
    }
}

// -----------------------------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// -----------------------------------------------------------------------------------------------

/// Length of a route made of the given segments, walking all their points in order as one
/// continuous line.
pub fn route_distance(segments: &[GridPath], scale: &CellScale) -> f64 {
    scale.path_length(segments.iter().flat_map(|s| s.points.iter()))
}

// -----------------------------------------------------------------------------------------------
// TESTS
// -----------------------------------------------------------------------------------------------
