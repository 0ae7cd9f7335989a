//! Plans minimum cost paths through a [`CostMap`], using an A* algorithm.
//!
//! The search runs over the implicit 4-connected grid of the cost map. Frontier entries are never
//! removed when a cheaper route to their cell is found, instead the cheaper entry is pushed as
//! well and pops first. Any entry popped after that is stale and is skipped.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use std::collections::{BinaryHeap, HashMap};

use log::{debug, trace, warn};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::map::CostMap;

use super::{CellScale, GridCoord, NavError};

// -----------------------------------------------------------------------------------------------
// STRUCTS
// -----------------------------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct PathPlanner {
    params: PathPlannerParams,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathPlannerParams {
    /// Size of a grid cell, used by the heuristic.
    pub cell_scale: CellScale,

    /// Weight applied to the scaled distance when calculating the heuristic.
    ///
    /// At 1.0 the heuristic can overestimate the remaining cost, since the cheapest step costs
    /// less than a cell is wide. Lower it to `min_friction / max(cell_scale)` for a strictly
    /// admissible search.
    pub heuristic_weight: f64,

    /// Cells whose terrain friction is at or above this are never entered. If `None` every cell
    /// is passable, high friction terrain just being very expensive.
    pub impassable_friction: Option<f64>,
}

/// A path through the grid, from start to goal inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridPath {
    pub points: Vec<GridCoord>,
}

/// The result of a single search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub outcome: SearchOutcome,

    /// Number of cells expanded by the search
    pub num_expanded: usize,
}

/// An entry in the search frontier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FrontierEntry {
    priority: OrderedFloat<f64>,
    coord: GridCoord,
}

// -----------------------------------------------------------------------------------------------
// ENUMS
// -----------------------------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SearchOutcome {
    /// The goal was reached along `path`, with a total cost of `cost`.
    Found { path: GridPath, cost: f64 },

    /// The frontier was exhausted without reaching the goal.
    Unreachable,
}

// -----------------------------------------------------------------------------------------------
// IMPLS
// -----------------------------------------------------------------------------------------------

impl PathPlanner {
    pub fn new(params: PathPlannerParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &PathPlannerParams {
        &self.params
    }

    /// Estimate of the remaining cost between two cells.
    pub fn heuristic(&self, from: GridCoord, to: GridCoord) -> f64 {
        self.params.heuristic_weight * self.params.cell_scale.distance(from, to)
    }

    /// Plans a minimum cost path from `start` to `goal`.
    ///
    /// A goal outside the map can never be reached, so it gives an
    /// [`SearchOutcome::Unreachable`] straight away. A start outside the map is an error, as is
    /// any cell on the way whose cost can't be evaluated.
    pub fn plan(
        &self,
        cost_map: &CostMap,
        start: GridCoord,
        goal: GridCoord,
    ) -> Result<SearchResult, NavError> {
        let dims = cost_map.dims();

        if !dims.contains(start) {
            return Err(NavError::PointOutsideMap(
                "PathPlanner::plan::start".into(),
                start,
            ));
        }
        if !dims.contains(goal) {
            warn!("Goal {} is outside the {} map, it can't be reached", goal, dims);
            return Ok(SearchResult {
                outcome: SearchOutcome::Unreachable,
                num_expanded: 0,
            });
        }

        trace!("Planning path from {} to {}", start, goal);

        // Create the priority queue (binary heap) for the frontier
        let mut frontier = BinaryHeap::new();

        // Search state, any cell not in g_score has an infinite cost from the start
        let mut came_from: HashMap<GridCoord, GridCoord> = HashMap::new();
        let mut g_score: HashMap<GridCoord, f64> = HashMap::new();
        let mut f_score: HashMap<GridCoord, f64> = HashMap::new();

        let mut num_expanded = 0;

        g_score.insert(start, 0.0);
        f_score.insert(start, self.heuristic(start, goal));
        frontier.push(FrontierEntry::new(0.0, start));

        // Main loop
        while let Some(FrontierEntry { priority, coord: current }) = frontier.pop() {
            if current == goal {
                let path = reconstruct_path(&came_from, goal);
                let cost = f_score[&goal];

                debug!(
                    "Path from {} to {} found: {} points, cost {:.3}, {} cells expanded",
                    start,
                    goal,
                    path.points.len(),
                    cost,
                    num_expanded
                );

                return Ok(SearchResult {
                    outcome: SearchOutcome::Found { path, cost },
                    num_expanded,
                });
            }

            // A cheaper entry for this cell has already been expanded
            if priority.into_inner() > f_score[&current] {
                continue;
            }

            num_expanded += 1;
            let current_g = g_score[&current];

            for neighbour in dims.neighbours(current) {
                if let Some(limit) = self.params.impassable_friction {
                    if cost_map.friction_at(neighbour)? >= limit {
                        continue;
                    }
                }

                let tentative_g = current_g + cost_map.edge_cost(neighbour, current)?;

                let improved = match g_score.get(&neighbour) {
                    Some(&g) => tentative_g < g,
                    None => true,
                };

                if improved {
                    let f = tentative_g + self.heuristic(neighbour, goal);

                    came_from.insert(neighbour, current);
                    g_score.insert(neighbour, tentative_g);
                    f_score.insert(neighbour, f);

                    frontier.push(FrontierEntry::new(f, neighbour));
                }
            }
        }

        debug!(
            "No path from {} to {}, frontier exhausted after {} cells expanded",
            start, goal, num_expanded
        );

        Ok(SearchResult {
            outcome: SearchOutcome::Unreachable,
            num_expanded,
        })
    }
}

impl Default for PathPlannerParams {
    fn default() -> Self {
        Self {
            cell_scale: CellScale::default(),
            heuristic_weight: 1.0,
            impassable_friction: None,
        }
    }
}

impl GridPath {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn first(&self) -> Option<GridCoord> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<GridCoord> {
        self.points.last().copied()
    }
}

impl SearchOutcome {
    /// The cost reported by the search, infinite if the goal wasn't reached.
    pub fn cost(&self) -> f64 {
        match self {
            SearchOutcome::Found { cost, .. } => *cost,
            SearchOutcome::Unreachable => f64::INFINITY,
        }
    }

    pub fn path(&self) -> Option<&GridPath> {
        match self {
            SearchOutcome::Found { path, .. } => Some(path),
            SearchOutcome::Unreachable => None,
        }
    }
}

impl FrontierEntry {
    fn new(priority: f64, coord: GridCoord) -> Self {
        Self {
            priority: OrderedFloat(priority),
            coord,
        }
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Note that we flip the order here so that the heap will be a min-heap, not a max-heap
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.coord.cmp(&self.coord))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// -----------------------------------------------------------------------------------------------
// PRIVATE FUNCTIONS
// -----------------------------------------------------------------------------------------------

/// Work backwards from the goal through the predecessor links, then reverse to get a path from
/// the start to the goal.
fn reconstruct_path(came_from: &HashMap<GridCoord, GridCoord>, goal: GridCoord) -> GridPath {
    let mut points = vec![goal];
    let mut current = goal;

    while let Some(&prev) = came_from.get(&current) {
        points.push(prev);
        current = prev;
    }

    points.reverse();

    GridPath { points }
}

// -----------------------------------------------------------------------------------------------
// TESTS
// -----------------------------------------------------------------------------------------------
