//! # barrier_pathfinding
//!
//! Lowest-cost routes on a bounded grid with 8-directional (king) movement, as used to steer an
//! autonomous boat or drone towards a detected object around mapped obstacles. Obstacle cells
//! are not walls: entering one costs [OBSTACLE_COST] rather than [FREE_COST], so routes bend
//! around barriers whenever a detour is cheaper and only cross them when nothing else connects.
//!
//! The search is [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) with the
//! [Chebyshev distance](https://en.wikipedia.org/wiki/Chebyshev_distance) as heuristic, which is
//! consistent for this movement model. Obstacle cells come from an external source, e.g. a
//! rasterized polygon outline; this crate only consumes the resulting coordinates.
//!
//! ```
//! use barrier_pathfinding::{search, GridBounds, GridGraph, Point};
//!
//! let graph = GridGraph::new(GridBounds::default(), [Point::new(1, 0)]);
//! let route = search(Point::new(0, 0), Point::new(2, 0), &graph).unwrap();
//! assert_eq!(route.path, vec![Point::new(0, 0), Point::new(1, 1), Point::new(2, 0)]);
//! assert_eq!(route.cost, 2);
//! ```
pub mod astar_core;
pub mod error;
pub mod grid_graph;
pub mod solver;
pub mod weighted_graph;

pub use error::{Endpoint, Result, SearchError};
pub use grid_graph::{GridBounds, GridGraph};
pub use grid_util::point::Point;
pub use solver::{astar::AstarSolver, dijkstra::DijkstraSolver, GridSolver, Route};
pub use weighted_graph::WeightedGraph;

/// Non-negative cost of entering a cell.
pub type Cost = u32;

/// Cost of entering a free cell.
pub const FREE_COST: Cost = 1;
/// Cost of entering a barrier cell.
pub const OBSTACLE_COST: Cost = 100;
/// Side length of the default square board.
pub const DEFAULT_GRID_SIZE: usize = 8;
pub(crate) const N_SMALLVEC_SIZE: usize = 8;

/// Computes the cheapest route from `start` to `goal` with a default [AstarSolver].
pub fn search(start: Point, goal: Point, graph: &GridGraph) -> Result<Route> {
    AstarSolver::new().search(graph, start, goal)
}
