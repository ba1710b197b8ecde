use crate::astar_core::astar;
use crate::error::{Endpoint, Result, SearchError};
use crate::grid_graph::GridGraph;
use crate::Cost;
use grid_util::point::Point;
use log::{debug, info};

pub mod astar;
pub mod dijkstra;

/// A path from start to goal, both inclusive, and the summed cost of entering each cell after
/// the start.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    pub path: Vec<Point>,
    pub cost: Cost,
}

impl Route {
    pub fn start(&self) -> Option<&Point> {
        self.path.first()
    }
    pub fn goal(&self) -> Option<&Point> {
        self.path.last()
    }
    /// Number of moves, one less than the number of cells.
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

pub trait GridSolver {
    /// Lower bound on the cost from `p1` to `p2`. Must be consistent with
    /// [GridGraph::move_cost], since expanded cells are never reopened.
    fn heuristic(&self, graph: &GridGraph, p1: &Point, p2: &Point) -> Cost;

    /// Upper bound on node expansions per search; [None] searches until the frontier is empty.
    fn max_expansions(&self) -> Option<usize> {
        None
    }

    /// Computes the cheapest route from `start` to `goal`. Both must lie within the bounds of
    /// `graph`, otherwise [SearchError::OutOfBounds] is returned before any search is done.
    fn search(&self, graph: &GridGraph, start: Point, goal: Point) -> Result<Route> {
        graph.check_in_bounds(Endpoint::Start, start)?;
        graph.check_in_bounds(Endpoint::Goal, goal)?;
        debug!("Computing path from {:?} to {:?}", start, goal);
        let (path, cost) = astar(
            &start,
            |node| graph.successors(node),
            |point| self.heuristic(graph, point, &goal),
            |point| *point == goal,
            self.max_expansions(),
        )
        .ok_or(SearchError::NoPathFound { start, goal })?;
        info!(
            "Found path from {:?} to {:?} with {} cells and cost {}",
            start,
            goal,
            path.len(),
            cost
        );
        Ok(Route { path, cost })
    }

    /// Computes the cheapest route from `start` to whichever of `goals` is cheapest to reach and
    /// returns the selected goal with the route. The heuristic is the smallest estimate over
    /// all goals.
    fn search_multiple_goals(
        &self,
        graph: &GridGraph,
        start: Point,
        goals: &[Point],
    ) -> Result<(Point, Route)> {
        let first_goal = *goals.first().ok_or(SearchError::NoGoals)?;
        graph.check_in_bounds(Endpoint::Start, start)?;
        for goal in goals {
            graph.check_in_bounds(Endpoint::Goal, *goal)?;
        }
        debug!("Computing path from {:?} to any of {:?}", start, goals);
        let (path, cost) = astar(
            &start,
            |node| graph.successors(node),
            |point| {
                goals
                    .iter()
                    .map(|goal| self.heuristic(graph, point, goal))
                    .min()
                    .unwrap_or(0)
            },
            |point| goals.contains(point),
            self.max_expansions(),
        )
        .ok_or(SearchError::NoPathFound {
            start,
            goal: first_goal,
        })?;
        let selected = path.last().copied().unwrap_or(start);
        info!(
            "Selected goal {:?} out of {}, path cost {}",
            selected,
            goals.len(),
            cost
        );
        Ok((selected, Route { path, cost }))
    }
}
