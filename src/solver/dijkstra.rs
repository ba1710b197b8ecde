use grid_util::point::Point;

use crate::{grid_graph::GridGraph, solver::GridSolver, Cost};

/// Uniform-cost search: A* with a zero heuristic. Finds the same costs as [AstarSolver]
/// while expanding more cells, which makes it a reference for checking A* results.
///
/// [AstarSolver]: crate::solver::astar::AstarSolver
#[derive(Clone, Debug, Default)]
pub struct DijkstraSolver {
    pub max_expansions: Option<usize>,
}

impl GridSolver for DijkstraSolver {
    fn heuristic(&self, _: &GridGraph, _: &Point, _: &Point) -> Cost {
        0
    }

    fn max_expansions(&self) -> Option<usize> {
        self.max_expansions
    }
}
