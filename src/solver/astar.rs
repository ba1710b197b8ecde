use grid_util::point::Point;

use crate::{grid_graph::GridGraph, solver::GridSolver, Cost};

/// A* using the Chebyshev distance from [GridGraph::heuristic].
#[derive(Clone, Debug, Default)]
pub struct AstarSolver {
    pub max_expansions: Option<usize>,
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            max_expansions: None,
        }
    }
}

impl GridSolver for AstarSolver {
    fn heuristic(&self, graph: &GridGraph, p1: &Point, p2: &Point) -> Cost {
        graph.heuristic(p1, p2)
    }

    fn max_expansions(&self) -> Option<usize> {
        self.max_expansions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Endpoint, SearchError};
    use crate::grid_graph::GridBounds;
    use crate::{FREE_COST, OBSTACLE_COST};

    /// Asserts that the case in which start and goal are equal is handled correctly.
    #[test]
    fn equal_start_goal() {
        let graph = GridGraph::default();
        let solver = AstarSolver::new();
        let start = Point::new(3, 4);
        let route = solver.search(&graph, start, start).unwrap();
        assert_eq!(route.path, vec![start]);
        assert_eq!(route.cost, 0);
        assert_eq!(route.steps(), 0);
    }

    /// On an empty board the cost is the Chebyshev distance.
    #[test]
    fn empty_board_costs_chebyshev() {
        let graph = GridGraph::default();
        let solver = AstarSolver::new();
        let start = Point::new(0, 0);
        let goal = Point::new(4, 7);
        let route = solver.search(&graph, start, goal).unwrap();
        assert_eq!(route.cost, 7);
        assert_eq!(route.path.len(), 8);
        assert_eq!(route.start(), Some(&start));
        assert_eq!(route.goal(), Some(&goal));
        assert!(graph.is_valid_path(&route.path));
    }

    /// |S#G| on the bottom row: the route steps over the barrier diagonally.
    #[test]
    fn steps_around_single_barrier() {
        let graph = GridGraph::new(GridBounds::default(), [Point::new(1, 0)]);
        let solver = AstarSolver::new();
        let route = solver
            .search(&graph, Point::new(0, 0), Point::new(2, 0))
            .unwrap();
        assert_eq!(
            route.path,
            vec![Point::new(0, 0), Point::new(1, 1), Point::new(2, 0)]
        );
        assert_eq!(route.cost, 2 * FREE_COST);
    }

    /// A one-row board leaves no detour, so the barrier is crossed.
    #[test]
    fn crosses_barrier_without_detour() {
        let bounds = GridBounds::with_size(3, 1).unwrap();
        let graph = GridGraph::new(bounds, [Point::new(1, 0)]);
        let route = AstarSolver::new()
            .search(&graph, Point::new(0, 0), Point::new(2, 0))
            .unwrap();
        assert_eq!(route.path.len(), 3);
        assert_eq!(route.cost, OBSTACLE_COST + FREE_COST);
    }

    #[test]
    fn rejects_out_of_bounds() {
        let graph = GridGraph::default();
        let solver = AstarSolver::new();
        let err = solver
            .search(&graph, Point::new(0, 0), Point::new(8, 2))
            .unwrap_err();
        assert!(matches!(err, SearchError::OutOfBounds { role: Endpoint::Goal, .. }));
        assert!(err.is_invalid_argument());
        let err = solver
            .search(&graph, Point::new(-1, 0), Point::new(2, 2))
            .unwrap_err();
        assert!(matches!(err, SearchError::OutOfBounds { role: Endpoint::Start, .. }));
    }

    #[test]
    fn expansion_cap_reports_no_path() {
        let graph = GridGraph::default();
        let solver = AstarSolver {
            max_expansions: Some(2),
        };
        let start = Point::new(0, 0);
        let goal = Point::new(7, 7);
        assert_eq!(
            solver.search(&graph, start, goal),
            Err(SearchError::NoPathFound { start, goal })
        );
    }

    #[test]
    fn multiple_goals_picks_cheapest() {
        let graph = GridGraph::default();
        let solver = AstarSolver::new();
        let near = Point::new(3, 3);
        let far = Point::new(7, 7);
        let (selected, route) = solver
            .search_multiple_goals(&graph, Point::new(0, 0), &[far, near])
            .unwrap();
        assert_eq!(selected, near);
        assert_eq!(route.cost, 3);
        assert_eq!(route.goal(), Some(&near));
    }

    #[test]
    fn multiple_goals_validates_arguments() {
        let graph = GridGraph::default();
        let solver = AstarSolver::new();
        assert_eq!(
            solver.search_multiple_goals(&graph, Point::new(0, 0), &[]),
            Err(SearchError::NoGoals)
        );
        let goals = [Point::new(1, 1), Point::new(9, 9)];
        let err = solver
            .search_multiple_goals(&graph, Point::new(0, 0), &goals)
            .unwrap_err();
        assert!(matches!(err, SearchError::OutOfBounds { role: Endpoint::Goal, .. }));
    }
}
