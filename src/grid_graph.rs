use crate::error::{Endpoint, Result, SearchError};
use crate::{Cost, DEFAULT_GRID_SIZE, FREE_COST, N_SMALLVEC_SIZE, OBSTACLE_COST};
use core::fmt;
use fxhash::FxHashSet;
use grid_util::point::Point;
use itertools::Itertools;
use log::debug;
use smallvec::SmallVec;

/// King-move offsets in the order neighbours are enumerated. Tie-breaking during search follows
/// this order, so it is part of the observable behaviour.
pub const KING_MOVES: [(i32, i32); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (-1, 1),
    (1, -1),
    (-1, -1),
];

/// Widest span, in cells, accepted on either axis. Every estimate queued during a search is at
/// most `(span + 1) * (OBSTACLE_COST + 1)`, which has to fit in [Cost].
pub const MAX_SPAN: u32 = Cost::MAX / (OBSTACLE_COST + 1) - 1;

/// Closed rectangle of valid cells, `min_x..=max_x` by `min_y..=max_y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridBounds {
    min_x: i32,
    min_y: i32,
    max_x: i32,
    max_y: i32,
}

impl Default for GridBounds {
    fn default() -> GridBounds {
        GridBounds {
            min_x: 0,
            min_y: 0,
            max_x: DEFAULT_GRID_SIZE as i32 - 1,
            max_y: DEFAULT_GRID_SIZE as i32 - 1,
        }
    }
}

impl GridBounds {
    /// Bounds spanning `min` to `max` inclusive on both axes. Fails if either axis is inverted
    /// or spans more than [MAX_SPAN] cells.
    pub fn new(min: Point, max: Point) -> Result<GridBounds> {
        if min.x > max.x
            || min.y > max.y
            || max.x.abs_diff(min.x) > MAX_SPAN
            || max.y.abs_diff(min.y) > MAX_SPAN
        {
            return Err(SearchError::InvalidBounds { min, max });
        }
        Ok(GridBounds {
            min_x: min.x,
            min_y: min.y,
            max_x: max.x,
            max_y: max.y,
        })
    }
    /// A `width` by `height` board with its lower corner at the origin.
    pub fn with_size(width: usize, height: usize) -> Result<GridBounds> {
        let side = |n: usize| i32::try_from(n).map(|n| n - 1).unwrap_or(-1);
        let max = Point::new(side(width), side(height));
        GridBounds::new(Point::new(0, 0), max)
    }
    pub fn min(&self) -> Point {
        Point::new(self.min_x, self.min_y)
    }
    pub fn max(&self) -> Point {
        Point::new(self.max_x, self.max_y)
    }
    pub fn width(&self) -> usize {
        self.max_x.abs_diff(self.min_x) as usize + 1
    }
    pub fn height(&self) -> usize {
        self.max_y.abs_diff(self.min_y) as usize + 1
    }
    pub fn contains(&self, p: &Point) -> bool {
        (self.min_x..=self.max_x).contains(&p.x) && (self.min_y..=self.max_y).contains(&p.y)
    }
}

impl fmt::Display for GridBounds {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "[{}, {}] x [{}, {}]",
            self.min_x, self.max_x, self.min_y, self.max_y
        )
    }
}

/// [GridGraph] holds the bounds of the board and the set of barrier cells. Barriers are not
/// impassable: entering one costs [OBSTACLE_COST] instead of [FREE_COST], so every in-bounds
/// cell stays reachable and a route only crosses a barrier when no detour is cheaper.
#[derive(Clone, Debug, Default)]
pub struct GridGraph {
    bounds: GridBounds,
    obstacles: FxHashSet<Point>,
}

impl GridGraph {
    pub fn new<I>(bounds: GridBounds, obstacles: I) -> GridGraph
    where
        I: IntoIterator<Item = Point>,
    {
        let obstacles: FxHashSet<Point> = obstacles.into_iter().collect();
        let outside = obstacles.iter().filter(|p| !bounds.contains(p)).count();
        if outside > 0 {
            debug!(
                "{} of {} barrier cells lie outside {} and will never be entered",
                outside,
                obstacles.len(),
                bounds
            );
        }
        GridGraph { bounds, obstacles }
    }

    /// A board without any barriers.
    pub fn empty(bounds: GridBounds) -> GridGraph {
        GridGraph {
            bounds,
            obstacles: FxHashSet::default(),
        }
    }

    /// Builds a graph from several barrier outlines, e.g. one per rasterized polygon.
    pub fn from_barriers<B, I>(bounds: GridBounds, barriers: B) -> GridGraph
    where
        B: IntoIterator<Item = I>,
        I: IntoIterator<Item = Point>,
    {
        GridGraph::new(bounds, barriers.into_iter().flatten())
    }

    pub fn bounds(&self) -> &GridBounds {
        &self.bounds
    }
    pub fn obstacles(&self) -> &FxHashSet<Point> {
        &self.obstacles
    }
    pub fn in_bounds(&self, pos: &Point) -> bool {
        self.bounds.contains(pos)
    }
    pub fn is_obstacle(&self, pos: &Point) -> bool {
        self.obstacles.contains(pos)
    }

    /// Fails with [SearchError::OutOfBounds] naming `role` if `pos` is not on the board.
    pub fn check_in_bounds(&self, role: Endpoint, pos: Point) -> Result<()> {
        if self.in_bounds(&pos) {
            Ok(())
        } else {
            Err(SearchError::OutOfBounds {
                role,
                point: pos,
                bounds: self.bounds,
            })
        }
    }

    /// The in-bounds king-move neighbours of `pos`, in [KING_MOVES] order.
    pub fn neighbors(&self, pos: &Point) -> SmallVec<[Point; N_SMALLVEC_SIZE]> {
        KING_MOVES
            .iter()
            .filter_map(|&(dx, dy)| {
                let x = pos.x.checked_add(dx)?;
                let y = pos.y.checked_add(dy)?;
                Some(Point::new(x, y))
            })
            .filter(|p| self.in_bounds(p))
            .collect()
    }

    /// Cost of stepping into `to`. Only the destination matters; `from` is unused.
    pub fn move_cost(&self, _from: &Point, to: &Point) -> Cost {
        if self.is_obstacle(to) {
            OBSTACLE_COST
        } else {
            FREE_COST
        }
    }

    /// Chebyshev distance. This is the diagonal distance
    /// `D * (dx + dy) + (D2 - 2 * D) * min(dx, dy)` with `D = D2 = 1`, which stays admissible
    /// and consistent when a diagonal step costs the same as a straight one.
    pub fn heuristic(&self, a: &Point, b: &Point) -> Cost {
        let dx = a.x.abs_diff(b.x);
        let dy = a.y.abs_diff(b.y);
        dx.max(dy)
    }

    /// Neighbours of `pos` paired with the cost of moving into them.
    pub fn successors(&self, pos: &Point) -> SmallVec<[(Point, Cost); N_SMALLVEC_SIZE]> {
        self.neighbors(pos)
            .into_iter()
            .map(|p| (p, self.move_cost(pos, &p)))
            .collect()
    }

    /// True if every cell is on the board and each step is a single king move.
    pub fn is_valid_path(&self, path: &[Point]) -> bool {
        path.iter().all(|p| self.in_bounds(p))
            && path.iter().tuple_windows().all(|(a, b)| {
                let (dx, dy) = (a.x.abs_diff(b.x), a.y.abs_diff(b.y));
                dx <= 1 && dy <= 1 && (dx, dy) != (0, 0)
            })
    }

    /// Sum of the step costs along `path`, saturating at [Cost::MAX]. Zero for paths of fewer
    /// than two cells.
    pub fn path_cost(&self, path: &[Point]) -> Cost {
        path.iter()
            .tuple_windows()
            .fold(0, |total: Cost, (a, b)| total.saturating_add(self.move_cost(a, b)))
    }
}

impl fmt::Display for GridGraph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in (self.bounds.min_y..=self.bounds.max_y).rev() {
            let row: String = (self.bounds.min_x..=self.bounds.max_x)
                .map(|x| {
                    if self.is_obstacle(&Point::new(x, y)) {
                        '#'
                    } else {
                        '.'
                    }
                })
                .collect();
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
