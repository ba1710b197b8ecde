use crate::grid_graph::GridBounds;
use core::fmt;
use grid_util::point::Point;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SearchError>;

/// Which end of a search a coordinate was supplied for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Endpoint::Start => write!(f, "start"),
            Endpoint::Goal => write!(f, "goal"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("No path found from {start:?} to {goal:?}")]
    NoPathFound { start: Point, goal: Point },
    #[error("The {role} {point:?} lies outside the grid bounds {bounds}")]
    OutOfBounds {
        role: Endpoint,
        point: Point,
        bounds: GridBounds,
    },
    #[error("Grid bounds from {min:?} to {max:?} are empty or too wide to search")]
    InvalidBounds { min: Point, max: Point },
    #[error("At least one goal is required")]
    NoGoals,
}

impl SearchError {
    /// True for the errors raised while validating arguments, before any search work is done.
    pub fn is_invalid_argument(&self) -> bool {
        !matches!(self, SearchError::NoPathFound { .. })
    }
}
