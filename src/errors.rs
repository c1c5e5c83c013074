use std::fmt;

use crate::geometry::Position;


#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    EmptyFrontier, // pop() on a frontier with nothing queued
    Grid(GridError),
    Undiscovered(Position), // expanding a state with no recorded cost
    CostOverflow(Position), // accumulated cost to this state does not fit in u32
    BrokenParentChain(Position), // parent walk did not reach the start node
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    OutOfBounds(Position), // Position is outside the grid
    Blocked(Position), // Start or goal sits on an obstacle
    MissingStart,
    MissingGoal,
    DuplicateStart(Position),
    DuplicateGoal(Position),
    Empty, // No rows, or every row is empty
    ZeroCost,
}


impl From<GridError> for SearchError {
    fn from(error: GridError) -> Self {
        SearchError::Grid(error)
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::EmptyFrontier => write!(f, "pop from an empty frontier"),
            SearchError::Grid(e) => write!(f, "grid error: {e}"),
            SearchError::Undiscovered(pos) => write!(f, "state {pos} was never discovered"),
            SearchError::CostOverflow(pos) => write!(f, "path cost to {pos} overflows u32"),
            SearchError::BrokenParentChain(pos) => {
                write!(f, "parent chain from {pos} does not reach the start node")
            }
        }
    }
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::OutOfBounds(pos) => write!(f, "position {pos} is out of bounds"),
            GridError::Blocked(pos) => write!(f, "position {pos} is an obstacle"),
            GridError::MissingStart => write!(f, "grid has no start cell"),
            GridError::MissingGoal => write!(f, "grid has no goal cell"),
            GridError::DuplicateStart(pos) => write!(f, "second start cell at {pos}"),
            GridError::DuplicateGoal(pos) => write!(f, "second goal cell at {pos}"),
            GridError::Empty => write!(f, "grid has no cells"),
            GridError::ZeroCost => write!(f, "cell cost must be positive"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SearchError::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl std::error::Error for GridError {}


/// Algorithm name that does not match any known search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithm(pub String);

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown search algorithm {:?}", self.0)
    }
}

impl std::error::Error for UnknownAlgorithm {}
