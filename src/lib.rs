//! Shortest-path search over uniform-cost obstacle grids.
//!
//! A [`Grid`] describes the map. A search strategy walks it through a
//! frontier, keeping its bookkeeping in a [`SearchContext`], and returns a
//! [`Solution`] with the path, the explored cells and the time taken.
//!
//! ```
//! use gridpath::{Algorithm, Grid, NoopVisitor, PathFinder, SearchConfig};
//!
//! let grid: Grid = "A..\n.#.\n..B".parse().unwrap();
//! let finder = PathFinder::new(SearchConfig::with_algorithm(Algorithm::BreadthFirst));
//! let solution = finder.find_path(&grid, &mut NoopVisitor).unwrap();
//!
//! assert!(solution.is_found());
//! assert_eq!(solution.steps(), 4);
//! ```

pub mod collections;
pub mod errors;
pub mod frontier;
pub mod geometry;
pub mod grid;
pub mod search;

pub use errors::{GridError, SearchError, UnknownAlgorithm};
pub use frontier::{Frontier, PriorityFrontier, QueueFrontier, StackFrontier};
pub use geometry::{Action, Position, manhattan_distance};
pub use grid::{Cell, Grid};
pub use search::{
    Algorithm, NoopVisitor, Node, PathFinder, RecordingVisitor, SearchConfig, SearchContext,
    Solution, VisitKind, Visitor,
};
