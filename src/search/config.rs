use std::fmt;
use std::str::FromStr;

use crate::errors::UnknownAlgorithm;


/// Search strategy
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Algorithm {
    /// FIFO frontier; fewest moves
    BreadthFirst,
    /// LIFO frontier; finds some path, usually not the shortest
    DepthFirst,
    /// Ordered by Manhattan distance to the goal alone; not optimal
    Greedy,
    /// Ordered by cost so far plus Manhattan distance; optimal
    #[default]
    AStar,
    /// Ordered by cost so far; optimal
    Dijkstra,
}

impl Algorithm {

    pub const ALL: [Algorithm; 5] = [
        Algorithm::BreadthFirst,
        Algorithm::DepthFirst,
        Algorithm::Greedy,
        Algorithm::AStar,
        Algorithm::Dijkstra,
    ];

    /// Whether the first path found is guaranteed to be a cheapest one
    pub fn is_optimal(self) -> bool {
        matches!(self, Algorithm::BreadthFirst | Algorithm::AStar | Algorithm::Dijkstra)
    }

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::BreadthFirst => "bfs",
            Algorithm::DepthFirst => "dfs",
            Algorithm::Greedy => "greedy",
            Algorithm::AStar => "astar",
            Algorithm::Dijkstra => "dijkstra",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" | "breadth_first" | "breadth-first" => Ok(Algorithm::BreadthFirst),
            "dfs" | "depth_first" | "depth-first" => Ok(Algorithm::DepthFirst),
            "greedy" | "gbfs" => Ok(Algorithm::Greedy),
            "astar" | "a*" | "a_star" => Ok(Algorithm::AStar),
            "dijkstra" | "ucs" => Ok(Algorithm::Dijkstra),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}


/// Settings for [`PathFinder`](super::PathFinder)
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    pub algorithm: Algorithm,

    /// Report the interior of a found path to the visitor
    pub report_path: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            report_path: true,
        }
    }
}

impl SearchConfig {
    pub fn with_algorithm(algorithm: Algorithm) -> Self {
        Self { algorithm, ..Self::default() }
    }
}
