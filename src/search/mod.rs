//! Search algorithms and the per-run state they share.
//!
//! Every algorithm follows the same loop over a [`SearchContext`]:
//! pop a state, stop if it is the goal, otherwise report it to the
//! [`Visitor`] and relax its neighbours into the frontier. Only the frontier
//! (and the priority fed to it) changes between strategies.

mod best_first;
mod bfs;
mod config;
mod context;
mod dfs;
mod solution;
mod visitor;

pub use best_first::{a_star, dijkstra, greedy_best_first};
pub use bfs::breadth_first;
pub use config::{Algorithm, SearchConfig};
pub use context::{Node, SearchContext};
pub use dfs::depth_first;
pub use solution::Solution;
pub use visitor::{NoopVisitor, RecordingVisitor, VisitKind, Visitor};

use log::info;

use crate::errors::SearchError;
use crate::grid::Grid;


/// Runs the configured search over a grid
#[derive(Clone, Debug, Default)]
pub struct PathFinder {
    config: SearchConfig,
}

impl PathFinder {

    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Search `grid` from its start to its goal
    /// Each call gets its own [`SearchContext`], so runs never see each
    /// other's nodes. A missing path is reported through
    /// [`Solution::is_found`], not as an error.
    pub fn find_path<V>(&self, grid: &Grid, visitor: &mut V) -> Result<Solution, SearchError>
    where
        V: Visitor + ?Sized,
    {
        let mut ctx = SearchContext::new(grid);
        let solution = self.run(&mut ctx, visitor)?;

        if solution.is_found() && self.config.report_path {
            solution.replay_path(visitor);
        }

        info!(
            "{} {}: {} moves, {} states explored, {:.3} ms",
            self.config.algorithm,
            if solution.is_found() { "found a path" } else { "found no path" },
            solution.steps(),
            solution.explored_count(),
            solution.elapsed_ms(),
        );
        Ok(solution)
    }

    /// Run the configured algorithm on an existing context
    pub fn run<V>(&self, ctx: &mut SearchContext<'_>, visitor: &mut V) -> Result<Solution, SearchError>
    where
        V: Visitor + ?Sized,
    {
        match self.config.algorithm {
            Algorithm::BreadthFirst => breadth_first(ctx, visitor),
            Algorithm::DepthFirst => depth_first(ctx, visitor),
            Algorithm::Greedy => greedy_best_first(ctx, visitor),
            Algorithm::AStar => a_star(ctx, visitor),
            Algorithm::Dijkstra => dijkstra(ctx, visitor),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Position;

    const MAZE: &str = "\
        A.#...\n\
        .##.#.\n\
        ......\n\
        #.##.B";

    #[test]
    fn test_every_algorithm_reaches_goal() {
        let grid: Grid = MAZE.parse().unwrap();
        for algorithm in Algorithm::ALL {
            let finder = PathFinder::new(SearchConfig::with_algorithm(algorithm));
            let solution = finder.find_path(&grid, &mut NoopVisitor).unwrap();

            assert!(solution.is_found(), "{algorithm}");
            assert_eq!(solution.path().first(), Some(&grid.start()));
            assert_eq!(solution.path().last(), Some(&grid.goal()));
            if algorithm.is_optimal() {
                assert_eq!(solution.steps(), 8, "{algorithm}");
            }
        }
    }

    #[test]
    fn test_path_cells_reported_after_exploration() {
        let grid: Grid = "A..B".parse().unwrap();
        let finder = PathFinder::new(SearchConfig::with_algorithm(Algorithm::BreadthFirst));
        let mut visitor = RecordingVisitor::new();
        finder.find_path(&grid, &mut visitor).unwrap();

        assert_eq!(visitor.events, vec![
            (Position::new(0, 0), VisitKind::Explored),
            (Position::new(0, 1), VisitKind::Explored),
            (Position::new(0, 2), VisitKind::Explored),
            (Position::new(0, 1), VisitKind::Path),
            (Position::new(0, 2), VisitKind::Path),
        ]);
    }

    #[test]
    fn test_report_path_disabled() {
        let grid: Grid = "A..B".parse().unwrap();
        let config = SearchConfig { algorithm: Algorithm::AStar, report_path: false };
        let mut visitor = RecordingVisitor::new();
        PathFinder::new(config).find_path(&grid, &mut visitor).unwrap();

        assert!(visitor.positions(VisitKind::Path).is_empty());
        assert_eq!(visitor.positions(VisitKind::Explored).len(), 3);
    }

    #[test]
    fn test_closure_visitor() {
        let grid: Grid = "A.\n.B".parse().unwrap();
        let mut seen = Vec::new();
        let mut record = |pos: Position, _kind: VisitKind| seen.push(pos);
        PathFinder::default().find_path(&grid, &mut record).unwrap();

        assert_eq!(seen.first(), Some(&Position::new(0, 0)));
    }

    #[test]
    fn test_reused_context_matches_fresh_one() {
        let grid: Grid = MAZE.parse().unwrap();
        let greedy = PathFinder::new(SearchConfig::with_algorithm(Algorithm::Greedy));
        let bfs = PathFinder::new(SearchConfig::with_algorithm(Algorithm::BreadthFirst));

        let mut shared = SearchContext::new(&grid);
        greedy.run(&mut shared, &mut NoopVisitor).unwrap();
        let reused = bfs.run(&mut shared, &mut NoopVisitor).unwrap();

        let mut fresh = SearchContext::new(&grid);
        let expected = bfs.run(&mut fresh, &mut NoopVisitor).unwrap();

        assert_eq!(reused.path(), expected.path());
        assert_eq!(reused.explored(), expected.explored());
    }

    #[test]
    fn test_large_cell_cost_reported_not_panicking() {
        let grid: Grid = "A..B".parse().unwrap();
        let grid = grid.with_cell_cost(u32::MAX).unwrap();
        for algorithm in Algorithm::ALL {
            let finder = PathFinder::new(SearchConfig::with_algorithm(algorithm));
            let result = finder.find_path(&grid, &mut NoopVisitor);
            assert!(matches!(result, Err(SearchError::CostOverflow(_))), "{algorithm}: {result:?}");
        }

        // largest per-step cost that still fits over three moves
        let grid = grid.with_cell_cost(u32::MAX / 3).unwrap();
        let solution = PathFinder::new(SearchConfig::with_algorithm(Algorithm::Dijkstra))
            .find_path(&grid, &mut NoopVisitor)
            .unwrap();
        assert_eq!(solution.cost(), u32::MAX / 3 * 3);
    }

    #[test]
    fn test_solution_cost_uses_cell_cost() {
        let grid: Grid = "A..B".parse().unwrap();
        let grid = grid.with_cell_cost(5).unwrap();
        let solution = PathFinder::default().find_path(&grid, &mut NoopVisitor).unwrap();

        assert_eq!(solution.steps(), 3);
        assert_eq!(solution.cost(), 15);
    }
}
