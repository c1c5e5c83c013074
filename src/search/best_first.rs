use log::{debug, trace};

use super::context::SearchContext;
use super::solution::Solution;
use super::visitor::{Visitor, VisitKind};
use crate::errors::SearchError;
use crate::frontier::{Frontier, PriorityFrontier};
use crate::geometry::Position;


/// How a frontier entry is ranked
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Ranking {
    Heuristic, // h(n)
    CostPlusHeuristic, // g(n) + h(n)
    Cost, // g(n)
}

impl Ranking {
    /// None when g(n) + h(n) does not fit in u32
    fn priority(self, cost: u32, heuristic: u32) -> Option<u32> {
        match self {
            Ranking::Heuristic => Some(heuristic),
            Ranking::CostPlusHeuristic => cost.checked_add(heuristic),
            Ranking::Cost => Some(cost),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Ranking::Heuristic => "greedy",
            Ranking::CostPlusHeuristic => "astar",
            Ranking::Cost => "dijkstra",
        }
    }
}


/// Greedy best-first search
/// Always expands the state closest to the goal by Manhattan distance and
/// ignores the cost paid so far. Fast, but the path it returns is not
/// guaranteed to be the cheapest.
pub fn greedy_best_first<V>(ctx: &mut SearchContext<'_>, visitor: &mut V) -> Result<Solution, SearchError>
where
    V: Visitor + ?Sized,
{
    best_first(ctx, visitor, Ranking::Heuristic)
}

/// A* search
/// https://en.wikipedia.org/wiki/A*_search_algorithm
/// Manhattan distance never overestimates on a 4-connected grid, so the first
/// time the goal is popped its path is a cheapest one.
pub fn a_star<V>(ctx: &mut SearchContext<'_>, visitor: &mut V) -> Result<Solution, SearchError>
where
    V: Visitor + ?Sized,
{
    best_first(ctx, visitor, Ranking::CostPlusHeuristic)
}

/// Dijkstra / uniform-cost search
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
pub fn dijkstra<V>(ctx: &mut SearchContext<'_>, visitor: &mut V) -> Result<Solution, SearchError>
where
    V: Visitor + ?Sized,
{
    best_first(ctx, visitor, Ranking::Cost)
}


/// Shared loop for the priority-ordered searches
/// Frontier entries carry the cost they were queued with. A state can be
/// queued again when a cheaper route to it shows up; the older, dearer entry
/// is dropped when popped.
fn best_first<V>(ctx: &mut SearchContext<'_>, visitor: &mut V, ranking: Ranking) -> Result<Solution, SearchError>
where
    V: Visitor + ?Sized,
{
    let grid = ctx.grid();
    let start = ctx.begin()?;
    let goal = grid.goal();
    let heuristic = |pos: Position| pos.manhattan(&goal);
    debug!("{}: {} -> {}", ranking.name(), start, goal);

    let mut frontier: PriorityFrontier<(Position, u32), u32> = PriorityFrontier::new();
    let priority = ranking.priority(0, heuristic(start)).ok_or(SearchError::CostOverflow(start))?;
    frontier.add((start, 0), priority);

    while !frontier.is_empty() {
        let (state, cost) = frontier.pop()?;

        // A cheaper route was found after this entry was queued
        if ctx.cost_so_far(state).is_some_and(|best| cost > best) {
            trace!("{}: drop stale {} at cost {}", ranking.name(), state, cost);
            continue;
        }

        ctx.mark_explored(state);

        if state == goal {
            return ctx.finish(Some(state));
        }

        visitor.visit(state, VisitKind::Explored);

        for (action, next) in grid.get_neighbours(state)? {
            if let Some(new_cost) = ctx.relax(state, action, next)? {
                let priority = ranking
                    .priority(new_cost, heuristic(next))
                    .ok_or(SearchError::CostOverflow(next))?;
                trace!("{}: queue {} via {} at priority {}", ranking.name(), next, action, priority);
                frontier.add((next, new_cost), priority);
            }
        }
    }

    ctx.finish(None)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Action;
    use crate::grid::Grid;
    use crate::search::{NoopVisitor, RecordingVisitor};

    // The middle corridor points at the goal but is a dead end; the only
    // routes go round the top or the bottom, 9 moves either way.
    const DETOUR: &str = "\
        ......\n\
        .####.\n\
        A...#B\n\
        .####.\n\
        ......";

    type SearchFn = fn(&mut SearchContext<'_>, &mut NoopVisitor) -> Result<Solution, SearchError>;

    fn run(search: SearchFn, maze: &str) -> Solution {
        let grid: Grid = maze.parse().unwrap();
        let mut ctx = SearchContext::new(&grid);
        search(&mut ctx, &mut NoopVisitor).unwrap()
    }

    #[test]
    fn test_a_star_open_grid() {
        let solution = run(a_star, "A  \n   \n  B");
        assert!(solution.is_found());
        assert_eq!(solution.steps(), 4);
    }

    #[test]
    fn test_a_star_detour_is_optimal() {
        let astar = run(a_star, DETOUR);
        let dijkstra = run(dijkstra, DETOUR);

        assert_eq!(astar.steps(), 9);
        assert_eq!(dijkstra.steps(), 9);
        // the heuristic should keep A* from exploring more than Dijkstra
        assert!(astar.explored_count() <= dijkstra.explored_count());
    }

    #[test]
    fn test_greedy_detour_finds_a_path() {
        let greedy = run(greedy_best_first, DETOUR);

        assert!(greedy.is_found());
        assert_eq!(greedy.path().first(), Some(&Position::new(2, 0)));
        assert_eq!(greedy.path().last(), Some(&Position::new(2, 5)));
        assert!(greedy.steps() >= 9);
        // greedy is drawn into the dead end first
        assert!(greedy.explored().contains(&Position::new(2, 3)));
    }

    #[test]
    fn test_unreachable_goal() {
        let searches: [SearchFn; 3] = [a_star, greedy_best_first, dijkstra];
        for search in searches {
            let solution = run(search, "A.#..\n..#.B");
            assert!(!solution.is_found());
            assert!(solution.path().is_empty());
            assert_eq!(solution.explored_count(), 4);
        }
    }

    #[test]
    fn test_goal_not_reported_to_visitor() {
        let grid: Grid = "A.B".parse().unwrap();
        let mut ctx = SearchContext::new(&grid);
        let mut visitor = RecordingVisitor::new();
        a_star(&mut ctx, &mut visitor).unwrap();

        assert_eq!(visitor.positions(VisitKind::Explored), vec![Position::new(0, 0), Position::new(0, 1)]);
        assert_eq!(ctx.node(Position::new(0, 2)).and_then(|n| n.action), Some(Action::Right));
    }

    #[test]
    fn test_ranking_priorities() {
        assert_eq!(Ranking::Heuristic.priority(7, 3), Some(3));
        assert_eq!(Ranking::CostPlusHeuristic.priority(7, 3), Some(10));
        assert_eq!(Ranking::Cost.priority(7, 3), Some(7));
        assert_eq!(Ranking::CostPlusHeuristic.priority(u32::MAX, 1), None);
    }

    #[test]
    fn test_huge_cell_cost_overflows_cleanly() {
        // one step costs u32::MAX, a second one cannot be added to it
        let grid: Grid = "A..B".parse().unwrap();
        let grid = grid.with_cell_cost(u32::MAX).unwrap();
        let searches: [SearchFn; 3] = [a_star, greedy_best_first, dijkstra];
        for search in searches {
            let mut ctx = SearchContext::new(&grid);
            let result = search(&mut ctx, &mut NoopVisitor);
            assert!(matches!(result, Err(SearchError::CostOverflow(_))), "{result:?}");
        }

        // g(n) fits but g(n) + h(n) does not
        let grid = grid.with_cell_cost(u32::MAX - 1).unwrap();
        let mut ctx = SearchContext::new(&grid);
        assert_eq!(
            a_star(&mut ctx, &mut NoopVisitor),
            Err(SearchError::CostOverflow(Position::new(0, 1)))
        );
    }
}
