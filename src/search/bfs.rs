use log::{debug, trace};

use super::context::SearchContext;
use super::solution::Solution;
use super::visitor::{Visitor, VisitKind};
use crate::errors::SearchError;
use crate::frontier::{Frontier, QueueFrontier};


/// Breadth-first search
/// https://en.wikipedia.org/wiki/Breadth-first_search
/// A state is queued at most once: states already explored or already
/// waiting in the frontier are skipped. With a uniform cell cost the first
/// path to reach the goal has the fewest moves.
pub fn breadth_first<V>(ctx: &mut SearchContext<'_>, visitor: &mut V) -> Result<Solution, SearchError>
where
    V: Visitor + ?Sized,
{
    let grid = ctx.grid();
    let start = ctx.begin()?;
    let goal = grid.goal();
    debug!("bfs: {} -> {}", start, goal);

    let mut frontier = QueueFrontier::new();
    frontier.add(start);

    while !frontier.is_empty() {
        let state = frontier.pop()?;
        ctx.mark_explored(state);

        if state == goal {
            return ctx.finish(Some(state));
        }

        visitor.visit(state, VisitKind::Explored);

        for (action, next) in grid.get_neighbours(state)? {
            if ctx.is_explored(next) || frontier.contains_state(&next) {
                continue;
            }
            if ctx.relax(state, action, next)?.is_some() {
                trace!("bfs: queue {} via {} from {}", next, action, state);
                frontier.add(next);
            }
        }
    }

    ctx.finish(None)
}
