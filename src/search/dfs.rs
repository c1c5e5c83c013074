use log::{debug, trace};

use super::context::SearchContext;
use super::solution::Solution;
use super::visitor::{Visitor, VisitKind};
use crate::errors::SearchError;
use crate::frontier::{Frontier, StackFrontier};


/// Depth-first search
/// Same bookkeeping as breadth-first but with a LIFO frontier. Always finds a
/// path when one exists, rarely the shortest.
pub fn depth_first<V>(ctx: &mut SearchContext<'_>, visitor: &mut V) -> Result<Solution, SearchError>
where
    V: Visitor + ?Sized,
{
    let grid = ctx.grid();
    let start = ctx.begin()?;
    let goal = grid.goal();
    debug!("dfs: {} -> {}", start, goal);

    let mut frontier = StackFrontier::new();
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
                trace!("dfs: push {} via {} from {}", next, action, state);
                frontier.add(next);
            }
        }
    }

    ctx.finish(None)
}
