use std::time::Instant;

use log::debug;

use super::solution::Solution;
use crate::collections::{FxHashMap, FxIndexMap, FxIndexSet};
use crate::errors::{GridError, SearchError};
use crate::geometry::{Action, Position};
use crate::grid::Grid;


/// Search bookkeeping for one grid position
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub state: Position,
    pub parent: Option<Position>, // None for the start node
    pub action: Option<Action>, // Move that first reached this node
    pub cost: u32, // Accumulated cost from the start
}

impl Node {
    pub fn new(state: Position) -> Self {
        Self { state, parent: None, action: None, cost: 0 }
    }
}


/// Mutable state of a single search run over a borrowed [`Grid`]
///
/// Nodes live in an arena keyed by position; parents are stored as positions
/// rather than references, so the tree can be walked without borrowing
/// tricks. Every algorithm begins by resetting the context, so a context can
/// be reused across runs.
#[derive(Debug)]
pub struct SearchContext<'g> {
    grid: &'g Grid,
    nodes: FxIndexMap<Position, Node>,
    cost_so_far: FxHashMap<Position, u32>,
    explored: FxIndexSet<Position>,
    started: Instant,
}

impl<'g> SearchContext<'g> {

    pub fn new(grid: &'g Grid) -> Self {
        Self {
            grid,
            nodes: FxIndexMap::default(),
            cost_so_far: FxHashMap::default(),
            explored: FxIndexSet::default(),
            started: Instant::now(),
        }
    }

    pub fn grid(&self) -> &'g Grid {
        self.grid
    }

    /// Forget every node, cost and explored state
    pub fn reset(&mut self) {
        self.nodes.clear();
        self.cost_so_far.clear();
        self.explored.clear();
        self.started = Instant::now();
    }

    /// Reset, then record the start node at cost 0
    pub(crate) fn begin(&mut self) -> Result<Position, SearchError> {
        self.reset();
        let start = self.grid.start();
        self.get_node(start)?;
        self.cost_so_far.insert(start, 0);
        Ok(start)
    }

    /// The node for `pos`, created with no parent, no action and cost 0 on
    /// first access. Later calls return the same node.
    pub fn get_node(&mut self, pos: Position) -> Result<&mut Node, GridError> {
        if !self.grid.contains(pos) {
            return Err(GridError::OutOfBounds(pos));
        }
        Ok(self.nodes.entry(pos).or_insert_with(|| Node::new(pos)))
    }

    /// Node for `pos` if one was created during this run
    pub fn node(&self, pos: Position) -> Option<&Node> {
        self.nodes.get(&pos)
    }

    /// Best known cost from the start to `pos`
    pub fn cost_so_far(&self, pos: Position) -> Option<u32> {
        self.cost_so_far.get(&pos).copied()
    }

    /// States popped from the frontier so far, in pop order
    pub fn explored(&self) -> &FxIndexSet<Position> {
        &self.explored
    }

    pub fn is_explored(&self, pos: Position) -> bool {
        self.explored.contains(&pos)
    }

    pub(crate) fn mark_explored(&mut self, pos: Position) {
        self.explored.insert(pos);
    }

    /// Try to reach `next` through `current`
    /// When the route via `current` is cheaper than anything recorded (or
    /// `next` is new), the cost and parent of `next` are overwritten and the
    /// new cost is returned. The action is only set on first discovery and is
    /// left alone by later improvements.
    pub(crate) fn relax(&mut self, current: Position, action: Action, next: Position) -> Result<Option<u32>, SearchError> {
        let base = self.cost_so_far(current).ok_or(SearchError::Undiscovered(current))?;
        let new_cost = base
            .checked_add(self.grid.get_cost(next)?)
            .ok_or(SearchError::CostOverflow(next))?;

        if self.cost_so_far(next).is_some_and(|known| known <= new_cost) {
            return Ok(None);
        }
        self.cost_so_far.insert(next, new_cost);

        let node = self.get_node(next)?;
        node.parent = Some(current);
        node.cost = new_cost;
        if node.action.is_none() {
            node.action = Some(action);
        }
        Ok(Some(new_cost))
    }

    /// Walk parent links back from `goal` and return the path start -> goal
    pub fn path_to(&self, goal: Position) -> Result<Vec<Position>, SearchError> {
        let mut path = Vec::new();
        let mut current = Some(goal);

        // Trace back from goal to start
        while let Some(pos) = current {
            // A chain longer than the arena means a cycle
            if path.len() > self.nodes.len() {
                return Err(SearchError::BrokenParentChain(goal));
            }
            let node = self.nodes.get(&pos).ok_or(SearchError::BrokenParentChain(goal))?;
            path.push(pos);
            current = node.parent;
        }

        if path.last() != Some(&self.grid.start()) {
            return Err(SearchError::BrokenParentChain(goal));
        }

        // The path is in reverse order, so reverse it
        path.reverse();
        Ok(path)
    }

    /// Package the run into a Solution; `goal` is None when the frontier ran dry
    pub(crate) fn finish(&self, goal: Option<Position>) -> Result<Solution, SearchError> {
        let elapsed_ms = self.started.elapsed().as_secs_f64() * 1000.0;
        let solution = match goal {
            Some(goal) => {
                let cost = self.cost_so_far(goal).ok_or(SearchError::Undiscovered(goal))?;
                Solution::found(self.path_to(goal)?, cost, self.explored.clone(), elapsed_ms)
            }
            None => Solution::not_found(self.explored.clone(), elapsed_ms),
        };

        debug!(
            "search finished: found={} steps={} explored={} in {:.3} ms",
            solution.is_found(), solution.steps(), solution.explored_count(), elapsed_ms
        );
        Ok(solution)
    }
}
