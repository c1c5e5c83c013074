use crate::collections::FxIndexSet;
use crate::geometry::Position;
use super::visitor::{Visitor, VisitKind};


/// Outcome of one search run
/// An unreachable goal is a normal outcome: `found` is false and `path` is
/// empty, but `explored` and the timing are still filled in.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Solution {
    path: Vec<Position>,
    cost: u32,
    explored: FxIndexSet<Position>,
    elapsed_ms: f64,
    found: bool,
}

impl Solution {

    pub(crate) fn found(path: Vec<Position>, cost: u32, explored: FxIndexSet<Position>, elapsed_ms: f64) -> Self {
        Self { path, cost, explored, elapsed_ms, found: true }
    }

    pub(crate) fn not_found(explored: FxIndexSet<Position>, elapsed_ms: f64) -> Self {
        Self { path: Vec::new(), cost: 0, explored, elapsed_ms, found: false }
    }

    /// Start to goal inclusive; empty when no path exists
    pub fn path(&self) -> &[Position] {
        &self.path
    }

    /// Every state popped from the frontier, in pop order
    pub fn explored(&self) -> &FxIndexSet<Position> {
        &self.explored
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    pub fn is_found(&self) -> bool {
        self.found
    }

    /// Number of moves along the path
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    pub fn explored_count(&self) -> usize {
        self.explored.len()
    }

    /// Total cost of entering every path cell after the start; 0 when not found
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Report the cells between start and goal to `visitor` as path cells
    pub fn replay_path<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        if self.path.len() <= 2 {
            return;
        }
        for &pos in &self.path[1..self.path.len() - 1] {
            visitor.visit(pos, VisitKind::Path);
        }
    }
}
