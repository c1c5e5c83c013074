//! Frontiers hold discovered states waiting to be expanded.
//!
//! The order a frontier hands states back is what distinguishes one search
//! strategy from another:
//!
//! | Frontier | Order | Used by |
//! |---|---|---|
//! | [`QueueFrontier`] | first in, first out | breadth-first |
//! | [`StackFrontier`] | last in, first out | depth-first |
//! | [`PriorityFrontier`] | lowest priority, then oldest | greedy, A*, Dijkstra |

mod priority;

pub use priority::PriorityFrontier;

use std::collections::VecDeque;
use std::hash::Hash;

use crate::collections::FxHashMap;
use crate::errors::SearchError;


/// Operations shared by every frontier
pub trait Frontier {
    type Item;

    /// Remove the next item to explore
    /// Popping an empty frontier is a caller bug and fails with `EmptyFrontier`.
    fn pop(&mut self) -> Result<Self::Item, SearchError>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}


/// Count of queued copies per state, backing `contains_state`
#[derive(Debug, Clone)]
struct Membership<N> {
    counts: FxHashMap<N, usize>,
}

impl<N: Eq + Hash + Clone> Membership<N> {

    fn new() -> Self {
        Self { counts: FxHashMap::default() }
    }

    fn insert(&mut self, state: &N) {
        *self.counts.entry(state.clone()).or_insert(0) += 1;
    }

    fn remove(&mut self, state: &N) {
        if let Some(count) = self.counts.get_mut(state) {
            *count -= 1;
            if *count == 0 {
                self.counts.remove(state);
            }
        }
    }

    fn contains(&self, state: &N) -> bool {
        self.counts.contains_key(state)
    }
}


/// FIFO frontier: insertion order is exploration order
#[derive(Debug, Clone)]
pub struct QueueFrontier<N> {
    queue: VecDeque<N>,
    members: Membership<N>,
}

impl<N: Eq + Hash + Clone> QueueFrontier<N> {

    pub fn new() -> Self {
        Self { queue: VecDeque::new(), members: Membership::new() }
    }

    /// Append to the back
    pub fn add(&mut self, state: N) {
        self.members.insert(&state);
        self.queue.push_back(state);
    }

    /// Whether `state` is currently queued
    pub fn contains_state(&self, state: &N) -> bool {
        self.members.contains(state)
    }
}

impl<N: Eq + Hash + Clone> Default for QueueFrontier<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Eq + Hash + Clone> Frontier for QueueFrontier<N> {
    type Item = N;

    fn pop(&mut self) -> Result<N, SearchError> {
        let state = self.queue.pop_front().ok_or(SearchError::EmptyFrontier)?;
        self.members.remove(&state);
        Ok(state)
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}


/// LIFO frontier: the most recently added state is explored first
#[derive(Debug, Clone)]
pub struct StackFrontier<N> {
    stack: Vec<N>,
    members: Membership<N>,
}

impl<N: Eq + Hash + Clone> StackFrontier<N> {

    pub fn new() -> Self {
        Self { stack: Vec::new(), members: Membership::new() }
    }

    pub fn add(&mut self, state: N) {
        self.members.insert(&state);
        self.stack.push(state);
    }

    pub fn contains_state(&self, state: &N) -> bool {
        self.members.contains(state)
    }
}

impl<N: Eq + Hash + Clone> Default for StackFrontier<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Eq + Hash + Clone> Frontier for StackFrontier<N> {
    type Item = N;

    fn pop(&mut self) -> Result<N, SearchError> {
        let state = self.stack.pop().ok_or(SearchError::EmptyFrontier)?;
        self.members.remove(&state);
        Ok(state)
    }

    fn len(&self) -> usize {
        self.stack.len()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_is_fifo() {
        let mut frontier = QueueFrontier::new();
        frontier.add('a');
        frontier.add('b');
        frontier.add('c');

        assert_eq!(frontier.pop(), Ok('a'));
        assert_eq!(frontier.pop(), Ok('b'));
        assert_eq!(frontier.pop(), Ok('c'));
        assert!(frontier.is_empty());
    }

    #[test]
    fn test_stack_is_lifo() {
        let mut frontier = StackFrontier::new();
        frontier.add(1);
        frontier.add(2);

        assert_eq!(frontier.pop(), Ok(2));
        assert_eq!(frontier.pop(), Ok(1));
    }

    #[test]
    fn test_pop_empty_fails() {
        let mut queue: QueueFrontier<u8> = QueueFrontier::default();
        let mut stack: StackFrontier<u8> = StackFrontier::default();

        assert_eq!(queue.pop(), Err(SearchError::EmptyFrontier));
        assert_eq!(stack.pop(), Err(SearchError::EmptyFrontier));
    }

    #[test]
    fn test_contains_state_tracks_duplicates() {
        let mut frontier = QueueFrontier::new();
        frontier.add("x");
        frontier.add("x");
        frontier.add("y");
        assert!(frontier.contains_state(&"x"));

        frontier.pop().unwrap();
        assert!(frontier.contains_state(&"x"));

        frontier.pop().unwrap();
        assert!(!frontier.contains_state(&"x"));
        assert!(frontier.contains_state(&"y"));
        assert_eq!(frontier.len(), 1);
    }
}
