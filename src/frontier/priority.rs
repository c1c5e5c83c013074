use std::{
    collections::BinaryHeap,
    cmp::Ordering,
};

use super::Frontier;
use crate::errors::SearchError;


/// Heap entry
/// Ordered so the max-heap yields the lowest priority first, and among equal
/// priorities the lowest sequence number (earliest insertion).
#[derive(Debug)]
struct Entry<N, P> {
    priority: P,
    seq: u64,
    item: N,
}

impl<N, P: Ord> Ord for Entry<N, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.priority.cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}
impl<N, P: Ord> PartialOrd for Entry<N, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<N, P: Ord> PartialEq for Entry<N, P> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}
impl<N, P: Ord> Eq for Entry<N, P> {}


/// Min-priority frontier with stable tie-breaking
/// The same item may be queued more than once; deduplication is left to the
/// search that owns the frontier.
#[derive(Debug)]
pub struct PriorityFrontier<N, P> {
    heap: BinaryHeap<Entry<N, P>>,
    next_seq: u64,
}

impl<N, P: Ord> PriorityFrontier<N, P> {

    pub fn new() -> Self {
        Self { heap: BinaryHeap::new(), next_seq: 0 }
    }

    /// Queue `item`; lower priorities are explored sooner
    pub fn add(&mut self, item: N, priority: P) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { priority, seq, item });
    }
}

impl<N, P: Ord> Default for PriorityFrontier<N, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, P: Ord> Frontier for PriorityFrontier<N, P> {
    type Item = N;

    fn pop(&mut self) -> Result<N, SearchError> {
        self.heap
            .pop()
            .map(|entry| entry.item)
            .ok_or(SearchError::EmptyFrontier)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}
