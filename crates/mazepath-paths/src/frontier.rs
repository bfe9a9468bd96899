//! Min-priority frontier for best-first search.
//!
//! Entries are stored in a min-heap keyed by `(priority, insertion_order)`.
//! Lower priorities are popped first; ties are broken by insertion order
//! (FIFO), which keeps a search deterministic. The same coordinate may be
//! queued several times; callers detect stale entries themselves.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use mazepath_core::Coord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry {
    priority: i32,
    /// Monotonically increasing counter used to break ties.
    seq: u64,
    coord: Coord,
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Wrapped in Reverse for the BinaryHeap, so this is the "natural"
        // order: smaller priority first, then earlier insertion.
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// A min-priority queue of coordinates.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<Reverse<Entry>>,
    next_seq: u64,
}

impl Frontier {
    /// Create an empty frontier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `coord` at `priority`. Existing entries for the same
    /// coordinate are left in place.
    pub fn push(&mut self, coord: Coord, priority: i32) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(Entry {
            priority,
            seq,
            coord,
        }));
    }

    /// Remove and return the entry with the lowest priority, together with
    /// that priority.
    pub fn pop(&mut self) -> Option<(Coord, i32)> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.coord, entry.priority))
    }

    /// Number of queued entries, stale ones included.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the frontier is empty.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
