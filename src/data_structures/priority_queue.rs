use num_traits::Float;
use ordered_float::OrderedFloat;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Priority structure used by the bounded Dijkstra runs.
///
/// Entries are `(vertex, distance-at-insertion)` pairs. Implementations may hand back
/// stale entries (a vertex whose live distance has since dropped); callers compare the
/// returned distance against their distance map and skip those.
pub trait BoundedPriorityQueue<W> {
    /// Adds a vertex with the given distance
    fn insert(&mut self, vertex: usize, distance: W);

    /// Moves a vertex to a smaller distance, inserting it if it is not queued
    fn decrease_key(&mut self, vertex: usize, distance: W);

    /// Removes the entry with the smallest distance, `None` once the queue is empty
    fn extract_min(&mut self) -> Option<(usize, W)>;

    /// Returns the number of entries in the queue, stale ones included
    fn len(&self) -> usize;

    /// Returns true if the queue holds no entries
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every entry, keeping allocations for the next run
    fn clear(&mut self);
}

/// A min-ordered binary heap with lazy deletion.
///
/// `decrease_key` pushes a fresh entry instead of moving the old one; the superseded
/// entry stays in the heap until it is popped and recognised as stale.
#[derive(Debug)]
pub struct BinaryHeapQueue<W>
where
    W: Float + Debug,
{
    /// The underlying binary heap
    heap: BinaryHeap<Reverse<(OrderedFloat<W>, usize)>>,
}

impl<W> BinaryHeapQueue<W>
where
    W: Float + Debug,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        BinaryHeapQueue {
            heap: BinaryHeap::new(),
        }
    }

    /// Creates an empty priority queue with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        BinaryHeapQueue {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    /// Returns the smallest entry without removing it
    pub fn peek(&self) -> Option<(usize, W)> {
        self.heap
            .peek()
            .map(|Reverse((distance, vertex))| (*vertex, distance.into_inner()))
    }
}

impl<W> Default for BinaryHeapQueue<W>
where
    W: Float + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> BoundedPriorityQueue<W> for BinaryHeapQueue<W>
where
    W: Float + Debug,
{
    fn insert(&mut self, vertex: usize, distance: W) {
        self.heap.push(Reverse((OrderedFloat(distance), vertex)));
    }

    fn decrease_key(&mut self, vertex: usize, distance: W) {
        self.insert(vertex, distance);
    }

    fn extract_min(&mut self) -> Option<(usize, W)> {
        self.heap
            .pop()
            .map(|Reverse((distance, vertex))| (vertex, distance.into_inner()))
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn clear(&mut self) {
        self.heap.clear();
    }
}
