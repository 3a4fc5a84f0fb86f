use num_traits::Float;
use std::collections::BTreeMap;
use std::fmt::Debug;

use crate::data_structures::priority_queue::BoundedPriorityQueue;

/// Delta-stepping bucket queue.
///
/// A vertex with distance `d` lives in bucket `floor(d / delta)`. Buckets are keyed
/// sparsely, so only occupied buckets take memory however far apart their indices are.
/// Every vertex is queued at most once: `decrease_key` moves it to its new bucket, so
/// this queue never returns stale entries. `extract_min` picks the smallest entry of the
/// lowest occupied bucket, which keeps the extraction order non-decreasing.
#[derive(Debug)]
pub struct BucketQueue<W>
where
    W: Float + Debug,
{
    /// Width of one bucket
    delta: W,

    /// Occupied buckets by index
    buckets: BTreeMap<usize, Vec<(usize, W)>>,

    /// vertex -> (bucket, position inside the bucket) while queued
    slots: Vec<Option<(usize, usize)>>,

    /// Number of queued vertices
    len: usize,
}

impl<W> BucketQueue<W>
where
    W: Float + Debug,
{
    /// Creates an empty queue with bucket width `delta` for vertices `0..vertex_count`.
    ///
    /// # Panics
    ///
    /// Panics if `delta` is not a positive finite number.
    pub fn new(delta: W, vertex_count: usize) -> Self {
        assert!(
            delta > W::zero() && delta.is_finite(),
            "bucket width must be positive and finite"
        );

        BucketQueue {
            delta,
            buckets: BTreeMap::new(),
            slots: vec![None; vertex_count],
            len: 0,
        }
    }

    /// Returns the bucket width
    pub fn delta(&self) -> W {
        self.delta
    }

    /// Returns the queued distance of a vertex, if it is queued
    pub fn get(&self, vertex: usize) -> Option<W> {
        let (bucket, pos) = (*self.slots.get(vertex)?)?;
        Some(self.buckets.get(&bucket)?[pos].1)
    }

    /// Bucket of a finite distance. Quotients past `usize::MAX` share the last bucket,
    /// where the in-bucket minimum still orders them.
    fn bucket_index(&self, distance: W) -> Option<usize> {
        if !distance.is_finite() {
            return None;
        }
        Some((distance / self.delta).floor().to_usize().unwrap_or(usize::MAX))
    }

    fn remove(&mut self, vertex: usize) {
        let Some((bucket, pos)) = self.slots.get_mut(vertex).and_then(Option::take) else {
            return;
        };
        let Some(entries) = self.buckets.get_mut(&bucket) else {
            return;
        };

        entries.swap_remove(pos);
        if let Some(&(moved, _)) = entries.get(pos) {
            self.slots[moved] = Some((bucket, pos));
        }
        if entries.is_empty() {
            self.buckets.remove(&bucket);
        }
        self.len -= 1;
    }
}

impl<W> BoundedPriorityQueue<W> for BucketQueue<W>
where
    W: Float + Debug,
{
    fn insert(&mut self, vertex: usize, distance: W) {
        // Infinite or NaN distances have no bucket and are never worth queueing.
        let Some(idx) = self.bucket_index(distance) else {
            return;
        };

        self.remove(vertex);

        if vertex >= self.slots.len() {
            self.slots.resize(vertex + 1, None);
        }

        let entries = self.buckets.entry(idx).or_default();
        entries.push((vertex, distance));
        self.slots[vertex] = Some((idx, entries.len() - 1));
        self.len += 1;
    }

    fn decrease_key(&mut self, vertex: usize, distance: W) {
        if let Some(current) = self.get(vertex) {
            if distance >= current {
                return;
            }
        }
        self.insert(vertex, distance);
    }

    fn extract_min(&mut self) -> Option<(usize, W)> {
        let (_, entries) = self.buckets.iter().next()?;
        let &(vertex, distance) = entries
            .iter()
            .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))?;

        self.remove(vertex);
        Some((vertex, distance))
    }

    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        for entries in self.buckets.values() {
            for &(vertex, _) in entries {
                self.slots[vertex] = None;
            }
        }
        self.buckets.clear();
        self.len = 0;
    }
}
