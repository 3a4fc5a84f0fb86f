use num_traits::{Float, Zero};
use std::fmt::Debug;

use crate::algorithm::dijkstra::BoundedDijkstra;
use crate::algorithm::distance_map::DistanceMap;
use crate::algorithm::pivot::median_of_three_pivot;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::{BinaryHeapQueue, BoundedPriorityQueue, BucketQueue};
use crate::graph::Graph;
use crate::{Error, Result};

/// Which vertices the partition step classifies into the near and far halves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartitionScope {
    /// Only the frame's own region: its active set plus whatever the frame's
    /// tightening run settled or reached across the split
    ActiveSet,
    /// Every vertex of the graph with a finite distance
    WholeGraph,
}

/// Priority structure backing the bounded Dijkstra runs
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QueueKind {
    /// Binary heap with lazy deletion
    BinaryHeap,
    /// Delta-stepping buckets of the given width
    Buckets { delta: f64 },
}

/// Tuning knobs of the BMSSP engine
#[derive(Debug, Clone, PartialEq)]
pub struct BmsspConfig {
    /// Tolerance for "bound equals B" and for the near/far split point
    pub epsilon: f64,
    /// Frames whose bound is at or below this value are solved directly
    pub base_bound: f64,
    /// Candidate pool for the partition step
    pub partition: PartitionScope,
    /// Queue used by every bounded Dijkstra run
    pub queue: QueueKind,
}

impl Default for BmsspConfig {
    fn default() -> Self {
        Self {
            epsilon: 1e-9,
            base_bound: 1.0,
            partition: PartitionScope::ActiveSet,
            queue: QueueKind::BinaryHeap,
        }
    }
}

impl BmsspConfig {
    /// Set the comparison tolerance
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set the bound below which frames go straight to bounded Dijkstra
    pub fn with_base_bound(mut self, base_bound: f64) -> Self {
        self.base_bound = base_bound;
        self
    }

    /// Set the partition scope
    pub fn with_partition(mut self, partition: PartitionScope) -> Self {
        self.partition = partition;
        self
    }

    /// Set the queue realization
    pub fn with_queue(mut self, queue: QueueKind) -> Self {
        self.queue = queue;
        self
    }

    fn validate(&self) -> Result<()> {
        if !(self.epsilon >= 0.0 && self.epsilon.is_finite()) {
            return Err(Error::AlgorithmError(format!(
                "epsilon must be finite and non-negative, got {}",
                self.epsilon
            )));
        }
        if self.base_bound.is_nan() {
            return Err(Error::AlgorithmError("base bound must be a number".to_string()));
        }
        if let QueueKind::Buckets { delta } = self.queue {
            if !(delta > 0.0 && delta.is_finite()) {
                return Err(Error::AlgorithmError(format!(
                    "bucket width must be positive and finite, got {}",
                    delta
                )));
            }
        }
        Ok(())
    }
}

/// A pending subproblem: settle everything reachable from `active` up to `bound`
#[derive(Debug, Clone)]
pub struct Frame<W> {
    pub bound: W,
    pub active: Vec<usize>,
}

/// Counters describing how a run went through its frames
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BmsspStats {
    /// Frames popped from the stack, empty ones included
    pub frames_processed: usize,
    /// Frames solved directly because of their size or bound
    pub base_cases: usize,
    /// Frames solved directly because the pivot bound matched B
    pub unsplit_frames: usize,
    /// Frames split around a pivot
    pub splits: usize,
    /// Splits whose far half did not shrink and was solved directly instead
    pub fallbacks: usize,
    /// Largest number of frames waiting on the stack
    pub max_stack_depth: usize,
}

/// Implementation of the Bounded Multi-Source Shortest Path (BMSSP) driver.
///
/// Subproblems are `(bound, active set)` frames kept on an explicit stack. A frame is
/// solved by bounded Dijkstra when it is trivial; otherwise a median-of-three pivot
/// gives a tighter bound, everything up to that bound is settled, and the remaining
/// vertices are split into a near frame and a far frame. A frame is only pushed when it
/// is strictly smaller than its parent, which bounds the number of frames.
#[derive(Debug, Clone, Default)]
pub struct BMSSP {
    config: BmsspConfig,
}

impl BMSSP {
    /// Create a new BMSSP instance with default settings
    pub fn new() -> Self {
        BMSSP::default()
    }

    /// Create a new BMSSP instance with explicit settings
    pub fn with_config(config: BmsspConfig) -> Self {
        BMSSP { config }
    }

    /// Current settings
    pub fn config(&self) -> &BmsspConfig {
        &self.config
    }

    /// Prepares a run from `seeds`, each with its preset tentative distance, limited to
    /// `bound`. Nothing is computed until the run is stepped.
    pub fn start<'g, W, G>(
        &self,
        graph: &'g G,
        seeds: &[(usize, W)],
        bound: W,
    ) -> Result<BmsspRun<'g, W, G>>
    where
        W: Float + Zero + Debug + Copy,
        G: Graph<W>,
    {
        self.config.validate()?;

        let n = graph.vertex_count();
        let epsilon = convert(self.config.epsilon)?;
        let base_bound = convert(self.config.base_bound)?;
        let queue = match self.config.queue {
            QueueKind::BinaryHeap => FrameQueue::Heap(BinaryHeapQueue::with_capacity(n)),
            QueueKind::Buckets { delta } => FrameQueue::Buckets(BucketQueue::new(convert(delta)?, n)),
        };

        let mut distances = DistanceMap::new(n);
        let mut marks = vec![false; n];
        let mut active = Vec::with_capacity(seeds.len());
        for &(vertex, distance) in seeds {
            distances.seed(vertex, distance)?;
            if !marks[vertex] {
                marks[vertex] = true;
                active.push(vertex);
            }
        }
        for &v in &active {
            marks[v] = false;
        }

        Ok(BmsspRun {
            graph,
            epsilon,
            base_bound,
            partition: self.config.partition,
            distances,
            stack: vec![Frame { bound, active }],
            dijkstra: BoundedDijkstra::new(queue),
            marks,
            stats: BmsspStats::default(),
        })
    }

    /// Runs the engine to completion from a multi-source seed set
    pub fn solve_from<W, G>(
        &self,
        graph: &G,
        seeds: &[(usize, W)],
        bound: W,
    ) -> Result<DistanceMap<W>>
    where
        W: Float + Zero + Debug + Copy,
        G: Graph<W>,
    {
        let (distances, stats) = self.start(graph, seeds, bound)?.finish()?;
        log::debug!(
            "BMSSP finished: {} frames, {} splits, {} fallbacks, max stack depth {}",
            stats.frames_processed,
            stats.splits,
            stats.fallbacks,
            stats.max_stack_depth
        );
        Ok(distances)
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for BMSSP
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "BMSSP"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound(source));
        }

        let distances = self.solve_from(graph, &[(source, W::zero())], W::infinity())?;
        Ok(distances.into_result(source))
    }
}

/// An in-progress BMSSP computation, advanced one frame at a time
#[derive(Debug)]
pub struct BmsspRun<'g, W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    graph: &'g G,
    epsilon: W,
    base_bound: W,
    partition: PartitionScope,
    distances: DistanceMap<W>,
    stack: Vec<Frame<W>>,
    dijkstra: BoundedDijkstra<FrameQueue<W>>,
    /// Scratch membership flags, all false between frames
    marks: Vec<bool>,
    stats: BmsspStats,
}

impl<'g, W, G> BmsspRun<'g, W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    /// Live tentative distances
    pub fn distances(&self) -> &DistanceMap<W> {
        &self.distances
    }

    /// Counters so far
    pub fn stats(&self) -> &BmsspStats {
        &self.stats
    }

    /// Number of frames waiting on the stack
    pub fn pending_frames(&self) -> usize {
        self.stack.len()
    }

    /// True once the stack is empty and all distances are final
    pub fn is_finished(&self) -> bool {
        self.stack.is_empty()
    }

    /// Pops and processes one frame. Returns `false` when there was nothing left to do.
    pub fn step(&mut self) -> Result<bool> {
        let Some(frame) = self.stack.pop() else {
            return Ok(false);
        };

        self.stats.frames_processed += 1;
        self.process(frame)?;
        self.stats.max_stack_depth = self.stats.max_stack_depth.max(self.stack.len());
        Ok(true)
    }

    /// Processes frames until the stack is empty
    pub fn finish(mut self) -> Result<(DistanceMap<W>, BmsspStats)> {
        while self.step()? {}
        Ok((self.distances, self.stats))
    }

    fn process(&mut self, frame: Frame<W>) -> Result<()> {
        let Frame { bound: upper, active } = frame;

        if active.is_empty() {
            return Ok(());
        }

        if active.len() == 1 || upper <= self.base_bound {
            log::trace!("base case: {} vertices, bound {:?}", active.len(), upper);
            self.stats.base_cases += 1;
            return self.solve_directly(&active, upper);
        }

        let Some(pivot) = median_of_three_pivot(&active, &self.distances) else {
            return self.solve_directly(&active, upper);
        };
        let bound = upper.min(self.distances.get(pivot));

        if indistinguishable(bound, upper, self.epsilon) {
            log::trace!("pivot {} cannot tighten bound {:?}", pivot, upper);
            self.stats.unsplit_frames += 1;
            return self.solve_directly(&active, upper);
        }

        self.stats.splits += 1;
        let split = bound + self.epsilon;

        // Settle everything up to the split point, then push the frontier edges of the
        // settled vertices across it so the far half starts from correct seeds.
        self.dijkstra.run(self.graph, &active, split, &mut self.distances)?;
        let mut frontier = Vec::new();
        for &u in self.dijkstra.settled() {
            let dist_u = self.distances.get(u);
            for &(v, weight) in self.graph.out_edges(u)? {
                let candidate = dist_u + weight;
                if candidate > split && candidate <= upper && self.distances.relax(v, candidate, u) {
                    frontier.push(v);
                }
            }
        }

        let (left, right) = self.partition(&active, &frontier, split, upper);
        log::trace!(
            "split {} vertices at {:?} (pivot {}): {} near, {} far",
            active.len(),
            bound,
            pivot,
            left.len(),
            right.len()
        );

        let parent_size = active.len();
        if !left.is_empty() && left.len() < parent_size {
            self.stack.push(Frame { bound, active: left });
        }
        if !right.is_empty() {
            if right.len() < parent_size {
                self.stack.push(Frame { bound: upper, active: right });
            } else {
                self.stats.fallbacks += 1;
                self.solve_directly(&right, upper)?;
            }
        }

        Ok(())
    }

    fn solve_directly(&mut self, seeds: &[usize], bound: W) -> Result<()> {
        self.dijkstra.run(self.graph, seeds, bound, &mut self.distances)
    }

    /// Splits the candidate pool into vertices at or below `split` and vertices above it
    /// but within `upper`. Vertices at +inf belong to neither.
    fn partition(
        &mut self,
        active: &[usize],
        frontier: &[usize],
        split: W,
        upper: W,
    ) -> (Vec<usize>, Vec<usize>) {
        let mut left = Vec::new();
        let mut right = Vec::new();
        let distances = &self.distances;

        let mut classify = |u: usize| {
            let d = distances.get(u);
            if !d.is_finite() {
                return;
            }
            if d <= split {
                left.push(u);
            } else if d <= upper {
                right.push(u);
            }
        };

        match self.partition {
            PartitionScope::WholeGraph => {
                (0..distances.len()).for_each(&mut classify);
            }
            PartitionScope::ActiveSet => {
                let marks = &mut self.marks;
                let pool = active
                    .iter()
                    .chain(self.dijkstra.settled())
                    .chain(frontier)
                    .copied();

                let mut seen = Vec::new();
                for u in pool {
                    if !marks[u] {
                        marks[u] = true;
                        seen.push(u);
                        classify(u);
                    }
                }
                for u in seen {
                    marks[u] = false;
                }
            }
        }

        (left, right)
    }
}

/// Queue chosen at run time from [`QueueKind`]
#[derive(Debug)]
enum FrameQueue<W>
where
    W: Float + Debug,
{
    Heap(BinaryHeapQueue<W>),
    Buckets(BucketQueue<W>),
}

impl<W> BoundedPriorityQueue<W> for FrameQueue<W>
where
    W: Float + Debug,
{
    fn insert(&mut self, vertex: usize, distance: W) {
        match self {
            FrameQueue::Heap(q) => q.insert(vertex, distance),
            FrameQueue::Buckets(q) => q.insert(vertex, distance),
        }
    }

    fn decrease_key(&mut self, vertex: usize, distance: W) {
        match self {
            FrameQueue::Heap(q) => q.decrease_key(vertex, distance),
            FrameQueue::Buckets(q) => q.decrease_key(vertex, distance),
        }
    }

    fn extract_min(&mut self) -> Option<(usize, W)> {
        match self {
            FrameQueue::Heap(q) => q.extract_min(),
            FrameQueue::Buckets(q) => q.extract_min(),
        }
    }

    fn len(&self) -> usize {
        match self {
            FrameQueue::Heap(q) => q.len(),
            FrameQueue::Buckets(q) => q.len(),
        }
    }

    fn clear(&mut self) {
        match self {
            FrameQueue::Heap(q) => q.clear(),
            FrameQueue::Buckets(q) => q.clear(),
        }
    }
}

/// Equal bounds, both infinite included, or closer than `epsilon`
fn indistinguishable<W: Float>(a: W, b: W, epsilon: W) -> bool {
    a == b || (a - b).abs() < epsilon
}

fn convert<W: Float>(value: f64) -> Result<W> {
    W::from(value).ok_or_else(|| {
        Error::AlgorithmError(format!("{} is not representable in the weight type", value))
    })
}
