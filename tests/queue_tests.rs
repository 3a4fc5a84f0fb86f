use bmssp_sssp::data_structures::{BinaryHeapQueue, BoundedPriorityQueue, BucketQueue};

fn drain<Q: BoundedPriorityQueue<f64>>(queue: &mut Q) -> Vec<(usize, f64)> {
    std::iter::from_fn(|| queue.extract_min()).collect()
}

#[test]
fn test_heap_extracts_in_order() {
    let mut queue = BinaryHeapQueue::new();
    queue.insert(1, 10.0);
    queue.insert(2, 5.0);
    queue.insert(3, 7.5);
    assert_eq!(queue.len(), 3);
    assert_eq!(queue.peek(), Some((2, 5.0)));

    assert_eq!(drain(&mut queue), vec![(2, 5.0), (3, 7.5), (1, 10.0)]);
    assert!(queue.is_empty());
    assert_eq!(queue.extract_min(), None);
}

#[test]
fn test_heap_decrease_key_leaves_stale_entry() {
    let mut queue = BinaryHeapQueue::new();
    queue.insert(1, 10.0);
    queue.insert(2, 20.0);
    queue.decrease_key(1, 8.0);

    // The superseded (1, 10.0) entry is still counted until popped
    assert_eq!(queue.len(), 3);
    assert_eq!(drain(&mut queue), vec![(1, 8.0), (1, 10.0), (2, 20.0)]);
}

#[test]
fn test_heap_clear() {
    let mut queue = BinaryHeapQueue::with_capacity(8);
    queue.insert(0, 1.0);
    queue.insert(1, 2.0);
    queue.clear();
    assert!(queue.is_empty());
    assert_eq!(queue.peek(), None);
}

#[test]
fn test_bucket_queue_orders_within_a_bucket() {
    let mut queue = BucketQueue::new(10.0, 4);
    queue.insert(0, 9.0);
    queue.insert(1, 3.0);
    queue.insert(2, 25.0);
    queue.insert(3, 0.5);

    assert_eq!(queue.delta(), 10.0);
    assert_eq!(
        drain(&mut queue),
        vec![(3, 0.5), (1, 3.0), (0, 9.0), (2, 25.0)]
    );
}

#[test]
fn test_bucket_queue_decrease_key_moves_entry() {
    let mut queue = BucketQueue::new(1.0, 3);
    queue.insert(0, 5.0);
    queue.insert(1, 6.0);

    queue.decrease_key(1, 2.0);
    assert_eq!(queue.len(), 2);
    assert_eq!(queue.get(1), Some(2.0));

    // Increases are ignored
    queue.decrease_key(0, 9.0);
    assert_eq!(queue.get(0), Some(5.0));

    // Unqueued vertices are inserted
    queue.decrease_key(2, 4.0);
    assert_eq!(queue.len(), 3);

    assert_eq!(drain(&mut queue), vec![(1, 2.0), (2, 4.0), (0, 5.0)]);
    assert_eq!(queue.get(0), None);
}

#[test]
fn test_bucket_queue_skips_infinite_distances() {
    let mut queue = BucketQueue::new(1.0, 2);
    queue.insert(0, f64::INFINITY);
    assert!(queue.is_empty());
}

#[test]
fn test_bucket_queue_reuse_after_clear() {
    let mut queue = BucketQueue::new(2.0, 5);
    for v in 0..5 {
        queue.insert(v, 10.0 - v as f64);
    }
    queue.clear();
    assert!(queue.is_empty());
    assert_eq!(queue.get(3), None);

    // Lower buckets must be found again after a reset
    queue.insert(4, 12.0);
    queue.insert(2, 0.0);
    assert_eq!(drain(&mut queue), vec![(2, 0.0), (4, 12.0)]);
}

#[test]
fn test_bucket_queue_interleaved_operations() {
    let mut queue = BucketQueue::new(3.0, 8);
    queue.insert(0, 4.0);
    queue.insert(1, 7.0);
    assert_eq!(queue.extract_min(), Some((0, 4.0)));

    // A new entry below the last extracted bucket is still found
    queue.insert(2, 1.0);
    queue.insert(3, 7.5);
    queue.decrease_key(3, 6.5);
    assert_eq!(drain(&mut queue), vec![(2, 1.0), (3, 6.5), (1, 7.0)]);
}

#[test]
fn test_bucket_queue_far_apart_distances() {
    // Bucket indices in the billions and beyond must not be materialised
    let mut queue = BucketQueue::new(1.0, 6);
    queue.insert(0, 1e12);
    queue.insert(1, 1e9);
    queue.insert(2, 3.0);
    queue.insert(3, 1e300);
    queue.insert(4, 1e9 + 0.5);
    queue.insert(5, 2e300);
    assert_eq!(queue.len(), 6);

    queue.decrease_key(0, 5e11);
    assert_eq!(queue.get(0), Some(5e11));

    assert_eq!(
        drain(&mut queue),
        vec![(2, 3.0), (1, 1e9), (4, 1e9 + 0.5), (0, 5e11), (3, 1e300), (5, 2e300)]
    );
    assert!(queue.is_empty());
}

#[test]
#[should_panic(expected = "bucket width")]
fn test_bucket_queue_rejects_zero_width() {
    let _ = BucketQueue::<f64>::new(0.0, 1);
}
