//! Batch boundaries for progress reporting and pooled execution.
//!
//! A fraction's iterations are split into batches so the sweep can invoke
//! its progress observer at stable points; this module also carries the
//! pooled entry point that runs a whole sweep on a fixed worker count.

use crate::parallel::pool::WorkerPool;
use crate::sim::error::SimError;
use crate::sim::sweep::{run_sweep_parallel, SweepConfig, SweepPoint};

/// Split `total` items into up to `num_batches` ranges `[start, end)`.
/// Batches are as equal in size as possible; later batches may be smaller.
///
/// # Example
/// ```
/// # use secretary::parallel::batch_ranges;
/// let ranges = batch_ranges(100, 4);
/// assert_eq!(ranges, vec![(0, 25), (25, 50), (50, 75), (75, 100)]);
/// ```
pub fn batch_ranges(total: usize, num_batches: usize) -> Vec<(usize, usize)> {
    if total == 0 || num_batches == 0 {
        return Vec::new();
    }
    let num_batches = num_batches.min(total);
    let base = total / num_batches;
    let remainder = total % num_batches;
    let mut ranges = Vec::with_capacity(num_batches);
    let mut start = 0;
    for i in 0..num_batches {
        let size = base + if i < remainder { 1 } else { 0 };
        let end = start + size;
        ranges.push((start, end));
        start = end;
    }
    ranges
}

/// Run a full sweep on a fixed number of worker threads. This is a
/// convenience that calls [run_sweep_parallel] inside
/// [WorkerPool::install] when a custom worker count is set.
pub fn run_sweep_batches(
    config: &SweepConfig,
    pool: &WorkerPool,
) -> Result<Vec<SweepPoint>, SimError> {
    pool.install(|| run_sweep_parallel(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_ranges_even_split() {
        let r = batch_ranges(100, 4);
        assert_eq!(r, vec![(0, 25), (25, 50), (50, 75), (75, 100)]);
    }

    #[test]
    fn batch_ranges_with_remainder() {
        let r = batch_ranges(10, 3);
        assert_eq!(r, vec![(0, 4), (4, 7), (7, 10)]);
    }

    #[test]
    fn batch_ranges_more_batches_than_items() {
        let r = batch_ranges(3, 10);
        assert_eq!(r.len(), 3);
        assert_eq!(r, vec![(0, 1), (1, 2), (2, 3)]);
    }

    #[test]
    fn batch_ranges_empty() {
        assert!(batch_ranges(0, 5).is_empty());
        assert!(batch_ranges(10, 0).is_empty());
    }

    #[test]
    fn pooled_sweep_matches_direct_parallel_sweep() {
        let config = SweepConfig {
            n: 30,
            iterations: 200,
            fractions: vec![0.0, 0.25, 0.5],
            seed: 9,
        };
        let pooled = run_sweep_batches(&config, &WorkerPool::with_workers(2)).unwrap();
        let direct = run_sweep_parallel(&config).unwrap();
        assert_eq!(pooled, direct);
    }
}
