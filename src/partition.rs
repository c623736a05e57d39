//! Splits an index range into contiguous per-worker blocks.
use std::num::NonZeroUsize;
use std::ops::Range;
use std::thread;

/// Number of hardware threads, or 2 when it cannot be determined.
///
/// The fallback bounds oversubscription on unknown hardware while still
/// allowing some parallelism.
pub fn hardware_parallelism() -> usize {
    thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(2)
}

/// How many workers a reduction will actually use: the caller's thread
/// budget clamped by [`hardware_parallelism`].
///
/// `thread_budget` must be at least 1.
pub fn effective_workers(thread_budget: usize) -> usize {
    debug_assert!(thread_budget >= 1);
    thread_budget.min(hardware_parallelism())
}

/// Cuts `[0, length)` into one contiguous half-open sub-range per
/// effective worker.
///
/// `thread_budget` must be at least 1.
///
/// All sub-ranges except the last span `length / workers` indices
/// (truncating division); the last one absorbs the remainder and may
/// therefore be larger. With more workers than elements the leading
/// sub-ranges are empty and the final one covers the whole sequence.
/// A zero `length` yields no sub-ranges at all.
///
/// # Example
///
/// ```
/// use fork_reduce::partition;
///
/// let ranges = partition(7, 3);
/// assert_eq!(ranges.first().map(|r| r.start), Some(0));
/// assert_eq!(ranges.last().map(|r| r.end), Some(7));
/// ```
pub fn partition(length: usize, thread_budget: usize) -> Vec<Range<usize>> {
    block_ranges(length, effective_workers(thread_budget))
}

/// The splitting arithmetic for an exact worker count.
fn block_ranges(length: usize, workers: usize) -> Vec<Range<usize>> {
    if length == 0 {
        return Vec::new();
    }
    let block_size = length / workers;
    (0..workers)
        .map(|worker| {
            let start = worker * block_size;
            // the last worker absorbs whatever truncation left over
            let end = if worker == workers - 1 {
                length
            } else {
                start + block_size
            };
            start..end
        })
        .collect()
}
