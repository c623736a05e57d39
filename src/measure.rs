//! Wall-clock timing of single closures.
use std::time::{Duration, Instant};

/// Runs `op` once and returns its result together with the elapsed
/// wall-clock time.
///
/// The clock is monotonic and starts right before the call, so the
/// measurement covers exactly the closure body, allocation and all.
///
/// # Example
///
/// ```
/// use fork_reduce::measure;
///
/// let (sum, duration) = measure(|| (1..=100).sum::<u32>());
/// assert_eq!(sum, 5050);
/// assert!(duration.as_nanos() > 0);
/// ```
pub fn measure<OP, R>(op: OP) -> (R, Duration)
where
    OP: FnOnce() -> R,
{
    let start = Instant::now();
    let result = op();
    (result, start.elapsed())
}
