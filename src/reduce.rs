//! The manual parallel transform-reduce routine.
//!
//! One fresh OS thread per sub-range, a join barrier, then a sequential
//! merge of the per-worker partials. No pool, no state across calls.
use crate::ops::{BinaryOp, UnaryOp};
use crate::partition::partition;
use std::io;
use std::panic;
use std::thread;
use thiserror::Error;

/// Errors surfaced by [`transform_reduce`].
#[derive(Error, Debug)]
pub enum Error {
    /// The caller asked for zero worker threads; the contract requires
    /// a budget of at least one.
    #[error("thread budget must be at least 1")]
    ZeroThreadBudget,
    /// The operating system refused to start a worker thread. The whole
    /// reduction is aborted; no partial result is ever returned.
    #[error("spawning a worker thread failed: {0}")]
    Spawn(#[from] io::Error),
}

/// Applies `transform` to every element of `values`, then combines all
/// transformed values together with `init` into a single scalar, using
/// up to `thread_budget` worker threads.
///
/// The slice is cut by [`partition`](crate::partition) into one block
/// per worker and every block is handled by a freshly spawned thread.
/// Each worker folds its block from `T::default()` (the zero value,
/// which `combine` must treat as its identity) and writes the partial
/// into its own disjoint slot; `init` enters the fold exactly once, when
/// the joined partials are merged sequentially in block order.
///
/// `combine` must be commutative and associative for the result to be
/// independent of block boundaries and scheduling. An empty slice
/// returns `init` without spawning anything.
///
/// # Errors
///
/// [`Error::ZeroThreadBudget`] when `thread_budget` is 0, before any
/// partitioning happens; [`Error::Spawn`] when the operating system
/// cannot start a worker, in which case the already running workers are
/// still joined but the reduction yields no value.
///
/// # Example
///
/// ```
/// use fork_reduce::transform_reduce;
///
/// let values = [1, 2, 3, 4, 5];
/// for budget in 1..=5 {
///     let sum = transform_reduce(&values, 0, |a: i32, b: i32| a + b, |x: i32| x * 2, budget)?;
///     assert_eq!(sum, 30);
/// }
/// # Ok::<(), fork_reduce::Error>(())
/// ```
pub fn transform_reduce<T, B, U>(
    values: &[T],
    init: T,
    combine: B,
    transform: U,
    thread_budget: usize,
) -> Result<T, Error>
where
    T: Copy + Default + Send + Sync,
    B: BinaryOp<T> + Sync,
    U: UnaryOp<T> + Sync,
{
    if thread_budget == 0 {
        return Err(Error::ZeroThreadBudget);
    }
    if values.is_empty() {
        return Ok(init);
    }

    let ranges = partition(values.len(), thread_budget);
    let mut partials = vec![T::default(); ranges.len()];
    thread::scope(|scope| -> Result<(), io::Error> {
        let mut workers = Vec::with_capacity(ranges.len());
        for (range, slot) in ranges.into_iter().zip(partials.iter_mut()) {
            let block = &values[range];
            let combine = &combine;
            let transform = &transform;
            workers.push(thread::Builder::new().spawn_scoped(scope, move || {
                *slot = block
                    .iter()
                    .map(|&value| transform.apply(value))
                    .fold(T::default(), |acc, value| combine.combine(acc, value));
            })?);
        }
        // join barrier: every worker finishes before any partial is read
        for worker in workers {
            if let Err(payload) = worker.join() {
                panic::resume_unwind(payload);
            }
        }
        Ok(())
    })?;

    Ok(partials
        .iter()
        .fold(init, |acc, &partial| combine.combine(acc, partial)))
}
