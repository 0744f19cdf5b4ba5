//! Parallelization helpers for pixel statistics
//!
//! Small regions are cheaper to reduce on the calling thread than to split
//! across the rayon pool, so the helpers here dispatch on sample count.

use rayon::prelude::*;

/// Minimum number of elements to trigger parallel processing
pub(crate) const PARALLEL_THRESHOLD: usize = 30_000;

/// Parallel fold/reduce over a slice with automatic threshold-based dispatch.
///
/// This function abstracts the common pattern:
/// ```ignore
/// if data.len() >= PARALLEL_THRESHOLD {
///     data.par_iter()
///         .fold(|| init(), |acc, item| fold_fn(acc, item))
///         .reduce(|| init(), |a, b| reduce_fn(a, b))
/// } else {
///     // sequential version
/// }
/// ```
///
/// `reduce_fn` must be associative and `init` must be its identity, since the
/// parallel path combines partial accumulators in an unspecified order.
pub(crate) fn parallel_fold_reduce<T, A, I, F, R>(
    data: &[T],
    init: I,
    fold_fn: F,
    reduce_fn: R,
) -> A
where
    T: Sync,
    A: Send,
    I: Fn() -> A + Sync + Send,
    F: Fn(A, &T) -> A + Sync + Send,
    R: Fn(A, A) -> A + Sync + Send,
{
    if data.len() >= PARALLEL_THRESHOLD {
        data.par_iter()
            .fold(&init, &fold_fn)
            .reduce(&init, &reduce_fn)
    } else {
        data.iter().fold(init(), &fold_fn)
    }
}
