//! Bounded parallel fan-out for file I/O.

use rayon::{ThreadPool, ThreadPoolBuilder, prelude::*};

use crate::error::Result;

/// Build the worker pool, `None` meaning rayon's default size.
pub fn build_pool(jobs: Option<usize>) -> Result<ThreadPool> {
    let mut builder = ThreadPoolBuilder::new().thread_name(|i| format!("fontface-io-{i}"));
    if let Some(jobs) = jobs {
        builder = builder.num_threads(jobs);
    }
    Ok(builder.build()?)
}

/// Apply `op` to every item on `pool`, keeping input order.
///
/// Stops at the first error and returns it.
pub fn try_map<T, R, F>(pool: &ThreadPool, items: Vec<T>, op: F) -> Result<Vec<R>>
where
    T: Send,
    R: Send,
    F: Fn(T) -> Result<R> + Sync + Send,
{
    pool.install(|| items.into_par_iter().map(op).collect())
}
