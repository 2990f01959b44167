use crate::error::{RefscopeError, Result};
use std::future::Future;
use std::sync::Arc;
use tokio::sync::Semaphore;

/// Concurrent fetch cap per invocation. Large enough to overlap network
/// latency aggressively, small enough not to overwhelm the remote service.
pub const DEFAULT_WORKERS: usize = 100;

/// Applies `f` to every item with at most `workers` invocations in flight.
///
/// Results come back in input order regardless of completion order, and that
/// guarantee holds transitively through nested calls. On failure, every
/// already-dispatched task is still driven to completion before the first
/// failure (in input order) is surfaced; siblings are never force-cancelled.
pub async fn parallel_map<T, R, F, Fut>(items: Vec<T>, workers: usize, f: F) -> Result<Vec<R>>
where
    T: Send + 'static,
    R: Send + 'static,
    F: Fn(T) -> Fut,
    Fut: Future<Output = Result<R>> + Send + 'static,
{
    let slots = Arc::new(Semaphore::new(workers.max(1)));
    let tasks: Vec<_> = items
        .into_iter()
        .map(|item| {
            let slots = Arc::clone(&slots);
            let work = f(item);
            tokio::spawn(async move {
                let _slot = slots.acquire_owned().await.expect("semaphore closed");
                work.await
            })
        })
        .collect();

    let mut results = Vec::with_capacity(tasks.len());
    let mut failure: Option<RefscopeError> = None;
    for task in tasks {
        match task.await {
            Ok(Ok(value)) => results.push(value),
            Ok(Err(err)) => {
                failure.get_or_insert(err);
            }
            Err(join_err) => {
                failure.get_or_insert(RefscopeError::Worker(join_err.to_string()));
            }
        }
    }

    match failure {
        Some(err) => Err(err),
        None => Ok(results),
    }
}
