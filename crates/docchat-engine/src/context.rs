//! Request-scoped thread context
//!
//! The thread id always travels explicitly in [`ThreadConfig`](crate::ThreadConfig).
//! Engine internals that cannot take it as a parameter (retrieval tools invoked
//! mid-turn, outgoing request headers) read it from here instead. The value
//! lives in a tokio task-local, so it is visible only inside the future passed
//! to [`with_thread`] and is dropped on every exit path of that future.

use std::future::Future;

tokio::task_local! {
    static CURRENT_THREAD_ID: String;
}

/// Run `fut` with `thread_id` as the current thread
pub async fn with_thread<F>(thread_id: impl Into<String>, fut: F) -> F::Output
where
    F: Future,
{
    CURRENT_THREAD_ID.scope(thread_id.into(), fut).await
}

/// Thread id of the enclosing [`with_thread`] scope, if any
pub fn current_thread_id() -> Option<String> {
    CURRENT_THREAD_ID.try_with(|id| id.clone()).ok()
}
