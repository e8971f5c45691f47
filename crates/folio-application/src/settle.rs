//! Settle-all combinator for best-effort batches.

use folio_core::{FolioError, Result};
use futures::future::join_all;
use std::future::Future;
use std::time::Duration;

/// Runs every future concurrently and returns each outcome in input order.
///
/// No outcome affects another: a failing or timed-out item yields an `Err`
/// in its own slot while its siblings keep running. With `per_item_timeout`
/// set, each item is bounded independently and reports `FolioError::Timeout`.
pub async fn settle_all<I, F, T>(futures: I, per_item_timeout: Option<Duration>) -> Vec<Result<T>>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<T>>,
{
    join_all(futures.into_iter().map(|future| async move {
        match per_item_timeout {
            Some(limit) => tokio::time::timeout(limit, future)
                .await
                .unwrap_or_else(|_| Err(FolioError::Timeout(format!("no result within {:?}", limit)))),
            None => future.await,
        }
    }))
    .await
}
