//! Bulk operation fan-out
//!
//! Bulk actions on list screens (delete selected rows) issue one
//! independent request per item, concurrently, and report the aggregate.
//! There is no transaction: a partial failure leaves mixed remote state
//! and the screen re-reads the list to reconcile.

use std::future::Future;

use tokio::task::JoinSet;

use core_kernel::{BulkOutcome, PortError};

/// Runs `op` once per item concurrently and aggregates the outcomes
pub async fn aggregate_bulk<I, F, Fut>(items: Vec<I>, op: F) -> BulkOutcome<I>
where
    I: Clone + Send + 'static,
    F: Fn(I) -> Fut,
    Fut: Future<Output = Result<(), PortError>> + Send + 'static,
{
    let mut set = JoinSet::new();
    for item in items {
        let future = op(item.clone());
        set.spawn(async move { (item, future.await) });
    }

    let mut outcome = BulkOutcome::new();
    while let Some(joined) = set.join_next().await {
        match joined {
            Ok((item, Ok(()))) => outcome.record_success(item),
            Ok((item, Err(e))) => outcome.record_failure(item, e.to_string()),
            Err(e) => {
                // A panicked task loses its item; log and keep aggregating
                tracing::error!(error = %e, "bulk operation task failed to join");
            }
        }
    }
    outcome
}
