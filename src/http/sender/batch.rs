use std::sync::Arc;

use tokio::task::{JoinError, JoinSet};
use tracing::{debug, error};

use crate::app::RunConfig;
use crate::metrics::RequestOutcome;

use super::super::Transport;
use super::OutcomeSender;
use super::plan::BatchPlan;
use super::request::{emit, issue_request};

/// Batch-synchronous admission: every member of a batch starts together and
/// the next batch opens only after all of them have resolved.
pub(super) async fn run_batches<T>(
    config: &RunConfig,
    transport: Arc<T>,
    outcomes: &OutcomeSender,
) where
    T: Transport + ?Sized + 'static,
{
    let url = Arc::new(config.target_url().clone());
    let plan = BatchPlan::new(config.total_requests().get(), config.concurrency().get());

    for (index, size) in plan.enumerate() {
        debug!(batch = index, size, "Opening batch");
        let mut batch = JoinSet::new();
        for _ in 0..size {
            let transport = Arc::clone(&transport);
            let url = Arc::clone(&url);
            let outcomes = outcomes.clone();
            batch.spawn(async move {
                issue_request(transport.as_ref(), &url, &outcomes).await;
            });
        }

        while let Some(joined) = batch.join_next().await {
            if let Err(err) = joined {
                record_lost_request(outcomes, &err);
            }
        }
    }
}

/// A request task that died before emitting still counts once, as a failure.
pub(super) fn record_lost_request(outcomes: &OutcomeSender, err: &JoinError) {
    error!("Request task aborted: {}", err);
    emit(outcomes, RequestOutcome::failure());
}
