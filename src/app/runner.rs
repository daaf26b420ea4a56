use std::sync::Arc;

use tokio::time::Instant;
use tracing::{info, warn};

use crate::error::AppResult;
use crate::http::{Transport, spawn_dispatcher};
use crate::metrics::{Aggregator, Report};

use super::RunConfig;

/// Runs the full pipeline for `config`: dispatches every request through
/// `transport`, aggregates the outcomes, and returns the report.
///
/// Total elapsed time spans from just before the first request is admitted to
/// just after the outcome stream closes.
///
/// # Errors
///
/// Returns an error only if the dispatcher task itself panicked.
pub async fn run_load<T>(config: &RunConfig, transport: Arc<T>) -> AppResult<Report>
where
    T: Transport + ?Sized + 'static,
{
    info!(
        url = %config.target_url(),
        requests = config.total_requests().get(),
        concurrency = config.concurrency().get(),
        mode = config.mode().as_str(),
        "Starting load run"
    );

    let run_start = Instant::now();
    let (outcomes, dispatcher) = spawn_dispatcher(config, transport);
    let aggregator = Aggregator::drain(outcomes).await;
    let total_elapsed = run_start.elapsed();
    dispatcher.await?;

    let recorded = aggregator.recorded();
    let report = aggregator.finish(config.total_requests().get(), total_elapsed);
    if recorded != report.total_requests {
        warn!(
            expected = report.total_requests,
            recorded, "Outcome count does not match the configured request total"
        );
    }
    let failures = report.failure_count();
    if failures > 0 {
        warn!(failures, "Some requests failed without an HTTP response");
    }
    info!(elapsed = ?total_elapsed, "Load run finished");

    Ok(report)
}
