use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::warn;

use crate::app::RunConfig;

use super::super::Transport;
use super::OutcomeSender;
use super::batch::record_lost_request;
use super::request::issue_request;

/// Sliding-window admission: a permit is taken before each request starts and
/// returned when its outcome has been emitted.
pub(super) async fn run_window<T>(
    config: &RunConfig,
    transport: Arc<T>,
    outcomes: &OutcomeSender,
) where
    T: Transport + ?Sized + 'static,
{
    let url = Arc::new(config.target_url().clone());
    let permits = Arc::new(Semaphore::new(window_size(
        config.total_requests().get(),
        config.concurrency().get(),
    )));
    let mut in_flight = JoinSet::new();

    for _ in 0..config.total_requests().get() {
        let permit = match Arc::clone(&permits).acquire_owned().await {
            Ok(permit) => permit,
            Err(err) => {
                warn!("Admission semaphore closed: {}", err);
                break;
            }
        };
        let transport = Arc::clone(&transport);
        let url = Arc::clone(&url);
        let outcomes_tx = outcomes.clone();
        in_flight.spawn(async move {
            issue_request(transport.as_ref(), &url, &outcomes_tx).await;
            drop(permit);
        });

        while let Some(joined) = in_flight.try_join_next() {
            if let Err(err) = joined {
                record_lost_request(outcomes, &err);
            }
        }
    }

    while let Some(joined) = in_flight.join_next().await {
        if let Err(err) = joined {
            record_lost_request(outcomes, &err);
        }
    }
}

/// More permits than requests are never used; tokio also caps a semaphore at
/// `Semaphore::MAX_PERMITS`.
fn window_size(total: u64, concurrency: usize) -> usize {
    let total = usize::try_from(total).unwrap_or(usize::MAX);
    concurrency.min(total).min(Semaphore::MAX_PERMITS)
}
