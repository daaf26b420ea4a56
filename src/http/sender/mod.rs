mod batch;
mod plan;
mod request;
mod window;

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::app::RunConfig;
use crate::args::AdmissionMode;
use crate::metrics::RequestOutcome;

use super::Transport;

pub use plan::BatchPlan;

pub(crate) type OutcomeSender = mpsc::UnboundedSender<RequestOutcome>;
pub type OutcomeReceiver = mpsc::UnboundedReceiver<RequestOutcome>;

/// Starts the dispatcher for `config` and returns the outcome stream.
///
/// The stream yields one [`RequestOutcome`] per issued request and closes
/// once the last request has resolved. The returned handle completes at the
/// same point.
pub fn spawn_dispatcher<T>(
    config: &RunConfig,
    transport: Arc<T>,
) -> (OutcomeReceiver, JoinHandle<()>)
where
    T: Transport + ?Sized + 'static,
{
    let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
    let config = config.clone();

    let handle = tokio::spawn(async move {
        debug!(
            mode = config.mode().as_str(),
            requests = config.total_requests().get(),
            concurrency = config.concurrency().get(),
            "Dispatcher started"
        );
        match config.mode() {
            AdmissionMode::Batch => batch::run_batches(&config, transport, &outcome_tx).await,
            AdmissionMode::Window => window::run_window(&config, transport, &outcome_tx).await,
        }
        debug!("Dispatcher finished");
    });

    (outcome_rx, handle)
}
