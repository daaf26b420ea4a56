use tokio::time::Instant;
use tracing::{debug, error};
use url::Url;

use crate::metrics::RequestOutcome;

use super::super::Transport;
use super::OutcomeSender;

/// Issues one request and emits its outcome. Transport failures are logged
/// and recorded as status 0 with zero elapsed time.
pub(super) async fn issue_request<T>(transport: &T, url: &Url, outcomes: &OutcomeSender)
where
    T: Transport + ?Sized,
{
    let start = Instant::now();
    let outcome = match transport.get(url).await {
        Ok(status) => RequestOutcome::response(start.elapsed(), status),
        Err(err) => {
            error!(url = %url, kind = err.kind(), error = %err, "Request failed");
            RequestOutcome::failure()
        }
    };
    emit(outcomes, outcome);
}

pub(super) fn emit(outcomes: &OutcomeSender, outcome: RequestOutcome) {
    if outcomes.send(outcome).is_err() {
        debug!("Outcome receiver closed before all requests resolved.");
    }
}
