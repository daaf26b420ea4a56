use std::collections::BTreeMap;
use std::time::Duration;

use tokio::sync::mpsc;

use super::{Report, RequestOutcome, SUCCESS_STATUS, TRANSPORT_FAILURE_STATUS};

/// Folds request outcomes into a [`Report`].
#[derive(Debug, Default)]
pub struct Aggregator {
    success_count: u64,
    status_histogram: BTreeMap<u16, u64>,
    total_response_time: Duration,
    recorded: u64,
}

impl Aggregator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes `outcomes` until every sender is gone.
    pub async fn drain(mut outcomes: mpsc::UnboundedReceiver<RequestOutcome>) -> Self {
        let mut aggregator = Self::new();
        while let Some(outcome) = outcomes.recv().await {
            aggregator.record(outcome);
        }
        tracing::debug!(recorded = aggregator.recorded, "Outcome stream closed");
        aggregator
    }

    pub fn record(&mut self, outcome: RequestOutcome) {
        match outcome.status_code {
            SUCCESS_STATUS => {
                self.success_count = self.success_count.saturating_add(1);
            }
            TRANSPORT_FAILURE_STATUS => {}
            status => {
                let count = self.status_histogram.entry(status).or_insert(0);
                *count = count.saturating_add(1);
            }
        }
        self.total_response_time = self.total_response_time.saturating_add(outcome.elapsed);
        self.recorded = self.recorded.saturating_add(1);
    }

    /// Number of outcomes seen so far.
    #[must_use]
    pub const fn recorded(&self) -> u64 {
        self.recorded
    }

    #[must_use]
    pub fn finish(self, total_requests: u64, total_elapsed: Duration) -> Report {
        Report {
            total_elapsed,
            total_requests,
            success_count: self.success_count,
            status_histogram: self.status_histogram,
            total_response_time: self.total_response_time,
        }
    }
}
