use std::collections::BTreeMap;
use std::time::Duration;

/// Status code counted as a success.
pub const SUCCESS_STATUS: u16 = 200;
/// Status recorded when no valid HTTP response was received.
pub const TRANSPORT_FAILURE_STATUS: u16 = 0;

/// Result of a single dispatched request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestOutcome {
    pub elapsed: Duration,
    pub status_code: u16,
}

impl RequestOutcome {
    #[must_use]
    pub const fn response(elapsed: Duration, status_code: u16) -> Self {
        Self {
            elapsed,
            status_code,
        }
    }

    #[must_use]
    pub const fn failure() -> Self {
        Self {
            elapsed: Duration::ZERO,
            status_code: TRANSPORT_FAILURE_STATUS,
        }
    }

    #[must_use]
    pub const fn is_failure(&self) -> bool {
        self.status_code == TRANSPORT_FAILURE_STATUS
    }
}

/// Summary of a finished run.
///
/// `status_histogram` holds every status other than 200 and 0. Transport
/// failures are not stored explicitly; see [`Report::failure_count`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub total_elapsed: Duration,
    pub total_requests: u64,
    pub success_count: u64,
    pub status_histogram: BTreeMap<u16, u64>,
    pub total_response_time: Duration,
}

impl Report {
    /// Requests that got a non-200 HTTP response.
    #[must_use]
    pub fn other_status_count(&self) -> u64 {
        self.status_histogram
            .values()
            .fold(0u64, |acc, count| acc.saturating_add(*count))
    }

    /// Requests that never got an HTTP response.
    #[must_use]
    pub fn failure_count(&self) -> u64 {
        self.total_requests
            .saturating_sub(self.success_count)
            .saturating_sub(self.other_status_count())
    }

    /// Mean latency over requests that received a response.
    #[must_use]
    pub fn average_response_time(&self) -> Duration {
        let responses = self.success_count.saturating_add(self.other_status_count());
        if responses == 0 {
            return Duration::ZERO;
        }
        let avg_nanos = self
            .total_response_time
            .as_nanos()
            .checked_div(u128::from(responses))
            .unwrap_or(0);
        Duration::from_nanos(u64::try_from(avg_nanos).unwrap_or(u64::MAX))
    }
}
