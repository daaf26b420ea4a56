use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use crate::error::TransportFailure;

use super::Transport;

/// What the fake returns for the request issued at a given position.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Scripted {
    Status(u16),
    Fail,
    /// The request task dies before producing an outcome.
    Panic,
}

/// A request as observed by the fake when it started.
#[derive(Debug, Clone, Copy)]
pub(crate) struct StartRecord {
    pub(crate) index: usize,
    pub(crate) completed_before: usize,
}

/// In-memory transport that tracks concurrency. Requests beyond the end of
/// `script` answer 200; requests beyond the end of `delays` resolve after
/// `default_delay`.
#[derive(Debug)]
pub(crate) struct FakeTransport {
    script: Vec<Scripted>,
    delays: Vec<Duration>,
    default_delay: Duration,
    issued: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    completed: AtomicUsize,
    starts: Mutex<Vec<StartRecord>>,
}

impl FakeTransport {
    pub(crate) fn new(script: Vec<Scripted>) -> Self {
        Self {
            script,
            delays: Vec::new(),
            default_delay: Duration::from_millis(10),
            issued: AtomicUsize::new(0),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
            completed: AtomicUsize::new(0),
            starts: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn all_ok() -> Self {
        Self::new(Vec::new())
    }

    pub(crate) fn with_delays(mut self, delays: Vec<Duration>) -> Self {
        self.delays = delays;
        self
    }

    pub(crate) fn issued(&self) -> usize {
        self.issued.load(Ordering::SeqCst)
    }

    pub(crate) fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    pub(crate) fn starts(&self) -> Vec<StartRecord> {
        self.starts
            .lock()
            .map(|starts| starts.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn get(&self, _url: &Url) -> Result<u16, TransportFailure> {
        let index = self.issued.fetch_add(1, Ordering::SeqCst);
        let now_in_flight = self.in_flight.fetch_add(1, Ordering::SeqCst).saturating_add(1);
        self.max_in_flight.fetch_max(now_in_flight, Ordering::SeqCst);
        if let Ok(mut starts) = self.starts.lock() {
            starts.push(StartRecord {
                index,
                completed_before: self.completed.load(Ordering::SeqCst),
            });
        }

        let delay = self.delays.get(index).copied().unwrap_or(self.default_delay);
        tokio::time::sleep(delay).await;

        self.completed.fetch_add(1, Ordering::SeqCst);
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        match self.script.get(index).copied().unwrap_or(Scripted::Status(200)) {
            Scripted::Status(status) => Ok(status),
            Scripted::Fail => Err(TransportFailure::from(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "connection refused",
            ))),
            Scripted::Panic => std::panic::panic_any("scripted request task panic"),
        }
    }
}
