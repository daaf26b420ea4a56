//! HTTP transport and request dispatching.
mod client;
mod sender;

#[cfg(test)]
pub(crate) mod test_support;

use async_trait::async_trait;
use url::Url;

use crate::error::TransportFailure;

pub use client::ReqwestTransport;
pub use sender::{BatchPlan, OutcomeReceiver, spawn_dispatcher};

/// The outbound capability the dispatcher drives: one GET, one status code.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issues a single GET against `url` and returns the response status code.
    /// The response is released before returning.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportFailure`] when no valid HTTP response was received.
    async fn get(&self, url: &Url) -> Result<u16, TransportFailure>;
}
