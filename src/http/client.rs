use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, redirect};
use url::Url;

use crate::args::DEFAULT_USER_AGENT;
use crate::error::{AppError, AppResult, HttpError, TransportFailure};

use super::Transport;

const REDIRECT_LIMIT: usize = 10;

/// [`Transport`] backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Builds the client used for every request of a run. `request_timeout`
    /// bounds each request end to end; `None` leaves requests unbounded.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying client cannot be constructed.
    pub fn new(request_timeout: Option<Duration>) -> AppResult<Self> {
        let mut client_builder = Client::builder()
            .user_agent(DEFAULT_USER_AGENT)
            .redirect(redirect::Policy::limited(REDIRECT_LIMIT));

        if let Some(timeout) = request_timeout {
            client_builder = client_builder.timeout(timeout);
        }

        let client = client_builder.build().map_err(|err| {
            tracing::error!("Failed to build HTTP client: {}", err);
            AppError::http(HttpError::BuildClientFailed { source: err })
        })?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &Url) -> Result<u16, TransportFailure> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(TransportFailure::from_reqwest)?;
        let status = response.status().as_u16();
        drop(response);
        Ok(status)
    }
}
