use std::time::Duration;

use url::Url;

use crate::args::{AdmissionMode, LoadArgs, PositiveU64, PositiveUsize};
use crate::error::{AppError, AppResult, HttpError, ValidationError};

/// Immutable settings for one load run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    target_url: Url,
    total_requests: PositiveU64,
    concurrency: PositiveUsize,
    mode: AdmissionMode,
    request_timeout: Option<Duration>,
}

impl RunConfig {
    /// Validates the target URL and builds a batch-mode configuration without
    /// a request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the URL is empty, cannot be parsed, or is not
    /// `http`/`https`.
    pub fn new(
        url: &str,
        total_requests: PositiveU64,
        concurrency: PositiveUsize,
    ) -> AppResult<Self> {
        Ok(Self {
            target_url: parse_target_url(url)?,
            total_requests,
            concurrency,
            mode: AdmissionMode::Batch,
            request_timeout: None,
        })
    }

    /// Builds a configuration from parsed (and config-file merged) arguments.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingUrl`] when no URL was supplied, or a
    /// URL error as in [`RunConfig::new`].
    pub fn from_args(args: &LoadArgs) -> AppResult<Self> {
        let url = args
            .url
            .as_deref()
            .ok_or_else(|| AppError::validation(ValidationError::MissingUrl))?;
        Ok(Self::new(url, args.requests, args.concurrency)?
            .with_mode(args.mode)
            .with_request_timeout(args.request_timeout))
    }

    #[must_use]
    pub fn with_mode(mut self, mode: AdmissionMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_request_timeout(mut self, request_timeout: Option<Duration>) -> Self {
        self.request_timeout = request_timeout;
        self
    }

    #[must_use]
    pub const fn target_url(&self) -> &Url {
        &self.target_url
    }

    #[must_use]
    pub const fn total_requests(&self) -> PositiveU64 {
        self.total_requests
    }

    #[must_use]
    pub const fn concurrency(&self) -> PositiveUsize {
        self.concurrency
    }

    #[must_use]
    pub const fn mode(&self) -> AdmissionMode {
        self.mode
    }

    #[must_use]
    pub const fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout
    }
}

fn parse_target_url(raw: &str) -> AppResult<Url> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation(ValidationError::MissingUrl));
    }
    let url = Url::parse(trimmed).map_err(|err| {
        AppError::http(HttpError::InvalidUrl {
            url: trimmed.to_owned(),
            source: err,
        })
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(AppError::http(HttpError::UnsupportedScheme {
            scheme: scheme.to_owned(),
        })),
    }
}
