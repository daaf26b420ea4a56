use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Unsupported URL scheme '{scheme}'. Use http or https.")]
    UnsupportedScheme { scheme: String },
    #[error("Failed to build HTTP client: {source}")]
    BuildClientFailed {
        #[source]
        source: reqwest::Error,
    },
}

/// A request that never produced a valid HTTP response.
#[derive(Debug, Error)]
pub enum TransportFailure {
    #[error("request timed out: {source}")]
    Timeout {
        #[source]
        source: reqwest::Error,
    },
    #[error("connection failed: {source}")]
    Connect {
        #[source]
        source: reqwest::Error,
    },
    #[error("request failed: {source}")]
    Request {
        #[source]
        source: reqwest::Error,
    },
    #[cfg(test)]
    #[error("I/O failure: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl TransportFailure {
    #[must_use]
    pub fn from_reqwest(source: reqwest::Error) -> Self {
        if source.is_timeout() {
            TransportFailure::Timeout { source }
        } else if source.is_connect() {
            TransportFailure::Connect { source }
        } else {
            TransportFailure::Request { source }
        }
    }

    /// Short label used in diagnostic events.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            TransportFailure::Timeout { .. } => "timeout",
            TransportFailure::Connect { .. } => "connect",
            TransportFailure::Request { .. } => "request",
            #[cfg(test)]
            TransportFailure::Io { .. } => "io",
        }
    }
}
