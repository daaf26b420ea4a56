pub(crate) const DEFAULT_USER_AGENT: &str = concat!("loadshot/", env!("CARGO_PKG_VERSION"));

pub(super) const DEFAULT_REQUESTS: &str = "1";
pub(super) const DEFAULT_CONCURRENCY: &str = "1";
