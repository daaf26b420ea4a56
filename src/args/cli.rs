use clap::Parser;
use std::time::Duration;

use super::defaults::{DEFAULT_CONCURRENCY, DEFAULT_REQUESTS};
use super::parsers::{parse_duration_arg, parse_positive_u64, parse_positive_usize};
use super::types::{AdmissionMode, OutputFormat, PositiveU64, PositiveUsize};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Fire a fixed number of GET requests at a URL with bounded concurrency and report latency and status codes."
)]
pub struct LoadArgs {
    /// Target URL for the load test
    #[arg(long, short)]
    pub url: Option<String>,

    /// Total number of requests to issue
    #[arg(
        long = "requests",
        short = 'n',
        default_value = DEFAULT_REQUESTS,
        value_parser = parse_positive_u64
    )]
    pub requests: PositiveU64,

    /// Maximum number of requests in flight at once
    #[arg(
        long = "concurrency",
        short = 'c',
        default_value = DEFAULT_CONCURRENCY,
        value_parser = parse_positive_usize
    )]
    pub concurrency: PositiveUsize,

    /// How requests are admitted: `batch` waits for each group to finish, `window` refills slots as they free
    #[arg(long = "mode", value_enum, default_value_t = AdmissionMode::Batch)]
    pub mode: AdmissionMode,

    /// Per-request timeout (supports ms/s/m/h). Unset means wait indefinitely.
    #[arg(long = "timeout", value_parser = parse_duration_arg)]
    pub request_timeout: Option<Duration>,

    /// Report format written to stdout
    #[arg(long = "output-format", value_enum, default_value_t = OutputFormat::Text)]
    pub output_format: OutputFormat,

    /// Enable verbose logging (sets log level to debug unless overridden by LOADSHOT_LOG/RUST_LOG)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Path to config file (TOML/JSON). Defaults to ./loadshot.toml or ./loadshot.json if present.
    #[arg(long)]
    pub config: Option<String>,
}
