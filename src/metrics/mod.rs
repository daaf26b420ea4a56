//! Per-request outcomes and their aggregation into a run report.
mod collector;
mod types;


pub use collector::Aggregator;
pub use types::{Report, RequestOutcome, SUCCESS_STATUS, TRANSPORT_FAILURE_STATUS};
