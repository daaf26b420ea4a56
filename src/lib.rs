//! Core library for the `loadshot` CLI.
//!
//! A run is described by an immutable [`app::RunConfig`]. The dispatcher in
//! [`http`] issues exactly the configured number of GET requests through a
//! [`http::Transport`], never exceeding the concurrency cap, and streams one
//! [`metrics::RequestOutcome`] per request to the [`metrics::Aggregator`],
//! which folds them into a [`metrics::Report`].
pub mod app;
pub mod args;
pub mod config;
pub mod error;
pub mod http;
pub mod metrics;
