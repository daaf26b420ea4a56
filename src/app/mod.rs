//! Run orchestration: validated run configuration, the dispatch/aggregate
//! pipeline, and report rendering.
mod plan;
mod runner;
mod summary;


pub use plan::RunConfig;
pub use runner::run_load;
pub use summary::{render_json, render_report, render_text};
