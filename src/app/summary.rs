use std::collections::BTreeMap;

use serde::Serialize;

use crate::args::OutputFormat;
use crate::error::AppResult;
use crate::metrics::Report;

/// Renders `report` in the requested output format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_report(report: &Report, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => render_json(report),
    }
}

#[must_use]
pub fn render_text(report: &Report) -> String {
    let mut lines = Vec::with_capacity(report.status_histogram.len().saturating_add(5));
    lines.push("Relatório:".to_owned());
    lines.push(format!(
        "Tempo total gasto na execução: {:?}",
        report.total_elapsed
    ));
    lines.push(format!(
        "Quantidade total de requests realizados: {}",
        report.total_requests
    ));
    lines.push(format!(
        "Quantidade de requests com status HTTP 200: {}",
        report.success_count
    ));
    lines.push("Distribuição de outros códigos de status HTTP:".to_owned());
    for (status, count) in &report.status_histogram {
        lines.push(format!("  {}: {}", status, count));
    }
    lines.join("\n")
}

#[derive(Debug, Serialize)]
struct JsonReport {
    total_elapsed_ms: u128,
    total_requests: u64,
    success_count: u64,
    failure_count: u64,
    status_histogram: BTreeMap<String, u64>,
    total_response_time_ms: u128,
    average_response_time_ms: u128,
}

impl From<&Report> for JsonReport {
    fn from(report: &Report) -> Self {
        Self {
            total_elapsed_ms: report.total_elapsed.as_millis(),
            total_requests: report.total_requests,
            success_count: report.success_count,
            failure_count: report.failure_count(),
            status_histogram: report
                .status_histogram
                .iter()
                .map(|(status, count)| (status.to_string(), *count))
                .collect(),
            total_response_time_ms: report.total_response_time.as_millis(),
            average_response_time_ms: report.average_response_time().as_millis(),
        }
    }
}

/// Renders `report` as a single JSON object.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json(report: &Report) -> AppResult<String> {
    Ok(serde_json::to_string(&JsonReport::from(report))?)
}
