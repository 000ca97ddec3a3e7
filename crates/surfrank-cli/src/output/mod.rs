//! Output formatters

pub mod json;
pub mod terminal;

use crate::app::OutputFormat;
use serde::Serialize;
use surfrank_core::RankMap;

/// Results of one run of both estimators
#[derive(Debug, Serialize)]
pub struct RankReport {
    pub sampling: RankMap,
    pub iteration: RankMap,
    pub samples: usize,
    pub seed: u64,
    pub iterations: usize,
    /// Largest per-page gap between the two estimates
    pub max_deviation: f64,
}

/// Format a rank report
pub fn format_report(report: &RankReport, format: OutputFormat, verbose: bool) -> String {
    match format {
        OutputFormat::Json => json::format_report(report),
        OutputFormat::Cli => terminal::format_report(report, verbose),
    }
}
