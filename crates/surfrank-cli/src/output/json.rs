//! JSON output formatter

use super::RankReport;

pub fn format_report(report: &RankReport) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string()) + "\n"
}
