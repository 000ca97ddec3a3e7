//! Terminal output formatter

use super::RankReport;
use surfrank_core::RankMap;

pub fn format_report(report: &RankReport, verbose: bool) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "PageRank Results from Sampling (n = {})\n",
        report.samples
    ));
    push_ranks(&mut output, &report.sampling);

    output.push_str("PageRank Results from Iteration\n");
    push_ranks(&mut output, &report.iteration);

    if verbose {
        output.push_str(&format!("Seed: {}\n", report.seed));
        output.push_str(&format!("Iterations: {}\n", report.iterations));
        output.push_str(&format!("Max deviation: {:.4}\n", report.max_deviation));
    }

    output
}

// RankMap is ordered, so pages come out sorted
fn push_ranks(output: &mut String, ranks: &RankMap) {
    for (page, rank) in ranks {
        output.push_str(&format!("  {}: {:.4}\n", page, rank));
    }
}
