//! CLI argument definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "surfrank")]
#[command(
    author,
    version,
    about = "Estimate PageRank for a directory of linked HTML pages"
)]
pub struct Cli {
    /// Directory containing the HTML corpus
    pub corpus: PathBuf,

    /// Damping factor, strictly between 0 and 1
    #[arg(short, long)]
    pub damping: Option<f64>,

    /// Number of pages visited by the sampling estimator
    #[arg(short = 'n', long)]
    pub samples: Option<usize>,

    /// Seed for the sampling estimator
    #[arg(long)]
    pub seed: Option<u64>,

    /// Convergence threshold for the iterative estimator
    #[arg(long)]
    pub tolerance: Option<f64>,

    /// Iteration cap for the iterative estimator
    #[arg(long)]
    pub max_iterations: Option<usize>,

    /// Glob pattern selecting corpus documents
    #[arg(long)]
    pub pattern: Option<String>,

    /// Include documents in subdirectories
    #[arg(short, long)]
    pub recursive: bool,

    /// Config file (defaults to the user config directory)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "cli")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Cli,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal() {
        let cli = Cli::try_parse_from(["surfrank", "corpus0"]).unwrap();
        assert_eq!(cli.corpus, PathBuf::from("corpus0"));
        assert_eq!(cli.format, OutputFormat::Cli);
        assert!(cli.damping.is_none());
    }

    #[test]
    fn test_parse_overrides() {
        let cli = Cli::try_parse_from([
            "surfrank",
            "corpus1",
            "--damping",
            "0.5",
            "-n",
            "200",
            "--seed",
            "3",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.damping, Some(0.5));
        assert_eq!(cli.samples, Some(200));
        assert_eq!(cli.seed, Some(3));
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_wrong_arity() {
        assert!(Cli::try_parse_from(["surfrank"]).is_err());
        assert!(Cli::try_parse_from(["surfrank", "a", "b"]).is_err());
    }
}
