//! Error types for surfrank

use thiserror::Error;

/// Result type alias using SurfRankError
pub type Result<T> = std::result::Result<T, SurfRankError>;

/// Exit codes for CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const CORPUS_ERROR: i32 = 2;
    pub const INVALID_INPUT: i32 = 3;
    pub const CONVERGENCE_ERROR: i32 = 4;
}

/// Main error type for surfrank
#[derive(Debug, Error)]
pub enum SurfRankError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Corpus error: {0}")]
    Corpus(String),

    #[error("PageRank did not converge after {iterations} iterations (last delta {delta:.6})")]
    Convergence { iterations: usize, delta: f64 },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Walk directory error: {0}")]
    WalkDir(#[from] walkdir::Error),

    #[error("Glob pattern error: {0}")]
    GlobPattern(#[from] glob::PatternError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl SurfRankError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Corpus(_) | Self::WalkDir(_) => exit_codes::CORPUS_ERROR,
            Self::InvalidInput(_) | Self::Config(_) | Self::GlobPattern(_) => {
                exit_codes::INVALID_INPUT
            }
            Self::Convergence { .. } => exit_codes::CONVERGENCE_ERROR,
            _ => exit_codes::GENERAL_ERROR,
        }
    }
}
