//! Configuration management

use crate::error::{Result, SurfRankError};
use crate::graph::ScanOptions;
use crate::rank::{
    validate_damping, IterationOptions, DEFAULT_DAMPING, DEFAULT_MAX_ITERATIONS, DEFAULT_SAMPLES,
    DEFAULT_TOLERANCE,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Ranking configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankConfig {
    /// Probability of following a link rather than teleporting
    #[serde(default = "default_damping")]
    pub damping: f64,

    /// Walk length for the sampling estimator
    #[serde(default = "default_samples")]
    pub samples: usize,

    /// Per-page convergence threshold for power iteration
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// Power iteration cap
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,

    /// Seed for the sampler; drawn from entropy when unset
    #[serde(default)]
    pub seed: Option<u64>,

    /// Glob pattern for corpus documents
    #[serde(default = "default_pattern")]
    pub pattern: String,

    /// Include documents in subdirectories of the corpus
    #[serde(default)]
    pub recursive: bool,
}

fn default_damping() -> f64 {
    DEFAULT_DAMPING
}

fn default_samples() -> usize {
    DEFAULT_SAMPLES
}

fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

fn default_max_iterations() -> usize {
    DEFAULT_MAX_ITERATIONS
}

fn default_pattern() -> String {
    crate::graph::DEFAULT_PATTERN.to_string()
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping: default_damping(),
            samples: default_samples(),
            tolerance: default_tolerance(),
            max_iterations: default_max_iterations(),
            seed: None,
            pattern: default_pattern(),
            recursive: false,
        }
    }
}

impl RankConfig {
    /// Load config from default path, falling back to defaults if absent
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load config from an explicit file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SurfRankError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        let config: RankConfig = serde_yaml::from_str(&content)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Get default config path
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(crate::CONFIG_DIR_NAME)
            .join("config.yml")
    }

    /// Apply `SURFRANK_DAMPING`, `SURFRANK_SAMPLES` and `SURFRANK_SEED`
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    fn with_overrides_from<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("SURFRANK_DAMPING") {
            self.damping = parse_env("SURFRANK_DAMPING", &value)?;
        }
        if let Some(value) = lookup("SURFRANK_SAMPLES") {
            self.samples = parse_env("SURFRANK_SAMPLES", &value)?;
        }
        if let Some(value) = lookup("SURFRANK_SEED") {
            self.seed = Some(parse_env("SURFRANK_SEED", &value)?);
        }
        Ok(self)
    }

    /// Check every field is usable before any ranking starts
    pub fn validate(&self) -> Result<()> {
        validate_damping(self.damping)?;
        if self.samples == 0 {
            return Err(SurfRankError::InvalidInput(
                "samples must be at least 1".to_string(),
            ));
        }
        self.iteration_options().validate()?;
        glob::Pattern::new(&self.pattern)?;
        Ok(())
    }

    pub fn iteration_options(&self) -> IterationOptions {
        IterationOptions {
            tolerance: self.tolerance,
            max_iterations: self.max_iterations,
        }
    }

    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            pattern: self.pattern.clone(),
            recursive: self.recursive,
            ..ScanOptions::default()
        }
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| SurfRankError::Config(format!("{} has an invalid value: '{}'", key, value)))
}
