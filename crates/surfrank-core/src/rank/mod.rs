//! PageRank estimation
//!
//! Two independent estimators over the same [`LinkGraph`]:
//! - [`sample_rank`]: visit frequencies of a simulated random surfer
//! - [`iterate_rank`]: deterministic power iteration to the fixed point
//!
//! Both return a [`RankMap`] holding every page of the graph, summing to 1.

mod iterative;
mod sampling;
mod transition;

pub use iterative::{
    iterate_rank, iterate_rank_with, Convergence, IterationOptions, DEFAULT_MAX_ITERATIONS,
    DEFAULT_TOLERANCE,
};
pub use sampling::{sample_rank, DEFAULT_SAMPLES};
pub use transition::transition_model;

use crate::error::{Result, SurfRankError};
use crate::graph::{LinkGraph, PageId};
use std::collections::BTreeMap;

/// Conventional damping factor
pub const DEFAULT_DAMPING: f64 = 0.85;

/// Estimated PageRank per page
pub type RankMap = BTreeMap<PageId, f64>;

/// Probability of moving to each page from the current one
pub type Distribution = BTreeMap<PageId, f64>;

/// Damping factor must lie strictly between 0 and 1
pub fn validate_damping(damping: f64) -> Result<()> {
    if damping.is_finite() && damping > 0.0 && damping < 1.0 {
        Ok(())
    } else {
        Err(SurfRankError::InvalidInput(format!(
            "damping factor must be in (0, 1), got {}",
            damping
        )))
    }
}

fn ensure_non_empty(graph: &LinkGraph) -> Result<()> {
    if graph.is_empty() {
        return Err(SurfRankError::InvalidInput(
            "cannot rank an empty graph".to_string(),
        ));
    }
    Ok(())
}

/// Largest per-page absolute difference between two rank mappings.
///
/// A page missing from one side counts as rank 0 there.
pub fn max_deviation(a: &RankMap, b: &RankMap) -> f64 {
    a.keys()
        .chain(b.keys())
        .map(|page| {
            let x = a.get(page).copied().unwrap_or(0.0);
            let y = b.get(page).copied().unwrap_or(0.0);
            (x - y).abs()
        })
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_damping() {
        assert!(validate_damping(0.85).is_ok());
        assert!(validate_damping(0.0).is_err());
        assert!(validate_damping(1.0).is_err());
        assert!(validate_damping(-0.5).is_err());
        assert!(validate_damping(f64::NAN).is_err());
    }

    #[test]
    fn test_max_deviation() {
        let a: RankMap = [("a".to_string(), 0.5), ("b".to_string(), 0.5)].into();
        let b: RankMap = [("a".to_string(), 0.7), ("b".to_string(), 0.3)].into();
        assert!((max_deviation(&a, &b) - 0.2).abs() < 1e-12);
        assert_eq!(max_deviation(&a, &a), 0.0);

        let partial: RankMap = [("a".to_string(), 0.5)].into();
        assert!((max_deviation(&a, &partial) - 0.5).abs() < 1e-12);
    }
}
