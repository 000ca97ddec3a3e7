//! Power iteration estimator
//!
//! Applies the PageRank recurrence
//!
//! ```text
//! PR(p) = (1 - d) / N + d * Σ PR(i) / L(i)     over pages i linking to p
//! ```
//!
//! to every page at once until no page moves by `tolerance` or more. A
//! dangling page counts as linking to every page, so its rank is spread
//! evenly. No randomness is involved: identical inputs give identical output.

use super::{ensure_non_empty, validate_damping, RankMap};
use crate::error::{Result, SurfRankError};
use crate::graph::{LinkGraph, PageId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default per-page convergence threshold
pub const DEFAULT_TOLERANCE: f64 = 0.001;

/// Default iteration cap
pub const DEFAULT_MAX_ITERATIONS: usize = 500;

/// Stopping rules for power iteration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IterationOptions {
    /// Stop once every page changes by less than this
    pub tolerance: f64,
    /// Fail with a convergence error after this many passes
    pub max_iterations: usize,
}

impl Default for IterationOptions {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl IterationOptions {
    pub fn validate(&self) -> Result<()> {
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(SurfRankError::InvalidInput(format!(
                "tolerance must be a positive number, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(SurfRankError::InvalidInput(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Converged ranks with the work it took to get there
#[derive(Debug, Clone, PartialEq)]
pub struct Convergence {
    pub ranks: RankMap,
    /// Passes performed, including the final one
    pub iterations: usize,
    /// Largest per-page change on the final pass
    pub delta: f64,
}

/// Iterate to the PageRank fixed point with the default iteration cap
pub fn iterate_rank(graph: &LinkGraph, damping: f64, tolerance: f64) -> Result<RankMap> {
    let options = IterationOptions {
        tolerance,
        ..IterationOptions::default()
    };
    iterate_rank_with(graph, damping, &options).map(|c| c.ranks)
}

/// Iterate to the PageRank fixed point.
///
/// Returns [`SurfRankError::Convergence`] if `options.max_iterations` passes
/// are not enough to get every page's change under `options.tolerance`.
pub fn iterate_rank_with(
    graph: &LinkGraph,
    damping: f64,
    options: &IterationOptions,
) -> Result<Convergence> {
    validate_damping(damping)?;
    ensure_non_empty(graph)?;
    options.validate()?;

    let pages: Vec<&PageId> = graph.pages().collect();
    let index: HashMap<&str, usize> = pages
        .iter()
        .enumerate()
        .map(|(i, p)| (p.as_str(), i))
        .collect();

    let outbound: Vec<Vec<usize>> = graph
        .iter()
        .map(|(_, targets)| targets.iter().map(|t| index[t.as_str()]).collect())
        .collect();

    let n = pages.len() as f64;
    let teleport = (1.0 - damping) / n;

    let mut ranks = vec![1.0 / n; pages.len()];
    let mut next = vec![0.0; pages.len()];
    let mut delta = f64::INFINITY;

    for iteration in 1..=options.max_iterations {
        let dangling_mass: f64 = outbound
            .iter()
            .zip(&ranks)
            .filter(|(targets, _)| targets.is_empty())
            .map(|(_, rank)| rank)
            .sum();
        next.fill(teleport + damping * dangling_mass / n);

        for (source, targets) in outbound.iter().enumerate() {
            if targets.is_empty() {
                continue;
            }
            let share = damping * ranks[source] / targets.len() as f64;
            for &target in targets {
                next[target] += share;
            }
        }

        delta = ranks
            .iter()
            .zip(&next)
            .map(|(old, new)| (old - new).abs())
            .fold(0.0, f64::max);

        std::mem::swap(&mut ranks, &mut next);

        tracing::trace!("iteration {}: delta {:.6}", iteration, delta);

        if delta < options.tolerance {
            tracing::debug!(
                "Power iteration converged after {} iterations (delta {:.6})",
                iteration,
                delta
            );
            let ranks = pages
                .into_iter()
                .cloned()
                .zip(ranks)
                .collect();
            return Ok(Convergence {
                ranks,
                iterations: iteration,
                delta,
            });
        }
    }

    tracing::warn!(
        "Power iteration stopped at the cap of {} iterations (delta {:.6})",
        options.max_iterations,
        delta
    );
    Err(SurfRankError::Convergence {
        iterations: options.max_iterations,
        delta,
    })
}
