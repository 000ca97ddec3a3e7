//! Random surfer transition model

use super::{ensure_non_empty, validate_damping, Distribution};
use crate::error::{Result, SurfRankError};
use crate::graph::LinkGraph;

/// Distribution over every page of `graph` for the surfer's next move from `page`.
///
/// With probability `damping` the surfer follows one of `page`'s links chosen
/// uniformly; otherwise it jumps to any page uniformly. A dangling page jumps
/// uniformly with probability 1.
pub fn transition_model(graph: &LinkGraph, page: &str, damping: f64) -> Result<Distribution> {
    validate_damping(damping)?;
    ensure_non_empty(graph)?;

    let targets = graph
        .links(page)
        .ok_or_else(|| SurfRankError::InvalidInput(format!("unknown page '{}'", page)))?;

    let n = graph.len() as f64;

    if targets.is_empty() {
        let uniform = 1.0 / n;
        return Ok(graph.pages().map(|p| (p.clone(), uniform)).collect());
    }

    let base = (1.0 - damping) / n;
    let share = damping / targets.len() as f64;

    Ok(graph
        .pages()
        .map(|p| {
            let weight = if targets.contains(p) { base + share } else { base };
            (p.clone(), weight)
        })
        .collect())
}
