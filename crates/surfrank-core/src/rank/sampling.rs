//! Markov chain sampling estimator

use super::{ensure_non_empty, transition_model, validate_damping, RankMap};
use crate::error::{Result, SurfRankError};
use crate::graph::{LinkGraph, PageId};
use rand::distributions::{Distribution as _, WeightedIndex};
use rand::Rng;

/// Default walk length
pub const DEFAULT_SAMPLES: usize = 10_000;

/// Estimate PageRank as visit frequencies of a random walk of `samples` pages.
///
/// The walk starts on a uniformly chosen page and then follows
/// [`transition_model`]. Every visited page, including the first, counts.
/// The random source is supplied by the caller; seed it for reproducible runs.
pub fn sample_rank<R: Rng>(
    graph: &LinkGraph,
    damping: f64,
    samples: usize,
    rng: &mut R,
) -> Result<RankMap> {
    validate_damping(damping)?;
    ensure_non_empty(graph)?;
    if samples == 0 {
        return Err(SurfRankError::InvalidInput(
            "sample count must be at least 1".to_string(),
        ));
    }

    let pages: Vec<&PageId> = graph.pages().collect();

    // One weighted table per page, indexed like `pages`
    let steps = pages
        .iter()
        .map(|page| {
            let dist = transition_model(graph, page, damping)?;
            WeightedIndex::new(dist.values().copied()).map_err(|e| {
                SurfRankError::InvalidInput(format!("bad transition weights for '{}': {}", page, e))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let mut visits = vec![0usize; pages.len()];
    let mut current = rng.gen_range(0..pages.len());
    visits[current] += 1;

    for _ in 1..samples {
        current = steps[current].sample(rng);
        visits[current] += 1;
    }

    tracing::debug!(
        "Sampled {} steps over {} pages (damping {})",
        samples,
        pages.len(),
        damping
    );

    let total = samples as f64;
    Ok(pages
        .into_iter()
        .zip(visits)
        .map(|(page, count)| (page.clone(), count as f64 / total))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::LinkMap;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn graph(edges: &[(&str, &[&str])]) -> LinkGraph {
        let links: LinkMap = edges
            .iter()
            .map(|(p, ts)| (p.to_string(), ts.iter().map(|t| t.to_string()).collect()))
            .collect();
        LinkGraph::new(links).unwrap()
    }

    #[test]
    fn test_single_sample_is_one_hot() {
        let g = graph(&[("A", &["B"]), ("B", &["A", "C"]), ("C", &[])]);
        let mut rng = StdRng::seed_from_u64(7);
        let ranks = sample_rank(&g, 0.85, 1, &mut rng).unwrap();

        assert_eq!(ranks.len(), 3);
        assert_eq!(ranks.values().filter(|&&v| v == 1.0).count(), 1);
        assert_eq!(ranks.values().filter(|&&v| v == 0.0).count(), 2);
    }

    #[test]
    fn test_single_page_graph() {
        let g = graph(&[("A", &[])]);
        let mut rng = StdRng::seed_from_u64(1);
        let ranks = sample_rank(&g, 0.85, 500, &mut rng).unwrap();
        assert_eq!(ranks["A"], 1.0);
    }

    #[test]
    fn test_sums_to_one() {
        let g = graph(&[("1", &["2"]), ("2", &["1", "3"]), ("3", &["2", "4"]), ("4", &["2"])]);
        let mut rng = StdRng::seed_from_u64(42);
        let ranks = sample_rank(&g, 0.85, 10_000, &mut rng).unwrap();

        let total: f64 = ranks.values().sum();
        assert!((total - 1.0).abs() < 1e-6, "sum={}", total);
        assert!(ranks.values().all(|&v| (0.0..=1.0).contains(&v)));
    }

    #[test]
    fn test_same_seed_same_result() {
        let g = graph(&[("a", &["b"]), ("b", &["c"]), ("c", &["a", "b"])]);
        let first = sample_rank(&g, 0.85, 2_000, &mut StdRng::seed_from_u64(9)).unwrap();
        let second = sample_rank(&g, 0.85, 2_000, &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_long_walk_does_not_exhaust_stack() {
        let g = graph(&[("a", &["b"]), ("b", &["a"])]);
        let mut rng = StdRng::seed_from_u64(3);
        let ranks = sample_rank(&g, 0.85, 1_000_000, &mut rng).unwrap();
        assert!((ranks["a"] - 0.5).abs() < 0.01);
    }

    #[test]
    fn test_invalid_inputs() {
        let g = graph(&[("A", &[])]);
        let mut rng = StdRng::seed_from_u64(0);

        assert!(matches!(
            sample_rank(&g, 0.85, 0, &mut rng),
            Err(SurfRankError::InvalidInput(_))
        ));
        assert!(matches!(
            sample_rank(&LinkGraph::default(), 0.85, 10, &mut rng),
            Err(SurfRankError::InvalidInput(_))
        ));
        assert!(matches!(
            sample_rank(&g, 0.0, 10, &mut rng),
            Err(SurfRankError::InvalidInput(_))
        ));
    }
}
