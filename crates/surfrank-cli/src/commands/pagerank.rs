//! PageRank computation command

use crate::app::Cli;
use crate::output::{self, RankReport};
use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use surfrank_core::{
    build_graph, iterate_rank_with, max_deviation, sample_rank, RankConfig,
};

/// Crawl the corpus, run both estimators and print the results
pub fn run(cli: &Cli) -> Result<()> {
    let config = resolve_config(cli)?;
    config.validate()?;

    let graph = build_graph(&cli.corpus, &config.scan_options())?;
    tracing::info!(
        "Ranking {} pages with {} links from {}",
        graph.len(),
        graph.link_count(),
        cli.corpus.display()
    );

    let seed = config.seed.unwrap_or_else(rand::random);
    tracing::debug!("Sampler seed: {}", seed);
    let mut rng = StdRng::seed_from_u64(seed);
    let sampling = sample_rank(&graph, config.damping, config.samples, &mut rng)?;

    let convergence = iterate_rank_with(&graph, config.damping, &config.iteration_options())?;

    let report = RankReport {
        max_deviation: max_deviation(&sampling, &convergence.ranks),
        samples: config.samples,
        seed,
        iterations: convergence.iterations,
        sampling,
        iteration: convergence.ranks,
    };

    print!("{}", output::format_report(&report, cli.format, cli.verbose));

    Ok(())
}

/// Layer settings: defaults < config file < environment < command line
fn resolve_config(cli: &Cli) -> Result<RankConfig> {
    let config = match &cli.config {
        Some(path) => RankConfig::load_from(path)?,
        None => RankConfig::load()?,
    };
    let mut config = config.with_env_overrides()?;

    if let Some(damping) = cli.damping {
        config.damping = damping;
    }
    if let Some(samples) = cli.samples {
        config.samples = samples;
    }
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(tolerance) = cli.tolerance {
        config.tolerance = tolerance;
    }
    if let Some(max_iterations) = cli.max_iterations {
        config.max_iterations = max_iterations;
    }
    if let Some(pattern) = &cli.pattern {
        config.pattern = pattern.clone();
    }
    if cli.recursive {
        config.recursive = true;
    }

    Ok(config)
}
