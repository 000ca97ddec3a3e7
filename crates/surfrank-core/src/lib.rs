//! Surfrank Core Library
//!
//! PageRank estimation for a small corpus of linked documents.
//!
//! # Features
//! - Corpus crawling: HTML documents to an immutable [`LinkGraph`]
//! - Random surfer transition model with uniform fallback for dangling pages
//! - Sampling estimator driven by an injected, seedable random source
//! - Deterministic power iteration with a bounded iteration count

pub mod config;
pub mod error;
pub mod graph;
pub mod rank;

pub use config::RankConfig;
pub use error::{Result, SurfRankError};
pub use graph::{build_graph, extract_links, LinkGraph, LinkMap, PageId, ScanOptions};
pub use rank::{
    iterate_rank, iterate_rank_with, max_deviation, sample_rank, transition_model, Convergence,
    Distribution, IterationOptions, RankMap,
};

/// Default config directory name
pub const CONFIG_DIR_NAME: &str = "surfrank";
