//! CLI command handlers

pub mod pagerank;
