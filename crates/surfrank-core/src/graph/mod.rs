//! Page link graph and corpus crawling

mod corpus;
mod link_extractor;
mod scanner;

pub use corpus::build_graph;
pub use link_extractor::extract_links;
pub use scanner::{scan_documents, ScanOptions, ScanResult, DEFAULT_PATTERN};

use crate::error::{Result, SurfRankError};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Page identifier (document path relative to the corpus root)
pub type PageId = String;

/// Raw adjacency mapping: page -> outbound neighbors
pub type LinkMap = BTreeMap<PageId, BTreeSet<PageId>>;

/// Immutable directed graph of pages and their outbound links.
///
/// Every link target is itself a page of the graph. Pages are kept in sorted
/// order, so iteration over pages is stable between runs.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "LinkMap", into = "LinkMap")]
pub struct LinkGraph {
    links: LinkMap,
}

impl LinkGraph {
    /// Build a graph, rejecting links to pages that are not in the graph
    pub fn new(links: LinkMap) -> Result<Self> {
        for (page, targets) in &links {
            if let Some(missing) = targets.iter().find(|t| !links.contains_key(*t)) {
                return Err(SurfRankError::InvalidInput(format!(
                    "page '{}' links to '{}', which is not in the graph",
                    page, missing
                )));
            }
        }
        Ok(Self { links })
    }

    /// Build a graph, dropping self links and links to unknown pages
    pub fn from_links(links: LinkMap) -> Self {
        let pages: BTreeSet<PageId> = links.keys().cloned().collect();
        let links = links
            .into_iter()
            .map(|(page, targets)| {
                let kept = targets
                    .into_iter()
                    .filter(|t| *t != page && pages.contains(t))
                    .collect();
                (page, kept)
            })
            .collect();
        Self { links }
    }

    /// Number of pages
    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Pages in sorted order
    pub fn pages(&self) -> impl Iterator<Item = &PageId> {
        self.links.keys()
    }

    pub fn contains(&self, page: &str) -> bool {
        self.links.contains_key(page)
    }

    /// Outbound neighbors of `page`, or `None` if the page is unknown
    pub fn links(&self, page: &str) -> Option<&BTreeSet<PageId>> {
        self.links.get(page)
    }

    /// Number of outbound links of `page` (0 for unknown pages)
    pub fn out_degree(&self, page: &str) -> usize {
        self.links.get(page).map(|t| t.len()).unwrap_or(0)
    }

    /// Pages without outbound links
    pub fn dangling_pages(&self) -> impl Iterator<Item = &PageId> {
        self.links
            .iter()
            .filter(|(_, targets)| targets.is_empty())
            .map(|(page, _)| page)
    }

    /// Total number of links in the graph
    pub fn link_count(&self) -> usize {
        self.links.values().map(|t| t.len()).sum()
    }

    /// Iterate over `(page, outbound neighbors)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&PageId, &BTreeSet<PageId>)> {
        self.links.iter()
    }
}

impl TryFrom<LinkMap> for LinkGraph {
    type Error = SurfRankError;

    fn try_from(links: LinkMap) -> Result<Self> {
        Self::new(links)
    }
}

impl From<LinkGraph> for LinkMap {
    fn from(graph: LinkGraph) -> Self {
        graph.links
    }
}
