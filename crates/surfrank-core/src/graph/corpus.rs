//! Corpus crawling: directory of HTML documents -> link graph

use super::{extract_links, scan_documents, LinkGraph, LinkMap, ScanOptions};
use crate::error::{Result, SurfRankError};
use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};

/// Crawl `root` and build the link graph of its documents.
///
/// Each matching document becomes a page. Link targets are resolved against
/// the linking document's folder; links to itself and links to anything
/// outside the corpus are dropped.
pub fn build_graph(root: &Path, options: &ScanOptions) -> Result<LinkGraph> {
    if !root.is_dir() {
        return Err(SurfRankError::Corpus(format!(
            "{} is not a readable directory",
            root.display()
        )));
    }

    let documents = scan_documents(root, options)?;
    if documents.is_empty() {
        return Err(SurfRankError::Corpus(format!(
            "no documents matching '{}' in {}",
            options.pattern,
            root.display()
        )));
    }

    let mut links = LinkMap::new();
    for doc in &documents {
        let content = std::fs::read_to_string(&doc.path).map_err(|e| {
            SurfRankError::Corpus(format!("failed to read {}: {}", doc.path.display(), e))
        })?;
        let targets: BTreeSet<String> = extract_links(&content)
            .iter()
            .filter_map(|href| resolve_link(href, &doc.relative_path))
            .collect();
        tracing::trace!("{}: {} resolved links", doc.relative_path, targets.len());
        links.insert(doc.relative_path.clone(), targets);
    }

    let graph = LinkGraph::from_links(links);
    tracing::debug!(
        "Built graph from {}: {} pages, {} links",
        root.display(),
        graph.len(),
        graph.link_count()
    );

    Ok(graph)
}

/// Resolve `href` against the folder of `source`, giving a corpus-relative path.
///
/// Returns `None` for links that climb above the corpus root.
fn resolve_link(href: &str, source: &str) -> Option<String> {
    let folder = Path::new(source).parent().unwrap_or(Path::new(""));
    let joined = folder.join(href);

    let mut resolved = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::ParentDir => {
                if !resolved.pop() {
                    return None;
                }
            }
            Component::CurDir => {}
            other => resolved.push(other.as_os_str()),
        }
    }

    Some(resolved.to_string_lossy().to_string())
}
