//! Link extraction from HTML documents

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref ANCHOR_HREF_RE: Regex =
        Regex::new(r#"<a\s+(?:[^>]*?)href="([^"]*)""#).unwrap();
}

/// Extract the `href` target of every anchor tag, in document order.
///
/// Targets are returned verbatim; filtering to corpus members happens when the
/// graph is built.
pub fn extract_links(content: &str) -> Vec<String> {
    ANCHOR_HREF_RE
        .captures_iter(content)
        .filter_map(|cap| cap.get(1))
        .map(|target| target.as_str().to_string())
        .collect()
}
