//! One-shot pipeline: read lines, parse each, render the result.

use anyhow::Result;
use std::path::Path;

use crate::format::{self, OutputFormat};
use crate::pair::IdentifierPair;
use crate::reader;
use crate::url_model;

/// Parses every line in order. Lines are trimmed first; one pair per line,
/// absent pairs included.
pub fn parse_lines<S: AsRef<str>>(lines: &[S]) -> Vec<IdentifierPair> {
    lines
        .iter()
        .map(|line| url_model::parse_url(line.as_ref().trim()))
        .collect()
}

/// Reads `path`, extracts pairs and renders them in `format`.
///
/// A missing or unreadable file yields the empty rendering for `format`
/// (`""`, or `"[]"` for JSON).
pub fn extract_file(path: &Path, format: OutputFormat) -> Result<String> {
    let lines = reader::read_lines(path);
    let pairs = parse_lines(lines.as_slice());
    let complete = pairs.iter().filter(|p| p.complete().is_some()).count();
    tracing::debug!(
        "processed {} lines from {}: {} pairs",
        pairs.len(),
        path.display(),
        complete
    );
    format::render(&pairs, format)
}
