use bem_slo::Result;
use tracing::debug;

use crate::{data_lines, read_source};

/// Candidate patterns are anchored at the start of a line.
pub const PATTERN_MARKER: char = '^';

/// Filters `content` down to its pattern lines, trimmed, in source order.
pub fn parse_patterns(content: &str) -> Vec<String> {
    data_lines(content, PATTERN_MARKER)
}

/// Reads `path` and parses it with [`parse_patterns`]. An unreadable file
/// is a `Code::ResourceUnavailable` error.
pub fn load_patterns(path: &str) -> Result<Vec<String>> {
    let content = read_source(path)?;
    let patterns = parse_patterns(&content);
    debug!("loaded {} patterns from {}", patterns.len(), path);
    Ok(patterns)
}
