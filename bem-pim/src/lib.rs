//! Checks a set of regular expressions against a corpus of subject lines
//! that should and should not match, producing one [`Verdict`] per pattern.

pub mod corpus;
pub mod evaluator;
pub mod matcher;
pub mod patterns;
pub mod verdict;

pub use corpus::{load_subjects, parse_subjects, Corpus, SUBJECT_MARKER};
pub use evaluator::{evaluate, evaluate_all};
pub use matcher::{reg::Regexp, Matcher};
pub use patterns::{load_patterns, parse_patterns, PATTERN_MARKER};
pub use verdict::{Outcome, Summary, Verdict};

/// Keeps the trimmed lines of `content` that start with `marker`, in order.
pub(crate) fn data_lines(content: &str, marker: char) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with(marker))
        .map(str::to_owned)
        .collect()
}

pub(crate) fn read_source(path: &str) -> bem_slo::Result<String> {
    std::fs::read_to_string(path)
        .map_err(|err| bem_slo::errors::resource_unavailable(path, err))
}
