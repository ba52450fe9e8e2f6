use bem_slo::Result;
use tracing::debug;

use crate::{data_lines, read_source};

/// Leading character of a subject line; anything else is prose.
pub const SUBJECT_MARKER: char = '.';

/// Filters `content` down to its subject lines, trimmed, in source order.
pub fn parse_subjects(content: &str) -> Vec<String> {
    data_lines(content, SUBJECT_MARKER)
}

/// Reads `path` and parses it with [`parse_subjects`]. An unreadable file
/// is a `Code::ResourceUnavailable` error.
pub fn load_subjects(path: &str) -> Result<Vec<String>> {
    let content = read_source(path)?;
    let subjects = parse_subjects(&content);
    debug!("loaded {} subjects from {}", subjects.len(), path);
    Ok(subjects)
}

/// The text every pattern is matched against, and the lines it must match.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Corpus {
    /// should-match subjects then should-not-match subjects, newline joined
    pub text: String,
    /// should-match subjects in source order
    pub expected: Vec<String>,
    /// both sources unfiltered, for display
    pub raw: String,
}

impl Corpus {
    pub fn load(pass: &str, fail: &str) -> Result<Self> {
        let pass_src = read_source(pass)?;
        let fail_src = read_source(fail)?;
        Ok(Self::from_sources(&pass_src, &fail_src))
    }

    pub fn from_sources(pass_src: &str, fail_src: &str) -> Self {
        let expected = parse_subjects(pass_src);
        let rejected = parse_subjects(fail_src);
        let text = expected
            .iter()
            .chain(rejected.iter())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n");
        let raw = [pass_src.trim_end(), fail_src.trim_end()].join("\n");
        debug!(
            "corpus built from {} matching and {} non matching subjects",
            expected.len(),
            rejected.len()
        );
        Self {
            text,
            expected,
            raw,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{env, fs, process};

    use bem_slo::errors::Code;

    use super::*;

    #[test]
    fn keeps_marked_lines() {
        let content = ".foo\n  \n# comment\n.bar  \n";
        assert_eq!(parse_subjects(content), vec![".foo", ".bar"]);
    }

    #[test]
    fn trims_before_marker_check() {
        let content = "   .indented\r\nblock\n\t.tab\t\n";
        assert_eq!(parse_subjects(content), vec![".indented", ".tab"]);
    }

    #[test]
    fn empty_source() {
        assert!(parse_subjects("").is_empty());
        assert!(parse_subjects("\n\n   \n").is_empty());
    }

    #[test]
    fn corpus_order() {
        let corpus = Corpus::from_sources(
            "# should match\n.block\n.block__elem\n",
            "# should not match\n.Block\n",
        );
        assert_eq!(corpus.text, ".block\n.block__elem\n.Block");
        assert_eq!(corpus.expected, vec![".block", ".block__elem"]);
        assert_eq!(
            corpus.raw,
            "# should match\n.block\n.block__elem\n# should not match\n.Block"
        );
    }

    #[test]
    fn shared_lines_kept_per_source() {
        let corpus = Corpus::from_sources(".block\n", ".block\n.x\n");
        assert_eq!(corpus.text, ".block\n.block\n.x");
        assert_eq!(corpus.expected, vec![".block"]);
    }

    #[test]
    fn load_missing_file() {
        let err = load_subjects("/nonexistent/bem/test.pass").unwrap_err();
        match Code::from(err) {
            Code::ResourceUnavailable { path, .. } => {
                assert_eq!(path, "/nonexistent/bem/test.pass")
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn load_from_disk() {
        let dir = env::temp_dir();
        let pass = dir.join(format!("bem-corpus-{}.pass", process::id()));
        let fail = dir.join(format!("bem-corpus-{}.fail", process::id()));
        fs::write(&pass, ".block\n\nnot a subject\n").unwrap();
        fs::write(&fail, ".block--\n").unwrap();

        let corpus = Corpus::load(
            pass.to_str().unwrap(),
            fail.to_str().unwrap(),
        )
        .unwrap();
        assert_eq!(corpus.text, ".block\n.block--");
        assert_eq!(corpus.expected, vec![".block"]);

        fs::remove_file(&fail).unwrap();
        assert!(Corpus::load(
            pass.to_str().unwrap(),
            fail.to_str().unwrap()
        )
        .is_err());
        fs::remove_file(&pass).unwrap();
    }
}
