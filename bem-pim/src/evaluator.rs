use tracing::{debug, warn};

use crate::{Corpus, Matcher, Outcome, Verdict};

/// Checks one pattern against `corpus`, expecting exactly `expected` to match.
///
/// Any matcher error, a malformed pattern in particular, becomes an
/// [`Outcome::Error`] verdict rather than an empty match list.
pub fn evaluate<M: Matcher + ?Sized>(
    matcher: &M,
    pattern: &str,
    corpus: &str,
    expected: &[String],
) -> Verdict {
    match matcher.find_all(pattern, corpus) {
        Ok(actual) => Verdict::classify(pattern, actual, expected),
        Err(err) => Verdict::error(pattern, err.to_string()),
    }
}

/// Evaluates every pattern in order; one bad pattern never stops the rest.
pub fn evaluate_all<M: Matcher + ?Sized>(
    matcher: &M,
    patterns: &[String],
    corpus: &Corpus,
) -> Vec<Verdict> {
    patterns
        .iter()
        .map(|pattern| {
            let verdict =
                evaluate(matcher, pattern, &corpus.text, &corpus.expected);
            match &verdict.outcome {
                Outcome::Pass => debug!("pass {}", pattern),
                Outcome::Fail => warn!(
                    "fail {}: {} missing, {} spurious",
                    pattern,
                    verdict.missing.len(),
                    verdict.spurious.len()
                ),
                Outcome::Error(msg) => warn!("error {}: {}", pattern, msg),
            }
            verdict
        })
        .collect()
}
