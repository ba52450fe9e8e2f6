use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Pass,
    Fail,
    /// The pattern could not be run, usually because it does not compile.
    /// Carries the error message.
    Error(String),
}

/// Result of checking one pattern against the corpus.
///
/// `missing` and `spurious` are distinct values. `missing` follows the order
/// of the expected lines, `spurious` the order of first match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub pattern: String,
    pub outcome: Outcome,
    pub actual: Vec<String>,
    pub missing: Vec<String>,
    pub spurious: Vec<String>,
}

impl Verdict {
    pub fn classify(
        pattern: &str,
        actual: Vec<String>,
        expected: &[String],
    ) -> Self {
        let missing = difference(expected, &actual);
        let spurious = difference(&actual, expected);
        let outcome = if missing.is_empty() && spurious.is_empty() {
            Outcome::Pass
        } else {
            Outcome::Fail
        };
        Self {
            pattern: pattern.to_owned(),
            outcome,
            actual,
            missing,
            spurious,
        }
    }

    pub fn error(pattern: &str, message: String) -> Self {
        Self {
            pattern: pattern.to_owned(),
            outcome: Outcome::Error(message),
            actual: Vec::new(),
            missing: Vec::new(),
            spurious: Vec::new(),
        }
    }

    pub fn passed(&self) -> bool {
        self.outcome == Outcome::Pass
    }

    pub fn failed(&self) -> bool {
        self.outcome == Outcome::Fail
    }

    pub fn errored(&self) -> bool {
        matches!(self.outcome, Outcome::Error(_))
    }
}

/// Distinct values of `left` absent from `right`, in `left` order.
fn difference(left: &[String], right: &[String]) -> Vec<String> {
    let right = right.iter().map(String::as_str).collect::<HashSet<_>>();
    let mut seen = HashSet::new();
    left.iter()
        .map(String::as_str)
        .filter(|v| !right.contains(v) && seen.insert(*v))
        .map(str::to_owned)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub errored: usize,
}

impl Summary {
    pub fn from_verdicts(verdicts: &[Verdict]) -> Self {
        verdicts.iter().fold(Self::default(), |mut acc, v| {
            acc.total += 1;
            match v.outcome {
                Outcome::Pass => acc.passed += 1,
                Outcome::Fail => acc.failed += 1,
                Outcome::Error(_) => acc.errored += 1,
            }
            acc
        })
    }

    pub fn all_passed(&self) -> bool {
        self.passed == self.total
    }
}
