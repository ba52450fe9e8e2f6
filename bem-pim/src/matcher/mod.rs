pub mod reg;

use bem_slo::Result;
use mockall::automock;

#[automock]
pub trait Matcher {
    /// Every non-overlapping match of `pattern` in `haystack`, in order.
    /// A malformed pattern is a `Code::PatternCompile` error.
    fn find_all(&self, pattern: &str, haystack: &str) -> Result<Vec<String>>;
}
