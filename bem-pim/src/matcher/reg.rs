use std::{fmt, num::NonZeroUsize, sync::Mutex};

use bem_slo::{errors, Result};
use lru::LruCache;
use regex::{Regex, RegexBuilder};

use super::Matcher;

/// Multi-line regex matcher keeping the most recently compiled patterns.
pub struct Regexp {
    lru: Mutex<LruCache<String, Regex>>,
}

impl Regexp {
    pub fn new(cache_size: usize) -> Self {
        Self {
            lru: Mutex::new(LruCache::new(
                NonZeroUsize::new(cache_size).unwrap_or(NonZeroUsize::MIN),
            )),
        }
    }

    fn compile(&self, pattern: &str) -> Result<Regex> {
        {
            let mut rlru = self
                .lru
                .lock()
                .map_err(|err| errors::anyhow(anyhow::anyhow!("{err}")))?;
            if let Some(reg) = rlru.get(pattern) {
                return Ok(reg.clone());
            }
        };

        let reg = build_regex(pattern)?;
        {
            let mut wlru = self
                .lru
                .lock()
                .map_err(|err| errors::anyhow(anyhow::anyhow!("{err}")))?;
            wlru.put(pattern.to_owned(), reg.clone());
        };
        Ok(reg)
    }
}

impl Default for Regexp {
    fn default() -> Self {
        Self::new(64)
    }
}

impl fmt::Debug for Regexp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Regexp").finish()
    }
}

impl Matcher for Regexp {
    fn find_all(&self, pattern: &str, haystack: &str) -> Result<Vec<String>> {
        let reg = self.compile(pattern)?;
        Ok(reg
            .find_iter(haystack)
            .map(|m| m.as_str().to_owned())
            .collect())
    }
}

/// `^` and `$` anchor at every line of the haystack; no other flags.
fn build_regex(pattern: &str) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .multi_line(true)
        .build()
        .map_err(errors::pattern_compile)
}

#[cfg(test)]
mod tests {
    use bem_slo::errors::Code;

    use super::*;

    #[test]
    fn anchors_per_line() {
        let m = Regexp::default();
        assert_eq!(
            m.find_all(r"^\.block$", ".block\n.block__elem\n.block").unwrap(),
            vec![".block", ".block"]
        );
    }

    #[test]
    fn dot_stops_at_newline() {
        let m = Regexp::default();
        assert_eq!(
            m.find_all(r"^\..*$", ".block\n.block__elem").unwrap(),
            vec![".block", ".block__elem"]
        );
    }

    #[test]
    fn case_sensitive() {
        let m = Regexp::default();
        assert!(m.find_all(r"^\.block$", ".Block").unwrap().is_empty());
    }

    #[test]
    fn malformed() {
        let m = Regexp::default();
        let err = m.find_all(r"^\.block(", ".block").unwrap_err();
        assert!(matches!(Code::from(err), Code::PatternCompile(_)));
    }

    #[test]
    fn cached() {
        let m = Regexp::new(1);
        assert_eq!(m.find_all(r"^\.a$", ".a").unwrap(), vec![".a"]);
        assert_eq!(m.find_all(r"^\.a$", ".a\n.a").unwrap().len(), 2);
        assert_eq!(m.find_all(r"^\.b$", ".a").unwrap().len(), 0);
        assert_eq!(m.lru.lock().unwrap().len(), 1);
    }

    #[test]
    fn zero_cache_size() {
        let m = Regexp::new(0);
        assert_eq!(m.find_all(r"^\.a$", ".a").unwrap(), vec![".a"]);
    }
}
