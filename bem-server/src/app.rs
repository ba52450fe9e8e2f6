use std::{
    fs,
    io::{self, Write},
};

use anyhow::Context;
use tracing::info;

use bem_pim::{evaluate_all, load_patterns, Corpus, Regexp, Summary};
use bem_slo::{errors, Result};

use crate::{AppConfig, Report};

/// How a completed run ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    Success,
    /// strict mode and at least one pattern failed or errored
    Mismatch,
}

impl Exit {
    pub fn code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::Mismatch => 5,
        }
    }
}

/// Loads the inputs once, evaluates every pattern and writes the report.
pub fn run(config: &AppConfig) -> Result<Exit> {
    config.check()?;

    let corpus = Corpus::load(&config.pass, &config.fail)?;
    let patterns = load_patterns(&config.patterns)?;
    info!(
        "loaded {} expected subjects and {} patterns",
        corpus.expected.len(),
        patterns.len()
    );

    let matcher = Regexp::new(config.cache_size);
    let verdicts = evaluate_all(&matcher, &patterns, &corpus);
    let summary = Summary::from_verdicts(&verdicts);
    info!(
        "{} of {} patterns passed, {} failed, {} errored",
        summary.passed, summary.total, summary.failed, summary.errored
    );

    let html = Report::new(&config.title, &verdicts, &corpus.raw).to_html()?;
    write_output(config.output.as_deref(), &html)?;

    if config.strict && !summary.all_passed() {
        return Ok(Exit::Mismatch);
    }
    Ok(Exit::Success)
}

fn write_output(output: Option<&str>, html: &str) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, html)
                .with_context(|| format!("could not write report to {path}"))
                .map_err(errors::anyhow)?;
            info!("report written to {}", path);
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(html.as_bytes())
                .and_then(|_| stdout.flush())
                .context("could not write report to stdout")
                .map_err(errors::anyhow)?;
        }
    }
    Ok(())
}
