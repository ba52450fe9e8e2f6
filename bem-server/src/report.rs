use askama::Template;

use bem_pim::{Outcome, Summary, Verdict};
use bem_slo::{errors, Result};

/// One pattern as shown in the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerdictView {
    pub pattern: String,
    /// css class of the banner: `pass`, `fail` or `error`
    pub class: &'static str,
    pub label: &'static str,
    pub message: String,
    pub missing: Vec<String>,
    pub spurious: Vec<String>,
}

impl From<&Verdict> for VerdictView {
    fn from(v: &Verdict) -> Self {
        let (class, label, message) = match &v.outcome {
            Outcome::Pass => ("pass", "Success.", String::new()),
            Outcome::Fail => ("fail", "Failure.", String::new()),
            Outcome::Error(msg) => ("error", "Error.", msg.to_owned()),
        };
        Self {
            pattern: v.pattern.to_owned(),
            class,
            label,
            message,
            missing: v.missing.clone(),
            spurious: v.spurious.clone(),
        }
    }
}

#[derive(Template, Debug)]
#[template(path = "report.html")]
pub struct Report {
    pub title: String,
    pub verdicts: Vec<VerdictView>,
    pub summary: Summary,
    pub raw: String,
}

impl Report {
    pub fn new(title: &str, verdicts: &[Verdict], raw: &str) -> Self {
        Self {
            title: title.to_owned(),
            verdicts: verdicts.iter().map(VerdictView::from).collect(),
            summary: Summary::from_verdicts(verdicts),
            raw: raw.to_owned(),
        }
    }

    pub fn to_html(&self) -> Result<String> {
        self.render().map_err(errors::any)
    }
}
