use std::fs;

use anyhow::Context;
use clap::Parser;
use serde::Deserialize;
use validator::Validate;

use bem_slo::{errors, Result};

#[derive(Parser, Debug, Clone, Deserialize, Validate)]
#[command(name = "bemcheck")]
#[command(author, version, about, long_about = None)]
pub struct AppConfig {
    #[clap(long)]
    #[arg(short = 'c')]
    #[serde(default)]
    pub config: Option<String>,
    /// subjects every pattern should match
    #[clap(long, env)]
    #[arg(default_value_t = String::from("test.pass"))]
    #[serde(default = "default_pass")]
    #[validate(length(min = 1))]
    pub pass: String,
    /// subjects no pattern should match
    #[clap(long, env)]
    #[arg(default_value_t = String::from("test.fail"))]
    #[serde(default = "default_fail")]
    #[validate(length(min = 1))]
    pub fail: String,
    #[clap(long, env)]
    #[arg(default_value_t = String::from("BEM.regex"))]
    #[serde(default = "default_patterns")]
    #[validate(length(min = 1))]
    pub patterns: String,
    /// report destination, stdout when absent
    #[clap(long, env)]
    #[arg(short = 'o')]
    #[serde(default)]
    pub output: Option<String>,
    #[clap(long, env)]
    #[arg(default_value_t = String::from("Regex for BEM"))]
    #[serde(default = "default_title")]
    #[validate(length(min = 1))]
    pub title: String,
    #[clap(long, env)]
    #[arg(default_value_t = default_rust_log())]
    #[serde(default = "default_rust_log")]
    pub rust_log: String,
    /// compiled patterns kept in memory; only patterns repeated in the
    /// pattern file are served from it
    #[clap(long, env)]
    #[arg(default_value_t = 64)]
    #[serde(default = "default_cache_size")]
    #[validate(range(min = 1, max = 4096))]
    pub cache_size: usize,
    /// exit non-zero unless every pattern passes
    #[clap(long, env)]
    #[arg(default_value_t = false)]
    #[serde(default)]
    pub strict: bool,
}

fn default_pass() -> String {
    String::from("test.pass")
}

fn default_fail() -> String {
    String::from("test.fail")
}

fn default_patterns() -> String {
    String::from("BEM.regex")
}

fn default_title() -> String {
    String::from("Regex for BEM")
}

fn default_rust_log() -> String {
    String::from("bemcheck=info,bem_server=info,bem_pim=warn")
}

fn default_cache_size() -> usize {
    64
}

impl AppConfig {
    pub fn check(&self) -> Result<()> {
        self.validate().map_err(|err| errors::bad_config(&err))
    }
}

pub fn load(cfg: &str) -> Result<AppConfig> {
    let content = fs::read_to_string(cfg)
        .map_err(|err| errors::resource_unavailable(cfg, err))?;
    toml::from_str(&content)
        .context("could not parse config file")
        .map_err(errors::anyhow)
}

#[cfg(test)]
mod tests {
    use std::{env, process};

    use super::*;

    #[test]
    fn defaults_from_toml() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.pass, "test.pass");
        assert_eq!(cfg.fail, "test.fail");
        assert_eq!(cfg.patterns, "BEM.regex");
        assert_eq!(cfg.title, "Regex for BEM");
        assert_eq!(cfg.cache_size, 64);
        assert!(cfg.output.is_none());
        assert!(!cfg.strict);
        assert!(cfg.check().is_ok());
    }

    #[test]
    fn defaults_from_flags() {
        let cfg =
            AppConfig::parse_from(["bemcheck", "--strict", "-o", "r.html"]);
        assert_eq!(cfg.pass, "test.pass");
        assert_eq!(cfg.output.as_deref(), Some("r.html"));
        assert!(cfg.strict);
    }

    #[test]
    fn rejects_zero_cache() {
        let cfg: AppConfig = toml::from_str("cache_size = 0").unwrap();
        assert_eq!(cfg.check().unwrap_err().exit_code(), 4);
    }

    #[test]
    fn load_file() {
        let path =
            env::temp_dir().join(format!("bem-{}.toml", process::id()));
        fs::write(
            &path,
            "pass = \"cases/ok.txt\"\ntitle = \"BEM\"\nstrict = true\n",
        )
        .unwrap();
        let cfg = load(path.to_str().unwrap()).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(cfg.pass, "cases/ok.txt");
        assert_eq!(cfg.fail, "test.fail");
        assert_eq!(cfg.title, "BEM");
        assert!(cfg.strict);
    }

    #[test]
    fn load_missing_file() {
        assert_eq!(load("/nonexistent/bem.toml").unwrap_err().exit_code(), 2);
    }
}
