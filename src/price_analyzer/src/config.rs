//! Analyzer configuration: parsing, validation, and loading.
//!
//! A small TOML document, every key optional:
//!
//! ```toml
//! log_level = "info"
//!
//! [display]
//! range = "3M"
//!
//! [metrics]
//! non_finite = "report"   # or "reject"
//! ```
//!
//! Entrypoints:
//! - Parse + validate from a TOML string: [`load_config_str`]
//! - Parse + validate from a file path: [`load_config_path`]
//! - Locate the file through `--config` or [`CONFIG_ENV_VAR`]: [`resolve_config`]

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use anyhow::{Context, bail};
use feature_extractor::DisplayRange;
use serde::{Deserialize, Serialize};
use shared_utils::env::optional_env_var;
use toml::from_str;
use tracing::level_filters::LevelFilter;

/// Environment variable naming a config file when `--config` is not given.
pub const CONFIG_ENV_VAR: &str = "PRICE_ANALYZER_CONFIG";

/// Top-level analyzer settings, injected into every command handler.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyzerConfig {
    /// Default log level when `RUST_LOG` is unset (`error` .. `trace`, or `off`).
    pub log_level: String,
    pub display: DisplayConfig,
    pub metrics: MetricsConfig,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            display: DisplayConfig::default(),
            metrics: MetricsConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// Range used by `overlays`/`analyze` when `--range` is omitted.
    pub range: DisplayRange,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct MetricsConfig {
    pub non_finite: NonFinitePolicy,
}

/// What to do when a metric comes out as NaN or an infinity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NonFinitePolicy {
    /// Print the values as `NaN` / `Infinity` and list them in the report.
    #[default]
    Report,
    /// Fail the command instead of printing.
    Reject,
}

impl AnalyzerConfig {
    /// The configured level as a tracing filter.
    pub fn level_filter(&self) -> anyhow::Result<LevelFilter> {
        LevelFilter::from_str(self.log_level.trim())
            .with_context(|| format!("invalid log_level '{}'", self.log_level))
    }
}

/// Parse analyzer settings from a TOML string.
///
/// Unknown keys are rejected at every level, and `log_level` must name a
/// tracing level.
pub fn load_config_str(toml_str: &str) -> anyhow::Result<AnalyzerConfig> {
    let mut cfg: AnalyzerConfig = from_str(toml_str).context("failed to parse analyzer TOML")?;
    cfg.log_level = cfg.log_level.trim().to_lowercase();
    if cfg.log_level.is_empty() {
        bail!("log_level must not be empty");
    }
    cfg.level_filter()?;
    Ok(cfg)
}

/// Read an analyzer TOML file from disk and parse it.
///
/// See [`load_config_str`] for validation rules.
pub fn load_config_path(path: impl AsRef<Path>) -> anyhow::Result<AnalyzerConfig> {
    let text = std::fs::read_to_string(path.as_ref())
        .with_context(|| format!("read config file {}", path.as_ref().display()))?;
    load_config_str(&text).with_context(|| format!("load config file {}", path.as_ref().display()))
}

/// Loads the config named by `explicit`, else by [`CONFIG_ENV_VAR`], else the
/// defaults. Also returns the path that was used, if any.
pub fn resolve_config(explicit: Option<&Path>) -> anyhow::Result<(AnalyzerConfig, Option<PathBuf>)> {
    let path = match explicit {
        Some(p) => Some(p.to_path_buf()),
        None => optional_env_var(CONFIG_ENV_VAR)?.map(PathBuf::from),
    };
    match path {
        Some(p) => Ok((load_config_path(&p)?, Some(p))),
        None => Ok((AnalyzerConfig::default(), None)),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use serial_test::serial;

    use super::*;

    #[test]
    fn empty_document_is_all_defaults() {
        let cfg = load_config_str("").unwrap();
        assert_eq!(cfg, AnalyzerConfig::default());
        assert_eq!(cfg.display.range, DisplayRange::OneMonth);
        assert_eq!(cfg.metrics.non_finite, NonFinitePolicy::Report);
    }

    #[test]
    fn parses_every_section() {
        let cfg = load_config_str(
            r#"
            log_level = " DEBUG "

            [display]
            range = "1y"

            [metrics]
            non_finite = "reject"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.log_level, "debug");
        assert_eq!(cfg.level_filter().unwrap(), LevelFilter::DEBUG);
        assert_eq!(cfg.display.range, DisplayRange::OneYear);
        assert_eq!(cfg.metrics.non_finite, NonFinitePolicy::Reject);
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(load_config_str("colour = true").is_err());
        assert!(load_config_str("[display]\nwidth = 3").is_err());
    }

    #[test]
    fn rejects_bad_values() {
        assert!(load_config_str(r#"log_level = "loud""#).is_err());
        assert!(load_config_str(r#"log_level = " ""#).is_err());
        assert!(load_config_str("[display]\nrange = \"2W\"").is_err());
        assert!(load_config_str("[metrics]\nnon_finite = \"clamp\"").is_err());
    }

    #[test]
    fn missing_file_mentions_path() {
        let err = load_config_path("/no/such/analyzer.toml").unwrap_err();
        assert!(format!("{err:#}").contains("/no/such/analyzer.toml"));
    }

    #[test]
    #[serial]
    fn env_var_locates_config_when_flag_absent() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[display]\nrange = \"6M\"").unwrap();

        // SAFETY: tests touching the environment run under #[serial].
        unsafe { std::env::set_var(CONFIG_ENV_VAR, file.path()) };
        let (cfg, used) = resolve_config(None).unwrap();
        unsafe { std::env::remove_var(CONFIG_ENV_VAR) };

        assert_eq!(cfg.display.range, DisplayRange::SixMonths);
        assert_eq!(used.as_deref(), Some(file.path()));
    }

    #[test]
    #[serial]
    fn defaults_without_flag_or_env() {
        // SAFETY: tests touching the environment run under #[serial].
        unsafe { std::env::remove_var(CONFIG_ENV_VAR) };
        let (cfg, used) = resolve_config(None).unwrap();
        assert_eq!(cfg, AnalyzerConfig::default());
        assert!(used.is_none());
    }
}
