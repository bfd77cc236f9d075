use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};

pub const DEFAULT_CURRENCY: &str = "USDT";
pub const DEFAULT_CHART_HEIGHT: usize = 10;
pub const DEFAULT_MARKER: char = '#';

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScanCfg {
    pub log_file: Option<String>,
    pub strict: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CurrencyCfg {
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChartCfg {
    pub height: Option<usize>,
    pub marker: Option<String>,
}

/// Contents of the optional TOML config file. Every key may be omitted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanCfg,
    #[serde(default)]
    pub report: CurrencyCfg,
    #[serde(default)]
    pub chart: ChartCfg,
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let s = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let cfg: Self = toml::from_str(&s).context("parse config TOML")?;
        Ok(cfg)
    }
}

/// Rendering settings for the PnL report.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportCfg {
    pub currency: String,
    pub chart_height: usize,
    pub marker: char,
}

impl Default for ReportCfg {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_string(),
            chart_height: DEFAULT_CHART_HEIGHT,
            marker: DEFAULT_MARKER,
        }
    }
}
