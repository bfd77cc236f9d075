// src/app.rs
use anyhow::Result;
use std::io::Write;
use std::path::PathBuf;
use tracing::{error, info};

use crate::config::{Config, ReportCfg};
use crate::pnl::PnlSeries;
use crate::report::PnlReport;
use crate::scanner::LogScanner;
use crate::shared::errors::{AppError, ScanError};

pub const USAGE: &str = "Usage: arbpnl <log_file>";

#[derive(Debug, Clone, Default)]
pub struct AppCfg {
    pub log_file: Option<PathBuf>,
    /// Missing or unreadable log files and malformed profit values abort the run.
    pub strict: bool,
    pub report: ReportCfg,
}

impl AppCfg {
    pub fn from_config(cfg: Config) -> Result<Self, AppError> {
        let mut app_cfg = Self {
            log_file: cfg.scan.log_file.map(PathBuf::from),
            strict: cfg.scan.strict.unwrap_or(false),
            report: ReportCfg::default(),
        };

        if let Some(currency) = cfg.report.currency {
            app_cfg.report.currency = currency;
        }
        if let Some(height) = cfg.chart.height {
            app_cfg.report.chart_height = height;
        }
        if let Some(marker) = cfg.chart.marker {
            app_cfg.report.marker = parse_marker(&marker)?;
        }

        app_cfg.validate()?;
        Ok(app_cfg)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.report.chart_height == 0 {
            return Err(AppError::ConfigError("chart height must be at least 1".to_string()));
        }
        if self.report.currency.trim().is_empty() {
            return Err(AppError::ConfigError("currency label must not be empty".to_string()));
        }
        Ok(())
    }
}

pub fn parse_marker(s: &str) -> Result<char, AppError> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if !c.is_whitespace() => Ok(c),
        _ => Err(AppError::ConfigError(format!(
            "chart marker must be a single visible character, got {:?}",
            s
        ))),
    }
}

/// Scan the configured log and write the PnL report to `out`.
pub fn run<W: Write>(app_cfg: &AppCfg, out: &mut W) -> Result<()> {
    let Some(log_file) = &app_cfg.log_file else {
        writeln!(out, "{}", USAGE)?;
        return Ok(());
    };
    info!("Analyzing {} (strict={})", log_file.display(), app_cfg.strict);

    let scanner = LogScanner::new(app_cfg.strict);
    let series = match scanner.scan_file(log_file) {
        Ok(series) => series,
        Err(e) if e.is_unreadable_file() && !app_cfg.strict => {
            match &e {
                ScanError::Open { source, .. } => {
                    writeln!(out, "Error: Log file {} cannot be opened: {}.", log_file.display(), source)?
                }
                _ => writeln!(out, "Error: Log file {} not found.", log_file.display())?,
            }
            PnlSeries::new()
        }
        Err(e) => {
            error!("❌ {}", e);
            return Err(AppError::from(e).into());
        }
    };
    info!("✅ Found {} arbitrage trades", series.len());

    PnlReport::new(&series, &app_cfg.report).render(out)?;
    Ok(())
}
