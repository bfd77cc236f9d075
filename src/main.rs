use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use arbpnl::app::{self, AppCfg};
use arbpnl::config::Config;

#[derive(Parser, Debug)]
#[command(version, about = "Cumulative arbitrage PnL report from execution engine logs")]
struct Args {
    /// Execution engine log file to analyze
    log_file: Option<PathBuf>,

    /// Path to config file (optional)
    #[arg(long)]
    config: Option<String>,

    /// Currency label printed after the final PnL (overrides config)
    #[arg(long)]
    currency: Option<String>,

    /// Number of normalization levels in the chart (overrides config)
    #[arg(long)]
    height: Option<usize>,

    /// Bar marker character (overrides config)
    #[arg(long)]
    marker: Option<String>,

    /// Fail on a missing log file or malformed profit value
    #[arg(long)]
    strict: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    // Priority: CLI args > Config file > Defaults
    let mut app_cfg = match &args.config {
        Some(config_path) => AppCfg::from_config(Config::from_file(config_path)?)?,
        None => AppCfg::default(),
    };

    if let Some(log_file) = args.log_file {
        app_cfg.log_file = Some(log_file);
    }
    if let Some(currency) = args.currency {
        app_cfg.report.currency = currency;
    }
    if let Some(height) = args.height {
        app_cfg.report.chart_height = height;
    }
    if let Some(marker) = args.marker {
        app_cfg.report.marker = app::parse_marker(&marker)?;
    }
    if args.strict {
        app_cfg.strict = true;
    }
    app_cfg.validate()?;

    let stdout = std::io::stdout();
    app::run(&app_cfg, &mut stdout.lock())
}
