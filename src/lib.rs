//! Arbpnl - cumulative arbitrage PnL from execution engine logs
//! Scan the log, accumulate profits, render the report

pub mod app;
pub mod config;
pub mod pnl;
pub mod report;
pub mod scanner;
pub mod shared;

// Re-export main types for convenience
pub use pnl::PnlSeries;
pub use report::PnlReport;
pub use scanner::LogScanner;
