// src/scanner.rs
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::{debug, warn};

use crate::pnl::PnlSeries;
use crate::shared::errors::ScanError;

/// Text the execution engine writes in front of every realized arbitrage profit.
pub const PROFIT_MARKER: &str = "ARBITRAGE OPPORTUNITY FOUND! Profit: ";

/// Check a single log line for a profit event.
///
/// Only the first marker in the line counts. The token is the longest run of
/// digits and dots right after the marker; an empty run means no match. A run
/// that does not parse as a number is returned as the error.
pub fn parse_profit_line(line: &str) -> Result<Option<f64>, String> {
    let Some(start) = line.find(PROFIT_MARKER) else {
        return Ok(None);
    };
    let rest = &line[start + PROFIT_MARKER.len()..];
    let end = rest
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(rest.len());
    let token = &rest[..end];
    if token.is_empty() {
        return Ok(None);
    }

    token.parse::<f64>().map(Some).map_err(|_| token.to_string())
}

/// Single-pass extractor that feeds every matched profit straight into a [`PnlSeries`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LogScanner {
    strict: bool,
}

impl LogScanner {
    pub fn new(strict: bool) -> Self {
        Self { strict }
    }

    pub fn scan_file<P: AsRef<Path>>(&self, path: P) -> Result<PnlSeries, ScanError> {
        let path = path.as_ref();
        let reader = open_log(path)?;
        self.scan_reader(reader).map_err(|e| unreadable_on_first_line(path, e))
    }

    pub fn scan_reader<R: BufRead>(&self, reader: R) -> Result<PnlSeries, ScanError> {
        let mut series = PnlSeries::new();
        self.for_each_profit(reader, |line, profit| {
            let total = series.record(profit);
            debug!("Line {}: profit {} (running total {})", line, profit, total);
        })?;
        Ok(series)
    }

    /// Raw profit values in file order, without accumulation.
    pub fn extract_profits<P: AsRef<Path>>(&self, path: P) -> Result<Vec<f64>, ScanError> {
        let path = path.as_ref();
        let reader = open_log(path)?;
        let mut profits = Vec::new();
        self.for_each_profit(reader, |_, profit| profits.push(profit))
            .map_err(|e| unreadable_on_first_line(path, e))?;
        Ok(profits)
    }

    fn for_each_profit<R, F>(&self, mut reader: R, mut on_profit: F) -> Result<(), ScanError>
    where
        R: BufRead,
        F: FnMut(usize, f64),
    {
        let mut buf = Vec::new();
        let mut line_no = 0;

        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|source| ScanError::Read { line: line_no + 1, source })?;
            if read == 0 {
                return Ok(());
            }
            line_no += 1;

            let line = String::from_utf8_lossy(&buf);
            match parse_profit_line(&line) {
                Ok(Some(profit)) => on_profit(line_no, profit),
                Ok(None) => {}
                Err(token) => {
                    if self.strict {
                        return Err(ScanError::MalformedProfit { line: line_no, token });
                    }
                    warn!("Skipping malformed profit value {:?} on line {}", token, line_no);
                }
            }
        }
    }
}

/// Raw profit values in file order using the lenient scanner.
pub fn extract_profits<P: AsRef<Path>>(path: P) -> Result<Vec<f64>, ScanError> {
    LogScanner::default().extract_profits(path)
}

fn open_log(path: &Path) -> Result<BufReader<File>, ScanError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ScanError::FileNotFound { path: path.to_path_buf() },
        _ => ScanError::Open { path: path.to_path_buf(), source: e },
    })?;
    debug!("Scanning {}", path.display());
    Ok(BufReader::new(file))
}

// Opening a directory succeeds on some platforms and only the first read fails.
fn unreadable_on_first_line(path: &Path, err: ScanError) -> ScanError {
    match err {
        ScanError::Read { line: 1, source } => ScanError::Open { path: path.to_path_buf(), source },
        other => other,
    }
}
