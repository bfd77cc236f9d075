// src/report.rs
use std::io::{self, Write};

use crate::config::ReportCfg;
use crate::pnl::PnlSeries;

pub const NO_TRADES_MESSAGE: &str = "No arbitrage trades found in log.";
pub const CHART_HEADER: &str = "--- Cumulative PnL Chart (ASCII) ---";

/// Number of markers for `value` after min-max normalization into `height` levels.
///
/// The minimum value always gets one marker and the maximum gets `height + 1`.
pub fn bar_length(value: f64, min: f64, range: f64, height: usize) -> usize {
    let level = ((value - min) / range * height as f64).floor();
    // Guards against NaN and float overshoot at the top of the range.
    let level = if level.is_finite() && level > 0.0 { level as usize } else { 0 };
    level.min(height) + 1
}

/// Text report over a finished cumulative PnL series.
#[derive(Debug)]
pub struct PnlReport<'a> {
    series: &'a PnlSeries,
    currency: &'a str,
    height: usize,
    marker: char,
}

impl<'a> PnlReport<'a> {
    pub fn new(series: &'a PnlSeries, cfg: &'a ReportCfg) -> Self {
        Self {
            series,
            currency: &cfg.currency,
            height: cfg.chart_height,
            marker: cfg.marker,
        }
    }

    /// One `(value, bar_len)` pair per trade, in log order.
    pub fn chart_rows(&self) -> Vec<(f64, usize)> {
        let (Some(min), Some(max)) = (self.series.min(), self.series.max()) else {
            return Vec::new();
        };
        let range = if max != min { max - min } else { 1.0 };

        self.series
            .values()
            .iter()
            .map(|&value| (value, bar_length(value, min, range, self.height)))
            .collect()
    }

    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let Some(final_pnl) = self.series.final_pnl() else {
            return writeln!(out, "{}", NO_TRADES_MESSAGE);
        };

        writeln!(out, "Total Trades: {}", self.series.len())?;
        writeln!(out, "Final PnL:    {:.4} {}", final_pnl, self.currency)?;

        writeln!(out)?;
        writeln!(out, "{}", CHART_HEADER)?;
        let marker = self.marker.to_string();
        for (value, len) in self.chart_rows() {
            writeln!(out, "{:8.4} | {}", value, marker.repeat(len))?;
        }
        Ok(())
    }

    pub fn to_text(&self) -> io::Result<String> {
        let mut buf = Vec::new();
        self.render(&mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> ReportCfg {
        ReportCfg::default()
    }

    fn bars(text: &str) -> Vec<usize> {
        text.lines()
            .skip_while(|l| *l != CHART_HEADER)
            .skip(1)
            .map(|l| l.split(" | ").nth(1).unwrap().chars().filter(|c| *c == '#').count())
            .collect()
    }

    #[test]
    fn test_empty_series_prints_only_no_trades() {
        let series = PnlSeries::new();
        let cfg = cfg();
        let text = PnlReport::new(&series, &cfg).to_text().unwrap();
        assert_eq!(text, "No arbitrage trades found in log.\n");
    }

    #[test]
    fn test_scenario_report() {
        let series = PnlSeries::from_profits([1.5, 2.25]);
        let cfg = cfg();
        let text = PnlReport::new(&series, &cfg).to_text().unwrap();
        let expected = "Total Trades: 2\n\
                        Final PnL:    3.7500 USDT\n\
                        \n\
                        --- Cumulative PnL Chart (ASCII) ---\n  \
                        1.5000 | #\n  \
                        3.7500 | ###########\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_bar_length_bounds() {
        assert_eq!(bar_length(0.0, 0.0, 10.0, 10), 1);
        assert_eq!(bar_length(10.0, 0.0, 10.0, 10), 11);
        assert_eq!(bar_length(5.0, 0.0, 10.0, 10), 6);
        assert_eq!(bar_length(4.99, 0.0, 10.0, 10), 5);
    }

    #[test]
    fn test_degenerate_range_gives_single_markers() {
        let series = PnlSeries::from_profits([2.0, 0.0, 0.0]);
        let cfg = cfg();
        let text = PnlReport::new(&series, &cfg).to_text().unwrap();
        assert_eq!(bars(&text), vec![1, 1, 1]);
    }

    #[test]
    fn test_max_value_gets_longest_bar_and_ties_match() {
        let series = PnlSeries::from_profits([0.1, 0.4, 0.0, 0.7, 0.3, 0.0]);
        let cfg = cfg();
        let report = PnlReport::new(&series, &cfg);
        let rows = report.chart_rows();

        assert!(rows.iter().all(|&(_, len)| len >= 1));
        assert_eq!(rows.last().unwrap().1, 11);
        assert_eq!(rows[1].1, rows[2].1);
        assert_eq!(rows[4].1, rows[5].1);
        assert_eq!(bars(&report.to_text().unwrap()), rows.iter().map(|r| r.1).collect::<Vec<_>>());
    }

    #[test]
    fn test_custom_currency_height_and_marker() {
        let series = PnlSeries::from_profits([1.0, 1.0]);
        let cfg = ReportCfg { currency: "USDC".to_string(), chart_height: 4, marker: '*' };
        let text = PnlReport::new(&series, &cfg).to_text().unwrap();
        assert!(text.contains("Final PnL:    2.0000 USDC\n"));
        assert!(text.contains("  1.0000 | *\n"));
        assert!(text.contains("  2.0000 | *****\n"));
    }

    #[test]
    fn test_wide_values_are_not_truncated() {
        let series = PnlSeries::from_profits([12345.678]);
        let cfg = cfg();
        let text = PnlReport::new(&series, &cfg).to_text().unwrap();
        assert!(text.contains("12345.6780 | #\n"));
    }
}
