// src/pnl.rs

/// Ordered cumulative PnL totals, one entry per profit event in log order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PnlSeries {
    cumulative: Vec<f64>,
    running: f64,
}

impl PnlSeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the running sums for an ordered sequence of profits.
    pub fn from_profits<I>(profits: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut series = Self::new();
        for profit in profits {
            series.record(profit);
        }
        series
    }

    /// Add one profit to the running total and return the new total.
    pub fn record(&mut self, profit: f64) -> f64 {
        self.running += profit;
        self.cumulative.push(self.running);
        self.running
    }

    pub fn values(&self) -> &[f64] {
        &self.cumulative
    }

    pub fn len(&self) -> usize {
        self.cumulative.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cumulative.is_empty()
    }

    pub fn final_pnl(&self) -> Option<f64> {
        self.cumulative.last().copied()
    }

    pub fn min(&self) -> Option<f64> {
        self.cumulative.iter().copied().reduce(f64::min)
    }

    pub fn max(&self) -> Option<f64> {
        self.cumulative.iter().copied().reduce(f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_running_sum_starts_at_zero() {
        let series = PnlSeries::from_profits([1.5, 2.25, 0.25]);
        assert_eq!(series.values(), &[1.5, 3.75, 4.0]);
        assert_eq!(series.final_pnl(), Some(4.0));
        assert_eq!(series.len(), 3);
    }

    #[test]
    fn test_empty_series() {
        let series = PnlSeries::new();
        assert!(series.is_empty());
        assert_eq!(series.final_pnl(), None);
        assert_eq!(series.min(), None);
        assert_eq!(series.max(), None);
    }

    #[test]
    fn test_record_returns_running_total() {
        let mut series = PnlSeries::new();
        assert_eq!(series.record(0.5), 0.5);
        assert_eq!(series.record(0.0), 0.5);
        assert_eq!(series.record(2.0), 2.5);
        assert_eq!(series.min(), Some(0.5));
        assert_eq!(series.max(), Some(2.5));
    }

    #[test]
    fn test_non_negative_profits_never_decrease() {
        let series = PnlSeries::from_profits([0.3, 0.0, 1.7, 0.01, 0.0]);
        assert!(series.values().windows(2).all(|w| w[0] <= w[1]));
    }
}
