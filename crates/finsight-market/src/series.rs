//! OHLCV history series and derived views

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ta::Next;
use ta::indicators::SimpleMovingAverage;

/// One daily OHLCV sample
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bar {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

/// Time-ordered OHLCV samples over a fixed trailing window
///
/// Immutable once fetched; derived series like [`HistorySeries::rolling_mean`]
/// are computed views, not stored state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistorySeries {
    pub bars: Vec<Bar>,
}

impl HistorySeries {
    /// Create a series from bars (assumed time-ordered)
    pub fn new(bars: Vec<Bar>) -> Self {
        Self { bars }
    }

    /// An empty series
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Closing prices, in series order
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    /// Largest volume sample in the series
    pub fn max_volume(&self) -> Option<u64> {
        self.bars.iter().map(|b| b.volume).max()
    }

    /// Trailing moving average of close price
    ///
    /// Output length equals the series length. Entries are `None` until the
    /// window has filled (`period - 1` leading entries); from then on each
    /// entry is the mean of the trailing `period` closes.
    pub fn rolling_mean(&self, period: usize) -> Vec<Option<f64>> {
        let Ok(mut sma) = SimpleMovingAverage::new(period) else {
            // ta rejects a zero period; an all-None view is the only sensible answer
            return vec![None; self.bars.len()];
        };

        self.bars
            .iter()
            .enumerate()
            .map(|(i, bar)| {
                let value = sma.next(bar.close);
                if i + 1 >= period { Some(value) } else { None }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(i: usize, close: f64, volume: u64) -> Bar {
        Bar {
            timestamp: DateTime::from_timestamp(1_600_000_000 + i as i64 * 86_400, 0)
                .expect("valid timestamp"),
            open: close,
            high: close,
            low: close,
            close,
            volume,
        }
    }

    fn series_of(closes: &[f64]) -> HistorySeries {
        HistorySeries::new(
            closes
                .iter()
                .enumerate()
                .map(|(i, &c)| bar(i, c, 1_000 + i as u64))
                .collect(),
        )
    }

    #[test]
    fn test_rolling_mean_window_semantics() {
        // 150 samples, close = index value, window of 100
        let closes: Vec<f64> = (0..150).map(|i| i as f64).collect();
        let series = series_of(&closes);
        let ma = series.rolling_mean(100);

        assert_eq!(ma.len(), series.len());

        // Insufficient window: first 99 entries are absent
        for entry in ma.iter().take(99) {
            assert!(entry.is_none());
        }

        // Index 99 is the first full window: mean of 0..=99 = 49.5
        let first = ma[99].expect("window filled at index 99");
        assert!((first - 49.5).abs() < 1e-9);

        // Index 149: mean of 50..=149 = 99.5
        let last = ma[149].expect("window filled");
        assert!((last - 99.5).abs() < 1e-9);
    }

    #[test]
    fn test_rolling_mean_short_series() {
        let series = series_of(&[10.0, 20.0, 30.0]);
        let ma = series.rolling_mean(100);
        assert_eq!(ma.len(), 3);
        assert!(ma.iter().all(Option::is_none));
    }

    #[test]
    fn test_rolling_mean_small_window() {
        let series = series_of(&[1.0, 2.0, 3.0, 4.0]);
        let ma = series.rolling_mean(2);
        assert_eq!(ma, vec![None, Some(1.5), Some(2.5), Some(3.5)]);
    }

    #[test]
    fn test_rolling_mean_zero_period() {
        let series = series_of(&[1.0, 2.0]);
        let ma = series.rolling_mean(0);
        assert_eq!(ma, vec![None, None]);
    }

    #[test]
    fn test_max_volume() {
        let mut series = series_of(&[1.0, 2.0, 3.0]);
        series.bars[1].volume = 99_999;
        assert_eq!(series.max_volume(), Some(99_999));

        assert_eq!(HistorySeries::empty().max_volume(), None);
    }

    #[test]
    fn test_closes() {
        let series = series_of(&[1.5, 2.5]);
        assert_eq!(series.closes(), vec![1.5, 2.5]);
    }
}
