//! Combined price/volume chart
//!
//! The model carries the real dual-axis semantics: close and moving-average
//! series against the price axis, volume bars against a secondary axis whose
//! upper bound is pinned at [`VOLUME_HEADROOM`] times the observed maximum so
//! the bars stay visually small under the price line. The terminal widget
//! shares one drawable axis, so volume samples are projected into the price
//! range through the secondary-axis bounds at render time.

use finsight_market::HistorySeries;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Widget},
};

/// Trailing window for the moving-average overlay
pub const MA_PERIOD: usize = 100;

/// Secondary-axis headroom: upper bound = this factor × max observed volume
pub const VOLUME_HEADROOM: f64 = 5.0;

/// Chart data for one ticker
#[derive(Debug, Clone)]
pub struct ChartModel {
    pub symbol: String,
    /// (index, close) points
    pub close: Vec<(f64, f64)>,
    /// (index, mean) points; starts once the trailing window has filled
    pub moving_average: Vec<(f64, f64)>,
    /// (index, volume) points, in volume units
    pub volume: Vec<(f64, f64)>,
    /// Primary axis range: [lower, upper] in price units
    pub price_bounds: [f64; 2],
    /// Secondary axis range: [0, VOLUME_HEADROOM × max volume]
    pub volume_bounds: [f64; 2],
    /// First / mid / last dates for the x axis
    pub x_labels: Vec<String>,
}

impl ChartModel {
    /// Build the chart model from a history series
    pub fn new(symbol: impl Into<String>, history: &HistorySeries) -> Self {
        let close: Vec<(f64, f64)> = history
            .bars
            .iter()
            .enumerate()
            .map(|(i, bar)| (i as f64, bar.close))
            .collect();

        let moving_average: Vec<(f64, f64)> = history
            .rolling_mean(MA_PERIOD)
            .iter()
            .enumerate()
            .filter_map(|(i, mean)| mean.map(|m| (i as f64, m)))
            .collect();

        let volume: Vec<(f64, f64)> = history
            .bars
            .iter()
            .enumerate()
            .map(|(i, bar)| (i as f64, bar.volume as f64))
            .collect();

        // Price bounds cover both the close line and the overlay, padded
        let values: Vec<f64> = close
            .iter()
            .chain(moving_average.iter())
            .map(|&(_, v)| v)
            .collect();
        let y_min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let y_max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let price_bounds = if values.is_empty() {
            [0.0, 1.0]
        } else {
            let pad = ((y_max - y_min) * 0.05).max(f64::EPSILON);
            [y_min - pad, y_max + pad]
        };

        let max_volume = history.max_volume().unwrap_or(0) as f64;
        let volume_bounds = [0.0, max_volume * VOLUME_HEADROOM];

        let x_labels = x_labels(history);

        Self {
            symbol: symbol.into(),
            close,
            moving_average,
            volume,
            price_bounds,
            volume_bounds,
            x_labels,
        }
    }

    /// Volume samples projected into the price range via the secondary-axis
    /// bounds (for rendering on the shared terminal axis)
    pub fn volume_in_price_range(&self) -> Vec<(f64, f64)> {
        let [price_lo, price_hi] = self.price_bounds;
        let volume_hi = self.volume_bounds[1];
        if volume_hi == 0.0 {
            return Vec::new();
        }

        self.volume
            .iter()
            .map(|&(x, v)| (x, price_lo + v / volume_hi * (price_hi - price_lo)))
            .collect()
    }
}

fn x_labels(history: &HistorySeries) -> Vec<String> {
    let date = |i: usize| {
        history
            .bars
            .get(i)
            .map(|b| b.timestamp.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    };

    match history.len() {
        0 => Vec::new(),
        1 => vec![date(0)],
        n => vec![date(0), date(n / 2), date(n - 1)],
    }
}

/// Terminal widget for the combined chart
pub struct PriceChart<'a> {
    model: &'a ChartModel,
}

impl<'a> PriceChart<'a> {
    pub fn new(model: &'a ChartModel) -> Self {
        Self { model }
    }
}

impl Widget for PriceChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let volume_scaled = self.model.volume_in_price_range();

        let datasets = vec![
            Dataset::default()
                .name("Volume")
                .marker(symbols::Marker::Bar)
                .graph_type(GraphType::Bar)
                .style(Style::default().fg(Color::DarkGray))
                .data(&volume_scaled),
            Dataset::default()
                .name("Close")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Cyan))
                .data(&self.model.close),
            Dataset::default()
                .name(format!("MA{MA_PERIOD}"))
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Yellow))
                .data(&self.model.moving_average),
        ];

        let [y_lower, y_upper] = self.model.price_bounds;
        let y_mid = (y_lower + y_upper) / 2.0;
        let y_labels = vec![
            Span::raw(format!("${y_lower:.2}")),
            Span::raw(format!("${y_mid:.2}")),
            Span::raw(format!("${y_upper:.2}")),
        ];

        let x_max = (self.model.close.len().saturating_sub(1)).max(1) as f64;
        let x_labels: Vec<Span<'_>> = self
            .model
            .x_labels
            .iter()
            .map(|l| Span::raw(l.clone()))
            .collect();

        let chart = Chart::new(datasets)
            .block(
                Block::default()
                    .title(format!(" 📉 {} Price Chart ", self.model.symbol))
                    .borders(Borders::ALL),
            )
            .x_axis(
                Axis::default()
                    .title("Date")
                    .style(Style::default().fg(Color::Gray))
                    .bounds([0.0, x_max])
                    .labels(x_labels),
            )
            .y_axis(
                Axis::default()
                    .title("Price")
                    .style(Style::default().fg(Color::Gray).add_modifier(Modifier::DIM))
                    .bounds([y_lower, y_upper])
                    .labels(y_labels),
            );

        chart.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use finsight_market::Bar;

    fn history(n: usize) -> HistorySeries {
        HistorySeries::new(
            (0..n)
                .map(|i| Bar {
                    timestamp: DateTime::from_timestamp(1_600_000_000 + i as i64 * 86_400, 0)
                        .expect("valid timestamp"),
                    open: i as f64,
                    high: i as f64 + 1.0,
                    low: i as f64 - 1.0,
                    close: i as f64,
                    volume: 1_000 * (i as u64 + 1),
                })
                .collect(),
        )
    }

    #[test]
    fn test_secondary_axis_bound_is_five_times_max_volume() {
        let history = history(150);
        let model = ChartModel::new("IONQ", &history);

        let max_volume = 1_000.0 * 150.0;
        assert_eq!(model.volume_bounds, [0.0, max_volume * 5.0]);
    }

    #[test]
    fn test_moving_average_starts_after_window() {
        let history = history(150);
        let model = ChartModel::new("IONQ", &history);

        // 150 samples, 100-period window: 51 defined points starting at x=99
        assert_eq!(model.moving_average.len(), 51);
        assert_eq!(model.moving_average[0].0, 99.0);
        assert!((model.moving_average[0].1 - 49.5).abs() < 1e-9);
    }

    #[test]
    fn test_series_lengths_match_history() {
        let history = history(120);
        let model = ChartModel::new("IONQ", &history);
        assert_eq!(model.close.len(), 120);
        assert_eq!(model.volume.len(), 120);
    }

    #[test]
    fn test_volume_projection_stays_under_price_range() {
        let history = history(50);
        let model = ChartModel::new("IONQ", &history);
        let projected = model.volume_in_price_range();

        let [lo, hi] = model.price_bounds;
        for &(_, y) in &projected {
            assert!(y >= lo && y <= hi);
        }

        // With 5x headroom the tallest bar sits at one fifth of the range
        let tallest = projected
            .iter()
            .map(|&(_, y)| y)
            .fold(f64::NEG_INFINITY, f64::max);
        assert!(tallest <= lo + (hi - lo) / 5.0 + 1e-9);
    }

    #[test]
    fn test_empty_history() {
        let model = ChartModel::new("ZZZZ", &HistorySeries::empty());
        assert!(model.close.is_empty());
        assert!(model.moving_average.is_empty());
        assert_eq!(model.volume_bounds, [0.0, 0.0]);
        assert!(model.volume_in_price_range().is_empty());
        assert!(model.x_labels.is_empty());
    }

    #[test]
    fn test_x_labels_first_mid_last() {
        let history = history(101);
        let model = ChartModel::new("IONQ", &history);
        assert_eq!(model.x_labels.len(), 3);
        assert_eq!(model.x_labels[0], "2020-09-13");
        assert_eq!(model.x_labels[2], "2020-12-22");
    }
}
