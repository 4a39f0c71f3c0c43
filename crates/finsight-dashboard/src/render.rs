//! One-shot terminal rendering of the dashboard

use crate::chart::{ChartModel, PriceChart};
use crate::metrics::MetricsRow;
use finsight_market::{HistorySeries, TickerProfile};
use finsight_report::value;
use ratatui::{Terminal, TerminalOptions, Viewport, backend::CrosstermBackend};
use std::io;

/// Terminal rows given to the inline chart viewport
const CHART_HEIGHT: u16 = 18;

/// Collapsed description preview length, in characters
const DESCRIPTION_PREVIEW_CHARS: usize = 400;

/// Render the full dashboard to stdout
///
/// Emits the header, the metric summary, the company description (a preview
/// unless `expand_description`), and the price/volume chart (skipped when the
/// history is empty or `show_chart` is off).
pub fn render_dashboard(
    profile: &TickerProfile,
    history: &HistorySeries,
    expand_description: bool,
    show_chart: bool,
) -> io::Result<()> {
    render_header(profile);
    render_metrics(profile);
    render_description(profile, expand_description);

    if show_chart {
        render_chart(profile, history)?;
    }

    Ok(())
}

/// Header: company name plus ticker
fn render_header(profile: &TickerProfile) {
    let name = value::text(profile.long_name.as_deref());
    println!("\n{name} 🏷️  [{}] Overview", profile.symbol);
    println!("{}", "─".repeat(60));
}

/// Four-column metric summary
fn render_metrics(profile: &TickerProfile) {
    let row = MetricsRow::from_profile(profile);
    println!("{}", row.to_table());
}

/// Collapsible long-form description
fn render_description(profile: &TickerProfile, expand: bool) {
    let summary = value::text(profile.long_business_summary.as_deref());
    println!("\n🏢 {} Company Description", profile.symbol);

    if expand {
        println!("{summary}");
        return;
    }

    let preview: String = summary.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
    if preview.len() < summary.len() {
        println!("{preview}… (pass --expand for the full description)");
    } else {
        println!("{preview}");
    }
}

/// Narrowest terminal the chart renders into
const MIN_CHART_COLUMNS: u16 = 40;

/// Combined chart, drawn once into an inline viewport
fn render_chart(profile: &TickerProfile, history: &HistorySeries) -> io::Result<()> {
    if history.is_empty() {
        println!("\n(no price history available for {})", profile.symbol);
        return Ok(());
    }

    let (columns, _) = crossterm::terminal::size().unwrap_or((80, 24));
    if columns < MIN_CHART_COLUMNS {
        println!("\n(terminal too narrow for the price chart)");
        return Ok(());
    }

    let model = ChartModel::new(profile.symbol.clone(), history);

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::with_options(
        backend,
        TerminalOptions {
            viewport: Viewport::Inline(CHART_HEIGHT),
        },
    )?;

    println!();
    terminal.draw(|frame| frame.render_widget(PriceChart::new(&model), frame.area()))?;
    drop(terminal);
    println!();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_preview_bound() {
        let long = "x".repeat(DESCRIPTION_PREVIEW_CHARS * 2);
        let preview: String = long.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
        assert_eq!(preview.len(), DESCRIPTION_PREVIEW_CHARS);
    }

    #[test]
    fn test_empty_history_is_not_an_error() {
        let profile = TickerProfile::empty("ZZZZ");
        // Chart path short-circuits before touching the terminal
        assert!(render_chart(&profile, &HistorySeries::empty()).is_ok());
    }
}
