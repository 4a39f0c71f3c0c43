//! Four-column metric summary

use comfy_table::{ContentArrangement, Table, presets};
use finsight_market::TickerProfile;
use finsight_report::value;

/// Price cell: current price plus day change
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceMetric {
    pub current: f64,
    pub day_change_percent: f64,
}

/// Valuation cell: market cap plus price/sales
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValuationMetric {
    pub market_cap_billions: f64,
    pub price_to_sales: Option<f64>,
}

/// The metric summary row
///
/// Each cell is computed independently from the profile; a cell whose inputs
/// are missing stays `None` and the row renders partially.
#[derive(Debug, Clone)]
pub struct MetricsRow {
    pub symbol: String,
    pub price: Option<PriceMetric>,
    pub valuation: Option<ValuationMetric>,
    pub sector: Option<String>,
    pub industry: Option<String>,
}

impl MetricsRow {
    /// Build the row from a profile
    ///
    /// The day-change metric needs both the current price and the previous
    /// close; if either is absent the whole price cell is skipped.
    pub fn from_profile(profile: &TickerProfile) -> Self {
        let price = match (profile.current_price, profile.previous_close) {
            (Some(current), Some(previous)) if previous != 0.0 => {
                let day_change = current - previous;
                Some(PriceMetric {
                    current,
                    day_change_percent: day_change / previous * 100.0,
                })
            }
            _ => None,
        };

        let valuation = profile.market_cap.map(|cap| ValuationMetric {
            market_cap_billions: cap / 1e9,
            price_to_sales: profile.price_to_sales_ttm,
        });

        Self {
            symbol: profile.symbol.clone(),
            price,
            valuation,
            sector: profile.sector.clone(),
            industry: profile.industry.clone(),
        }
    }

    /// Render the row as a four-column table
    pub fn to_table(&self) -> Table {
        let mut table = Table::new();
        table
            .load_preset(presets::UTF8_FULL_CONDENSED)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                format!("📈 {}", self.symbol),
                "Market cap".to_string(),
                "Sector".to_string(),
                "Industry".to_string(),
            ]);

        let price_cell = match self.price {
            Some(p) => format!("$ {:.2}\n{:+.2} %", p.current, p.day_change_percent),
            None => value::SENTINEL.to_string(),
        };

        let valuation_cell = match self.valuation {
            Some(v) => {
                let ps = match v.price_to_sales {
                    Some(ps) => format!("{ps:.2}"),
                    None => value::SENTINEL.to_string(),
                };
                format!("{:.2} B$\nP/S : {ps}", v.market_cap_billions)
            }
            None => value::SENTINEL.to_string(),
        };

        table.add_row(vec![
            price_cell,
            valuation_cell,
            value::text(self.sector.as_deref()).to_string(),
            value::text(self.industry.as_deref()).to_string(),
        ]);

        table
    }
}
