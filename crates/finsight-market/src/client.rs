//! Yahoo Finance data client
//!
//! Two upstream surfaces: the quote-summary JSON endpoint for the attribute
//! profile (raw reqwest, no API key, browser user agent) and the chart API
//! via the `yahoo_finance_api` connector for OHLCV history.

use crate::error::{MarketError, Result};
use crate::profile::{SummaryModules, TickerProfile};
use crate::series::{Bar, HistorySeries};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::time::Duration;
use time::OffsetDateTime;
use tracing::{debug, warn};
use yahoo_finance_api as yahoo;

/// Reference market index fetched alongside every ticker
pub const REFERENCE_INDEX: &str = "^IXIC";

/// Trailing history window, in days (5 years)
const HISTORY_WINDOW_DAYS: i64 = 1825;

const QUOTE_SUMMARY_BASE: &str = "https://query2.finance.yahoo.com/v10/finance/quoteSummary";

const QUOTE_SUMMARY_MODULES: &str =
    "price,summaryDetail,financialData,defaultKeyStatistics,assetProfile";

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
    (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Everything fetched for one request: the ticker profile, its history, and
/// the reference index history
#[derive(Debug, Clone)]
pub struct MarketSnapshot {
    pub profile: TickerProfile,
    pub history: HistorySeries,
    pub index_history: HistorySeries,
}

/// Yahoo Finance client
pub struct MarketDataClient {
    http: reqwest::Client,
}

impl MarketDataClient {
    /// Create a new client
    pub fn new() -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self { http })
    }

    /// Fetch the attribute profile for a symbol
    ///
    /// An unknown symbol yields an all-`None` profile; only transport-level
    /// failures are errors.
    pub async fn fetch_profile(&self, symbol: &str) -> Result<TickerProfile> {
        let symbol = normalize_symbol(symbol)?;
        let url = format!("{QUOTE_SUMMARY_BASE}/{symbol}");

        let response = self
            .http
            .get(&url)
            .query(&[("modules", QUOTE_SUMMARY_MODULES)])
            .send()
            .await?;

        // The endpoint answers 404 with an error body for unknown symbols;
        // that is a mostly-missing profile, not a failure.
        if response.status().as_u16() == 404 {
            warn!("No quote summary for {symbol}, returning empty profile");
            return Ok(TickerProfile::empty(symbol));
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(MarketError::Provider(format!("HTTP {status}: {body}")));
        }

        let envelope: QuoteSummaryEnvelope = response.json().await?;

        if let Some(error) = envelope.quote_summary.error {
            warn!(
                "Quote summary error for {symbol}: {}",
                error.description.as_deref().unwrap_or("unknown")
            );
            return Ok(TickerProfile::empty(symbol));
        }

        let modules = envelope
            .quote_summary
            .result
            .and_then(|mut results| {
                if results.is_empty() {
                    None
                } else {
                    Some(results.remove(0))
                }
            })
            .unwrap_or_default();

        debug!("Fetched quote summary for {symbol}");
        Ok(TickerProfile::from_modules(symbol, modules))
    }

    /// Fetch the trailing 5-year daily history for a symbol
    ///
    /// A symbol with no quote data yields an empty series; connection
    /// failures propagate.
    pub async fn fetch_history(&self, symbol: &str) -> Result<HistorySeries> {
        let symbol = normalize_symbol(symbol)?;

        let provider =
            yahoo::YahooConnector::new().map_err(|e| MarketError::Provider(e.to_string()))?;

        let end = Utc::now();
        let start = end - chrono::Duration::days(HISTORY_WINDOW_DAYS);

        // Convert chrono DateTime to time OffsetDateTime
        let start_odt = OffsetDateTime::from_unix_timestamp(start.timestamp())
            .map_err(|e| MarketError::Provider(format!("Invalid start timestamp: {e}")))?;
        let end_odt = OffsetDateTime::from_unix_timestamp(end.timestamp())
            .map_err(|e| MarketError::Provider(format!("Invalid end timestamp: {e}")))?;

        let response = match provider.get_quote_history(&symbol, start_odt, end_odt).await {
            Ok(response) => response,
            Err(yahoo::YahooError::ConnectionFailed(e)) => return Err(MarketError::Network(e)),
            Err(e) => {
                warn!("No history for {symbol}: {e}");
                return Ok(HistorySeries::empty());
            }
        };

        let quotes = match response.quotes() {
            Ok(quotes) => quotes,
            Err(e) => {
                warn!("Empty history payload for {symbol}: {e}");
                return Ok(HistorySeries::empty());
            }
        };

        let bars = quotes
            .iter()
            .map(|q| Bar {
                timestamp: DateTime::from_timestamp(q.timestamp as i64, 0)
                    .unwrap_or_else(Utc::now),
                open: q.open,
                high: q.high,
                low: q.low,
                close: q.close,
                volume: q.volume,
            })
            .collect();

        debug!("Fetched history for {symbol}");
        Ok(HistorySeries::new(bars))
    }

    /// Fetch the full snapshot: profile, ticker history, and reference index
    /// history
    pub async fn fetch_snapshot(&self, symbol: &str) -> Result<MarketSnapshot> {
        let profile = self.fetch_profile(symbol).await?;
        let history = self.fetch_history(symbol).await?;
        let index_history = self.fetch_history(REFERENCE_INDEX).await?;

        Ok(MarketSnapshot {
            profile,
            history,
            index_history,
        })
    }
}

/// Uppercase and validate a ticker symbol
fn normalize_symbol(symbol: &str) -> Result<String> {
    let symbol = symbol.trim().to_uppercase();
    if symbol.is_empty() {
        return Err(MarketError::InvalidSymbol("must not be empty".to_string()));
    }
    Ok(symbol)
}

#[derive(Debug, Deserialize)]
struct QuoteSummaryEnvelope {
    #[serde(rename = "quoteSummary")]
    quote_summary: QuoteSummaryBody,
}

#[derive(Debug, Deserialize)]
struct QuoteSummaryBody {
    result: Option<Vec<SummaryModules>>,
    error: Option<QuoteSummaryError>,
}

#[derive(Debug, Deserialize)]
struct QuoteSummaryError {
    description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_symbol() {
        assert_eq!(normalize_symbol(" ionq ").unwrap(), "IONQ");
        assert_eq!(normalize_symbol("^ixic").unwrap(), "^IXIC");
        assert!(normalize_symbol("  ").is_err());
    }

    #[test]
    fn test_envelope_parsing_with_error_body() {
        let json = r#"{
            "quoteSummary": {
                "result": null,
                "error": { "code": "Not Found", "description": "Quote not found for ticker symbol: ZZZZ" }
            }
        }"#;

        let envelope: QuoteSummaryEnvelope = serde_json::from_str(json).unwrap();
        assert!(envelope.quote_summary.result.is_none());
        assert!(envelope.quote_summary.error.is_some());
    }

    #[tokio::test]
    #[ignore] // Requires network access
    async fn test_fetch_profile() {
        let client = MarketDataClient::new().unwrap();
        let profile = client.fetch_profile("AAPL").await.unwrap();
        assert_eq!(profile.symbol, "AAPL");
        assert!(profile.current_price.is_some());
    }

    #[tokio::test]
    #[ignore] // Requires network access
    async fn test_fetch_history() {
        let client = MarketDataClient::new().unwrap();
        let history = client.fetch_history("AAPL").await.unwrap();
        assert!(!history.is_empty());
    }

    #[tokio::test]
    #[ignore] // Requires network access
    async fn test_fetch_snapshot_includes_index() {
        let client = MarketDataClient::new().unwrap();
        let snapshot = client.fetch_snapshot("AAPL").await.unwrap();
        assert!(!snapshot.index_history.is_empty());
    }
}
