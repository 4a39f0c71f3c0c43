//! The fact-sheet capability
//!
//! The collector stage's only capability: fetch a fresh profile for the
//! requested ticker and format it as the ten-section fact sheet. Declared
//! contract: one required string parameter, `ticker`; output is the sheet
//! text.

use chrono::Utc;
use finsight_llm::capability::schema;
use finsight_market::MarketDataClient;
use finsight_report::fact_sheet;
use finsight_tools::{Capability, CapabilityError};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

/// Name the capability is registered under
pub const FACT_SHEET_CAPABILITY: &str = "fact_sheet";

#[derive(Debug, Deserialize)]
struct FactSheetParams {
    ticker: String,
}

/// Build the fact-sheet capability
pub fn fact_sheet_capability() -> Capability {
    Capability::new(
        FACT_SHEET_CAPABILITY,
        "Collect financial data for a given stock ticker. Returns a formatted fact sheet \
         covering company overview, ratios, valuation, profitability, price action, dividends, \
         debt, analyst recommendations, risk, and short interest.",
        schema::object(
            json!({
                "ticker": schema::string("Stock ticker symbol, e.g. 'IONQ'"),
            }),
            vec!["ticker"],
        ),
        |params| async move {
            let params: FactSheetParams = serde_json::from_value(params)
                .map_err(|e| CapabilityError::InvalidParams(e.to_string()))?;

            debug!("Building fact sheet for {}", params.ticker);

            let client = MarketDataClient::new()
                .map_err(|e| CapabilityError::ExecutionFailed(e.to_string()))?;
            let profile = client
                .fetch_profile(&params.ticker)
                .await
                .map_err(|e| CapabilityError::ExecutionFailed(e.to_string()))?;

            let sheet = fact_sheet(&profile, Utc::now().date_naive());
            Ok(json!(sheet))
        },
    )
}
