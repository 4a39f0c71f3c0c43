//! Ticker attribute profile
//!
//! The quote-summary endpoint returns a bag of loosely-schemaed modules where
//! most numeric fields arrive as `{"raw": 1.23, "fmt": "1.23"}` objects and
//! any field may be absent for any ticker. [`TickerProfile`] flattens the
//! modules into one struct of explicit optionals; nothing downstream ever
//! sees a sentinel string.

use serde::{Deserialize, Serialize};

/// All financial attributes known for one ticker
///
/// Every field is optional. A profile fetched for an unknown symbol is simply
/// all-`None` apart from `symbol`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TickerProfile {
    /// Requested symbol, uppercased
    pub symbol: String,

    // Identity
    pub short_name: Option<String>,
    pub long_name: Option<String>,
    pub sector: Option<String>,
    pub industry: Option<String>,
    pub country: Option<String>,
    pub full_time_employees: Option<u64>,
    pub long_business_summary: Option<String>,

    // Prices
    pub current_price: Option<f64>,
    pub previous_close: Option<f64>,
    pub fifty_two_week_low: Option<f64>,
    pub fifty_two_week_high: Option<f64>,
    pub beta: Option<f64>,
    pub volume: Option<u64>,
    pub average_volume: Option<u64>,

    // Valuation
    pub market_cap: Option<f64>,
    pub trailing_pe: Option<f64>,
    pub forward_pe: Option<f64>,
    pub price_to_sales_ttm: Option<f64>,
    pub price_to_book: Option<f64>,
    pub enterprise_value: Option<f64>,
    pub enterprise_to_revenue: Option<f64>,
    pub enterprise_to_ebitda: Option<f64>,
    pub total_revenue: Option<f64>,
    pub net_income_to_common: Option<f64>,
    pub revenue_per_share: Option<f64>,
    pub total_cash: Option<f64>,
    pub free_cashflow: Option<f64>,
    pub book_value: Option<f64>,

    // Profitability and growth
    pub revenue_growth: Option<f64>,
    pub earnings_growth: Option<f64>,
    pub gross_margins: Option<f64>,
    pub operating_margins: Option<f64>,
    pub ebitda_margins: Option<f64>,
    pub profit_margins: Option<f64>,
    pub return_on_assets: Option<f64>,
    pub return_on_equity: Option<f64>,

    // Dividends
    pub dividend_rate: Option<f64>,
    pub dividend_yield: Option<f64>,
    pub payout_ratio: Option<f64>,
    pub five_year_avg_dividend_yield: Option<f64>,

    // Debt
    pub total_debt: Option<f64>,
    pub quick_ratio: Option<f64>,
    pub current_ratio: Option<f64>,
    pub debt_to_equity: Option<f64>,

    // Analyst data
    pub target_low_price: Option<f64>,
    pub target_high_price: Option<f64>,
    pub target_mean_price: Option<f64>,
    pub recommendation_key: Option<String>,
    pub number_of_analyst_opinions: Option<u64>,

    // Governance risk scores (1 best, 10 worst)
    pub audit_risk: Option<u64>,
    pub board_risk: Option<u64>,
    pub compensation_risk: Option<u64>,
    pub shareholder_rights_risk: Option<u64>,
    pub overall_risk: Option<u64>,

    // Short interest
    pub float_shares: Option<f64>,
    pub shares_outstanding: Option<f64>,
    pub shares_short: Option<f64>,
    pub short_ratio: Option<f64>,
    pub short_percent_of_float: Option<f64>,
    pub held_percent_institutions: Option<f64>,
}

impl TickerProfile {
    /// An all-`None` profile for the given symbol
    pub fn empty(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Self::default()
        }
    }

    /// Flatten the quote-summary modules into a profile
    pub(crate) fn from_modules(symbol: String, modules: SummaryModules) -> Self {
        let price = modules.price.unwrap_or_default();
        let detail = modules.summary_detail.unwrap_or_default();
        let financial = modules.financial_data.unwrap_or_default();
        let stats = modules.default_key_statistics.unwrap_or_default();
        let asset = modules.asset_profile.unwrap_or_default();

        Self {
            symbol,

            short_name: price.short_name,
            long_name: price.long_name,
            sector: asset.sector,
            industry: asset.industry,
            country: asset.country,
            full_time_employees: asset.full_time_employees,
            long_business_summary: asset.long_business_summary,

            current_price: raw(&financial.current_price),
            previous_close: raw(&detail.previous_close),
            fifty_two_week_low: raw(&detail.fifty_two_week_low),
            fifty_two_week_high: raw(&detail.fifty_two_week_high),
            beta: raw(&detail.beta),
            volume: raw(&detail.volume).map(|v| v as u64),
            average_volume: raw(&detail.average_volume).map(|v| v as u64),

            market_cap: raw(&price.market_cap).or(raw(&detail.market_cap)),
            trailing_pe: raw(&detail.trailing_pe),
            forward_pe: raw(&detail.forward_pe),
            price_to_sales_ttm: raw(&detail.price_to_sales_trailing_12_months),
            price_to_book: raw(&stats.price_to_book),
            enterprise_value: raw(&stats.enterprise_value),
            enterprise_to_revenue: raw(&stats.enterprise_to_revenue),
            enterprise_to_ebitda: raw(&stats.enterprise_to_ebitda),
            total_revenue: raw(&financial.total_revenue),
            net_income_to_common: raw(&stats.net_income_to_common),
            revenue_per_share: raw(&financial.revenue_per_share),
            total_cash: raw(&financial.total_cash),
            free_cashflow: raw(&financial.free_cashflow),
            book_value: raw(&stats.book_value),

            revenue_growth: raw(&financial.revenue_growth),
            earnings_growth: raw(&financial.earnings_growth),
            gross_margins: raw(&financial.gross_margins),
            operating_margins: raw(&financial.operating_margins),
            ebitda_margins: raw(&financial.ebitda_margins),
            profit_margins: raw(&financial.profit_margins),
            return_on_assets: raw(&financial.return_on_assets),
            return_on_equity: raw(&financial.return_on_equity),

            dividend_rate: raw(&detail.dividend_rate),
            dividend_yield: raw(&detail.dividend_yield),
            payout_ratio: raw(&detail.payout_ratio),
            five_year_avg_dividend_yield: raw(&detail.five_year_avg_dividend_yield),

            total_debt: raw(&financial.total_debt),
            quick_ratio: raw(&financial.quick_ratio),
            current_ratio: raw(&financial.current_ratio),
            debt_to_equity: raw(&financial.debt_to_equity),

            target_low_price: raw(&financial.target_low_price),
            target_high_price: raw(&financial.target_high_price),
            target_mean_price: raw(&financial.target_mean_price),
            recommendation_key: financial.recommendation_key,
            number_of_analyst_opinions: raw(&financial.number_of_analyst_opinions)
                .map(|v| v as u64),

            audit_risk: asset.audit_risk,
            board_risk: asset.board_risk,
            compensation_risk: asset.compensation_risk,
            shareholder_rights_risk: asset.share_holder_rights_risk,
            overall_risk: asset.overall_risk,

            float_shares: raw(&stats.float_shares),
            shares_outstanding: raw(&stats.shares_outstanding),
            shares_short: raw(&stats.shares_short),
            short_ratio: raw(&stats.short_ratio),
            short_percent_of_float: raw(&stats.short_percent_of_float),
            held_percent_institutions: raw(&stats.held_percent_institutions),
        }
    }
}

fn raw(value: &Option<RawNum>) -> Option<f64> {
    value.as_ref().and_then(|v| v.raw)
}

/// A `{"raw": ..., "fmt": ...}` numeric field; only `raw` is kept.
///
/// Empty objects (`{}`) appear where the upstream has no value, so `raw`
/// itself is optional too.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct RawNum {
    pub raw: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct SummaryModules {
    pub price: Option<PriceModule>,
    #[serde(rename = "summaryDetail")]
    pub summary_detail: Option<SummaryDetailModule>,
    #[serde(rename = "financialData")]
    pub financial_data: Option<FinancialDataModule>,
    #[serde(rename = "defaultKeyStatistics")]
    pub default_key_statistics: Option<KeyStatisticsModule>,
    #[serde(rename = "assetProfile")]
    pub asset_profile: Option<AssetProfileModule>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PriceModule {
    pub short_name: Option<String>,
    pub long_name: Option<String>,
    pub market_cap: Option<RawNum>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SummaryDetailModule {
    pub previous_close: Option<RawNum>,
    pub market_cap: Option<RawNum>,
    #[serde(rename = "trailingPE")]
    pub trailing_pe: Option<RawNum>,
    #[serde(rename = "forwardPE")]
    pub forward_pe: Option<RawNum>,
    #[serde(rename = "priceToSalesTrailing12Months")]
    pub price_to_sales_trailing_12_months: Option<RawNum>,
    pub fifty_two_week_low: Option<RawNum>,
    pub fifty_two_week_high: Option<RawNum>,
    pub beta: Option<RawNum>,
    pub volume: Option<RawNum>,
    pub average_volume: Option<RawNum>,
    pub dividend_rate: Option<RawNum>,
    pub dividend_yield: Option<RawNum>,
    pub payout_ratio: Option<RawNum>,
    pub five_year_avg_dividend_yield: Option<RawNum>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FinancialDataModule {
    pub current_price: Option<RawNum>,
    pub total_revenue: Option<RawNum>,
    pub revenue_per_share: Option<RawNum>,
    pub total_cash: Option<RawNum>,
    pub free_cashflow: Option<RawNum>,
    pub total_debt: Option<RawNum>,
    pub quick_ratio: Option<RawNum>,
    pub current_ratio: Option<RawNum>,
    pub debt_to_equity: Option<RawNum>,
    pub revenue_growth: Option<RawNum>,
    pub earnings_growth: Option<RawNum>,
    pub gross_margins: Option<RawNum>,
    pub operating_margins: Option<RawNum>,
    pub ebitda_margins: Option<RawNum>,
    pub profit_margins: Option<RawNum>,
    pub return_on_assets: Option<RawNum>,
    pub return_on_equity: Option<RawNum>,
    pub target_low_price: Option<RawNum>,
    pub target_high_price: Option<RawNum>,
    pub target_mean_price: Option<RawNum>,
    pub recommendation_key: Option<String>,
    pub number_of_analyst_opinions: Option<RawNum>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct KeyStatisticsModule {
    pub enterprise_value: Option<RawNum>,
    pub enterprise_to_revenue: Option<RawNum>,
    pub enterprise_to_ebitda: Option<RawNum>,
    pub price_to_book: Option<RawNum>,
    pub book_value: Option<RawNum>,
    pub net_income_to_common: Option<RawNum>,
    pub float_shares: Option<RawNum>,
    pub shares_outstanding: Option<RawNum>,
    pub shares_short: Option<RawNum>,
    pub short_ratio: Option<RawNum>,
    pub short_percent_of_float: Option<RawNum>,
    pub held_percent_institutions: Option<RawNum>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AssetProfileModule {
    pub sector: Option<String>,
    pub industry: Option<String>,
    pub country: Option<String>,
    pub full_time_employees: Option<u64>,
    pub long_business_summary: Option<String>,
    pub audit_risk: Option<u64>,
    pub board_risk: Option<u64>,
    pub compensation_risk: Option<u64>,
    pub share_holder_rights_risk: Option<u64>,
    pub overall_risk: Option<u64>,
}
