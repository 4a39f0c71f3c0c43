//! Fixed prompts for the collector and reporter stages

/// Collector role name
pub const COLLECTOR_ROLE: &str = "Financial Data Collector";

/// Collector persona and goal
pub const COLLECTOR_PERSONA: &str = "A financial data specialist with expertise in gathering \
    market information. Your goal is to collect comprehensive financial data for the given \
    stock ticker.";

/// Collector expected-output line
pub const COLLECTOR_EXPECTED: &str =
    "A comprehensive fact sheet containing all available financial data for the stock.";

/// Reporter role name
pub const REPORTER_ROLE: &str = "Financial Analyst";

/// Reporter persona and goal
pub const REPORTER_PERSONA: &str = "An experienced financial analyst specializing in stock \
    market analysis and financial reporting. Your goal is to analyze financial data and create \
    detailed financial reports.";

/// Fixed output-format template for the reporter stage
pub const REPORTER_OUTPUT_FORMAT: &str = r"A detailed financial analysis report in markdown,
following this structure:

# <Company Name> (<TICKER>) Financial Report

## 1. Company Overview
What the company does, its sector and industry, size (market cap, employees),
and current share price.

## 2. Financial Ratios Analysis
Valuation (P/E, P/S, P/B, EV multiples) and profitability (margins, returns)
read against the raw numbers. Use a small markdown table where it helps.

## 3. Market Performance
Price action over the year range, beta, volume versus average volume, and
short interest.

## 4. Risk Assessment
Governance risk scores, balance-sheet risk (debt, liquidity ratios), and any
data gaps worth flagging.

## 5. Investment Recommendation
A clear view supported by the analyst consensus and target prices, with the
key caveats.

Support every claim with figures from the collected data. Where a figure is
marked N/A, say so rather than inventing one.";

/// Collector task instructions for one ticker
pub fn collector_instructions(ticker: &str) -> String {
    format!("Collect financial data for the specified stock {ticker} using the fact sheet capability.")
}

/// Reporter task instructions for one ticker
pub fn reporter_instructions(ticker: &str) -> String {
    format!(
        "Analyze the collected {ticker} financial data and create a detailed financial report \
         including:\n\
         1. Company Overview\n\
         2. Financial Ratios Analysis\n\
         3. Market Performance\n\
         4. Risk Assessment\n\
         5. Investment Recommendation\n\
         Use the data provided by the collector to support your analysis."
    )
}
