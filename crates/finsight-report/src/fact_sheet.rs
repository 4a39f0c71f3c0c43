//! The ten-section financial fact sheet

use crate::value;
use chrono::NaiveDate;
use finsight_market::TickerProfile;

/// Render the fact sheet for one ticker
///
/// Pure formatting: every field is looked up independently and absent fields
/// degrade to the sentinel. Section order is fixed; callers (and the LLM
/// pipeline downstream) rely on it.
pub fn fact_sheet(profile: &TickerProfile, date: NaiveDate) -> String {
    let name = value::text(profile.short_name.as_deref());
    let symbol = &profile.symbol;

    format!(
        "---- {name} ({symbol}) Financial Sheet ----

** Date : {date}

# Company Overview:
Symbol: {symbol}
Company Name: {name}
Current Price: {current_price}
Market Cap: {market_cap}
Industry: {industry}
Sector: {sector}
Country: {country}
Employees: {employees}

# Financial Ratios:
Trailing P/E: {trailing_pe}
Forward P/E: {forward_pe}
Price to Sales (TTM): {price_to_sales}
Enterprise/Revenue: {enterprise_to_revenue}
Enterprise/EBITDA: {enterprise_to_ebitda}
Return on Assets: {return_on_assets}
Return on Equity: {return_on_equity}
Price to Book: {price_to_book}

# Company Valuation:
Total Revenue: {total_revenue}
Net Income: {net_income}
Revenue Per Share: {revenue_per_share}
Total Cash: {total_cash}
Free Cash Flow: {free_cashflow}
Enterprise Value: {enterprise_value}
Book Value: {book_value}

# Profitability & Growth:
Quarterly Revenue Growth: {revenue_growth}
Revenue Growth: {revenue_growth}
Earnings Growth: {earnings_growth}
Gross Margins: {gross_margins}
Operating Margins: {operating_margins}
EBITDA Margins: {ebitda_margins}
Profit Margins: {profit_margins}

# Market Price Action:
Price: {current_price}
Year Range: {year_low} - {year_high}
Beta: {beta}
Volume: {volume}
Average Volume: {average_volume}

# Dividend Information:
Dividend Rate: {dividend_rate}
Dividend Yield: {dividend_yield}
Payout Ratio: {payout_ratio}
5Y Avg Dividend Yield: {five_year_avg_dividend_yield}

# Debt Overview:
Total Debt: {total_debt}
Quick Ratio: {quick_ratio}
Current Ratio: {current_ratio}
Debt to Equity: {debt_to_equity}

# Analyst Recommendations:
Target Price Range (low - high): {target_low} - {target_high}
Mean Target: {target_mean}
Recommendation: {recommendation}
Number of Analysts: {analyst_count}

# Risk:
Audit Risk: {audit_risk}
Board Risk: {board_risk}
Compensation Risk: {compensation_risk}
Shareholder Rights Risk: {shareholder_rights_risk}
Overall Risk: {overall_risk}

# Short Interest:
Float Shares: {float_shares}
Shares Outstanding: {shares_outstanding}
Shares Short: {shares_short}
Short Ratio: {short_ratio}
Short % of Float: {short_percent_of_float}
Institutional Holdings: {held_percent_institutions}
",
        current_price = value::currency(profile.current_price),
        market_cap = value::currency(profile.market_cap),
        industry = value::text(profile.industry.as_deref()),
        sector = value::text(profile.sector.as_deref()),
        country = value::text(profile.country.as_deref()),
        employees = value::int(profile.full_time_employees),
        trailing_pe = value::num(profile.trailing_pe),
        forward_pe = value::num(profile.forward_pe),
        price_to_sales = value::num(profile.price_to_sales_ttm),
        enterprise_to_revenue = value::num(profile.enterprise_to_revenue),
        enterprise_to_ebitda = value::num(profile.enterprise_to_ebitda),
        return_on_assets = value::num(profile.return_on_assets),
        return_on_equity = value::num(profile.return_on_equity),
        price_to_book = value::num(profile.price_to_book),
        total_revenue = value::currency(profile.total_revenue),
        net_income = value::currency(profile.net_income_to_common),
        revenue_per_share = value::currency(profile.revenue_per_share),
        total_cash = value::currency(profile.total_cash),
        free_cashflow = value::currency(profile.free_cashflow),
        enterprise_value = value::currency(profile.enterprise_value),
        book_value = value::num(profile.book_value),
        revenue_growth = value::num(profile.revenue_growth),
        earnings_growth = value::num(profile.earnings_growth),
        gross_margins = value::num(profile.gross_margins),
        operating_margins = value::num(profile.operating_margins),
        ebitda_margins = value::num(profile.ebitda_margins),
        profit_margins = value::num(profile.profit_margins),
        year_low = value::currency(profile.fifty_two_week_low),
        year_high = value::currency(profile.fifty_two_week_high),
        beta = value::num(profile.beta),
        volume = value::int(profile.volume),
        average_volume = value::int(profile.average_volume),
        dividend_rate = value::currency(profile.dividend_rate),
        dividend_yield = value::num(profile.dividend_yield),
        payout_ratio = value::num(profile.payout_ratio),
        five_year_avg_dividend_yield = value::num(profile.five_year_avg_dividend_yield),
        total_debt = value::currency(profile.total_debt),
        quick_ratio = value::num(profile.quick_ratio),
        current_ratio = value::num(profile.current_ratio),
        debt_to_equity = value::num(profile.debt_to_equity),
        target_low = value::currency(profile.target_low_price),
        target_high = value::currency(profile.target_high_price),
        target_mean = value::currency(profile.target_mean_price),
        recommendation = value::text(profile.recommendation_key.as_deref()),
        analyst_count = value::int(profile.number_of_analyst_opinions),
        audit_risk = value::int(profile.audit_risk),
        board_risk = value::int(profile.board_risk),
        compensation_risk = value::int(profile.compensation_risk),
        shareholder_rights_risk = value::int(profile.shareholder_rights_risk),
        overall_risk = value::int(profile.overall_risk),
        float_shares = value::num(profile.float_shares),
        shares_outstanding = value::num(profile.shares_outstanding),
        shares_short = value::num(profile.shares_short),
        short_ratio = value::num(profile.short_ratio),
        short_percent_of_float = value::num(profile.short_percent_of_float),
        held_percent_institutions = value::num(profile.held_percent_institutions),
    )
}

/// Section headers in their fixed order
pub const SECTION_HEADERS: [&str; 10] = [
    "# Company Overview:",
    "# Financial Ratios:",
    "# Company Valuation:",
    "# Profitability & Growth:",
    "# Market Price Action:",
    "# Dividend Information:",
    "# Debt Overview:",
    "# Analyst Recommendations:",
    "# Risk:",
    "# Short Interest:",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SENTINEL;

    fn report_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 2).expect("valid date")
    }

    fn populated_profile() -> TickerProfile {
        TickerProfile {
            symbol: "IONQ".to_string(),
            short_name: Some("IonQ, Inc.".to_string()),
            long_name: Some("IonQ, Inc.".to_string()),
            sector: Some("Technology".to_string()),
            industry: Some("Computer Hardware".to_string()),
            country: Some("United States".to_string()),
            full_time_employees: Some(767),
            long_business_summary: Some("IonQ develops quantum computers.".to_string()),
            current_price: Some(42.0),
            previous_close: Some(41.5),
            fifty_two_week_low: Some(6.22),
            fifty_two_week_high: Some(54.74),
            beta: Some(2.53),
            volume: Some(12_345_678),
            average_volume: Some(23_456_789),
            market_cap: Some(8_900_000_000.0),
            trailing_pe: Some(100.5),
            forward_pe: Some(-50.2),
            price_to_sales_ttm: Some(210.4),
            price_to_book: Some(17.8),
            enterprise_value: Some(8_500_000_000.0),
            enterprise_to_revenue: Some(200.1),
            enterprise_to_ebitda: Some(-55.3),
            total_revenue: Some(43_100_000.0),
            net_income_to_common: Some(-171_600_000.0),
            revenue_per_share: Some(0.21),
            total_cash: Some(365_000_000.0),
            free_cashflow: Some(-120_000_000.0),
            book_value: Some(2.36),
            revenue_growth: Some(0.998),
            earnings_growth: Some(-0.25),
            gross_margins: Some(0.712),
            operating_margins: Some(-3.4),
            ebitda_margins: Some(-3.1),
            profit_margins: Some(-3.98),
            return_on_assets: Some(-0.176),
            return_on_equity: Some(-0.398),
            dividend_rate: Some(0.0),
            dividend_yield: Some(0.0),
            payout_ratio: Some(0.0),
            five_year_avg_dividend_yield: Some(0.0),
            total_debt: Some(14_000_000.0),
            quick_ratio: Some(11.5),
            current_ratio: Some(12.1),
            debt_to_equity: Some(2.9),
            target_low_price: Some(28.0),
            target_high_price: Some(70.0),
            target_mean_price: Some(47.5),
            recommendation_key: Some("buy".to_string()),
            number_of_analyst_opinions: Some(7),
            audit_risk: Some(5),
            board_risk: Some(6),
            compensation_risk: Some(4),
            shareholder_rights_risk: Some(5),
            overall_risk: Some(6),
            float_shares: Some(180_000_000.0),
            shares_outstanding: Some(212_000_000.0),
            shares_short: Some(40_000_000.0),
            short_ratio: Some(2.1),
            short_percent_of_float: Some(0.22),
            held_percent_institutions: Some(0.57),
        }
    }

    #[test]
    fn test_all_sections_present_in_order() {
        let sheet = fact_sheet(&populated_profile(), report_date());

        let mut last = 0;
        for header in SECTION_HEADERS {
            let pos = sheet.find(header).unwrap_or_else(|| {
                panic!("missing section header: {header}");
            });
            assert!(pos > last, "section {header} out of order");
            last = pos;
        }
    }

    #[test]
    fn test_populated_profile_renders_values() {
        let sheet = fact_sheet(&populated_profile(), report_date());

        assert!(sheet.contains("---- IonQ, Inc. (IONQ) Financial Sheet ----"));
        assert!(sheet.contains("** Date : 2025-06-02"));
        assert!(sheet.contains("Current Price: $42"));
        assert!(sheet.contains("Market Cap: $8900000000"));
        assert!(sheet.contains("Sector: Technology"));
        assert!(sheet.contains("Employees: 767"));
        assert!(sheet.contains("Recommendation: buy"));
        assert!(sheet.contains("Overall Risk: 6"));
        // Nothing degraded
        assert!(!sheet.contains(SENTINEL));
    }

    #[test]
    fn test_populated_sections_non_empty() {
        let sheet = fact_sheet(&populated_profile(), report_date());

        for window in SECTION_HEADERS.windows(2) {
            let start = sheet.find(window[0]).expect("header present");
            let end = sheet.find(window[1]).expect("header present");
            let body = &sheet[start + window[0].len()..end];
            assert!(
                body.trim().lines().count() >= 3,
                "section {} looks empty",
                window[0]
            );
        }
    }

    #[test]
    fn test_empty_profile_degrades_to_sentinel() {
        let profile = TickerProfile::empty("ZZZZ");
        let sheet = fact_sheet(&profile, report_date());

        // Every section still present
        for header in SECTION_HEADERS {
            assert!(sheet.contains(header), "missing section header: {header}");
        }

        // All fields degraded, none raised
        assert!(sheet.contains(&format!("Company Name: {SENTINEL}")));
        assert!(sheet.contains(&format!("Current Price: {SENTINEL}")));
        assert!(sheet.contains(&format!("Overall Risk: {SENTINEL}")));
        assert!(sheet.contains(&format!("Institutional Holdings: {SENTINEL}")));
        assert!(sheet.contains("(ZZZZ)"));
    }

    #[test]
    fn test_partial_profile_mixes_values_and_sentinel() {
        let profile = TickerProfile {
            current_price: Some(10.0),
            ..TickerProfile::empty("PART")
        };
        let sheet = fact_sheet(&profile, report_date());

        assert!(sheet.contains("Current Price: $10"));
        assert!(sheet.contains(&format!("Market Cap: {SENTINEL}")));
    }
}
