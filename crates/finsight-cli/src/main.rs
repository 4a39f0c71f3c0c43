//! Command-line interface for finsight
//!
//! One request per run: fetch market data for the ticker, drive the
//! two-stage report pipeline, then print the dashboard, the narrative
//! report, and the disclaimer.

use anyhow::Context;
use clap::Parser;
use finsight_analyst::{AppConfig, StockAnalyst};
use finsight_dashboard::render_dashboard;
use finsight_llm::{GroqConfig, GroqProvider};
use finsight_market::MarketDataClient;
use std::sync::Arc;
use tracing::info;

const DISCLAIMER: &str =
    "** AI generated report ** Not financial advice; do your own research before investing.";

#[derive(Parser, Debug)]
#[command(name = "finsight")]
#[command(about = "Financial analysis dashboard and report generator", long_about = None)]
struct Args {
    /// Stock ticker to analyze
    #[arg(default_value = "IONQ")]
    ticker: String,

    /// Show the full company description instead of a preview
    #[arg(long)]
    expand: bool,

    /// Skip the terminal price chart
    #[arg(long)]
    no_chart: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    finsight_utils::init_tracing();

    let args = Args::parse();
    let ticker = args.ticker.trim().to_uppercase();

    let config = AppConfig::from_env().context("loading configuration")?;

    let mut provider_config = GroqConfig::new(config.api_key.clone());
    if let Some(base) = &config.api_base {
        provider_config = provider_config.with_api_base(base);
    }
    let provider =
        Arc::new(GroqProvider::with_config(provider_config).context("building LLM provider")?);

    let analyst = StockAnalyst::new(provider, &config);

    info!("Generating {ticker} financial report");
    println!("Generating {ticker} financial report...");

    let report = analyst
        .generate_report(&ticker, &|result| {
            println!("☑️  {}", result.progress_message());
        })
        .await
        .context("running the report pipeline")?;

    let client = MarketDataClient::new().context("building market data client")?;
    let snapshot = client
        .fetch_snapshot(&ticker)
        .await
        .context("fetching market data")?;

    println!("\n{}", "═".repeat(72));
    render_dashboard(
        &snapshot.profile,
        &snapshot.history,
        args.expand,
        !args.no_chart,
    )
    .context("rendering dashboard")?;

    println!("\n{}", "═".repeat(72));
    println!("{}", report.raw);
    println!("\n{}", "═".repeat(72));
    println!("{DISCLAIMER}");

    Ok(())
}
