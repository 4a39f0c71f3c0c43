//! The two-stage stock analyst

use crate::capability::{FACT_SHEET_CAPABILITY, fact_sheet_capability};
use crate::config::AppConfig;
use crate::error::Result;
use crate::prompts;
use finsight_llm::LlmProvider;
use finsight_pipeline::{Pipeline, ProgressFn, StageRequest, StageRunner, TaskResult};
use finsight_tools::CapabilityTable;
use std::sync::Arc;
use tracing::info;

/// Collector reasoning bound: one round trip, enough to run its capability
const COLLECTOR_MAX_ITERATIONS: usize = 1;

/// Reporter reasoning bound
const REPORTER_MAX_ITERATIONS: usize = 3;

/// Sequences the collector and reporter stages for one ticker
pub struct StockAnalyst {
    runner: StageRunner,
}

impl StockAnalyst {
    /// Wire the analyst: register the fact-sheet capability and bind the
    /// runner to the configured model profile
    pub fn new(provider: Arc<dyn LlmProvider>, config: &AppConfig) -> Self {
        let table = CapabilityTable::new();
        table.register(fact_sheet_capability());

        let runner = StageRunner::new(provider, Arc::new(table), config.profile.clone());
        Self { runner }
    }

    /// Generate the narrative report for a ticker
    ///
    /// Runs the two stages strictly in sequence; `on_progress` fires after
    /// each stage with that stage's result. The returned result is the
    /// reporter's markdown.
    pub async fn generate_report(
        &self,
        ticker: &str,
        on_progress: &ProgressFn<'_>,
    ) -> Result<TaskResult> {
        let ticker = ticker.trim().to_uppercase();
        info!("Generating financial report for {ticker}");

        let pipeline = Pipeline::builder(self.runner.clone())
            .add_stage(collector_stage(&ticker))
            .add_stage(reporter_stage(&ticker))
            .build()?;

        let result = pipeline.run(on_progress).await?;
        Ok(result)
    }
}

/// The collector stage for one ticker
fn collector_stage(ticker: &str) -> StageRequest {
    StageRequest::builder(prompts::COLLECTOR_ROLE)
        .persona(prompts::COLLECTOR_PERSONA)
        .instructions(prompts::collector_instructions(ticker))
        .expected_output(prompts::COLLECTOR_EXPECTED)
        .capability(FACT_SHEET_CAPABILITY)
        .max_iterations(COLLECTOR_MAX_ITERATIONS)
        .build()
}

/// The reporter stage for one ticker
///
/// Context is left unset here; the pipeline chains the collector's output in.
fn reporter_stage(ticker: &str) -> StageRequest {
    StageRequest::builder(prompts::REPORTER_ROLE)
        .persona(prompts::REPORTER_PERSONA)
        .instructions(prompts::reporter_instructions(ticker))
        .expected_output(prompts::REPORTER_OUTPUT_FORMAT)
        .max_iterations(REPORTER_MAX_ITERATIONS)
        .build()
}
