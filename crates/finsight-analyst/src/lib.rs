//! Stock analysis wiring for finsight
//!
//! This crate turns the generic stage pipeline into the concrete two-stage
//! narrative generator: a collector stage whose capability is the fact sheet,
//! followed by a reporter stage that writes the markdown report from the
//! collector's output. Configuration is an explicit struct built at startup;
//! nothing is loaded at module scope.

pub mod analyst;
pub mod capability;
pub mod config;
pub mod error;
pub mod prompts;

pub use analyst::StockAnalyst;
pub use capability::{FACT_SHEET_CAPABILITY, fact_sheet_capability};
pub use config::AppConfig;
pub use error::{AnalystError, Result};
