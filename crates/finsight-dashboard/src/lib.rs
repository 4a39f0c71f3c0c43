//! Terminal dashboard rendering for finsight
//!
//! Consumes the raw market snapshot and emits terminal widgets: a header, a
//! four-column metric summary, a collapsible company description, and a
//! combined price/volume chart. Rendering is best-effort and partial: any
//! metric whose inputs are missing is skipped, never an error.

pub mod chart;
pub mod metrics;
pub mod render;

pub use chart::{ChartModel, MA_PERIOD, VOLUME_HEADROOM};
pub use metrics::{MetricsRow, PriceMetric, ValuationMetric};
pub use render::render_dashboard;
