//! Fact sheet formatting for finsight
//!
//! Maps a [`finsight_market::TickerProfile`] into a fixed, human-readable
//! multi-section text block. All missing-value handling happens here, at the
//! presentation boundary: absent fields render as the [`value::SENTINEL`]
//! marker, never as an error.

pub mod fact_sheet;
pub mod value;

pub use fact_sheet::fact_sheet;
pub use value::SENTINEL;
