//! Market data fetching for finsight
//!
//! One fetch per request, no caching, no retries: the [`MarketDataClient`]
//! returns a [`MarketSnapshot`] holding the ticker's attribute profile, its
//! 5-year daily OHLCV history, and the same history for the reference index.
//! Every profile attribute is optional; the upstream schema guarantees
//! nothing.

pub mod client;
pub mod error;
pub mod profile;
pub mod series;

pub use client::{MarketDataClient, MarketSnapshot, REFERENCE_INDEX};
pub use error::{MarketError, Result};
pub use profile::TickerProfile;
pub use series::{Bar, HistorySeries};
