//! Shared utilities for finsight
//!
//! Common functionality used across the finsight workspace; currently the
//! tracing/logging bootstrap.

pub mod logging;

pub use logging::init_tracing;
