//! Capability framework for finsight
//!
//! A capability is a plain async function with a declared input/output
//! contract (name, description, JSON schema). Capabilities are registered
//! explicitly in a [`CapabilityTable`]; there is no trait hierarchy and no
//! reflective discovery.

pub mod capability;
pub mod error;
pub mod table;

pub use capability::{Capability, CapabilityFuture, CapabilityHandler};
pub use error::{CapabilityError, Result};
pub use table::CapabilityTable;
