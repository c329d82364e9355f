//! Error taxonomy.
//!
//! Only configuration problems are surfaced as errors. Steady-state
//! anomalies (placement exhaustion, capacity, double removal) degrade to
//! "do nothing this cycle" and are never errors.

use thiserror::Error;

/// Startup configuration failure. The engine logs it and degrades to a
/// zero-width row layout rather than crashing downstream code.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("row geometry configuration is missing")]
    MissingRowGeometry,
    #[error("row geometry is invalid: {reason}")]
    InvalidRowGeometry { reason: String },
}
