//! Output envelope shared by every calculation that reports a breakdown.

use serde::{Deserialize, Serialize};
use std::time::Instant;

/// A calculation result plus how it was produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Computation<T> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: Metadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub version: String,
    pub computation_time_us: u64,
    /// Numeric representation used for amounts
    pub precision: String,
}

impl<T: Serialize> Computation<T> {
    pub fn new(methodology: &str, assumptions: serde_json::Value, result: T) -> Self {
        Computation {
            result,
            methodology: methodology.to_string(),
            assumptions,
            warnings: Vec::new(),
            metadata: Metadata {
                version: env!("CARGO_PKG_VERSION").to_string(),
                computation_time_us: 0,
                precision: "integer_cents".to_string(),
            },
        }
    }

    pub fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings = warnings;
        self
    }

    /// Record the time elapsed since `start`.
    pub fn timed(mut self, start: Instant) -> Self {
        self.metadata.computation_time_us = start.elapsed().as_micros() as u64;
        self
    }
}
