// In: src/config.rs

//! The single source of truth for zebra merge configuration.
//!
//! `ZebraConfig` is created once at the application boundary (e.g. from a JSON
//! file written by the ingestion driver) and handed to the `Pool`. Every
//! operation that allocates reads it from there, so the growth policy and the
//! row limit travel with the arena that the storage lives in.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ZebraError;

//==================================================================================
// I. Growth Policy
//==================================================================================

/// How a buffer's capacity is extended when it must hold more rows.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GrowthStrategy {
    /// **Default:** Capacity at least doubles on every growth, giving amortized
    /// O(1) appends. This is what the block appender relies on when it is fed
    /// one entity at a time.
    #[default]
    Doubling,

    /// Capacity grows to exactly the requested length. Useful when the caller
    /// knows the final size up front and wants no slack in the arena.
    Exact,
}

/// Capacity policy applied by the growth manager.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrowthPolicy {
    #[serde(default)]
    pub strategy: GrowthStrategy,

    /// The smallest capacity a non-empty buffer is ever given.
    #[serde(default = "default_min_capacity")]
    pub min_capacity: usize,
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self {
            strategy: GrowthStrategy::default(),
            min_capacity: default_min_capacity(),
        }
    }
}

impl GrowthPolicy {
    /// Returns the capacity a buffer currently holding `capacity` slots should
    /// be given so that it can hold `required` slots.
    pub fn next_capacity(&self, capacity: usize, required: usize) -> usize {
        if required <= capacity {
            return capacity;
        }
        match self.strategy {
            GrowthStrategy::Exact => required,
            GrowthStrategy::Doubling => required
                .max(capacity.saturating_mul(2))
                .max(self.min_capacity),
        }
    }
}

//==================================================================================
// II. Monitoring
//==================================================================================

/// Settings for diagnostic logging.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct MonitoringConfig {
    /// A `log` level filter name, e.g. "debug" or "trace".
    #[serde(default)]
    pub log_level: Option<String>,

    /// If set, log records are appended to this file instead of stderr.
    #[serde(default)]
    pub log_file: Option<String>,
}

//==================================================================================
// III. The Unified ZebraConfig
//==================================================================================

/// The single, unified configuration for the merge core.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct ZebraConfig {
    /// Capacity policy for every arena buffer grown by the merge core.
    #[serde(default)]
    pub growth: GrowthPolicy,

    /// Upper bound on the row count of any single table (nested tables
    /// included). `None` means unbounded.
    #[serde(default)]
    pub max_table_rows: Option<usize>,

    /// If true, the block appender re-verifies the whole block after every
    /// successful append. Expensive; meant for tests and format debugging.
    #[serde(default)]
    pub verify_after_append: bool,

    /// Configuration for diagnostic logging.
    #[serde(default)]
    pub monitoring: Option<MonitoringConfig>,
}

impl ZebraConfig {
    /// Parses a config from a JSON document. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ZebraError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ZebraError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

/// Provides a default for `min_capacity` for serde.
fn default_min_capacity() -> usize {
    16
}
