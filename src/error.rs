// In: src/error.rs

//! This module defines the single, unified error type for the entire zebra merge core.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.
//!
//! Every error is fatal to the operation that produced it. Nothing in the core
//! retries, logs, or swallows an error: it is handed straight back to the caller,
//! which is expected to discard the structure it was building.

use thiserror::Error;

use crate::types::ColumnType;

/// Crate-wide result alias.
pub type Result<T, E = ZebraError> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum ZebraError {
    // =========================================================================
    // === Merge Errors (the append family)
    // =========================================================================
    #[error("Cannot append a {found} column onto a {expected} column")]
    DifferentColumnTypes {
        expected: ColumnType,
        found: ColumnType,
    },

    #[error("Invalid column type code: {0}")]
    InvalidColumnType(u8),

    #[error("Entity has {found} attributes but the block was established with {expected}")]
    AppendDifferentAttributeCount { expected: usize, found: usize },

    #[error("Cannot append a table of {found} columns onto a table of {expected} columns")]
    DifferentColumnCount { expected: usize, found: usize },

    #[error("Row range {index}..{index}+{count} is out of bounds for {row_count} rows")]
    RowOutOfBounds {
        index: usize,
        count: usize,
        row_count: usize,
    },

    #[error("Column {column} holds {found} rows but the table expects {expected}")]
    RaggedColumns {
        column: usize,
        expected: usize,
        found: usize,
    },

    // =========================================================================
    // === Growth / Lifecycle Errors
    // =========================================================================
    #[error("Growing to {requested} rows exceeds the configured limit of {limit} rows")]
    CapacityExceeded { requested: usize, limit: usize },

    #[error("Block was left partially appended by an earlier failure and cannot be extended")]
    PoisonedBlock,

    #[error("Structural invariant violated: {0}")]
    Corrupt(String),

    #[error("Unsupported export: {0}")]
    UnsupportedExport(String),

    // =========================================================================
    // === External Error Wrappers (Using #[from] for automatic conversion)
    // =========================================================================
    /// An error originating from the Arrow library.
    #[error("Arrow operation failed: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    /// An error from the underlying I/O subsystem, e.g. while reading a config file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An error from the Serde JSON library, typically during config loading.
    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}
