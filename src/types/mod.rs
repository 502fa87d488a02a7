//! This module defines the core, strongly-typed descriptors used throughout the
//! zebra merge core.
//!
//! It currently includes the `ColumnType` tag with its wire codes, and the
//! recursive `ColumnSchema` / `TableSchema` descriptors used to create empty
//! tables and to check append compatibility before any data is touched.

pub mod column_type;

// Re-export the main type(s) for easier access.
pub use column_type::{ColumnSchema, ColumnType, TableSchema};
