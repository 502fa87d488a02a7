//! This file is the root of the `zebra` Rust crate, the row-to-column merge
//! engine of the zebra entity/attribute table format.
//!
//! Its responsibilities are strictly limited to:
//! 1.  Declaring all the top-level modules of the library so the Rust compiler
//!     knows they exist.
//! 2.  Re-exporting the ingestion surface (`append_block_entity` and its
//!     building blocks) and the data model at the crate root.

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
//==================================================================================
// 1. Module Declarations
//==================================================================================
pub mod arena;
pub mod bridge;
pub mod config;
pub mod data;
pub mod error;
pub mod merge;
pub mod observability;
pub mod types;
pub mod validate;

//==================================================================================
// 2. Public API Re-exports
//==================================================================================
pub use arena::{ArenaVec, Pool};
pub use config::ZebraConfig;
pub use data::{Attribute, Block, BlockEntity, Column, Entity, NestedArray, Table};
pub use error::{Result, ZebraError};
pub use merge::{
    append_attribute, append_block_entity, append_column, append_table, pack_block_entity,
};
pub use types::{ColumnSchema, ColumnType, TableSchema};
