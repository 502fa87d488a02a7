//! The zebra data model: columns, tables, attributes, entities and blocks.
//!
//! Every structure here is arena-backed. Inputs (entities and their
//! attributes) may live in any pool; the block and everything copied into it
//! lives in the pool the block appender was given.

mod attribute;
mod block;
mod column;
mod entity;
mod table;

pub use attribute::Attribute;
pub use block::Block;
pub use column::{Column, NestedArray};
pub use entity::{BlockEntity, Entity};
pub use table::Table;
