// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Merge Layer
// ====================================================================================
//
// The merge layer folds row-oriented input (entities holding attributes) into
// columnar output (blocks holding one table per attribute definition).
//
// Call Graph (leaves last):
//
//   1. [Block Appender (append_block_entity)]   -> once per entity
//         |
//         |-> [Block-Entity Packer (pack_block_entity)]  sparse index record
//         |-> [Growth Manager (grow_array)]              block metadata arrays
//         `-> first entity:  [Deep-Clone (deep_clone_table)]
//             later entities: [Table Appender (append_table)]
//
//   2. [Attribute Appender (append_attribute)]  -> one row at a time
//         `-> [Table Appender] + [Growth Manager (ensure_attribute_capacity)]
//
//   3. [Table Appender (append_table)]          -> owns row_count, grows storage
//         `-> [Column Appender (append_column)] per column
//                `-> Array columns recurse into [Table Appender] for elements
//
// Every operation is fail-fast: the first error is returned unchanged and no
// partial state is rolled back.
// ====================================================================================

mod attribute;
mod block;
mod block_entity;
mod column;
mod table;

pub mod clone;
pub mod grow;

pub use attribute::append_attribute;
pub use block::append_block_entity;
pub use block_entity::pack_block_entity;
pub use clone::{deep_clone_attribute, deep_clone_table};
pub use column::append_column;
pub use grow::{ensure_attribute_capacity, ensure_table_capacity, grow_array};
pub use table::{append_table, check_compatible};
