// In: src/bridge/mod.rs

// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Bridge Layer
// ====================================================================================
//
// The `bridge` is the read-only boundary between merged zebra structures and
// Arrow-based tooling. It lets downstream readers inspect a block without
// knowing the zebra layout:
//
//   [Block] --block_to_record_batches--> one RecordBatch per attribute table
//           --block_metadata_to_record_batch--> time / priority / tombstone
//
//   [Table] --table_to_record_batch--> RecordBatch (c0, c1, ...)
//   [Column] --column_to_arrow--> ArrayRef
//
// The merge layer never calls into the bridge.
// ====================================================================================
pub(crate) mod arrow_impl;

pub use arrow_impl::{
    block_metadata_to_record_batch, block_to_record_batches, column_to_arrow,
    table_to_record_batch,
};

#[cfg(test)]
mod tests;
