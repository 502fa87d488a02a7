use crate::arena::{ArenaVec, Pool};
use crate::data::Table;
use crate::error::{Result, ZebraError};
use crate::types::TableSchema;

/// One entity's history for one logical field: the value table plus three
/// row-parallel metadata arrays.
#[derive(Debug)]
pub struct Attribute<'a> {
    pub table: Table<'a>,
    pub times: ArenaVec<'a, i64>,
    pub priorities: ArenaVec<'a, i64>,
    pub tombstones: ArenaVec<'a, bool>,
}

impl<'a> Attribute<'a> {
    /// An attribute with no rows.
    pub fn empty(pool: &'a Pool, schema: &TableSchema) -> Self {
        Self {
            table: Table::empty(pool, schema),
            times: pool.vec(),
            priorities: pool.vec(),
            tombstones: pool.vec(),
        }
    }

    /// An attribute over a populated table. The metadata slices must each
    /// hold one entry per table row.
    pub fn new(
        pool: &'a Pool,
        table: Table<'a>,
        times: &[i64],
        priorities: &[i64],
        tombstones: &[bool],
    ) -> Result<Self> {
        for found in [times.len(), priorities.len(), tombstones.len()] {
            if found != table.row_count {
                return Err(ZebraError::RaggedColumns {
                    column: table.column_count(),
                    expected: table.row_count,
                    found,
                });
            }
        }
        Ok(Self {
            table,
            times: pool.vec_from_slice(times),
            priorities: pool.vec_from_slice(priorities),
            tombstones: pool.vec_from_slice(tombstones),
        })
    }

    pub fn row_count(&self) -> usize {
        self.table.row_count
    }

    pub fn is_empty(&self) -> bool {
        self.table.row_count == 0
    }
}
