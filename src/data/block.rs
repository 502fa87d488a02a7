use crate::arena::{ArenaVec, Pool};
use crate::data::{BlockEntity, Table};
use crate::types::TableSchema;

/// The columnar aggregate over many entities, the unit handed to
/// serialization.
///
/// `tables[c]` accumulates attribute `c` of every entity. The metadata arrays
/// are partitioned per entity in append order, and within an entity per
/// attribute in definition order, so `row_count` equals the sum of every
/// `BlockEntity`'s row counts.
///
/// A block only exists once an entity has established its schema; the "not
/// yet created" state is an empty `Option<Block>` held by the caller (see
/// `merge::append_block_entity`).
#[derive(Debug)]
pub struct Block<'a> {
    pub entities: ArenaVec<'a, BlockEntity<'a>>,
    pub tables: ArenaVec<'a, Table<'a>>,
    pub times: ArenaVec<'a, i64>,
    pub priorities: ArenaVec<'a, i64>,
    pub tombstones: ArenaVec<'a, bool>,
    pub row_count: usize,
    pub(crate) poisoned: bool,
}

impl<'a> Block<'a> {
    /// A block with no entities and no tables. Only the establish transition
    /// creates one; callers go through the block appender.
    pub(crate) fn empty(pool: &'a Pool) -> Self {
        Self {
            entities: pool.vec(),
            tables: pool.vec(),
            times: pool.vec(),
            priorities: pool.vec(),
            tombstones: pool.vec(),
            row_count: 0,
            poisoned: false,
        }
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    /// The schema of every attribute table, fixed by the first entity.
    pub fn schemas(&self) -> Vec<TableSchema> {
        self.tables.iter().map(Table::schema).collect()
    }

    /// `true` once an append into this block failed after mutating it. A
    /// poisoned block rejects further appends and should be discarded.
    pub fn is_poisoned(&self) -> bool {
        self.poisoned
    }
}
