use crate::arena::{ArenaVec, Pool};
use crate::data::Column;
use crate::error::{Result, ZebraError};
use crate::types::TableSchema;

/// An ordered set of columns sharing one logical `row_count`.
///
/// Every column's storage holds at least `row_count` rows. The merge family
/// keeps storage length and `row_count` equal; only the table appender moves
/// `row_count`.
#[derive(Debug)]
pub struct Table<'a> {
    pub row_count: usize,
    pub columns: ArenaVec<'a, Column<'a>>,
}

impl<'a> Table<'a> {
    /// An empty table with the given shape.
    pub fn empty(pool: &'a Pool, schema: &TableSchema) -> Self {
        let mut columns = pool.vec_with_capacity(schema.column_count());
        for column in &schema.columns {
            columns.push(Column::empty(pool, column));
        }
        Self {
            row_count: 0,
            columns,
        }
    }

    /// A table over already-populated columns. All columns must hold the same
    /// number of rows.
    pub fn new(pool: &'a Pool, columns: impl IntoIterator<Item = Column<'a>>) -> Result<Self> {
        let mut stored: ArenaVec<'a, Column<'a>> = pool.vec();
        for column in columns {
            stored.push(column);
        }

        let row_count = stored.first().map_or(0, Column::len);
        for (ix, column) in stored.iter().enumerate() {
            if column.len() != row_count {
                return Err(ZebraError::RaggedColumns {
                    column: ix,
                    expected: row_count,
                    found: column.len(),
                });
            }
        }

        Ok(Self {
            row_count,
            columns: stored,
        })
    }

    pub fn schema(&self) -> TableSchema {
        TableSchema::new(self.columns.iter().map(Column::schema).collect())
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }
}
