//! Columns: the typed payload arrays of a table.
//!
//! A column is a closed sum type, so every consumer (the appender, the growth
//! manager, deep-clone, validation, the Arrow bridge) must handle every
//! variant. Adding a variant is a compile error until each of them does.

use crate::arena::{ArenaVec, Pool};
use crate::data::Table;
use crate::types::{ColumnSchema, ColumnType, TableSchema};

/// One typed array of values for one logical field across the rows of a table.
#[derive(Debug)]
pub enum Column<'a> {
    Byte(ArenaVec<'a, u8>),
    Int(ArenaVec<'a, i64>),
    Double(ArenaVec<'a, f64>),
    Array(NestedArray<'a>),
}

/// Offset-encoded variable-length rows.
///
/// `n[row]` is the element count of a row, `s[row]` the absolute offset just
/// past its last element, and `s_offset` the absolute offset before row 0.
/// The elements of every row live flattened, in row order, in `table`:
/// `s[i] = s[i-1] + n[i]`, `s[0] = s_offset + n[0]`.
#[derive(Debug)]
pub struct NestedArray<'a> {
    pub n: ArenaVec<'a, i64>,
    pub s: ArenaVec<'a, i64>,
    pub s_offset: i64,
    pub table: Table<'a>,
}

impl<'a> NestedArray<'a> {
    /// An empty nested array whose elements follow `schema`.
    pub fn empty(pool: &'a Pool, schema: &TableSchema) -> Self {
        Self {
            n: pool.vec(),
            s: pool.vec(),
            s_offset: 0,
            table: Table::empty(pool, schema),
        }
    }

    /// Builds a nested array from per-row element counts over an element
    /// table, computing the cumulative offsets from `s_offset`.
    pub fn from_counts(pool: &'a Pool, counts: &[i64], s_offset: i64, table: Table<'a>) -> Self {
        let mut s = pool.vec_with_capacity(counts.len());
        let mut end = s_offset;
        for &count in counts {
            end += count;
            s.push(end);
        }
        Self {
            n: pool.vec_from_slice(counts),
            s,
            s_offset,
            table,
        }
    }

    /// The start of `row`'s elements, relative to the nested table.
    pub fn row_start(&self, row: usize) -> i64 {
        if row == 0 {
            0
        } else {
            self.s[row - 1] - self.s_offset
        }
    }
}

impl<'a> Column<'a> {
    /// An empty column of the given shape.
    pub fn empty(pool: &'a Pool, schema: &ColumnSchema) -> Self {
        match schema {
            ColumnSchema::Byte => Column::Byte(pool.vec()),
            ColumnSchema::Int => Column::Int(pool.vec()),
            ColumnSchema::Double => Column::Double(pool.vec()),
            ColumnSchema::Array(nested) => Column::Array(NestedArray::empty(pool, nested)),
        }
    }

    pub fn bytes(pool: &'a Pool, values: &[u8]) -> Self {
        Column::Byte(pool.vec_from_slice(values))
    }

    pub fn ints(pool: &'a Pool, values: &[i64]) -> Self {
        Column::Int(pool.vec_from_slice(values))
    }

    pub fn doubles(pool: &'a Pool, values: &[f64]) -> Self {
        Column::Double(pool.vec_from_slice(values))
    }

    /// An array column over `table` with the given per-row element counts.
    pub fn array(pool: &'a Pool, counts: &[i64], table: Table<'a>) -> Self {
        Column::Array(NestedArray::from_counts(pool, counts, 0, table))
    }

    pub fn column_type(&self) -> ColumnType {
        match self {
            Column::Byte(_) => ColumnType::Byte,
            Column::Int(_) => ColumnType::Int,
            Column::Double(_) => ColumnType::Double,
            Column::Array(_) => ColumnType::Array,
        }
    }

    pub fn schema(&self) -> ColumnSchema {
        match self {
            Column::Byte(_) => ColumnSchema::Byte,
            Column::Int(_) => ColumnSchema::Int,
            Column::Double(_) => ColumnSchema::Double,
            Column::Array(array) => ColumnSchema::Array(array.table.schema()),
        }
    }

    /// Number of rows the column's storage currently holds.
    pub fn len(&self) -> usize {
        match self {
            Column::Byte(values) => values.len(),
            Column::Int(values) => values.len(),
            Column::Double(values) => values.len(),
            Column::Array(array) => array.n.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The native-endian payload bytes of a scalar column, ready for bulk
    /// serialization. `None` for array columns, whose payload is split across
    /// `n`, `s` and the nested table.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Column::Byte(values) => Some(values.as_slice()),
            Column::Int(values) => Some(bytemuck::cast_slice(values.as_slice())),
            Column::Double(values) => Some(bytemuck::cast_slice(values.as_slice())),
            Column::Array(_) => None,
        }
    }
}
