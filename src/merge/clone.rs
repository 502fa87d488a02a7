//! Deep-clone: an independent copy of a table (or attribute) in a pool.
//!
//! The copy holds exactly `row_count` rows per column, with nested tables
//! cloned recursively and `s_offset` carried over unchanged.

use crate::arena::Pool;
use crate::data::{Attribute, Column, NestedArray, Table};
use crate::error::{Result, ZebraError};
use crate::merge::grow;

pub fn deep_clone_table<'a>(pool: &'a Pool, table: &Table<'_>) -> Result<Table<'a>> {
    grow::check_row_limit(pool, table.row_count)?;
    let mut columns = pool.vec_with_capacity(table.column_count());
    for (ix, column) in table.columns.iter().enumerate() {
        columns.push(deep_clone_column(pool, column, ix, table.row_count)?);
    }
    Ok(Table {
        row_count: table.row_count,
        columns,
    })
}

fn deep_clone_column<'a>(
    pool: &'a Pool,
    column: &Column<'_>,
    ix: usize,
    rows: usize,
) -> Result<Column<'a>> {
    Ok(match column {
        Column::Byte(values) => Column::Byte(pool.vec_from_slice(leading(values, ix, rows)?)),
        Column::Int(values) => Column::Int(pool.vec_from_slice(leading(values, ix, rows)?)),
        Column::Double(values) => Column::Double(pool.vec_from_slice(leading(values, ix, rows)?)),
        Column::Array(array) => Column::Array(NestedArray {
            n: pool.vec_from_slice(leading(&array.n, ix, rows)?),
            s: pool.vec_from_slice(leading(&array.s, ix, rows)?),
            s_offset: array.s_offset,
            table: deep_clone_table(pool, &array.table)?,
        }),
    })
}

pub fn deep_clone_attribute<'a>(pool: &'a Pool, attribute: &Attribute<'_>) -> Result<Attribute<'a>> {
    let rows = attribute.table.row_count;
    let metadata_ix = attribute.table.column_count();
    Ok(Attribute {
        table: deep_clone_table(pool, &attribute.table)?,
        times: pool.vec_from_slice(leading(&attribute.times, metadata_ix, rows)?),
        priorities: pool.vec_from_slice(leading(&attribute.priorities, metadata_ix, rows)?),
        tombstones: pool.vec_from_slice(leading(&attribute.tombstones, metadata_ix, rows)?),
    })
}

/// The first `rows` values of column `ix`, or `RaggedColumns` if its storage
/// is shorter than the table claims.
pub(crate) fn leading<T>(values: &[T], ix: usize, rows: usize) -> Result<&[T]> {
    values.get(..rows).ok_or(ZebraError::RaggedColumns {
        column: ix,
        expected: rows,
        found: values.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_is_independent_of_source() {
        let pool = Pool::new();
        let elements = Table::new(&pool, vec![Column::ints(&pool, &[7, 8, 9])]).unwrap();
        let mut source = Table::new(
            &pool,
            vec![
                Column::doubles(&pool, &[1.5, 2.5]),
                Column::array(&pool, &[1, 2], elements),
            ],
        )
        .unwrap();

        let clone = deep_clone_table(&pool, &source).unwrap();

        if let Column::Double(values) = &mut source.columns[0] {
            values[0] = -1.0;
        }
        match (&clone.columns[0], &clone.columns[1]) {
            (Column::Double(values), Column::Array(array)) => {
                assert_eq!(values.as_slice(), &[1.5, 2.5]);
                assert_eq!(array.n.as_slice(), &[1, 2]);
                assert_eq!(array.s.as_slice(), &[1, 3]);
                assert_eq!(array.table.row_count, 3);
            }
            other => panic!("unexpected clone shape: {:?}", other),
        }
        assert_eq!(clone.schema(), source.schema());
    }

    #[test]
    fn test_clone_into_another_pool() {
        let input_pool = Pool::new();
        let block_pool = Pool::new();
        let table = Table::new(&input_pool, vec![Column::bytes(&input_pool, b"zebra")]).unwrap();
        let attribute = Attribute::new(
            &input_pool,
            table,
            &[1, 2, 3, 4, 5],
            &[0; 5],
            &[false, true, false, false, false],
        )
        .unwrap();

        let clone = deep_clone_attribute(&block_pool, &attribute).unwrap();
        drop(attribute);
        assert_eq!(clone.row_count(), 5);
        assert!(clone.tombstones[1]);
        assert_eq!(clone.table.columns[0].as_bytes(), Some(&b"zebra"[..]));
    }

    #[test]
    fn test_short_storage_is_ragged() {
        let pool = Pool::new();
        let mut table = Table::new(&pool, vec![Column::ints(&pool, &[1])]).unwrap();
        table.row_count = 4;
        let result = deep_clone_table(&pool, &table);
        assert!(matches!(
            result,
            Err(ZebraError::RaggedColumns {
                column: 0,
                expected: 4,
                found: 1
            })
        ));
    }
}
