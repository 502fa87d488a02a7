//! The table appender: drives the column appender across every column of a
//! table and owns the destination's `row_count` transition.

use crate::arena::Pool;
use crate::data::{Column, Table};
use crate::error::{Result, ZebraError};
use crate::merge::column::append_column;
use crate::merge::grow;

/// Appends rows `in_ix..in_ix + count` of `input` onto the end of `out_into`.
///
/// This is the only place a table's `row_count` moves: it is advanced by
/// `count`, storage is grown to match, and then every column pair is copied
/// in lockstep. The first column failure aborts the append.
///
/// Schema and range problems are detected before `out_into` is touched. A
/// failure inside a nested append can still leave `out_into` partially
/// appended; callers must discard it in that case.
pub fn append_table(
    pool: &Pool,
    input: &Table<'_>,
    in_ix: usize,
    out_into: &mut Table<'_>,
    count: usize,
) -> Result<()> {
    check_compatible(input, out_into)?;
    if in_ix.checked_add(count).map_or(true, |end| end > input.row_count) {
        return Err(ZebraError::RowOutOfBounds {
            index: in_ix,
            count,
            row_count: input.row_count,
        });
    }

    let out_ix = out_into.row_count;
    grow::check_row_limit(pool, out_ix + count)?;
    out_into.row_count += count;
    grow::ensure_table_capacity(pool, out_into)?;

    for (src, dst) in input.columns.iter().zip(out_into.columns.iter_mut()) {
        append_column(pool, src, in_ix, dst, out_ix, count)?;
    }
    Ok(())
}

/// Checks that `input` can be appended onto `out_into`: same column count and
/// the same column types, recursively through nested tables.
pub fn check_compatible(input: &Table<'_>, out_into: &Table<'_>) -> Result<()> {
    if input.column_count() != out_into.column_count() {
        return Err(ZebraError::DifferentColumnCount {
            expected: out_into.column_count(),
            found: input.column_count(),
        });
    }
    for (src, dst) in input.columns.iter().zip(out_into.columns.iter()) {
        match (src, dst) {
            (Column::Array(src), Column::Array(dst)) => check_compatible(&src.table, &dst.table)?,
            (src, dst) if src.column_type() != dst.column_type() => {
                return Err(ZebraError::DifferentColumnTypes {
                    expected: dst.column_type(),
                    found: src.column_type(),
                })
            }
            _ => {}
        }
    }
    Ok(())
}
