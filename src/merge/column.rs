//! The column appender: copies a contiguous row range of one column into
//! another column of the same type.
//!
//! Scalar columns are copied element-wise. Array columns are copied in two
//! phases: the per-row counts and re-based offsets first, then the flattened
//! elements through the table appender. Source and destination offsets live
//! in independent spaces, so destination offsets are always recomputed from
//! the destination's own running base and never copied from the source.

use crate::arena::Pool;
use crate::data::{Column, NestedArray};
use crate::error::{Result, ZebraError};
use crate::merge::table::append_table;

/// Copies rows `in_ix..in_ix + count` of `input` into rows
/// `out_ix..out_ix + count` of `out_into`.
///
/// The destination must already hold `out_ix + count` rows; the table
/// appender grows it before calling here. A zero `count` is a no-op for
/// columns of matching type.
///
/// # Errors
/// `DifferentColumnTypes` if the tags differ (checked before anything is
/// written), `RowOutOfBounds` if either range falls outside its column, and
/// any error from appending a nested table.
pub fn append_column(
    pool: &Pool,
    input: &Column<'_>,
    in_ix: usize,
    out_into: &mut Column<'_>,
    out_ix: usize,
    count: usize,
) -> Result<()> {
    let expected = out_into.column_type();
    let found = input.column_type();
    if expected != found {
        return Err(ZebraError::DifferentColumnTypes { expected, found });
    }
    if count == 0 {
        return Ok(());
    }

    match (input, out_into) {
        (Column::Byte(src), Column::Byte(dst)) => copy_rows(src, in_ix, dst, out_ix, count),
        (Column::Int(src), Column::Int(dst)) => copy_rows(src, in_ix, dst, out_ix, count),
        (Column::Double(src), Column::Double(dst)) => copy_rows(src, in_ix, dst, out_ix, count),
        (Column::Array(src), Column::Array(dst)) => {
            append_nested(pool, src, in_ix, dst, out_ix, count)
        }
        // Tags were compared above.
        _ => Err(ZebraError::DifferentColumnTypes { expected, found }),
    }
}

fn append_nested(
    pool: &Pool,
    src: &NestedArray<'_>,
    in_ix: usize,
    dst: &mut NestedArray<'_>,
    out_ix: usize,
    count: usize,
) -> Result<()> {
    let counts = rows(&src.n, in_ix, count)?;
    if in_ix > 0 {
        rows(&src.s, in_ix - 1, 1)?;
    }
    let value_in_ix = to_row_index(src.row_start(in_ix))?;

    let base = match out_ix {
        0 => dst.s_offset,
        ix => rows(&dst.s, ix - 1, 1)?[0],
    };

    rows_mut(&mut dst.n, out_ix, count)?.copy_from_slice(counts);

    let mut nested_count = 0i64;
    for (end, &n) in rows_mut(&mut dst.s, out_ix, count)?.iter_mut().zip(counts) {
        nested_count += n;
        *end = base + nested_count;
    }

    append_table(
        pool,
        &src.table,
        value_in_ix,
        &mut dst.table,
        to_row_index(nested_count)?,
    )
}

fn copy_rows<T: Copy>(src: &[T], in_ix: usize, dst: &mut [T], out_ix: usize, count: usize) -> Result<()> {
    rows_mut(dst, out_ix, count)?.copy_from_slice(rows(src, in_ix, count)?);
    Ok(())
}

fn rows<T>(values: &[T], ix: usize, count: usize) -> Result<&[T]> {
    let row_count = values.len();
    ix.checked_add(count)
        .and_then(|end| values.get(ix..end))
        .ok_or(ZebraError::RowOutOfBounds {
            index: ix,
            count,
            row_count,
        })
}

fn rows_mut<T>(values: &mut [T], ix: usize, count: usize) -> Result<&mut [T]> {
    let row_count = values.len();
    ix.checked_add(count)
        .and_then(|end| values.get_mut(ix..end))
        .ok_or(ZebraError::RowOutOfBounds {
            index: ix,
            count,
            row_count,
        })
}

/// Nested offsets and counts are stored signed; a negative one means the
/// encoding is broken.
fn to_row_index(value: i64) -> Result<usize> {
    usize::try_from(value)
        .map_err(|_| ZebraError::Corrupt(format!("negative nested row offset {}", value)))
}
