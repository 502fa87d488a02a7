//! The attribute appender: pushes one row of one attribute onto another.

use crate::arena::Pool;
use crate::data::Attribute;
use crate::error::{Result, ZebraError};
use crate::merge::grow;
use crate::merge::table::append_table;

/// Appends row `ix` of `input` onto the end of `out_into`, payload and
/// metadata.
///
/// The two halves are independent steps. The table appender advances the
/// table's `row_count` and copies the payload; the attribute's own metadata
/// arrays are then grown to the new row count and the row's time, priority
/// and tombstone are written into the new slot. Errors are returned as they
/// come, with no rollback.
pub fn append_attribute(
    pool: &Pool,
    input: &Attribute<'_>,
    ix: usize,
    out_into: &mut Attribute<'_>,
) -> Result<()> {
    let time = metadata_at(&input.times, ix, input.row_count())?;
    let priority = metadata_at(&input.priorities, ix, input.row_count())?;
    let tombstone = metadata_at(&input.tombstones, ix, input.row_count())?;

    let out_ix = out_into.table.row_count;
    append_table(pool, &input.table, ix, &mut out_into.table, 1)?;
    grow::ensure_attribute_capacity(pool, out_into)?;

    out_into.times[out_ix] = time;
    out_into.priorities[out_ix] = priority;
    out_into.tombstones[out_ix] = tombstone;
    Ok(())
}

fn metadata_at<T: Copy>(values: &[T], ix: usize, row_count: usize) -> Result<T> {
    match values.get(ix) {
        Some(&value) if ix < row_count => Ok(value),
        _ => Err(ZebraError::RowOutOfBounds {
            index: ix,
            count: 1,
            row_count,
        }),
    }
}
