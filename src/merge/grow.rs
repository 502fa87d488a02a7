//! The growth manager: makes a table's, attribute's or array's storage hold
//! a target number of rows.
//!
//! Growth only ever extends. Contents below the old length are preserved and
//! new slots are zero-filled. Every operation here is idempotent: calling it
//! again with storage that is already large enough does nothing.

use crate::arena::{ArenaVec, Pool};
use crate::data::{Attribute, Column, Table};
use crate::error::{Result, ZebraError};

//==================================================================================
// 1. Arrays
//==================================================================================

/// Grows `array` to `new_len` slots, reserving according to the pool's
/// growth policy. A no-op when `array` already holds `new_len` slots.
pub fn grow_array<T: Clone + Default>(pool: &Pool, array: &mut ArenaVec<'_, T>, new_len: usize) {
    if new_len <= array.len() {
        return;
    }
    if new_len > array.capacity() {
        let target = pool
            .config()
            .growth
            .next_capacity(array.capacity(), new_len);
        log::trace!(
            "growing {} buffer: capacity {} -> {}",
            std::any::type_name::<T>(),
            array.capacity(),
            target
        );
        array.reserve_exact(target - array.len());
    }
    array.resize(new_len, T::default());
}

/// Fails with `CapacityExceeded` if `rows` is above the configured table limit.
pub fn check_row_limit(pool: &Pool, rows: usize) -> Result<()> {
    match pool.config().max_table_rows {
        Some(limit) if rows > limit => Err(ZebraError::CapacityExceeded {
            requested: rows,
            limit,
        }),
        _ => Ok(()),
    }
}

//==================================================================================
// 2. Tables & Attributes
//==================================================================================

/// Makes every column of `table` hold `table.row_count` rows. Nested tables
/// are grown to their own row counts.
pub fn ensure_table_capacity(pool: &Pool, table: &mut Table<'_>) -> Result<()> {
    check_row_limit(pool, table.row_count)?;
    let rows = table.row_count;
    for column in table.columns.iter_mut() {
        ensure_column_capacity(pool, column, rows)?;
    }
    Ok(())
}

fn ensure_column_capacity(pool: &Pool, column: &mut Column<'_>, rows: usize) -> Result<()> {
    match column {
        Column::Byte(values) => grow_array(pool, values, rows),
        Column::Int(values) => grow_array(pool, values, rows),
        Column::Double(values) => grow_array(pool, values, rows),
        Column::Array(array) => {
            grow_array(pool, &mut array.n, rows);
            grow_array(pool, &mut array.s, rows);
            ensure_table_capacity(pool, &mut array.table)?;
        }
    }
    Ok(())
}

/// Makes the attribute's table and its three metadata arrays hold
/// `attribute.table.row_count` rows.
pub fn ensure_attribute_capacity(pool: &Pool, attribute: &mut Attribute<'_>) -> Result<()> {
    ensure_table_capacity(pool, &mut attribute.table)?;
    let rows = attribute.table.row_count;
    grow_array(pool, &mut attribute.times, rows);
    grow_array(pool, &mut attribute.priorities, rows);
    grow_array(pool, &mut attribute.tombstones, rows);
    Ok(())
}
