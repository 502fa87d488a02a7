//! The block appender, the primary ingestion entry point.
//!
//! A block has two lifecycle transitions:
//!
//! * **establish** - the first entity fixes the block's schema. Its attribute
//!   tables are deep-cloned into a fresh `tables` array.
//! * **extend** - every later entity must present the same number of
//!   attributes, and its tables are appended onto the block's.
//!
//! Both transitions record the packed `BlockEntity` and copy the entity's
//! per-row metadata onto the end of the block's metadata arrays.

use crate::arena::Pool;
use crate::data::{Block, Entity};
use crate::error::{Result, ZebraError};
use crate::merge::block_entity::pack_block_entity;
use crate::merge::clone::{deep_clone_table, leading};
use crate::merge::grow::grow_array;
use crate::merge::table::append_table;
use crate::validate;

//==================================================================================
// 1. Public API
//==================================================================================

/// Merges `entity` into the block behind `block`, creating it if the handle
/// is empty.
///
/// An empty handle is only filled on success. An existing block that fails
/// after it was mutated is poisoned: it keeps whatever was appended so far,
/// and every later append into it fails with `PoisonedBlock`.
///
/// # Errors
/// `AppendDifferentAttributeCount` if the entity's attribute count differs
/// from the block's table count (the block is left untouched), and any error
/// from the growth manager, deep-clone or the table appender.
pub fn append_block_entity<'a>(
    pool: &'a Pool,
    entity: &Entity<'_>,
    block: &mut Option<Block<'a>>,
) -> Result<()> {
    match block {
        None => {
            let established = establish(pool, entity)?;
            if pool.config().verify_after_append {
                validate::verify_block(&established)?;
            }
            *block = Some(established);
        }
        Some(existing) => {
            if existing.poisoned {
                return Err(ZebraError::PoisonedBlock);
            }
            if entity.attribute_count() != existing.table_count() {
                return Err(ZebraError::AppendDifferentAttributeCount {
                    expected: existing.table_count(),
                    found: entity.attribute_count(),
                });
            }
            let result = extend(pool, entity, existing).and_then(|_| {
                if pool.config().verify_after_append {
                    validate::verify_block(existing)
                } else {
                    Ok(())
                }
            });
            if result.is_err() {
                existing.poisoned = true;
            }
            result?;
        }
    }
    Ok(())
}

//==================================================================================
// 2. Transitions
//==================================================================================

fn establish<'a>(pool: &'a Pool, entity: &Entity<'_>) -> Result<Block<'a>> {
    let mut block = Block::empty(pool);
    block.entities.push(pack_block_entity(pool, entity));
    append_metadata(pool, entity, &mut block)?;

    let mut tables = pool.vec_with_capacity(entity.attribute_count());
    for attribute in entity.attributes.iter() {
        tables.push(deep_clone_table(pool, &attribute.table)?);
    }
    block.tables = tables;

    log::debug!(
        "established block with {} tables from entity {:#010x} ({} rows)",
        block.table_count(),
        entity.hash,
        block.row_count
    );
    Ok(block)
}

fn extend<'a>(pool: &'a Pool, entity: &Entity<'_>, block: &mut Block<'a>) -> Result<()> {
    block.entities.push(pack_block_entity(pool, entity));
    append_metadata(pool, entity, block)?;

    for (attribute, table) in entity.attributes.iter().zip(block.tables.iter_mut()) {
        append_table(pool, &attribute.table, 0, table, attribute.table.row_count)?;
    }

    log::trace!(
        "appended entity {:#010x}: {} entities, {} rows",
        entity.hash,
        block.entity_count(),
        block.row_count
    );
    Ok(())
}

/// Copies every attribute's times, priorities and tombstones, in attribute
/// order, onto the end of the block's metadata arrays. Zero-row attributes
/// contribute nothing.
fn append_metadata<'a>(pool: &'a Pool, entity: &Entity<'_>, block: &mut Block<'a>) -> Result<()> {
    let old_row_count = block.row_count;
    let new_row_count = old_row_count + entity.row_count();

    grow_array(pool, &mut block.times, new_row_count);
    grow_array(pool, &mut block.priorities, new_row_count);
    grow_array(pool, &mut block.tombstones, new_row_count);

    let mut cursor = old_row_count;
    for (ix, attribute) in entity.attributes.iter().enumerate() {
        let rows = attribute.row_count();
        let end = cursor + rows;
        block.times[cursor..end].copy_from_slice(leading(&attribute.times, ix, rows)?);
        block.priorities[cursor..end].copy_from_slice(leading(&attribute.priorities, ix, rows)?);
        block.tombstones[cursor..end].copy_from_slice(leading(&attribute.tombstones, ix, rows)?);
        cursor = end;
    }

    block.row_count = new_row_count;
    Ok(())
}
