//! Structural verification of tables, attributes and blocks.
//!
//! Downstream readers trust the merged format without redundant checks, so
//! these functions are the place to catch a broken encoding before it is
//! serialized. They check, without mutating anything:
//!
//! 1.  Every column holds at least `row_count` rows.
//! 2.  Array columns satisfy `s[0] = s_offset + n[0]` and
//!     `s[i] = s[i-1] + n[i]`, with non-negative counts, and their nested
//!     table holds exactly `sum(n)` rows.
//! 3.  A block's metadata arrays cover `row_count`, its entity records sum
//!     to `row_count`, and every table holds exactly the rows its entities
//!     claim for that attribute.

use crate::data::{Attribute, Block, Column, NestedArray, Table};
use crate::error::{Result, ZebraError};

//==================================================================================
// 1. Tables & Columns
//==================================================================================

pub fn verify_table(table: &Table<'_>) -> Result<()> {
    for (ix, column) in table.columns.iter().enumerate() {
        if column.len() < table.row_count {
            return Err(ZebraError::RaggedColumns {
                column: ix,
                expected: table.row_count,
                found: column.len(),
            });
        }
        if let Column::Array(array) = column {
            verify_nested(array, table.row_count).map_err(|err| match err {
                ZebraError::Corrupt(msg) => ZebraError::Corrupt(format!("column {}: {}", ix, msg)),
                other => other,
            })?;
        }
    }
    Ok(())
}

fn verify_nested(array: &NestedArray<'_>, rows: usize) -> Result<()> {
    if array.s.len() < rows {
        return Err(ZebraError::Corrupt(format!(
            "offset array holds {} rows, expected {}",
            array.s.len(),
            rows
        )));
    }

    let mut previous = array.s_offset;
    let mut total = 0i64;
    for row in 0..rows {
        let n = array.n[row];
        let s = array.s[row];
        if n < 0 {
            return Err(ZebraError::Corrupt(format!("row {} has negative count {}", row, n)));
        }
        if s - previous != n {
            return Err(ZebraError::Corrupt(format!(
                "row {}: offset {} - {} does not match count {}",
                row, s, previous, n
            )));
        }
        previous = s;
        total += n;
    }

    if total != array.table.row_count as i64 {
        return Err(ZebraError::Corrupt(format!(
            "nested table holds {} rows but counts sum to {}",
            array.table.row_count, total
        )));
    }
    verify_table(&array.table)
}

//==================================================================================
// 2. Attributes & Blocks
//==================================================================================

pub fn verify_attribute(attribute: &Attribute<'_>) -> Result<()> {
    verify_table(&attribute.table)?;
    let rows = attribute.row_count();
    for (name, len) in [
        ("times", attribute.times.len()),
        ("priorities", attribute.priorities.len()),
        ("tombstones", attribute.tombstones.len()),
    ] {
        if len < rows {
            return Err(ZebraError::Corrupt(format!(
                "{} holds {} rows, expected {}",
                name, len, rows
            )));
        }
    }
    Ok(())
}

pub fn verify_block(block: &Block<'_>) -> Result<()> {
    for (name, len) in [
        ("times", block.times.len()),
        ("priorities", block.priorities.len()),
        ("tombstones", block.tombstones.len()),
    ] {
        if len < block.row_count {
            return Err(ZebraError::Corrupt(format!(
                "block {} holds {} rows, expected {}",
                name, len, block.row_count
            )));
        }
    }

    let mut per_table = vec![0usize; block.table_count()];
    let mut total = 0usize;
    for (entity_ix, entity) in block.entities.iter().enumerate() {
        if entity.attribute_ids.len() != entity.attribute_row_counts.len() {
            return Err(ZebraError::Corrupt(format!(
                "entity {}: {} attribute ids but {} row counts",
                entity_ix,
                entity.attribute_ids.len(),
                entity.attribute_row_counts.len()
            )));
        }
        let mut previous: Option<i64> = None;
        for (&id, &rows) in entity.attribute_ids.iter().zip(entity.attribute_row_counts) {
            let ascending = previous.map_or(true, |prev| id > prev);
            let slot = usize::try_from(id).ok().filter(|&slot| slot < per_table.len());
            match slot {
                Some(slot) if ascending && rows > 0 => {
                    per_table[slot] += rows as usize;
                    total += rows as usize;
                }
                _ => {
                    return Err(ZebraError::Corrupt(format!(
                        "entity {}: bad attribute entry (id {}, rows {})",
                        entity_ix, id, rows
                    )))
                }
            }
            previous = Some(id);
        }
    }

    if total != block.row_count {
        return Err(ZebraError::Corrupt(format!(
            "entities claim {} rows but the block holds {}",
            total, block.row_count
        )));
    }

    for (ix, (table, &claimed)) in block.tables.iter().zip(&per_table).enumerate() {
        if table.row_count != claimed {
            return Err(ZebraError::Corrupt(format!(
                "table {} holds {} rows but entities claim {}",
                ix, table.row_count, claimed
            )));
        }
        verify_table(table)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::Pool;

    #[test]
    fn test_well_formed_nested_table_verifies() {
        let pool = Pool::new();
        let elements = Table::new(&pool, vec![Column::ints(&pool, &[1, 2, 3])]).unwrap();
        let table = Table::new(&pool, vec![Column::array(&pool, &[2, 0, 1], elements)]).unwrap();
        verify_table(&table).unwrap();
    }

    #[test]
    fn test_broken_offsets_are_reported() {
        let pool = Pool::new();
        let elements = Table::new(&pool, vec![Column::ints(&pool, &[1, 2, 3])]).unwrap();
        let mut array = NestedArray::from_counts(&pool, &[2, 1], 0, elements);
        array.s[1] = 4;
        let table = Table::new(&pool, vec![Column::Array(array)]).unwrap();
        let err = verify_table(&table).unwrap_err();
        match err {
            ZebraError::Corrupt(msg) => assert!(msg.starts_with("column 0: row 1")),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_nested_row_count_must_match_counts() {
        let pool = Pool::new();
        let elements = Table::new(&pool, vec![Column::ints(&pool, &[1, 2, 3, 4])]).unwrap();
        let table = Table::new(&pool, vec![Column::array(&pool, &[2, 1], elements)]).unwrap();
        assert!(matches!(verify_table(&table), Err(ZebraError::Corrupt(_))));
    }

    #[test]
    fn test_attribute_metadata_must_cover_rows() {
        let pool = Pool::new();
        let table = Table::new(&pool, vec![Column::ints(&pool, &[1, 2])]).unwrap();
        let mut attribute = Attribute::new(&pool, table, &[1, 2], &[0, 0], &[false, false]).unwrap();
        verify_attribute(&attribute).unwrap();
        attribute.priorities.pop();
        assert!(matches!(
            verify_attribute(&attribute),
            Err(ZebraError::Corrupt(_))
        ));
    }
}
