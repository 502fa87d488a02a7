//! The block-entity packer: the sparse index record for one entity.

use crate::arena::Pool;
use crate::data::{BlockEntity, Entity};

/// Packs `entity` into a `BlockEntity` allocated in `pool`.
///
/// Zero-row attributes are skipped. `attribute_ids` keeps the original dense
/// position of every remaining attribute, in ascending order, and
/// `attribute_row_counts` the rows each contributed. Both arrays are sized
/// exactly to the number of non-empty attributes.
pub fn pack_block_entity<'a>(pool: &'a Pool, entity: &Entity<'_>) -> BlockEntity<'a> {
    let nonzeros = entity
        .attributes
        .iter()
        .filter(|attribute| !attribute.is_empty())
        .count();

    let mut attribute_ids = pool.vec_with_capacity(nonzeros);
    let mut attribute_row_counts = pool.vec_with_capacity(nonzeros);
    for (ix, attribute) in entity.attributes.iter().enumerate() {
        let rows = attribute.row_count();
        if rows > 0 {
            attribute_ids.push(ix as i64);
            attribute_row_counts.push(rows as i64);
        }
    }

    BlockEntity {
        hash: entity.hash,
        id_bytes: pool.alloc_slice_copy(entity.id_bytes),
        attribute_ids: attribute_ids.into_bump_slice(),
        attribute_row_counts: attribute_row_counts.into_bump_slice(),
    }
}
