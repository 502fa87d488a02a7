use crate::arena::{ArenaVec, Pool};
use crate::data::Attribute;

/// The unit of input to the block appender: an identifier plus a dense list of
/// attributes indexed by attribute-definition position. A zero-row attribute
/// means the entity has no data for that field.
#[derive(Debug)]
pub struct Entity<'a> {
    pub hash: u32,
    pub id_bytes: &'a [u8],
    pub attributes: ArenaVec<'a, Attribute<'a>>,
}

impl<'a> Entity<'a> {
    pub fn new(
        pool: &'a Pool,
        hash: u32,
        id_bytes: &[u8],
        attributes: impl IntoIterator<Item = Attribute<'a>>,
    ) -> Self {
        let mut stored = pool.vec();
        for attribute in attributes {
            stored.push(attribute);
        }
        Self {
            hash,
            id_bytes: pool.alloc_slice_copy(id_bytes),
            attributes: stored,
        }
    }

    pub fn id_length(&self) -> usize {
        self.id_bytes.len()
    }

    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }

    /// Total rows across every attribute.
    pub fn row_count(&self) -> usize {
        self.attributes.iter().map(Attribute::row_count).sum()
    }
}

/// The sparse record of one entity's contribution to a block.
///
/// `attribute_ids[k]` is the dense attribute position of the k-th non-empty
/// attribute (ascending) and `attribute_row_counts[k]` the rows it
/// contributed. Readers use this to map the block's stored row ranges back to
/// attribute definitions.
#[derive(Debug, Clone, Copy)]
pub struct BlockEntity<'a> {
    pub hash: u32,
    pub id_bytes: &'a [u8],
    pub attribute_ids: &'a [i64],
    pub attribute_row_counts: &'a [i64],
}

impl<'a> BlockEntity<'a> {
    pub fn id_length(&self) -> usize {
        self.id_bytes.len()
    }

    pub fn attribute_count(&self) -> usize {
        self.attribute_ids.len()
    }

    pub fn row_count(&self) -> usize {
        self.attribute_row_counts.iter().map(|&rows| rows as usize).sum()
    }
}
