use super::*;
use crate::arena::Pool;
use crate::data::{Attribute, Block, Column, Entity, NestedArray, Table};
use crate::error::ZebraError;
use crate::merge::append_block_entity;
use arrow::array::{
    Array, BooleanArray, Float64Array, Int64Array, LargeListArray, StructArray, UInt8Array,
};
use arrow_schema::DataType;

/// A table of (byte, nested ints) rows: row 0 holds [10, 11], row 1 holds [12].
fn create_nested_test_table(pool: &Pool) -> Table<'_> {
    let elements = Table::new(pool, vec![Column::ints(pool, &[10, 11, 12])]).unwrap();
    Table::new(
        pool,
        vec![
            Column::bytes(pool, &[1, 2]),
            Column::array(pool, &[2, 1], elements),
        ],
    )
    .unwrap()
}

#[test]
fn test_scalar_columns_export() {
    let pool = Pool::new();
    let table = Table::new(
        &pool,
        vec![
            Column::bytes(&pool, &[7, 8]),
            Column::ints(&pool, &[-1, 1]),
            Column::doubles(&pool, &[0.25, 0.5]),
        ],
    )
    .unwrap();

    let batch = table_to_record_batch(&table).unwrap();
    assert_eq!(batch.num_rows(), 2);
    assert_eq!(batch.schema().field(0).name(), "c0");
    assert_eq!(batch.column(0).data_type(), &DataType::UInt8);

    let bytes = batch.column(0).as_any().downcast_ref::<UInt8Array>().unwrap();
    assert_eq!(bytes.values().to_vec(), vec![7, 8]);
    let ints = batch.column(1).as_any().downcast_ref::<Int64Array>().unwrap();
    assert_eq!(ints.values().to_vec(), vec![-1, 1]);
    let doubles = batch.column(2).as_any().downcast_ref::<Float64Array>().unwrap();
    assert_eq!(doubles.value(1), 0.5);
}

#[test]
fn test_nested_column_exports_as_large_list() {
    let pool = Pool::new();
    let table = create_nested_test_table(&pool);

    let array = column_to_arrow(&table.columns[1], table.row_count).unwrap();
    let list = array.as_any().downcast_ref::<LargeListArray>().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list.value_offsets(), &[0, 2, 3]);

    let row0 = list.value(0);
    let row0 = row0.as_any().downcast_ref::<StructArray>().unwrap();
    let values = row0.column(0).as_any().downcast_ref::<Int64Array>().unwrap();
    assert_eq!(values.values().to_vec(), vec![10, 11]);
}

#[test]
fn test_offsets_are_rebased_from_s_offset() {
    let pool = Pool::new();
    let elements = Table::new(&pool, vec![Column::doubles(&pool, &[1.0, 2.0, 3.0])]).unwrap();
    let column = Column::Array(NestedArray::from_counts(&pool, &[1, 2], 100, elements));

    let array = column_to_arrow(&column, 2).unwrap();
    let list = array.as_any().downcast_ref::<LargeListArray>().unwrap();
    assert_eq!(list.value_offsets(), &[0, 1, 3]);
}

#[test]
fn test_column_less_element_table_is_unsupported() {
    let pool = Pool::new();
    let elements = Table::new(&pool, Vec::new()).unwrap();
    let column = Column::array(&pool, &[0], elements);
    let result = column_to_arrow(&column, 1);
    assert!(matches!(result, Err(ZebraError::UnsupportedExport(_))));
}

#[test]
fn test_block_export() {
    let pool = Pool::new();
    let table = create_nested_test_table(&pool);
    let attribute = Attribute::new(&pool, table, &[100, 200], &[1, 2], &[false, true]).unwrap();
    let entity = Entity::new(&pool, 0xfeed, b"entity-1", vec![attribute]);

    let mut block: Option<Block> = None;
    append_block_entity(&pool, &entity, &mut block).unwrap();
    let block = block.unwrap();

    let batches = block_to_record_batches(&block).unwrap();
    assert_eq!(batches.len(), 1);
    assert_eq!(batches[0].num_rows(), 2);
    assert_eq!(batches[0].num_columns(), 2);

    let metadata = block_metadata_to_record_batch(&block).unwrap();
    let times = metadata.column(0).as_any().downcast_ref::<Int64Array>().unwrap();
    assert_eq!(times.values().to_vec(), vec![100, 200]);
    let tombstones = metadata
        .column(2)
        .as_any()
        .downcast_ref::<BooleanArray>()
        .unwrap();
    assert!(!tombstones.value(0));
    assert!(tombstones.value(1));
}
