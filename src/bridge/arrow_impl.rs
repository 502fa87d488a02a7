//! Conversion of zebra columns, tables and blocks into Arrow arrays.
//!
//! Mapping:
//!   Byte   -> UInt8
//!   Int    -> Int64
//!   Double -> Float64
//!   Array  -> LargeList<Struct<c0, c1, ..>>, offsets re-based so row 0 starts at 0
//!
//! Every conversion copies; the zebra structures are never borrowed by the
//! resulting arrays, so they may outlive the pool.

use std::sync::Arc;

use arrow::array::{
    Array, ArrayRef, BooleanArray, Float64Array, Int64Array, LargeListArray, StructArray,
    UInt8Array,
};
use arrow::buffer::{OffsetBuffer, ScalarBuffer};
use arrow::record_batch::{RecordBatch, RecordBatchOptions};
use arrow_schema::{Field, Fields, Schema};

use crate::data::{Block, Column, NestedArray, Table};
use crate::error::{Result, ZebraError};
use crate::merge::clone::leading;

//==================================================================================
// 1. Columns
//==================================================================================

/// Converts the first `rows` rows of `column` into an Arrow array.
pub fn column_to_arrow(column: &Column<'_>, rows: usize) -> Result<ArrayRef> {
    Ok(match column {
        Column::Byte(values) => Arc::new(UInt8Array::from(leading(values, 0, rows)?.to_vec())),
        Column::Int(values) => Arc::new(Int64Array::from(leading(values, 0, rows)?.to_vec())),
        Column::Double(values) => Arc::new(Float64Array::from(leading(values, 0, rows)?.to_vec())),
        Column::Array(array) => nested_to_arrow(array, rows)?,
    })
}

fn nested_to_arrow(array: &NestedArray<'_>, rows: usize) -> Result<ArrayRef> {
    let ends = leading(&array.s, 0, rows)?;

    // Arrow offsets are relative to the start of the values array.
    let mut offsets = Vec::with_capacity(rows + 1);
    offsets.push(0i64);
    for &end in ends {
        let relative = end - array.s_offset;
        if relative < offsets[offsets.len() - 1] {
            return Err(ZebraError::Corrupt(format!(
                "offsets decrease at row {}",
                offsets.len() - 1
            )));
        }
        offsets.push(relative);
    }

    let values = table_to_struct(&array.table)?;
    let field = Arc::new(Field::new("item", values.data_type().clone(), false));
    let list = LargeListArray::try_new(
        field,
        OffsetBuffer::new(ScalarBuffer::from(offsets)),
        values,
        None,
    )?;
    Ok(Arc::new(list))
}

//==================================================================================
// 2. Tables
//==================================================================================

fn table_fields(table: &Table<'_>) -> Result<(Fields, Vec<ArrayRef>)> {
    let mut fields = Vec::with_capacity(table.column_count());
    let mut arrays = Vec::with_capacity(table.column_count());
    for (ix, column) in table.columns.iter().enumerate() {
        let array = column_to_arrow(column, table.row_count)?;
        fields.push(Field::new(format!("c{}", ix), array.data_type().clone(), false));
        arrays.push(array);
    }
    Ok((Fields::from(fields), arrays))
}

fn table_to_struct(table: &Table<'_>) -> Result<ArrayRef> {
    if table.column_count() == 0 {
        return Err(ZebraError::UnsupportedExport(
            "array column whose element table has no columns".to_string(),
        ));
    }
    let (fields, arrays) = table_fields(table)?;
    Ok(Arc::new(StructArray::try_new(fields, arrays, None)?))
}

/// Converts a table into a `RecordBatch` with columns named `c0`, `c1`, ...
pub fn table_to_record_batch(table: &Table<'_>) -> Result<RecordBatch> {
    let (fields, arrays) = table_fields(table)?;
    let options = RecordBatchOptions::new().with_row_count(Some(table.row_count));
    Ok(RecordBatch::try_new_with_options(
        Arc::new(Schema::new(fields)),
        arrays,
        &options,
    )?)
}

//==================================================================================
// 3. Blocks
//==================================================================================

/// The block-wide row metadata as a `RecordBatch` of `time`, `priority` and
/// `tombstone` columns, in block row order.
pub fn block_metadata_to_record_batch(block: &Block<'_>) -> Result<RecordBatch> {
    let rows = block.row_count;
    let schema = Schema::new(vec![
        Field::new("time", arrow_schema::DataType::Int64, false),
        Field::new("priority", arrow_schema::DataType::Int64, false),
        Field::new("tombstone", arrow_schema::DataType::Boolean, false),
    ]);
    let columns: Vec<ArrayRef> = vec![
        Arc::new(Int64Array::from(leading(&block.times, 0, rows)?.to_vec())),
        Arc::new(Int64Array::from(leading(&block.priorities, 1, rows)?.to_vec())),
        Arc::new(BooleanArray::from(leading(&block.tombstones, 2, rows)?.to_vec())),
    ];
    Ok(RecordBatch::try_new(Arc::new(schema), columns)?)
}

/// One `RecordBatch` per attribute table of the block, in attribute order.
pub fn block_to_record_batches(block: &Block<'_>) -> Result<Vec<RecordBatch>> {
    block.tables.iter().map(table_to_record_batch).collect()
}
