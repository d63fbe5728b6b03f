//! Typed Arrow conversion
//!
//! Builds an Arrow schema from a resource schema and converts projected
//! rows into a `RecordBatch` whose columns carry the resource's semantic
//! types rather than types inferred from the data.

use crate::error::{Error, Result};
use crate::schema::{normalize_timestamp, ColumnType, ResourceSchema, Row};
use arrow::array::{
    ArrayRef, BooleanArray, Float64Array, Int64Array, StringArray, TimestampMillisecondArray,
};
use arrow::datatypes::{DataType, Field, Schema, TimeUnit};
use arrow::record_batch::RecordBatch;
use serde_json::Value;
use std::sync::Arc;

/// Time zone attached to every timestamp column, as a fixed UTC offset
pub const TIMESTAMP_TZ: &str = "+00:00";

/// Arrow type used for a column type
///
/// JSON columns are carried as their serialized text.
pub fn data_type(column_type: ColumnType) -> DataType {
    match column_type {
        ColumnType::Int => DataType::Int64,
        ColumnType::String | ColumnType::Json => DataType::Utf8,
        ColumnType::Bool => DataType::Boolean,
        ColumnType::Double => DataType::Float64,
        ColumnType::Timestamp => {
            DataType::Timestamp(TimeUnit::Millisecond, Some(TIMESTAMP_TZ.into()))
        }
    }
}

/// Arrow schema for a resource; every field is nullable
pub fn arrow_schema(schema: &ResourceSchema) -> Schema {
    let fields: Vec<Field> = schema
        .columns
        .iter()
        .map(|column| Field::new(column.name, data_type(column.column_type), true))
        .collect();
    Schema::new(fields)
}

/// Convert projected rows to a `RecordBatch`
///
/// Every row must hold exactly one value per column.
pub fn rows_to_record_batch(schema: &ResourceSchema, rows: &[Row]) -> Result<RecordBatch> {
    let arrow_schema = Arc::new(arrow_schema(schema));
    let width = schema.columns.len();

    if let Some((index, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != width) {
        return Err(Error::output(format!(
            "{}: row {index} has {} values, expected {width}",
            schema.name,
            row.len()
        )));
    }

    if rows.is_empty() {
        return Ok(RecordBatch::new_empty(arrow_schema));
    }

    let columns: Vec<ArrayRef> = schema
        .columns
        .iter()
        .enumerate()
        .map(|(index, column)| {
            let values: Vec<&Value> = rows.iter().map(|row| &row[index]).collect();
            build_array(&values, column.column_type)
        })
        .collect();

    RecordBatch::try_new(arrow_schema, columns).map_err(|e| Error::Output {
        message: format!("Failed to create RecordBatch: {e}"),
    })
}

/// Build an Arrow array from the values of one column
fn build_array(values: &[&Value], column_type: ColumnType) -> ArrayRef {
    match column_type {
        ColumnType::Int => {
            let arr: Int64Array = values.iter().map(|v| v.as_i64()).collect();
            Arc::new(arr)
        }

        ColumnType::Double => {
            let arr: Float64Array = values.iter().map(|v| v.as_f64()).collect();
            Arc::new(arr)
        }

        ColumnType::Bool => {
            let arr: BooleanArray = values.iter().map(|v| v.as_bool()).collect();
            Arc::new(arr)
        }

        ColumnType::Timestamp => {
            let arr: TimestampMillisecondArray = values
                .iter()
                .map(|v| normalize_timestamp(v).map(|ts| ts.timestamp_millis()))
                .collect();
            Arc::new(arr.with_timezone(TIMESTAMP_TZ))
        }

        ColumnType::String => {
            let arr: StringArray = values
                .iter()
                .map(|v| match v {
                    Value::Null => None,
                    Value::String(s) => Some(s.clone()),
                    other => Some(other.to_string()),
                })
                .collect();
            Arc::new(arr)
        }

        ColumnType::Json => {
            let arr: StringArray = values
                .iter()
                .map(|v| (!v.is_null()).then(|| v.to_string()))
                .collect();
            Arc::new(arr)
        }
    }
}
