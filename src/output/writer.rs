//! Row writers
//!
//! JSON lines for machine consumption and Arrow's pretty printer for
//! terminals.

use super::schema::rows_to_record_batch;
use crate::error::{Error, Result};
use crate::schema::{ResourceSchema, Row};
use arrow::util::pretty::pretty_format_batches;
use serde_json::{Map, Value};
use std::io::Write;

/// Output format for rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One JSON object per line
    #[default]
    Json,
    /// Aligned table
    Pretty,
}

impl std::str::FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" | "jsonl" => Ok(Self::Json),
            "pretty" | "table" => Ok(Self::Pretty),
            other => Err(Error::config(format!(
                "unknown output format '{other}', expected json or pretty"
            ))),
        }
    }
}

/// Pair each value of a row with its column name
pub fn row_to_object(schema: &ResourceSchema, row: &Row) -> Map<String, Value> {
    schema
        .columns
        .iter()
        .zip(row)
        .map(|(column, value)| (column.name.to_string(), value.clone()))
        .collect()
}

/// Write rows as JSON lines; returns the number of rows written
pub fn write_json_lines<W: Write>(
    writer: &mut W,
    schema: &ResourceSchema,
    rows: &[Row],
) -> Result<usize> {
    for row in rows {
        let object = Value::Object(row_to_object(schema, row));
        serde_json::to_writer(&mut *writer, &object)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(rows.len())
}

/// Render rows as a table
pub fn pretty_format(schema: &ResourceSchema, rows: &[Row]) -> Result<String> {
    let batch = rows_to_record_batch(schema, rows)?;
    Ok(pretty_format_batches(&[batch])?.to_string())
}

/// Write rows in the requested format
pub fn write_rows<W: Write>(
    writer: &mut W,
    format: OutputFormat,
    schema: &ResourceSchema,
    rows: &[Row],
) -> Result<usize> {
    match format {
        OutputFormat::Json => write_json_lines(writer, schema, rows),
        OutputFormat::Pretty => {
            let table = pretty_format(schema, rows)?;
            writeln!(writer, "{table}")?;
            Ok(rows.len())
        }
    }
}
