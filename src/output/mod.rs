//! Output module
//!
//! Turns projected rows into typed Arrow batches and writes them out.
//!
//! # Overview
//!
//! This module provides utilities for:
//! - Mapping resource column types to Arrow types
//! - Converting rows to Arrow RecordBatches
//! - Writing rows as JSON lines or a pretty-printed table

mod schema;
mod writer;

pub use schema::{arrow_schema, data_type, rows_to_record_batch, TIMESTAMP_TZ};
pub use writer::{
    pretty_format, row_to_object, write_json_lines, write_rows, OutputFormat,
};
