//! Projection of upstream items onto table rows
//!
//! Applies each column's extraction rule to an item and coerces the result
//! to the column's semantic type. Values that cannot be coerced become null.

use super::types::{ColumnSpec, ColumnType, Extract, ResourceSchema};
use crate::types::{JsonObject, JsonValue, Quals};
use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use tracing::trace;

/// One projected row; values are aligned with the schema's columns
pub type Row = Vec<JsonValue>;

/// Project an item onto the schema's columns
pub fn project(schema: &ResourceSchema, item: &JsonValue, quals: &Quals) -> Row {
    schema
        .columns
        .iter()
        .map(|column| project_column(column, item, quals))
        .collect()
}

/// Project an item into a JSON object keyed by column name
pub fn project_object(schema: &ResourceSchema, item: &JsonValue, quals: &Quals) -> JsonObject {
    schema
        .columns
        .iter()
        .map(|column| (column.name.to_string(), project_column(column, item, quals)))
        .collect()
}

fn project_column(column: &ColumnSpec, item: &JsonValue, quals: &Quals) -> JsonValue {
    let raw = match column.extract {
        Extract::Field => item.get(column.name).cloned(),
        Extract::Renamed(field) => item.get(field).cloned(),
        Extract::Path(path) => lookup_path(item, path).cloned(),
        Extract::Decode { field, table } => {
            let code = item.get(field).and_then(as_int);
            return JsonValue::String(table.decode(code).to_string());
        }
        Extract::Qual(name) => quals.get(name).map(|v| v.to_json()),
    };

    match raw {
        Some(value) => coerce(column.column_type, value),
        None => JsonValue::Null,
    }
}

/// Follow a path of object keys
pub fn lookup_path<'a>(value: &'a JsonValue, path: &[&str]) -> Option<&'a JsonValue> {
    path.iter().try_fold(value, |current, key| current.get(*key))
}

/// Coerce a JSON value to a column type
pub fn coerce(column_type: ColumnType, value: JsonValue) -> JsonValue {
    if value.is_null() {
        return value;
    }

    let coerced = match column_type {
        ColumnType::Json => Some(value.clone()),
        ColumnType::Int => as_int(&value).map(JsonValue::from),
        ColumnType::Double => as_double(&value).map(JsonValue::from),
        ColumnType::Bool => as_bool(&value).map(JsonValue::Bool),
        ColumnType::String => Some(JsonValue::String(as_string(&value))),
        ColumnType::Timestamp => normalize_timestamp(&value)
            .map(|ts| JsonValue::String(ts.to_rfc3339_opts(SecondsFormat::Secs, true))),
    };

    coerced.unwrap_or_else(|| {
        trace!(%column_type, %value, "value does not fit column type");
        JsonValue::Null
    })
}

fn as_int(value: &JsonValue) -> Option<i64> {
    match value {
        JsonValue::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        JsonValue::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn as_double(value: &JsonValue) -> Option<f64> {
    match value {
        JsonValue::Number(n) => n.as_f64(),
        JsonValue::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn as_bool(value: &JsonValue) -> Option<bool> {
    match value {
        JsonValue::Bool(b) => Some(*b),
        JsonValue::String(s) => match s.to_ascii_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

fn as_string(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Parse the timestamp forms Freshservice emits into UTC
///
/// Accepts RFC 3339, naive date-times (read as UTC), bare dates (midnight
/// UTC) and integer epoch seconds.
pub fn normalize_timestamp(value: &JsonValue) -> Option<DateTime<Utc>> {
    match value {
        JsonValue::String(s) => parse_timestamp(s.trim()),
        JsonValue::Number(n) => n.as_i64().and_then(|secs| DateTime::from_timestamp(secs, 0)),
        _ => None,
    }
}

fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if s.is_empty() {
        return None;
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
        return Some(ts.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Some(naive.and_utc());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
