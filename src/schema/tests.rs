//! Schema and projection tests

use super::*;
use crate::types::{QualValue, Quals};
use pretty_assertions::assert_eq;
use serde_json::json;

const COLUMNS: &[ColumnSpec] = &[
    ColumnSpec::int("id", "Identifier"),
    ColumnSpec::int("status", "Status code"),
    ColumnSpec::decoded("status_desc", "status", CodeTable::TicketStatus, "Status label"),
    ColumnSpec::string("city", "City").at(&["address", "city"]),
    ColumnSpec::json("secondary_emails", "Other emails").renamed("additional_emails"),
    ColumnSpec::int("change_id", "Parent change").from_qual(),
    ColumnSpec::bool("active", "Active flag"),
    ColumnSpec::double("cost", "Cost"),
    ColumnSpec::timestamp("created_at", "Created"),
];

const KEYS: &[KeyColumn] = &[KeyColumn::parent("change_id"), KeyColumn::filter("active")];

const SCHEMA: ResourceSchema = ResourceSchema {
    name: "freshservice_test",
    description: "Test table",
    columns: COLUMNS,
    key_columns: KEYS,
};

#[test]
fn test_project_applies_extraction_rules() {
    let item = json!({
        "id": 12,
        "status": 4,
        "address": {"city": "Chennai"},
        "additional_emails": ["b@example.com"],
        "active": true,
        "cost": 12.5,
        "created_at": "2024-03-01T10:15:00Z"
    });
    let quals = Quals::new().with("change_id", 99);

    let row = project(&SCHEMA, &item, &quals);

    assert_eq!(
        row,
        vec![
            json!(12),
            json!(4),
            json!("Resolved"),
            json!("Chennai"),
            json!(["b@example.com"]),
            json!(99),
            json!(true),
            json!(12.5),
            json!("2024-03-01T10:15:00Z"),
        ]
    );
}

#[test]
fn test_project_missing_fields_are_null_and_decode_is_unknown() {
    let row = project_object(&SCHEMA, &json!({"id": 1}), &Quals::new());

    assert_eq!(row["status"], json!(null));
    assert_eq!(row["status_desc"], json!("Unknown"));
    assert_eq!(row["city"], json!(null));
    assert_eq!(row["change_id"], json!(null));
}

#[test]
fn test_nested_path_through_non_object_is_null() {
    let item = json!({"id": 1, "address": "somewhere"});
    let row = project_object(&SCHEMA, &item, &Quals::new());
    assert_eq!(row["city"], json!(null));
}

#[test]
fn test_coerce_numbers_and_strings() {
    assert_eq!(coerce(ColumnType::Int, json!("42")), json!(42));
    assert_eq!(coerce(ColumnType::Int, json!(3.0)), json!(3));
    assert_eq!(coerce(ColumnType::Int, json!(3.5)), json!(null));
    assert_eq!(coerce(ColumnType::Double, json!("1200.50")), json!(1200.5));
    assert_eq!(coerce(ColumnType::Double, json!(7)), json!(7.0));
    assert_eq!(coerce(ColumnType::String, json!(15)), json!("15"));
    assert_eq!(coerce(ColumnType::Bool, json!("TRUE")), json!(true));
    assert_eq!(coerce(ColumnType::Bool, json!(1)), json!(null));
    assert_eq!(coerce(ColumnType::Json, json!({"a": 1})), json!({"a": 1}));
}

#[test]
fn test_coerce_timestamps() {
    assert_eq!(
        coerce(ColumnType::Timestamp, json!("2023-11-05T08:00:00+05:30")),
        json!("2023-11-05T02:30:00Z")
    );
    assert_eq!(
        coerce(ColumnType::Timestamp, json!("2023-11-05")),
        json!("2023-11-05T00:00:00Z")
    );
    assert_eq!(
        coerce(ColumnType::Timestamp, json!("2023-11-05 13:45:00")),
        json!("2023-11-05T13:45:00Z")
    );
    assert_eq!(coerce(ColumnType::Timestamp, json!(0)), json!("1970-01-01T00:00:00Z"));
    assert_eq!(coerce(ColumnType::Timestamp, json!("not a date")), json!(null));
    assert_eq!(coerce(ColumnType::Timestamp, json!("")), json!(null));
}

#[test]
fn test_lookup_path() {
    let value = json!({"analysis_fields": {"problem_cause": {"description_text": "disk"}}});
    assert_eq!(
        lookup_path(&value, &["analysis_fields", "problem_cause", "description_text"]),
        Some(&json!("disk"))
    );
    assert_eq!(lookup_path(&value, &["analysis_fields", "missing"]), None);
}

#[test]
fn test_schema_lookups() {
    assert_eq!(SCHEMA.column_index("status_desc"), Some(2));
    assert!(SCHEMA.column("nope").is_none());
    assert_eq!(
        SCHEMA.required_keys().map(|k| k.name).collect::<Vec<_>>(),
        vec!["change_id"]
    );
    assert_eq!(SCHEMA.key_column("active").and_then(|k| k.param), Some("active"));
    assert_eq!(SCHEMA.column_names().len(), COLUMNS.len());
}

#[test]
fn test_parse_qual_by_column_type() {
    assert_eq!(SCHEMA.parse_qual("change_id", "17").unwrap(), QualValue::Int(17));
    assert_eq!(SCHEMA.parse_qual("active", "false").unwrap(), QualValue::Bool(false));
    assert_eq!(
        SCHEMA.parse_qual("city", "Pune").unwrap(),
        QualValue::String("Pune".into())
    );
    assert!(SCHEMA.parse_qual("change_id", "abc").is_err());
    assert!(SCHEMA.parse_qual("active", "yes").is_err());
    assert!(SCHEMA.parse_qual("unknown", "1").is_err());
}

#[test]
fn test_column_type_display() {
    assert_eq!(ColumnType::Timestamp.to_string(), "timestamp");
    assert_eq!(ColumnType::Json.to_string(), "json");
}
