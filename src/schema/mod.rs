//! Table schemas
//!
//! Static column definitions for every resource, the code tables behind
//! `*_desc` columns, and the projection step that turns an upstream item
//! into a typed row.
//!
//! # Extraction rules
//!
//! - **Field**: same-named top-level field (the default)
//! - **Renamed / Path**: another top-level field, or a nested one such as
//!   `address.line1`
//! - **Decode**: label for a numeric code, `"Unknown"` when unmapped
//! - **Qual**: the predicate value the caller supplied, used for parent ids
//!   that child items do not carry themselves

mod enums;
mod project;
mod types;

pub use enums::{CodeTable, UNKNOWN};
pub use project::{coerce, lookup_path, normalize_timestamp, project, project_object, Row};
pub use types::{ColumnSpec, ColumnType, Extract, KeyColumn, Require, ResourceSchema};

#[cfg(test)]
mod tests;
