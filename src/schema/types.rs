//! Schema types
//!
//! Resource schemas are static data: every column, its semantic type and the
//! rule that extracts its value from an upstream item is known at compile
//! time.

use super::enums::CodeTable;
use crate::error::{Error, Result};
use crate::types::QualValue;
use serde::Serialize;

/// Semantic type of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Int,
    String,
    Bool,
    Timestamp,
    Double,
    Json,
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnType::Int => write!(f, "int"),
            ColumnType::String => write!(f, "string"),
            ColumnType::Bool => write!(f, "bool"),
            ColumnType::Timestamp => write!(f, "timestamp"),
            ColumnType::Double => write!(f, "double"),
            ColumnType::Json => write!(f, "json"),
        }
    }
}

/// How a column's value is obtained from an item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extract {
    /// Top-level field with the column's name
    Field,
    /// Top-level field with a different name
    Renamed(&'static str),
    /// Nested field, outermost key first
    Path(&'static [&'static str]),
    /// Label for the numeric code held in `field`
    Decode {
        field: &'static str,
        table: CodeTable,
    },
    /// Value of the caller-supplied qualifier with this name
    Qual(&'static str),
}

/// One column of a resource schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub column_type: ColumnType,
    pub extract: Extract,
}

impl ColumnSpec {
    pub const fn new(name: &'static str, column_type: ColumnType, description: &'static str) -> Self {
        Self {
            name,
            description,
            column_type,
            extract: Extract::Field,
        }
    }

    pub const fn int(name: &'static str, description: &'static str) -> Self {
        Self::new(name, ColumnType::Int, description)
    }

    pub const fn string(name: &'static str, description: &'static str) -> Self {
        Self::new(name, ColumnType::String, description)
    }

    pub const fn bool(name: &'static str, description: &'static str) -> Self {
        Self::new(name, ColumnType::Bool, description)
    }

    pub const fn timestamp(name: &'static str, description: &'static str) -> Self {
        Self::new(name, ColumnType::Timestamp, description)
    }

    pub const fn double(name: &'static str, description: &'static str) -> Self {
        Self::new(name, ColumnType::Double, description)
    }

    pub const fn json(name: &'static str, description: &'static str) -> Self {
        Self::new(name, ColumnType::Json, description)
    }

    /// String column holding the label for a code in `field`
    pub const fn decoded(
        name: &'static str,
        field: &'static str,
        table: CodeTable,
        description: &'static str,
    ) -> Self {
        Self {
            extract: Extract::Decode { field, table },
            ..Self::string(name, description)
        }
    }

    /// Read the value from another top-level field
    pub const fn renamed(self, field: &'static str) -> Self {
        Self {
            extract: Extract::Renamed(field),
            ..self
        }
    }

    /// Read the value from a nested field
    pub const fn at(self, path: &'static [&'static str]) -> Self {
        Self {
            extract: Extract::Path(path),
            ..self
        }
    }

    /// Copy the value from the qualifier of the same name
    pub const fn from_qual(self) -> Self {
        Self {
            extract: Extract::Qual(self.name),
            ..self
        }
    }
}

/// Whether a key column must be supplied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Require {
    Optional,
    Required,
}

/// A column that accepts equality predicates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyColumn {
    /// Column name
    pub name: &'static str,
    /// Whether listing fails without it
    pub require: Require,
    /// Query parameter the value is sent as; `None` when the value is
    /// consumed by the endpoint path instead
    pub param: Option<&'static str>,
}

impl KeyColumn {
    /// Optional filter sent as a same-named query parameter
    pub const fn filter(name: &'static str) -> Self {
        Self {
            name,
            require: Require::Optional,
            param: Some(name),
        }
    }

    /// Required parent identifier substituted into the path
    pub const fn parent(name: &'static str) -> Self {
        Self {
            name,
            require: Require::Required,
            param: None,
        }
    }

    /// Optional identifier substituted into the path
    pub const fn lookup(name: &'static str) -> Self {
        Self {
            name,
            require: Require::Optional,
            param: None,
        }
    }

    pub fn is_required(&self) -> bool {
        self.require == Require::Required
    }
}

/// Static description of one table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceSchema {
    /// Table name, e.g. `freshservice_ticket`
    pub name: &'static str,
    pub description: &'static str,
    pub columns: &'static [ColumnSpec],
    /// Columns accepting predicates on list
    pub key_columns: &'static [KeyColumn],
}

impl ResourceSchema {
    /// Look up a column by name
    pub fn column(&self, name: &str) -> Option<&ColumnSpec> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Position of a column
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Look up a key column by name
    pub fn key_column(&self, name: &str) -> Option<&KeyColumn> {
        self.key_columns.iter().find(|k| k.name == name)
    }

    /// Key columns that must be supplied
    pub fn required_keys(&self) -> impl Iterator<Item = &KeyColumn> {
        self.key_columns.iter().filter(|k| k.is_required())
    }

    /// Column names in declaration order
    pub fn column_names(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.name).collect()
    }

    /// Parse a textual predicate value according to the column's type
    pub fn parse_qual(&self, column: &str, raw: &str) -> Result<QualValue> {
        let spec = self.column(column).ok_or_else(|| {
            Error::config(format!("{}: no column named '{column}'", self.name))
        })?;

        match spec.column_type {
            ColumnType::Int => raw.trim().parse::<i64>().map(QualValue::Int).map_err(|_| {
                Error::config(format!(
                    "{}: column '{column}' expects an integer, got '{raw}'",
                    self.name
                ))
            }),
            ColumnType::Bool => match raw.trim().to_ascii_lowercase().as_str() {
                "true" => Ok(QualValue::Bool(true)),
                "false" => Ok(QualValue::Bool(false)),
                _ => Err(Error::config(format!(
                    "{}: column '{column}' expects true or false, got '{raw}'",
                    self.name
                ))),
            },
            _ => Ok(QualValue::String(raw.to_string())),
        }
    }
}
