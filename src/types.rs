//! Common types used throughout the connector
//!
//! This module contains shared type definitions, type aliases,
//! and utility types used across multiple modules.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

// ============================================================================
// Backoff Type
// ============================================================================

/// Backoff strategy used by the HTTP client between retries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackoffType {
    /// Constant delay between retries
    Constant,
    /// Linear increase in delay
    Linear,
    /// Exponential increase in delay
    #[default]
    Exponential,
}

// ============================================================================
// Qualifiers
// ============================================================================

/// A single equality value supplied by the caller for a key column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QualValue {
    Int(i64),
    Bool(bool),
    String(String),
}

impl QualValue {
    /// Integer view of the value
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            QualValue::Int(i) => Some(*i),
            QualValue::String(s) => s.parse().ok(),
            QualValue::Bool(_) => None,
        }
    }

    /// Convert to a JSON value
    pub fn to_json(&self) -> JsonValue {
        match self {
            QualValue::Int(i) => JsonValue::from(*i),
            QualValue::Bool(b) => JsonValue::Bool(*b),
            QualValue::String(s) => JsonValue::String(s.clone()),
        }
    }
}

impl fmt::Display for QualValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QualValue::Int(i) => write!(f, "{i}"),
            QualValue::Bool(b) => write!(f, "{b}"),
            QualValue::String(s) => f.write_str(s),
        }
    }
}

impl From<i64> for QualValue {
    fn from(value: i64) -> Self {
        QualValue::Int(value)
    }
}

impl From<i32> for QualValue {
    fn from(value: i32) -> Self {
        QualValue::Int(i64::from(value))
    }
}

impl From<bool> for QualValue {
    fn from(value: bool) -> Self {
        QualValue::Bool(value)
    }
}

impl From<&str> for QualValue {
    fn from(value: &str) -> Self {
        QualValue::String(value.to_string())
    }
}

impl From<String> for QualValue {
    fn from(value: String) -> Self {
        QualValue::String(value)
    }
}

/// Equality qualifiers supplied with a query, keyed by column name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quals(BTreeMap<String, QualValue>);

impl Quals {
    /// Create an empty qualifier set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a qualifier
    #[must_use]
    pub fn with(mut self, column: impl Into<String>, value: impl Into<QualValue>) -> Self {
        self.insert(column, value);
        self
    }

    /// Insert or replace a qualifier
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<QualValue>) {
        self.0.insert(column.into(), value.into());
    }

    /// Get a qualifier
    pub fn get(&self, column: &str) -> Option<&QualValue> {
        self.0.get(column)
    }

    /// Integer qualifier, if present and numeric
    pub fn int(&self, column: &str) -> Option<i64> {
        self.get(column).and_then(QualValue::as_i64)
    }

    /// Check whether a qualifier was supplied
    pub fn contains(&self, column: &str) -> bool {
        self.0.contains_key(column)
    }

    /// Number of qualifiers
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no qualifiers were supplied
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate in column-name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &QualValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

// ============================================================================
// Utilities
// ============================================================================

/// Extension trait for Option<String> to handle empty strings
pub trait OptionStringExt {
    /// Returns None if the string is empty
    fn none_if_empty(self) -> Option<String>;
}

impl OptionStringExt for Option<String> {
    fn none_if_empty(self) -> Option<String> {
        self.filter(|s| !s.is_empty())
    }
}

impl OptionStringExt for String {
    fn none_if_empty(self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self)
        }
    }
}
