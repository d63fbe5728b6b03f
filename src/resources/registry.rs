//! Resource registry

use super::{ResourceDefinition, ALL};
use crate::error::{Error, Result};
use crate::schema::ResourceSchema;
use std::collections::BTreeMap;

/// Prefix shared by all table names
pub const TABLE_PREFIX: &str = "freshservice_";

/// Lookup of resource definitions by table name
#[derive(Debug, Clone, Default)]
pub struct Registry {
    resources: BTreeMap<&'static str, &'static ResourceDefinition>,
}

impl Registry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in resource
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for definition in ALL {
            registry.register(definition);
        }
        registry
    }

    /// Add or replace a definition
    pub fn register(&mut self, definition: &'static ResourceDefinition) {
        self.resources.insert(definition.name(), definition);
    }

    /// Definition for a table; the `freshservice_` prefix may be omitted
    pub fn definition(&self, name: &str) -> Result<&'static ResourceDefinition> {
        self.resources
            .get(name)
            .or_else(|| self.resources.get(format!("{TABLE_PREFIX}{name}").as_str()))
            .copied()
            .ok_or_else(|| Error::unknown_resource(name))
    }

    /// Schema for a table
    pub fn schema_for(&self, name: &str) -> Result<&'static ResourceSchema> {
        self.definition(name).map(|d| &d.schema)
    }

    /// Table names, sorted
    pub fn names(&self) -> Vec<&'static str> {
        self.resources.keys().copied().collect()
    }

    /// Definitions in name order
    pub fn iter(&self) -> impl Iterator<Item = &'static ResourceDefinition> + '_ {
        self.resources.values().copied()
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}
