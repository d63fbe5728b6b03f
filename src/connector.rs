//! Connector facade
//!
//! [`Connector`] is what a host runtime talks to. It owns the connection
//! configuration and the resource registry, and builds a fresh client and
//! engine for every call, so concurrent fetches share no mutable state.

use crate::client::FreshserviceClient;
use crate::config::{ConnectionConfig, ConnectionParams};
use crate::engine::{FetchEngine, FetchStats, ItemSink};
use crate::error::Result;
use crate::resources::{ResourceDefinition, Registry};
use crate::schema::{self, ResourceSchema, Row};
use crate::types::Quals;
use serde_json::Value;
use tracing::{debug, info};

/// Resource listed by [`Connector::check`]
pub const CHECK_RESOURCE: &str = "freshservice_agent";

// ============================================================================
// Query Result
// ============================================================================

/// Rows produced by [`Connector::query`]
#[derive(Debug, Clone)]
pub struct QueryResult {
    /// Schema the rows follow
    pub schema: &'static ResourceSchema,
    /// Projected rows, aligned with the schema's columns
    pub rows: Vec<Row>,
    /// Request statistics
    pub stats: FetchStats,
}

// ============================================================================
// Connector
// ============================================================================

/// Entry point for listing and getting Freshservice resources
#[derive(Debug, Clone)]
pub struct Connector {
    config: ConnectionConfig,
    registry: Registry,
}

impl Connector {
    /// Create a connector over every built-in resource
    pub fn new(config: ConnectionConfig) -> Self {
        Self::with_registry(config, Registry::builtin())
    }

    /// Create a connector over a custom registry
    pub fn with_registry(config: ConnectionConfig, registry: Registry) -> Self {
        Self { config, registry }
    }

    /// Get the connection configuration
    pub fn config(&self) -> &ConnectionConfig {
        &self.config
    }

    /// Get the resource registry
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Schema of a resource
    pub fn schema(&self, resource: &str) -> Result<&'static ResourceSchema> {
        self.registry.schema_for(resource)
    }

    /// Resolve connection parameters against the process environment
    pub fn params(&self) -> Result<ConnectionParams> {
        self.config.resolve_from_env()
    }

    fn engine(&self) -> Result<FetchEngine<FreshserviceClient>> {
        let params = self.params()?;
        Ok(FetchEngine::new(FreshserviceClient::new(&params)?))
    }

    /// List a resource, delivering raw items to `sink`
    pub async fn list<S>(
        &self,
        resource: &str,
        quals: &Quals,
        limit: Option<u64>,
        sink: &mut S,
    ) -> Result<FetchStats>
    where
        S: ItemSink + ?Sized,
    {
        let definition = self.registry.definition(resource)?;
        self.engine()?.list(definition, quals, limit, sink).await
    }

    /// Get one item of a resource by its identifier
    pub async fn get<S>(&self, resource: &str, quals: &Quals, sink: &mut S) -> Result<FetchStats>
    where
        S: ItemSink + ?Sized,
    {
        let definition = self.registry.definition(resource)?;
        self.engine()?.get(definition, quals, sink).await
    }

    /// Verify the domain and token with a one-row agent listing
    pub async fn check(&self) -> Result<()> {
        let mut sink: Vec<Value> = Vec::new();
        self.list(CHECK_RESOURCE, &Quals::new(), Some(1), &mut sink)
            .await
            .map(|_| ())
    }

    /// Fetch and project rows
    ///
    /// Uses the item endpoint when the only predicate is the resource's get
    /// key, otherwise lists.
    pub async fn query(&self, resource: &str, quals: &Quals, limit: Option<u64>) -> Result<QueryResult> {
        let definition = self.registry.definition(resource)?;
        let engine = self.engine()?;

        let schema = &definition.schema;
        let mut rows = Vec::new();
        let mut sink = |item: Value| -> Result<()> {
            rows.push(schema::project(schema, &item, quals));
            Ok(())
        };

        let stats = if uses_item_endpoint(definition, quals) {
            debug!(resource = definition.name(), "querying item endpoint");
            engine.get(definition, quals, &mut sink).await?
        } else {
            engine.list(definition, quals, limit, &mut sink).await?
        };

        info!(
            resource = definition.name(),
            pages = stats.pages,
            rows = stats.items,
            "query complete"
        );

        Ok(QueryResult { schema, rows, stats })
    }
}

fn uses_item_endpoint(definition: &ResourceDefinition, quals: &Quals) -> bool {
    definition
        .get
        .is_some_and(|get| quals.len() == 1 && quals.contains(get.key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn connector() -> Connector {
        Connector::new(
            ConnectionConfig::new()
                .with_domain("http://127.0.0.1:9")
                .with_token("secret"),
        )
    }

    #[test]
    fn test_schema_lookup() {
        let connector = connector();
        assert_eq!(connector.schema("ticket").unwrap().name, "freshservice_ticket");
        assert!(matches!(
            connector.schema("freshservice_widget"),
            Err(Error::UnknownResource { .. })
        ));
    }

    #[test]
    fn test_params_from_config() {
        let params = connector().params().unwrap();
        assert_eq!(params.base_url, "http://127.0.0.1:9/api/v2");
    }

    #[tokio::test]
    async fn test_unknown_resource_fails_before_network() {
        let mut sink = Vec::new();
        let err = connector()
            .list("widget", &Quals::new(), None, &mut sink)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::UnknownResource { ref name } if name == "widget"));
    }

    #[tokio::test]
    async fn test_missing_parent_fails_before_network() {
        let mut sink = Vec::new();
        let err = connector()
            .list("freshservice_ticket_task", &Quals::new(), None, &mut sink)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::MissingRequiredFilter { ref column, .. } if column == "ticket_id"));
    }

    #[test]
    fn test_item_endpoint_selection() {
        let registry = Registry::builtin();
        let ticket = registry.definition("ticket").unwrap();
        let asset = registry.definition("asset").unwrap();
        let sla = registry.definition("sla_policy").unwrap();

        assert!(uses_item_endpoint(ticket, &Quals::new().with("id", 1)));
        assert!(!uses_item_endpoint(ticket, &Quals::new()));
        assert!(!uses_item_endpoint(
            ticket,
            &Quals::new().with("id", 1).with("email", "a@example.com")
        ));
        assert!(uses_item_endpoint(asset, &Quals::new().with("display_id", 4)));
        assert!(!uses_item_endpoint(asset, &Quals::new().with("id", 4)));
        assert!(!uses_item_endpoint(sla, &Quals::new().with("id", 1)));
    }
}
