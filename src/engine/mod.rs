//! Fetch orchestration
//!
//! One generic engine drives every resource. A [`ResourceDefinition`] tells
//! it which endpoint to call, how the collection is paged and which
//! predicates may be pushed down; the [`ServiceDeskApi`] collaborator does
//! the actual I/O.
//!
//! # Overview
//!
//! - `FetchEngine::list` validates required predicates, translates optional
//!   ones into query parameters and walks pages until the upstream stops
//!   signalling more
//! - `FetchEngine::get` issues a single item request
//! - `ItemSink` receives items as they arrive; items already emitted stay
//!   emitted when a later page fails

mod types;

pub use types::{FetchStats, ItemSink};

use crate::client::{Endpoint, ServiceDeskApi};
use crate::error::{Error, Result};
use crate::pagination::PageRequest;
use crate::resources::{GetBinding, ResourceDefinition};
use crate::schema::ResourceSchema;
use crate::template;
use crate::types::Quals;
use tracing::{debug, error};

/// Operation name used in upstream errors for list requests
pub const LIST: &str = "list";

/// Operation name used in upstream errors for item requests
pub const GET: &str = "get";

/// Orchestrates list and get requests for any resource
#[derive(Debug)]
pub struct FetchEngine<A> {
    api: A,
}

impl<A: ServiceDeskApi> FetchEngine<A> {
    /// Create an engine over an upstream collaborator
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Get the upstream collaborator
    pub fn api(&self) -> &A {
        &self.api
    }

    /// List a resource
    ///
    /// `limit` is a row-limit hint: it narrows the first page size and stops
    /// paging once that many items have been emitted. `Some(0)` returns
    /// without contacting the upstream.
    pub async fn list<S>(
        &self,
        definition: &ResourceDefinition,
        quals: &Quals,
        limit: Option<u64>,
        sink: &mut S,
    ) -> Result<FetchStats>
    where
        S: ItemSink + ?Sized,
    {
        let schema = &definition.schema;

        if let Some(key) = schema.required_keys().find(|k| !quals.contains(k.name)) {
            return Err(Error::missing_filter(schema.name, key.name));
        }

        if let Some(shortcut) = definition.list.shortcut {
            if quals.contains(shortcut.key) {
                debug!(resource = schema.name, key = shortcut.key, "listing through item endpoint");
                return self.fetch_one(definition, &shortcut, quals, LIST, sink).await;
            }
        }

        let path = render_path(schema, definition.list.path, quals)?;
        if limit == Some(0) {
            debug!(resource = schema.name, "row limit is zero, nothing to fetch");
            return Ok(FetchStats::new());
        }
        let endpoint = Endpoint::new(path, definition.list.envelope);

        let mut request = PageRequest::for_mode(definition.list.mode, limit);
        for key in schema.key_columns {
            if let (Some(param), Some(value)) = (key.param, quals.get(key.name)) {
                request = request.filter(param, value.to_string());
            }
        }

        let limit = limit.map(|l| l as usize);
        let mut stats = FetchStats::new();

        'pages: loop {
            let page = self
                .api
                .list_page(&endpoint, &request)
                .await
                .map_err(|e| upstream_failure(schema.name, LIST, e))?;
            stats.add_page();

            for item in page.items {
                sink.emit(item)?;
                stats.add_item();
                if limit.is_some_and(|l| stats.items >= l) {
                    break 'pages;
                }
            }

            if !(page.has_more && request.is_paged()) {
                break;
            }
            request.advance();
        }

        debug!(
            resource = schema.name,
            pages = stats.pages,
            items = stats.items,
            "list complete"
        );
        Ok(stats)
    }

    /// Get one item by its identifier
    pub async fn get<S>(
        &self,
        definition: &ResourceDefinition,
        quals: &Quals,
        sink: &mut S,
    ) -> Result<FetchStats>
    where
        S: ItemSink + ?Sized,
    {
        let name = definition.name();
        let binding = definition
            .get
            .ok_or_else(|| Error::config(format!("{name}: resource has no item endpoint")))?;

        if !quals.contains(binding.key) {
            return Err(Error::missing_filter(name, binding.key));
        }

        self.fetch_one(definition, &binding, quals, GET, sink).await
    }

    async fn fetch_one<S>(
        &self,
        definition: &ResourceDefinition,
        binding: &GetBinding,
        quals: &Quals,
        operation: &str,
        sink: &mut S,
    ) -> Result<FetchStats>
    where
        S: ItemSink + ?Sized,
    {
        let name = definition.name();
        let path = render_path(&definition.schema, binding.path, quals)?;

        let item = self
            .api
            .get_item(&path, binding.envelope)
            .await
            .map_err(|e| upstream_failure(name, operation, e))?;

        sink.emit(item)?;
        debug!(resource = name, %path, "item fetched");

        Ok(FetchStats { pages: 1, items: 1 })
    }
}

/// Render an endpoint path from integer identifiers only
///
/// Path segments select parent objects by numeric id; any other value is
/// rejected before it can reach the URL.
fn render_path(schema: &ResourceSchema, path: &str, quals: &Quals) -> Result<String> {
    let mut ids = Quals::new();
    for name in template::variables(path) {
        let Some(value) = quals.get(name) else {
            continue;
        };
        let id = value.as_i64().ok_or_else(|| {
            Error::config(format!(
                "{}: column '{name}' expects an integer, got '{value}'",
                schema.name
            ))
        })?;
        ids.insert(name, id);
    }
    template::render(path, &ids)
}

fn upstream_failure(resource: &str, operation: &str, source: Error) -> Error {
    error!(resource, operation, error = %source, "upstream request failed");
    Error::upstream(resource, operation, source)
}
