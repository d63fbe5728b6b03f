//! Upstream API collaborator
//!
//! [`ServiceDeskApi`] is the seam between the fetch orchestrator and the
//! network. [`FreshserviceClient`] implements it over [`HttpClient`]; tests
//! substitute in-memory implementations.

use crate::auth::AuthConfig;
use crate::config::ConnectionParams;
use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig, RequestConfig};
use crate::pagination::{has_next_page, Page, PageRequest};
use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

/// A concrete collection endpoint: rendered path plus the JSON key wrapping
/// its items
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// Path relative to the API base, e.g. `changes/42/notes`
    pub path: String,
    /// Envelope key, e.g. `notes`
    pub envelope: &'static str,
}

impl Endpoint {
    pub fn new(path: impl Into<String>, envelope: &'static str) -> Self {
        Self {
            path: path.into(),
            envelope,
        }
    }
}

/// Operations the orchestrator needs from the service desk API
#[async_trait]
pub trait ServiceDeskApi: Send + Sync {
    /// Fetch one page of a collection
    async fn list_page(&self, endpoint: &Endpoint, request: &PageRequest) -> Result<Page>;

    /// Fetch a single object wrapped in `envelope`
    async fn get_item(&self, path: &str, envelope: &str) -> Result<Value>;
}

/// Freshservice v2 REST client
#[derive(Debug)]
pub struct FreshserviceClient {
    http: HttpClient,
}

impl FreshserviceClient {
    /// Build a client for resolved connection parameters
    pub fn new(params: &ConnectionParams) -> Result<Self> {
        let config = HttpClientConfig::from_settings(&params.base_url, &params.http);
        let config = HttpClientConfig {
            default_headers: [("Accept".to_string(), "application/json".to_string())]
                .into_iter()
                .collect(),
            ..config
        };
        let http = HttpClient::with_auth(config, AuthConfig::api_key(&params.token))?;
        Ok(Self { http })
    }

    async fn fetch_json(&self, path: &str, config: RequestConfig) -> Result<(Value, bool)> {
        let response = self.http.get_with_config(path, config).await?;
        let has_next = has_next_page(response.headers());
        let text = response.text().await?;
        let body = serde_json::from_str(&text)
            .map_err(|e| Error::decode(format!("{path}: invalid JSON: {e}")))?;
        Ok((body, has_next))
    }
}

#[async_trait]
impl ServiceDeskApi for FreshserviceClient {
    async fn list_page(&self, endpoint: &Endpoint, request: &PageRequest) -> Result<Page> {
        let config = RequestConfig::with_query(request.query_params());
        let (body, has_next) = self.fetch_json(&endpoint.path, config).await?;
        let items = unwrap_list(body, endpoint.envelope)?;
        let has_more = request.is_paged() && has_next;

        debug!(
            path = %endpoint.path,
            page = request.page,
            items = items.len(),
            has_more,
            "fetched page"
        );

        Ok(Page { items, has_more })
    }

    async fn get_item(&self, path: &str, envelope: &str) -> Result<Value> {
        let (body, _) = self.fetch_json(path, RequestConfig::default()).await?;
        debug!(%path, "fetched item");
        unwrap_item(body, envelope)
    }
}

/// Take the array under `envelope`; a null payload is an empty collection
fn unwrap_list(body: Value, envelope: &str) -> Result<Vec<Value>> {
    match take_envelope(body, envelope)? {
        Value::Array(items) => Ok(items),
        Value::Null => Ok(Vec::new()),
        other => Err(Error::decode(format!(
            "expected an array under '{envelope}', found {}",
            json_kind(&other)
        ))),
    }
}

fn unwrap_item(body: Value, envelope: &str) -> Result<Value> {
    match take_envelope(body, envelope)? {
        item @ Value::Object(_) => Ok(item),
        other => Err(Error::decode(format!(
            "expected an object under '{envelope}', found {}",
            json_kind(&other)
        ))),
    }
}

fn take_envelope(body: Value, envelope: &str) -> Result<Value> {
    match body {
        Value::Object(mut map) => map
            .remove(envelope)
            .ok_or_else(|| Error::decode(format!("response has no '{envelope}' field"))),
        other => Err(Error::decode(format!(
            "expected a JSON object, found {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
