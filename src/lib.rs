//! # Freshservice Connector
//!
//! Exposes the Freshservice ITSM REST API (v2) as a catalogue of typed
//! tables: tickets, changes, problems, releases, assets, people, the service
//! catalog and the knowledge base.
//!
//! ## Features
//!
//! - **38 Tables**: static schemas with typed columns and code labels
//! - **Filter Pushdown**: equality predicates become query parameters or
//!   path segments
//! - **Pagination**: `Link` header paging with row-limit aware page sizes
//! - **HTTP**: retries with backoff, `Retry-After` handling, rate limiting
//! - **Output**: typed Arrow batches, JSON lines, pretty tables
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use freshservice_connector::{ConnectionConfig, Connector, Quals};
//!
//! #[tokio::main]
//! async fn main() -> freshservice_connector::Result<()> {
//!     let config = ConnectionConfig::new()
//!         .with_domain("acme")
//!         .with_token("api-key");
//!     let connector = Connector::new(config);
//!
//!     // All notes of change 42
//!     let quals = Quals::new().with("change_id", 42);
//!     let result = connector.query("change_note", &quals, None).await?;
//!     println!("{} notes", result.rows.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                          Connector                              │
//! │   list(table, quals, limit, sink)   get(table, quals, sink)     │
//! └─────────────────────────────────────────────────────────────────┘
//!                                │
//! ┌──────────────┬───────────────┴───────────┬──────────────────────┐
//! │  Resources   │        FetchEngine        │       Output         │
//! ├──────────────┼───────────────────────────┼──────────────────────┤
//! │ Schemas      │ Required predicates       │ Projection           │
//! │ Endpoints    │ Filter pushdown           │ Arrow batches        │
//! │ Code tables  │ Page loop                 │ JSON lines / pretty  │
//! └──────────────┴───────────────────────────┴──────────────────────┘
//!                                │
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  ServiceDeskApi ─ FreshserviceClient ─ HttpClient (retry, rate) │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the connector
pub mod error;

/// Common types and type aliases
pub mod types;

/// Connection configuration
pub mod config;

/// Authentication
pub mod auth;

/// HTTP client with retry and rate limiting
pub mod http;

/// Page requests and `Link` header parsing
pub mod pagination;

/// Upstream API collaborator
pub mod client;

/// Endpoint path templates
pub mod template;

/// Table schemas, code tables and projection
pub mod schema;

/// Resource definitions and registry
pub mod resources;

/// Fetch orchestration
pub mod engine;

/// Host-facing facade
pub mod connector;

/// Arrow and text output
pub mod output;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::{ConnectionConfig, ConnectionParams};
pub use connector::{Connector, QueryResult};
pub use engine::{FetchStats, ItemSink};
pub use error::{Error, Result};
pub use resources::Registry;
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
