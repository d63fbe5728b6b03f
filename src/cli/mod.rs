//! CLI module
//!
//! Command-line host for the connector.
//!
//! # Commands
//!
//! - `check` - Test the connection to the API
//! - `tables` - List available tables
//! - `schema` - Show a table's columns and accepted predicates
//! - `query` - Fetch rows

mod commands;
mod runner;

pub use commands::{parse_predicate, Cli, Commands, OutputFormat};
pub use runner::Runner;
