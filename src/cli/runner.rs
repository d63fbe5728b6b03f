//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::ConnectionConfig;
use crate::connector::Connector;
use crate::error::{Error, Result};
use crate::output;
use crate::resources::Registry;
use crate::schema::ResourceSchema;
use crate::types::Quals;
use serde_json::{json, Value};
use std::io::Write;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Check => self.check().await,
            Commands::Tables => self.tables(),
            Commands::Schema { table } => self.schema(table),
            Commands::Query {
                table,
                predicates,
                limit,
            } => self.query(table, predicates, *limit).await,
        }
    }

    /// Connection configuration from the file plus command-line overrides
    fn connection_config(&self) -> Result<ConnectionConfig> {
        let mut config = match &self.cli.config {
            Some(path) => ConnectionConfig::from_file(path)?,
            None => ConnectionConfig::new(),
        };

        if let Some(domain) = &self.cli.domain {
            config.domain = Some(domain.clone());
        }
        if let Some(token) = &self.cli.token {
            config.token = Some(token.clone());
        }

        Ok(config)
    }

    fn connector(&self) -> Result<Connector> {
        Ok(Connector::new(self.connection_config()?))
    }

    /// Check the connection
    async fn check(&self) -> Result<()> {
        let connector = self.connector()?;

        match connector.check().await {
            Ok(()) => {
                self.output_message(&json!({
                    "type": "CONNECTION_STATUS",
                    "connectionStatus": {
                        "status": "SUCCEEDED",
                        "message": "Connection successful"
                    }
                }));
            }
            Err(e) => {
                self.output_message(&json!({
                    "type": "CONNECTION_STATUS",
                    "connectionStatus": {
                        "status": "FAILED",
                        "message": format!("Connection failed: {e}")
                    }
                }));
            }
        }

        Ok(())
    }

    /// List tables
    fn tables(&self) -> Result<()> {
        let registry = Registry::builtin();
        let tables: Vec<Value> = registry
            .iter()
            .map(|definition| {
                json!({
                    "name": definition.name(),
                    "description": definition.schema.description,
                })
            })
            .collect();

        self.output_message(&json!({
            "type": "TABLES",
            "tables": tables,
        }));

        Ok(())
    }

    /// Describe one table
    fn schema(&self, table: &str) -> Result<()> {
        let definition = Registry::builtin().definition(table)?;
        let schema = &definition.schema;

        let columns: Vec<Value> = schema
            .columns
            .iter()
            .map(|column| {
                json!({
                    "name": column.name,
                    "type": column.column_type,
                    "description": column.description,
                })
            })
            .collect();

        let key_columns: Vec<Value> = schema
            .key_columns
            .iter()
            .map(|key| {
                json!({
                    "name": key.name,
                    "require": key.require,
                    "param": key.param,
                })
            })
            .collect();

        self.output_message(&json!({
            "type": "SCHEMA",
            "table": schema.name,
            "description": schema.description,
            "columns": columns,
            "key_columns": key_columns,
            "get_key": definition.get.map(|get| get.key),
        }));

        Ok(())
    }

    /// Fetch and print rows
    async fn query(
        &self,
        table: &str,
        predicates: &[(String, String)],
        limit: Option<u64>,
    ) -> Result<()> {
        let connector = self.connector()?;
        let definition = connector.registry().definition(table)?;
        let quals = parse_quals(
            &definition.schema,
            definition.get.map(|get| get.key),
            predicates,
        )?;

        let result = connector.query(definition.name(), &quals, limit).await?;

        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        let written = output::write_rows(
            &mut out,
            self.cli.format.into(),
            result.schema,
            &result.rows,
        )?;
        out.flush()?;

        info!(
            table = result.schema.name,
            rows = written,
            pages = result.stats.pages,
            "query finished"
        );

        Ok(())
    }

    /// Output a message
    fn output_message(&self, msg: &Value) {
        match self.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(msg).unwrap_or_default());
            }
            OutputFormat::Pretty => {
                println!("{}", serde_json::to_string_pretty(msg).unwrap_or_default());
            }
        }
    }
}

/// Turn `column=value` pairs into typed qualifiers
///
/// Only key columns and the table's get key accept predicates.
fn parse_quals(
    schema: &ResourceSchema,
    get_key: Option<&str>,
    predicates: &[(String, String)],
) -> Result<Quals> {
    let mut quals = Quals::new();

    for (column, raw) in predicates {
        let accepted =
            schema.key_column(column).is_some() || get_key.is_some_and(|key| key == column);
        if !accepted {
            let mut names: Vec<&str> = schema.key_columns.iter().map(|k| k.name).collect();
            if let Some(key) = get_key.filter(|key| schema.key_column(key).is_none()) {
                names.push(key);
            }
            return Err(Error::config(format!(
                "{}: column '{column}' does not accept predicates (accepted: {})",
                schema.name,
                if names.is_empty() {
                    "none".to_string()
                } else {
                    names.join(", ")
                }
            )));
        }

        quals.insert(column.as_str(), schema.parse_qual(column, raw)?);
    }

    Ok(quals)
}
