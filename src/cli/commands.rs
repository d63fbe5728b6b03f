//! CLI commands and argument parsing

use crate::output;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Query Freshservice resources as typed tables
#[derive(Parser, Debug)]
#[command(name = "freshservice-connector")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Connection configuration file (YAML, or JSON with a .json extension)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Freshservice domain, overrides the configuration file
    #[arg(long, global = true)]
    pub domain: Option<String>,

    /// API key, overrides the configuration file
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Test the connection with a one-row agent listing
    Check,

    /// List available tables
    Tables,

    /// Show the columns and accepted predicates of a table
    Schema {
        /// Table name, with or without the freshservice_ prefix
        table: String,
    },

    /// Fetch rows from a table
    Query {
        /// Table name, with or without the freshservice_ prefix
        table: String,

        /// Equality predicate, e.g. --where change_id=42 (repeatable)
        #[arg(short = 'w', long = "where", value_parser = parse_predicate)]
        predicates: Vec<(String, String)>,

        /// Maximum number of rows
        #[arg(short, long)]
        limit: Option<u64>,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one object per line)
    Json,
    /// Human-readable output
    Pretty,
}

impl From<OutputFormat> for output::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => output::OutputFormat::Json,
            OutputFormat::Pretty => output::OutputFormat::Pretty,
        }
    }
}

/// Parse `column=value`
pub fn parse_predicate(s: &str) -> std::result::Result<(String, String), String> {
    let (column, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected column=value, got '{s}'"))?;
    let column = column.trim();
    if column.is_empty() {
        return Err(format!("missing column name in '{s}'"));
    }
    Ok((column.to_string(), value.to_string()))
}
