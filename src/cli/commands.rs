//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// formation-api CLI
#[derive(Parser, Debug)]
#[command(name = "formation-api")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
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
    /// Check a service config file and its deployment descriptor
    Validate {
        /// Service config file (YAML)
        config: PathBuf,
    },

    /// Show the resolved pipeline for an application
    Resolve {
        /// Service config file (YAML)
        config: PathBuf,

        /// Application name to resolve
        app: String,

        /// Override the configured deployment flavor
        #[arg(long)]
        flavor: Option<String>,
    },

    /// Decode a flat member-list encoding into records
    DecodeList {
        /// List prefix (e.g. "MetricData")
        #[arg(short, long)]
        prefix: String,

        /// Parameter file with one key=value per line
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Inline parameter (key=value), repeatable
        #[arg(short = 'P', long = "param")]
        params: Vec<String>,

        /// Wrap the result in a response envelope for this action
        #[arg(long)]
        action: Option<String>,
    },

    /// Decode a flat parameter-pair encoding into a key/value map
    DecodePairs {
        /// List prefix (e.g. "Parameters")
        #[arg(short, long)]
        prefix: String,

        /// Field name carrying the logical key
        #[arg(long, default_value = "Name")]
        key_field: String,

        /// Field name carrying the logical value
        #[arg(long, default_value = "Value")]
        value_field: String,

        /// Parameter file with one key=value per line
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Inline parameter (key=value), repeatable
        #[arg(short = 'P', long = "param")]
        params: Vec<String>,

        /// Wrap the result in a response envelope for this action
        #[arg(long)]
        action: Option<String>,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON
    Json,
    /// Human-readable, pretty-printed JSON
    Pretty,
}
