//! CLI module
//!
//! Command-line interface for operating the API layer.
//!
//! # Commands
//!
//! - `validate` - Check a service config file and its deployment descriptor
//! - `resolve` - Show the resolved pipeline for an application
//! - `decode-list` - Decode a flat member-list encoding
//! - `decode-pairs` - Decode a flat parameter-pair encoding

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
