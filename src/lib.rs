//! # formation-api
//!
//! A fragment of a cloud-orchestration API layer: the flat-parameter codec
//! shared by the query-string style APIs, plus the service configuration and
//! deployment-descriptor loading the API services boot from.
//!
//! ## Features
//!
//! - **Flat-parameter codec**: decode indexed `Prefix.member.N.Field` wire
//!   parameters into ordered records or key/value pairs, remap field names,
//!   and frame results in the `<Action>Response`/`<Action>Result` envelope
//! - **Service configuration**: typed YAML configuration with conventional
//!   defaults for bind addresses, service options, database and RPC settings
//! - **Deployment descriptors**: resolve an application name (and optional
//!   flavor) to its middleware pipeline
//!
//! ## Quick Start
//!
//! ```rust
//! use formation_api::params::{extract_param_list, format_response};
//! use serde_json::Value;
//! use std::collections::HashMap;
//!
//! let params = HashMap::from([
//!     ("MetricData.member.1.MetricName".to_string(), "buffers".to_string()),
//!     ("MetricData.member.1.Unit".to_string(), "Bytes".to_string()),
//! ]);
//!
//! let members = extract_param_list(&params, "MetricData");
//! assert_eq!(members[0]["Unit"], "Bytes");
//!
//! let records = Value::Array(members.into_iter().map(Value::Object).collect());
//! let response = format_response("ListMetrics", records);
//! assert!(response["ListMetricsResponse"]["ListMetricsResult"].is_array());
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                      API service boot                      │
//! │  config: ServiceConfig (YAML)   deploy: ResolvedApp        │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//! ┌────────────────────────────┴───────────────────────────────┐
//! │                   Request/response codec                   │
//! ├───────────────┬───────────────┬─────────────┬──────────────┤
//! │ member lists  │ param pairs   │ key remap   │ envelope     │
//! └───────────────┴───────────────┴─────────────┴──────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Flat-parameter codec
pub mod params;

/// Service configuration
pub mod config;

/// Deployment descriptor loading
pub mod deploy;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use params::{extract_param_list, extract_param_pairs, format_response, remap_keys};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
