//! Service configuration
//!
//! Typed configuration for the API services, loaded from YAML.
//!
//! # Overview
//!
//! The config module provides:
//! - `ServiceConfig` - the full service configuration tree
//! - Section structs for bind addresses, service options, database, RPC and
//!   deployment settings, each with conventional defaults
//! - YAML loading with a validation pass

mod loader;
mod types;

pub use loader::{load_config, load_config_from_str};
pub use types::{
    BindConfig, DatabaseConfig, DeployConfig, RpcConfig, ServiceConfig, ServiceOptions,
};

#[cfg(test)]
mod tests;
