//! YAML loader for service configuration
//!
//! Parses and validates service config files.

use crate::config::types::ServiceConfig;
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;
use tracing::debug;
use url::Url;

/// Load a service configuration from a YAML file
pub fn load_config(path: impl AsRef<Path>) -> Result<ServiceConfig> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        }
    })?;

    let config = load_config_from_str(&content)?;

    if config.debug {
        debug!(config = ?config, "loaded service configuration");
    }

    Ok(config)
}

/// Load a service configuration from a YAML string
pub fn load_config_from_str(yaml: &str) -> Result<ServiceConfig> {
    let config: ServiceConfig = serde_yaml::from_str(yaml)
        .map_err(|e| Error::config(format!("Failed to parse config YAML: {e}")))?;

    validate_config(&config)?;
    Ok(config)
}

/// Validate a service configuration
fn validate_config(config: &ServiceConfig) -> Result<()> {
    if config.bind.bind_port == 0 {
        return Err(Error::invalid_value("bind.bind_port", "port must be non-zero"));
    }

    if config.rpc.engine_topic.is_empty() {
        return Err(Error::invalid_value(
            "rpc.engine_topic",
            "topic cannot be empty",
        ));
    }

    Url::parse(&config.database.connection).map_err(|e| {
        Error::invalid_value("database.connection", format!("not a valid URL: {e}"))
    })?;

    Ok(())
}
