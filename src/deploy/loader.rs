//! Descriptor loading and application resolution

use crate::config::DeployConfig;
use crate::deploy::descriptor::{DeploymentDescriptor, ResolvedApp};
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Format the deployment flavor for appending to an application name
///
/// Empty when no flavor is configured, otherwise `-{flavor}`.
pub fn deployment_flavor(deploy: &DeployConfig) -> String {
    match deploy.flavor.as_deref() {
        None | Some("") => String::new(),
        Some(flavor) => format!("-{flavor}"),
    }
}

/// Locate the deployment descriptor for a service configuration
///
/// An explicit `deploy.config_file` wins; otherwise the descriptor is
/// assumed to sit next to the service config file, named after it with a
/// `-deploy.yaml` suffix in place of the extension.
///
/// # Errors
///
/// Fails with [`Error::DescriptorNotFound`] when no explicit location is
/// configured and no config file path is available to derive one from.
pub fn descriptor_path(deploy: &DeployConfig, config_path: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = &deploy.config_file {
        return Ok(path.clone());
    }

    let config_path = config_path.ok_or_else(|| {
        Error::descriptor_not_found(
            "no deploy.config_file set and no service config file to derive it from",
        )
    })?;

    let stem = config_path.with_extension("");
    let mut derived = stem.into_os_string();
    derived.push("-deploy.yaml");
    Ok(PathBuf::from(derived))
}

/// Load a deployment descriptor from a YAML file
pub fn load_descriptor(path: impl AsRef<Path>) -> Result<DeploymentDescriptor> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::descriptor_not_found(format!("descriptor file '{}' not found", path.display()))
        } else {
            Error::config(format!(
                "Failed to read deployment descriptor '{}': {}",
                path.display(),
                e
            ))
        }
    })?;

    load_descriptor_from_str(&content)
}

/// Load a deployment descriptor from a YAML string
pub fn load_descriptor_from_str(yaml: &str) -> Result<DeploymentDescriptor> {
    serde_yaml::from_str(yaml)
        .map_err(|e| Error::config(format!("Failed to parse deployment descriptor: {e}")))
}

/// Resolve an application's pipeline from a deployment descriptor
///
/// The configured flavor is appended to `app_name` before lookup, so one
/// descriptor can carry plain and flavored variants of the same
/// application side by side.
///
/// # Errors
///
/// Fails with [`Error::AppNotFound`] when the flavored name has no
/// pipeline, or when a pipeline's terminal app entry is missing, and with
/// [`Error::FilterNotFound`] when a named filter has no entry.
pub fn load_application(
    descriptor: &DeploymentDescriptor,
    app_name: &str,
    deploy: &DeployConfig,
) -> Result<ResolvedApp> {
    let name = format!("{app_name}{}", deployment_flavor(deploy));

    let pipeline = descriptor
        .pipelines
        .get(&name)
        .ok_or_else(|| Error::app_not_found(&name))?;

    let mut filters = Vec::with_capacity(pipeline.filters.len());
    for filter_name in &pipeline.filters {
        let filter = descriptor
            .filters
            .get(filter_name)
            .ok_or_else(|| Error::FilterNotFound {
                filter: filter_name.clone(),
                pipeline: name.clone(),
            })?;
        filters.push(filter.clone());
    }

    let app = descriptor
        .apps
        .get(&pipeline.app)
        .ok_or_else(|| Error::app_not_found(&pipeline.app))?
        .clone();

    debug!(
        app = %name,
        entry = %app.entry,
        filters = pipeline.filters.len(),
        "resolved application pipeline"
    );

    Ok(ResolvedApp { name, filters, app })
}

/// Load a descriptor file and resolve an application in one step
pub fn load_application_from_file(
    path: impl AsRef<Path>,
    app_name: &str,
    deploy: &DeployConfig,
) -> Result<ResolvedApp> {
    let descriptor = load_descriptor(path)?;
    load_application(&descriptor, app_name, deploy)
}
