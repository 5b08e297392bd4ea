//! Deployment descriptor loading
//!
//! Services are assembled from a deployment descriptor: a YAML file naming
//! the middleware pipelines each application runs behind. Loading resolves
//! an application name (plus an optional flavor suffix) to a concrete
//! pipeline of filter and app entries.
//!
//! # Overview
//!
//! The deploy module provides:
//! - `DeploymentDescriptor` - parsed descriptor contents
//! - `descriptor_path` - locate the descriptor for a service config
//! - `load_application` - resolve an application's pipeline
//!
//! The descriptor conventionally lives next to the service config file as
//! `<config-stem>-deploy.yaml`, unless `deploy.config_file` points
//! elsewhere.

mod descriptor;
mod loader;

pub use descriptor::{AppEntry, DeploymentDescriptor, PipelineDef, ResolvedApp};
pub use loader::{
    deployment_flavor, descriptor_path, load_application, load_application_from_file,
    load_descriptor, load_descriptor_from_str,
};
