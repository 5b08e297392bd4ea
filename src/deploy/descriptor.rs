//! Deployment descriptor types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Parsed deployment descriptor
///
/// Maps application names to pipelines, and names the filter and app
/// entries the pipelines are built from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeploymentDescriptor {
    /// Pipelines by application name
    #[serde(default)]
    pub pipelines: HashMap<String, PipelineDef>,

    /// Filter entries by name
    #[serde(default)]
    pub filters: HashMap<String, AppEntry>,

    /// App entries by name
    #[serde(default)]
    pub apps: HashMap<String, AppEntry>,
}

/// A pipeline: an ordered filter chain ending in an app
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineDef {
    /// Filter names, applied outermost first
    #[serde(default)]
    pub filters: Vec<String>,

    /// Terminal app name
    pub app: String,
}

/// A loadable filter or app entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppEntry {
    /// Entry point identifier, `module:factory` form
    pub entry: String,

    /// Free-form options passed to the entry point factory
    #[serde(default)]
    pub options: Map<String, Value>,
}

/// An application pipeline with every entry resolved
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedApp {
    /// Name the pipeline was resolved under, flavor suffix included
    pub name: String,

    /// Resolved filter entries, outermost first
    pub filters: Vec<AppEntry>,

    /// Resolved terminal app entry
    pub app: AppEntry,
}
