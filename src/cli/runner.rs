//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::load_config;
use crate::deploy::{descriptor_path, load_application, load_descriptor};
use crate::error::{Error, Result, ResultExt};
use crate::params::{extract_param_list, extract_param_pairs, format_response};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

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
    pub fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Validate { config } => self.validate(config),
            Commands::Resolve {
                config,
                app,
                flavor,
            } => self.resolve(config, app, flavor.as_deref()),
            Commands::DecodeList {
                prefix,
                input,
                params,
                action,
            } => self.decode_list(prefix, input.as_deref(), params, action.as_deref()),
            Commands::DecodePairs {
                prefix,
                key_field,
                value_field,
                input,
                params,
                action,
            } => self.decode_pairs(
                prefix,
                key_field,
                value_field,
                input.as_deref(),
                params,
                action.as_deref(),
            ),
        }
    }

    fn validate(&self, config_path: &Path) -> Result<()> {
        let config = load_config(config_path)?;
        println!("config OK: {}", config_path.display());

        match descriptor_path(&config.deploy, Some(config_path)) {
            Ok(path) if path.exists() => {
                let descriptor = load_descriptor(&path)?;
                println!(
                    "descriptor OK: {} ({} pipelines)",
                    path.display(),
                    descriptor.pipelines.len()
                );
            }
            Ok(path) => {
                println!("descriptor not present: {}", path.display());
            }
            Err(e) => {
                println!("descriptor not resolvable: {e}");
            }
        }

        Ok(())
    }

    fn resolve(&self, config_path: &Path, app: &str, flavor: Option<&str>) -> Result<()> {
        let config = load_config(config_path)?;
        let mut deploy = config.deploy.clone();
        if flavor.is_some() {
            deploy.flavor = flavor.map(String::from);
        }

        let path = descriptor_path(&deploy, Some(config_path))?;
        let descriptor = load_descriptor(&path)?;
        let resolved = load_application(&descriptor, app, &deploy)?;

        self.print_value(&serde_json::to_value(&resolved)?)
    }

    fn decode_list(
        &self,
        prefix: &str,
        input: Option<&Path>,
        inline: &[String],
        action: Option<&str>,
    ) -> Result<()> {
        let params = self.read_params(input, inline)?;
        let members = extract_param_list(&params, prefix);

        let value = Value::Array(members.into_iter().map(Value::Object).collect());
        self.print_result(value, action)
    }

    fn decode_pairs(
        &self,
        prefix: &str,
        key_field: &str,
        value_field: &str,
        input: Option<&Path>,
        inline: &[String],
        action: Option<&str>,
    ) -> Result<()> {
        let params = self.read_params(input, inline)?;
        let pairs = extract_param_pairs(&params, prefix, key_field, value_field);

        self.print_result(Value::Object(pairs), action)
    }

    /// Collect flat parameters from an input file and inline arguments
    ///
    /// Inline parameters are applied after the file, so they override file
    /// entries with the same key.
    fn read_params(
        &self,
        input: Option<&Path>,
        inline: &[String],
    ) -> Result<HashMap<String, String>> {
        let mut params = HashMap::new();

        if let Some(path) = input {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read parameter file '{}'", path.display()))?;
            for line in content.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                let (key, value) = split_param(line)?;
                params.insert(key, value);
            }
        }

        for arg in inline {
            let (key, value) = split_param(arg)?;
            params.insert(key, value);
        }

        Ok(params)
    }

    fn print_result(&self, value: Value, action: Option<&str>) -> Result<()> {
        let value = match action {
            Some(action) => format_response(action, value),
            None => value,
        };
        self.print_value(&value)
    }

    fn print_value(&self, value: &Value) -> Result<()> {
        let rendered = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(value)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        };
        println!("{rendered}");
        Ok(())
    }
}

fn split_param(raw: &str) -> Result<(String, String)> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| Error::config(format!("Invalid parameter '{raw}', expected key=value")))?;
    Ok((key.to_string(), value.to_string()))
}
