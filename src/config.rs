//! Configuration file support for npm-depgraph.
//!
//! Provides JSON-based configuration through `config.json` files,
//! command-line overrides, and resolution into the settings a run uses.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use crate::adapters::outbound::network::{DEFAULT_MAX_RETRIES, DEFAULT_REGISTRY_URL};
use crate::dependency_graph::policies::LookupFailurePolicy;
use crate::ports::outbound::ManifestSource;
use crate::shared::error::DepGraphError;
use crate::shared::Result;

pub const DEFAULT_CONFIG_FILENAME: &str = "config.json";
pub const DEFAULT_MANIFEST: &str = "package.json";
pub const DEFAULT_DIAGRAM_PATH: &str = "Mermaid_graph.mmd";
pub const DEFAULT_RENDERER: &str = "mmdc";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// How registry lookups are performed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    /// Query the registry's HTTP API directly
    #[default]
    Http,
    /// Shell out to `npm view`
    Npm,
}

impl FromStr for Transport {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "http" => Ok(Transport::Http),
            "npm" => Ok(Transport::Npm),
            _ => Err(format!(
                "Invalid transport: {}. Please specify 'http' or 'npm'",
                s
            )),
        }
    }
}

/// Top-level configuration file schema.
///
/// Every field is optional here so that command-line flags can fill the
/// gaps; `Settings::resolve` enforces what a run actually needs.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub output: Option<String>,
    pub manifest: Option<String>,
    pub archive: Option<String>,
    pub archive_entry: Option<String>,
    pub diagram_path: Option<String>,
    pub registry_url: Option<String>,
    pub transport: Option<Transport>,
    pub renderer: Option<String>,
    pub timeout_secs: Option<u64>,
    pub max_retries: Option<u32>,
    pub max_depth: Option<usize>,
    pub on_lookup_failure: Option<LookupFailurePolicy>,
    pub include_dev_dependencies: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl ConfigFile {
    /// Overlays `overrides` on top of this config; set fields win.
    ///
    /// `manifest` and `archive` name a single input: when the overrides set
    /// either one, both are taken from the overrides.
    pub fn merge(self, overrides: ConfigFile) -> ConfigFile {
        let (manifest, archive) = if overrides.manifest.is_some() || overrides.archive.is_some() {
            (overrides.manifest, overrides.archive)
        } else {
            (self.manifest, self.archive)
        };

        ConfigFile {
            output: overrides.output.or(self.output),
            manifest,
            archive,
            archive_entry: overrides.archive_entry.or(self.archive_entry),
            diagram_path: overrides.diagram_path.or(self.diagram_path),
            registry_url: overrides.registry_url.or(self.registry_url),
            transport: overrides.transport.or(self.transport),
            renderer: overrides.renderer.or(self.renderer),
            timeout_secs: overrides.timeout_secs.or(self.timeout_secs),
            max_retries: overrides.max_retries.or(self.max_retries),
            max_depth: overrides.max_depth.or(self.max_depth),
            on_lookup_failure: overrides.on_lookup_failure.or(self.on_lookup_failure),
            include_dev_dependencies: overrides
                .include_dev_dependencies
                .or(self.include_dev_dependencies),
            unknown_fields: self.unknown_fields,
        }
    }
}

/// Fully resolved settings for one run
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub manifest: ManifestSource,
    pub output_path: PathBuf,
    pub diagram_path: PathBuf,
    pub registry_url: String,
    pub transport: Transport,
    pub renderer: String,
    pub timeout: Duration,
    pub max_retries: u32,
    pub max_depth: Option<usize>,
    pub failure_policy: LookupFailurePolicy,
    pub include_dev_dependencies: bool,
}

impl Settings {
    /// Applies defaults and checks the merged configuration.
    ///
    /// # Errors
    /// Returns a `Config` error when `output` is missing or a value is out
    /// of range.
    pub fn resolve(config: ConfigFile) -> Result<Settings> {
        validate_config(&config)?;

        let output = config.output.ok_or_else(|| DepGraphError::Config {
            message: "\"output\" is required".to_string(),
            hint: format!(
                "Set \"output\" in {} or pass --output <PATH>",
                DEFAULT_CONFIG_FILENAME
            ),
        })?;

        let manifest = match config.archive {
            Some(archive) => ManifestSource::Archive {
                path: PathBuf::from(archive),
                entry: config
                    .archive_entry
                    .unwrap_or_else(|| DEFAULT_MANIFEST.to_string()),
            },
            None => ManifestSource::File(PathBuf::from(
                config
                    .manifest
                    .unwrap_or_else(|| DEFAULT_MANIFEST.to_string()),
            )),
        };

        Ok(Settings {
            manifest,
            output_path: PathBuf::from(output),
            diagram_path: PathBuf::from(
                config
                    .diagram_path
                    .unwrap_or_else(|| DEFAULT_DIAGRAM_PATH.to_string()),
            ),
            registry_url: config
                .registry_url
                .unwrap_or_else(|| DEFAULT_REGISTRY_URL.to_string()),
            transport: config.transport.unwrap_or_default(),
            renderer: config
                .renderer
                .unwrap_or_else(|| DEFAULT_RENDERER.to_string()),
            timeout: Duration::from_secs(config.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)),
            max_retries: config.max_retries.unwrap_or(DEFAULT_MAX_RETRIES),
            max_depth: config.max_depth,
            failure_policy: config.on_lookup_failure.unwrap_or_default(),
            include_dev_dependencies: config.include_dev_dependencies.unwrap_or(false),
        })
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_json::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains a valid JSON object.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(DEFAULT_CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref output) = config.output {
        if output.trim().is_empty() {
            return Err(DepGraphError::Config {
                message: "\"output\" must not be empty".to_string(),
                hint: "Set \"output\" to the image path to render, e.g. \"graph.png\"".to_string(),
            }
            .into());
        }
    }
    if config.timeout_secs == Some(0) {
        return Err(DepGraphError::Config {
            message: "\"timeout_secs\" must be greater than 0".to_string(),
            hint: "Omit the field to use the default of 10 seconds".to_string(),
        }
        .into());
    }
    if config.max_retries == Some(0) {
        return Err(DepGraphError::Config {
            message: "\"max_retries\" must be at least 1".to_string(),
            hint: "Use 1 to disable retries".to_string(),
        }
        .into());
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        tracing::warn!(field = %key, "unknown config field");
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
