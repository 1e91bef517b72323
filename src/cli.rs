use clap::Parser;
use std::path::PathBuf;

use crate::config::{ConfigFile, Transport};
use crate::dependency_graph::policies::LookupFailurePolicy;

/// Visualize the dependency graph of an npm package
#[derive(Parser, Debug)]
#[command(name = "npm-depgraph")]
#[command(version = "0.1.0")]
#[command(
    about = "Walk the npm registry from a package.json and render the dependency graph with Mermaid",
    long_about = None
)]
pub struct Args {
    /// Path to the JSON config file (defaults to ./config.json when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Path to the package.json to analyze
    #[arg(short, long, value_name = "PATH")]
    pub manifest: Option<String>,

    /// Read the manifest from this zip archive instead of a plain file
    #[arg(short, long, value_name = "PATH")]
    pub archive: Option<String>,

    /// Name of the manifest entry inside the archive
    #[arg(long, value_name = "NAME")]
    pub archive_entry: Option<String>,

    /// Path of the rendered image (png, svg or pdf)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<String>,

    /// Path of the intermediate Mermaid source file
    #[arg(short, long, value_name = "PATH")]
    pub diagram: Option<String>,

    /// Registry transport: http or npm
    #[arg(short, long)]
    pub transport: Option<Transport>,

    /// Base URL of the npm registry (http transport only)
    #[arg(long, value_name = "URL")]
    pub registry_url: Option<String>,

    /// Stop expanding packages this many levels below the direct dependencies
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// What a failed lookup leaves in the graph: omit or empty
    #[arg(long, value_name = "POLICY")]
    pub on_lookup_failure: Option<LookupFailurePolicy>,

    /// Also walk devDependencies of the root manifest
    #[arg(long)]
    pub dev: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print errors and warnings
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Converts the flags that were given into config overrides
    pub fn to_overrides(&self) -> ConfigFile {
        ConfigFile {
            output: self.output.clone(),
            manifest: self.manifest.clone(),
            archive: self.archive.clone(),
            archive_entry: self.archive_entry.clone(),
            diagram_path: self.diagram.clone(),
            registry_url: self.registry_url.clone(),
            transport: self.transport,
            max_depth: self.max_depth,
            on_lookup_failure: self.on_lookup_failure,
            include_dev_dependencies: self.dev.then_some(true),
            ..Default::default()
        }
    }
}
