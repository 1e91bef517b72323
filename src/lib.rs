//! npm-depgraph - Dependency graph visualizer for npm packages
//!
//! This library reads a `package.json` (plain or inside a zip archive), walks
//! the npm registry to discover transitive dependencies, and renders the
//! result as a Mermaid flowchart. It follows hexagonal architecture and
//! Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`dependency_graph`): Graph model, traversal and rendering
//! - **Application Layer** (`application`): Use cases and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use npm_depgraph::prelude::*;
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<()> {
//! // Create use case with injected adapters
//! let use_case = VisualizeDependenciesUseCase::new(
//!     FileSystemManifestReader::new(),
//!     NpmRegistryClient::new()?,
//!     FileSystemWriter::new(),
//!     MermaidCli::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! // Execute
//! let request = VisualizeRequest::new(
//!     ManifestSource::File(PathBuf::from("package.json")),
//!     PathBuf::from("Mermaid_graph.mmd"),
//!     PathBuf::from("graph.png"),
//! );
//! let response = use_case.execute(request).await?;
//! print!("{}", response.diagram);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod dependency_graph;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemManifestReader, FileSystemWriter};
    pub use crate::adapters::outbound::network::NpmRegistryClient;
    pub use crate::adapters::outbound::process::{MermaidCli, NpmCliLookup};
    pub use crate::application::dto::{RenderOutcome, VisualizeRequest, VisualizeResponse};
    pub use crate::application::use_cases::VisualizeDependenciesUseCase;
    pub use crate::dependency_graph::domain::{
        normalize_version, CollectionReport, DependencyGraph, DependencySpec, LookupFailure,
        VersionToken,
    };
    pub use crate::dependency_graph::policies::LookupFailurePolicy;
    pub use crate::dependency_graph::services::{DependencyCollector, MermaidRenderer};
    pub use crate::ports::outbound::{
        DiagramRenderer, DiagramWriter, ManifestReader, ManifestSource, ProgressReporter,
        RegistryLookup,
    };
    pub use crate::shared::Result;
}
