pub mod collection_report;
pub mod dependency_graph;
pub mod dependency_spec;
pub mod version;

pub use collection_report::{CollectionReport, LookupFailure};
pub use dependency_graph::DependencyGraph;
pub use dependency_spec::DependencySpec;
pub use version::{normalize_version, VersionToken};
